//! Recording link handler for tests and dry runs

use std::collections::HashSet;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{url_scheme, LinkHandler, NavigationError};
use crate::types::Platform;

/// Everything the mock has been asked to do, in call order
#[derive(Debug, Clone, Default)]
pub struct MockLinkState {
    pub probed: Vec<String>,
    pub opened: Vec<String>,
    pub alerts: Vec<(String, String)>,
}

/// Link handler that opens nothing and records every call.
///
/// By default every scheme is openable. Restrict with `with_schemes`, or make
/// a scheme misbehave with `failing_open` / `probe_error`.
pub struct MockLinkHandler {
    platform: Platform,
    /// `None` accepts every scheme
    schemes: Option<HashSet<String>>,
    failing_open: HashSet<String>,
    probe_errors: HashSet<String>,
    state: Mutex<MockLinkState>,
}

impl MockLinkHandler {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            schemes: None,
            failing_open: HashSet::new(),
            probe_errors: HashSet::new(),
            state: Mutex::new(MockLinkState::default()),
        }
    }

    /// Only these schemes report as openable
    pub fn with_schemes(mut self, schemes: &[&str]) -> Self {
        self.schemes = Some(schemes.iter().map(|s| s.to_lowercase()).collect());
        self
    }

    /// Probe succeeds but opening fails for this scheme
    pub fn failing_open(mut self, scheme: &str) -> Self {
        self.failing_open.insert(scheme.to_lowercase());
        self
    }

    /// Probe itself errors for this scheme
    pub fn probe_error(mut self, scheme: &str) -> Self {
        self.probe_errors.insert(scheme.to_lowercase());
        self
    }

    /// Snapshot of recorded calls
    pub fn state(&self) -> MockLinkState {
        self.state.lock().clone()
    }
}

#[async_trait]
impl LinkHandler for MockLinkHandler {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn can_open_url(&self, url: &str) -> Result<bool, NavigationError> {
        self.state.lock().probed.push(url.to_string());

        let scheme = url_scheme(url).unwrap_or_default();
        if self.probe_errors.contains(&scheme) {
            return Err(NavigationError::OpenFailed {
                url: url.to_string(),
                reason: "probe failed".to_string(),
            });
        }

        Ok(match &self.schemes {
            Some(schemes) => schemes.contains(&scheme),
            None => true,
        })
    }

    async fn open_url(&self, url: &str) -> Result<(), NavigationError> {
        let scheme = url_scheme(url).unwrap_or_default();
        if self.failing_open.contains(&scheme) {
            return Err(NavigationError::OpenFailed {
                url: url.to_string(),
                reason: "mock open failure".to_string(),
            });
        }

        self.state.lock().opened.push(url.to_string());
        Ok(())
    }

    async fn show_alert(&self, title: &str, message: &str) {
        self.state
            .lock()
            .alerts
            .push((title.to_string(), message.to_string()));
    }

    fn name(&self) -> &str {
        "MockLinks"
    }
}
