//! Desktop link handler backed by the host's URL opener (xdg-open, open)

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error};

use super::{url_scheme, LinkHandler, NavigationError};
use crate::defaults::default_scheme_query;
use crate::types::Platform;

/// Platform that owns a native map scheme. Web schemes belong to everyone.
fn scheme_platform(scheme: &str) -> Option<Platform> {
    match scheme {
        "maps" | "comgooglemaps" => Some(Platform::Ios),
        "google.navigation" | "geo" => Some(Platform::Android),
        _ => None,
    }
}

/// Opens URLs by spawning the configured opener command
pub struct SystemLinkHandler {
    platform: Platform,
    opener: String,
    /// `xdg-mime`-compatible command; `None` skips the host lookup
    scheme_query: Option<String>,
}

impl SystemLinkHandler {
    pub fn new(platform: Platform, opener: impl Into<String>) -> Self {
        Self {
            platform,
            opener: opener.into(),
            scheme_query: default_scheme_query().map(str::to_string),
        }
    }

    /// Use another command for `<cmd> query default x-scheme-handler/<scheme>`
    pub fn with_scheme_query(mut self, command: impl Into<String>) -> Self {
        self.scheme_query = Some(command.into());
        self
    }

    /// Only trust the platform table, never ask the host
    pub fn without_scheme_query(mut self) -> Self {
        self.scheme_query = None;
        self
    }

    pub fn opener(&self) -> &str {
        &self.opener
    }

    /// Whether the host desktop has a default handler registered for `scheme`
    async fn host_handles_scheme(&self, scheme: &str) -> bool {
        let Some(query) = &self.scheme_query else {
            return false;
        };

        let output = Command::new(query)
            .arg("query")
            .arg("default")
            .arg(format!("x-scheme-handler/{}", scheme))
            .output()
            .await;

        match output {
            Ok(output) if output.status.success() => {
                let handler = String::from_utf8_lossy(&output.stdout);
                let handler = handler.trim();
                if !handler.is_empty() {
                    debug!("{} handles {}: URLs", handler, scheme);
                }
                !handler.is_empty()
            }
            Ok(output) => {
                debug!("{} found no handler for {} ({})", query, scheme, output.status);
                false
            }
            Err(e) => {
                debug!("Could not run {} for {}: {}", query, scheme, e);
                false
            }
        }
    }
}

#[async_trait]
impl LinkHandler for SystemLinkHandler {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn can_open_url(&self, url: &str) -> Result<bool, NavigationError> {
        let Some(scheme) = url_scheme(url) else {
            return Ok(false);
        };

        Ok(match scheme.as_str() {
            "http" | "https" => true,
            other if scheme_platform(other) == Some(self.platform) => true,
            other => self.host_handles_scheme(other).await,
        })
    }

    async fn open_url(&self, url: &str) -> Result<(), NavigationError> {
        debug!("Running {} {}", self.opener, url);

        let status = Command::new(&self.opener).arg(url).status().await?;

        if status.success() {
            Ok(())
        } else {
            Err(NavigationError::OpenFailed {
                url: url.to_string(),
                reason: format!("{} exited with {}", self.opener, status),
            })
        }
    }

    async fn show_alert(&self, title: &str, message: &str) {
        error!("{}: {}", title, message);
        eprintln!("{}: {}", title, message);
    }

    fn name(&self) -> &str {
        "SystemLinks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_system_handler_accepts_web_everywhere() {
        for platform in [Platform::Ios, Platform::Android, Platform::Web] {
            let handler = SystemLinkHandler::new(platform, "true");
            assert!(handler.can_open_url("https://www.google.com/maps").await.unwrap());
        }
    }

    #[tokio::test]
    async fn test_system_handler_native_schemes_follow_platform() {
        let ios = SystemLinkHandler::new(Platform::Ios, "true").without_scheme_query();
        assert!(ios.can_open_url("maps://app?ll=1,2").await.unwrap());
        assert!(!ios.can_open_url("geo:1,2").await.unwrap());

        let web = SystemLinkHandler::new(Platform::Web, "true").without_scheme_query();
        assert!(!web.can_open_url("comgooglemaps://?q=1,2").await.unwrap());
        assert!(!web.can_open_url("not a url").await.unwrap());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_system_handler_asks_host_for_registered_scheme() {
        // `echo` succeeds and prints a non-empty "handler" line
        let handler = SystemLinkHandler::new(Platform::Web, "true").with_scheme_query("echo");
        assert!(handler.can_open_url("geo:6.6,3.3?q=6.6,3.3").await.unwrap());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_system_handler_empty_host_answer_is_unopenable() {
        let handler = SystemLinkHandler::new(Platform::Web, "true").with_scheme_query("true");
        assert!(!handler.can_open_url("geo:6.6,3.3").await.unwrap());

        let failing = SystemLinkHandler::new(Platform::Web, "true").with_scheme_query("false");
        assert!(!failing.can_open_url("comgooglemaps://?q=1,2").await.unwrap());
    }

    #[tokio::test]
    async fn test_system_handler_missing_scheme_query_is_unopenable() {
        let handler = SystemLinkHandler::new(Platform::Android, "true")
            .with_scheme_query("fixit-no-such-query-binary");
        assert!(!handler.can_open_url("maps://app?ll=1,2").await.unwrap());
        assert!(handler.can_open_url("geo:1,2").await.unwrap());
    }

    #[tokio::test]
    async fn test_system_handler_missing_opener_is_io_error() {
        let handler = SystemLinkHandler::new(Platform::Web, "fixit-no-such-opener-binary");
        let err = handler.open_url("https://example.com").await.unwrap_err();
        assert!(matches!(err, NavigationError::Io(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_system_handler_reports_nonzero_exit() {
        let handler = SystemLinkHandler::new(Platform::Web, "false");
        let err = handler.open_url("https://example.com").await.unwrap_err();
        assert!(matches!(err, NavigationError::OpenFailed { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_open_maps_with_system_handler_and_true_opener() {
        let handler = SystemLinkHandler::new(Platform::Web, "true");
        crate::services::navigation::open_maps(&handler, 6.6, 3.35, None).await;
    }
}
