//! Map and turn-by-turn deep links
//!
//! Builds an ordered list of candidate URLs for the host platform and hands
//! them to a [`LinkHandler`] one by one: probe, then open. The first success
//! wins. When every candidate fails the user gets a single alert. Callers never
//! see an error.

mod mock;
mod system;

pub use mock::{MockLinkHandler, MockLinkState};
pub use system::SystemLinkHandler;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::types::{Coordinates, Platform};

pub const ALERT_TITLE: &str = "Error";
pub const ALERT_MESSAGE: &str = "Could not open maps. Please make sure a maps application is installed.";

/// Why a single candidate link could not be used
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("no handler for {url}")]
    Unsupported { url: String },

    #[error("failed to open {url}: {reason}")]
    OpenFailed { url: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// OS capability to resolve and dispatch URLs (abstraction for system, mock)
#[async_trait]
pub trait LinkHandler: Send + Sync {
    /// Platform whose native map schemes should be tried
    fn platform(&self) -> Platform;

    /// Whether something on the host claims this URL's scheme
    async fn can_open_url(&self, url: &str) -> Result<bool, NavigationError>;

    /// Dispatch the URL
    async fn open_url(&self, url: &str) -> Result<(), NavigationError>;

    /// Blocking user-facing alert with a single acknowledgement
    async fn show_alert(&self, title: &str, message: &str);

    /// Get handler name for logging
    fn name(&self) -> &str;
}

/// One candidate deep link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLink {
    /// Which app/scheme this targets, for logs
    pub target: &'static str,
    pub url: String,
}

impl MapLink {
    fn new(target: &'static str, url: String) -> Self {
        Self { target, url }
    }
}

/// Scheme prefix of a URL, lower-cased ("https", "maps", "google.navigation")
pub fn url_scheme(url: &str) -> Option<String> {
    url.split_once(':').map(|(scheme, _)| scheme.to_lowercase())
}

/// Directions candidates, most native first, web last
pub fn navigation_candidates(
    platform: Platform,
    destination: &Coordinates,
    name: Option<&str>,
) -> Vec<MapLink> {
    let ll = destination.to_query();
    let label = name.filter(|n| !n.trim().is_empty()).map(|n| urlencoding::encode(n).into_owned());
    let mut links = Vec::with_capacity(3);

    match platform {
        Platform::Ios => {
            let mut apple = format!("maps://app?daddr={}&dirflg=d", ll);
            if let Some(label) = &label {
                apple.push_str(&format!("&q={}", label));
            }
            links.push(MapLink::new("apple-maps", apple));
            links.push(MapLink::new(
                "google-maps-app",
                format!("comgooglemaps://?daddr={}&directionsmode=driving", ll),
            ));
        }
        Platform::Android => {
            links.push(MapLink::new("google-navigation", format!("google.navigation:q={}&mode=d", ll)));
        }
        Platform::Web => {}
    }

    links.push(MapLink::new(
        "google-maps-web",
        format!("https://www.google.com/maps/dir/?api=1&destination={}&travelmode=driving", ll),
    ));
    links
}

/// Location-view candidates, most native first, web last
pub fn map_candidates(platform: Platform, location: &Coordinates, label: Option<&str>) -> Vec<MapLink> {
    let ll = location.to_query();
    let label = label.filter(|l| !l.trim().is_empty()).map(|l| urlencoding::encode(l).into_owned());
    let mut links = Vec::with_capacity(3);

    match platform {
        Platform::Ios => {
            let query = label.clone().unwrap_or_else(|| ll.clone());
            links.push(MapLink::new("apple-maps", format!("maps://app?ll={}&q={}", ll, query)));
            links.push(MapLink::new(
                "google-maps-app",
                format!("comgooglemaps://?q={}&center={}", ll, ll),
            ));
        }
        Platform::Android => {
            let url = match &label {
                Some(label) => format!("geo:{}?q={}({})", ll, ll, label),
                None => format!("geo:{}?q={}", ll, ll),
            };
            links.push(MapLink::new("geo-intent", url));
        }
        Platform::Web => {}
    }

    links.push(MapLink::new(
        "google-maps-web",
        format!("https://www.google.com/maps/search/?api=1&query={}", ll),
    ));
    links
}

async fn try_open(handler: &dyn LinkHandler, link: &MapLink) -> Result<(), NavigationError> {
    if !handler.can_open_url(&link.url).await? {
        return Err(NavigationError::Unsupported { url: link.url.clone() });
    }
    handler.open_url(&link.url).await
}

/// Try candidates in order; alert once if none could be opened
async fn open_first(handler: &dyn LinkHandler, links: Vec<MapLink>) {
    for link in &links {
        match try_open(handler, link).await {
            Ok(()) => {
                info!("Opened {} via {} ({})", link.target, handler.name(), link.url);
                return;
            }
            Err(NavigationError::Unsupported { url }) => {
                debug!("{} not available, skipping {}", link.target, url);
            }
            Err(e) => {
                warn!("Opening {} failed: {}. Trying next option.", link.target, e);
            }
        }
    }

    warn!("No maps option could be opened ({} tried)", links.len());
    handler.show_alert(ALERT_TITLE, ALERT_MESSAGE).await;
}

/// Start turn-by-turn directions to the destination
pub async fn open_navigation(handler: &dyn LinkHandler, dest_lat: f64, dest_lng: f64, dest_name: Option<&str>) {
    let destination = Coordinates::new(dest_lat, dest_lng);
    let links = navigation_candidates(handler.platform(), &destination, dest_name);
    open_first(handler, links).await;
}

/// Show a location on the map without starting directions
pub async fn open_maps(handler: &dyn LinkHandler, lat: f64, lng: f64, label: Option<&str>) {
    let location = Coordinates::new(lat, lng);
    let links = map_candidates(handler.platform(), &location, label);
    open_first(handler, links).await;
}
