/// Directory for the rolling log file when `LOGS_DIR` is not set.
pub const DEFAULT_LOGS_DIR: &str = "./logs";

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,fixit_geo=debug";

/// Command used by `SystemLinkHandler` to hand a URL to the desktop.
pub fn default_url_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

/// Command asked whether the desktop has a handler for a URL scheme.
/// Only freedesktop hosts have one.
pub fn default_scheme_query() -> Option<&'static str> {
    if cfg!(target_os = "linux") {
        Some("xdg-mime")
    } else {
        None
    }
}
