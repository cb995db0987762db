//! Fixit marketplace utilities
//!
//! Service-category normalisation plus provider distance, ETA and map
//! deep-link helpers shared by the client apps and the CLI.

pub mod cli;
pub mod config;
pub mod defaults;
pub mod services;
pub mod types;

pub use services::category::{is_valid_category_name, normalize_category_name};
pub use services::geo::{calculate_distance, estimate_travel_time, format_distance, format_travel_time};
pub use services::navigation::{open_maps, open_navigation, LinkHandler};
