//! Type definitions

pub mod location;
pub mod travel;

pub use location::*;
pub use travel::*;
