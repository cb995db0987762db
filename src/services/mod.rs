//! Category and geo services

pub mod category;
pub mod geo;
pub mod navigation;
