//! Data models
//!
//! Shared between the pricing engine and the listing forms (via JSON).

pub mod listing;
pub mod price_input;

// Re-exports
pub use listing::*;
pub use price_input::*;
