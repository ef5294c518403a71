//! Shared types for the vehicle listing pricing stack
//!
//! Form input, submission payload, and the unified error types used by
//! the pricing engine and anything that renders its results.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{ListingPricePayload, PriceField, PriceInput, PriceOptions};
pub use serde::{Deserialize, Serialize};
