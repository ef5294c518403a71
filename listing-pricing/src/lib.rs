//! Listing Pricing - savings derivation and price validation for vehicle listings
//!
//! # Modules
//!
//! - **Pricing** (`pricing`): parsing primitives, savings calculator,
//!   validator, and the form state shared by every listing form
//! - **Report** (`report`): one-shot evaluation used by the command-line tool
//! - **Core** (`core`): configuration
//! - **Utils** (`utils`): logging
//!
//! ```text
//! listing-pricing/src/
//! ├── core/          # Config
//! ├── pricing/       # money, calculator, validator, form
//! ├── report.rs      # evaluate + display strings
//! └── utils/         # logger
//! ```

pub mod core;
pub mod pricing;
pub mod report;
pub mod utils;

// Re-export public types
pub use crate::core::Config;
pub use pricing::{
    FieldErrors, ListingPriceForm, SavingsBranch, SavingsResult, compute_savings,
    validate_pricing,
};
pub use report::{PricingReport, evaluate, read_input};

// Re-export shared types
pub use shared::error::{AppError, AppResult, ErrorCode};
pub use shared::models::{ListingPricePayload, PriceField, PriceInput, PriceOptions};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
