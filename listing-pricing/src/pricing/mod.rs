//! Listing Pricing Module
//!
//! Savings derivation and price validation for the listing forms.
//! Raw form text is parsed once into [`PriceValues`]; everything after
//! that works on `Decimal`.

mod calculator;
pub mod form;
pub mod money;
mod validator;

pub use calculator::*;
pub use form::ListingPriceForm;
pub use money::{
    MONEY_TOLERANCE, PriceValues, format_amount, format_money, is_blank, parse_money,
    parse_percentage,
};
pub use validator::*;
