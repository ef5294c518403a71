//! Listing price submission payload
//!
//! Sent by the listing forms to `POST /listings` and `PUT /listings/{id}`.
//! Every amount is a JSON number, never a string.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price section of a listing create/update request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPricePayload {
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "showPriceAsPOA", default)]
    pub show_price_as_poa: bool,
    pub price_options: PriceOptions,
}

/// Savings block of the payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceOptions {
    /// Effective original price (user-supplied or back-derived from the discount)
    #[serde(with = "rust_decimal::serde::float")]
    pub original_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub savings_amount: Decimal,
    /// Whole percentage when derived from the original price; the dealer
    /// discount as entered (e.g. 12.5) when derived from the discount
    #[serde(with = "rust_decimal::serde::float")]
    pub savings_percentage: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub dealer_discount: Decimal,
    pub show_savings: bool,
}
