//! Listing price form input

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw price fields as typed into a listing form
///
/// Every numeric field stays a string: the form may hold partial input
/// ("", "12.", "1,50") mid-edit. Parsing happens in the pricing engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceInput {
    /// Current listing price, required unless `show_price_as_poa`
    pub price: String,
    /// Pre-discount price (optional)
    pub original_price: String,
    /// Dealer discount percentage, exclusive 0..100 (optional)
    pub dealer_discount: String,
    /// Savings amount, normally derived but may be overridden by hand
    pub savings_amount: String,
    /// Whether savings are displayed (and validated)
    pub show_savings: bool,
    /// "Price on Application": price is not required
    #[serde(rename = "showPriceAsPOA")]
    pub show_price_as_poa: bool,
}

impl PriceInput {
    /// Shorthand for a plain priced listing with no savings
    pub fn with_price(price: impl Into<String>) -> Self {
        Self {
            price: price.into(),
            ..Default::default()
        }
    }
}

/// Field path of a price-related form field
///
/// The set is fixed; validation errors are keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceField {
    Price,
    OriginalPrice,
    DealerDiscount,
    SavingsAmount,
}

impl PriceField {
    pub const ALL: [PriceField; 4] = [
        PriceField::Price,
        PriceField::OriginalPrice,
        PriceField::DealerDiscount,
        PriceField::SavingsAmount,
    ];

    /// Form field name, as the listing forms and payload use it
    pub const fn as_str(&self) -> &'static str {
        match self {
            PriceField::Price => "price",
            PriceField::OriginalPrice => "originalPrice",
            PriceField::DealerDiscount => "dealerDiscount",
            PriceField::SavingsAmount => "savingsAmount",
        }
    }
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
