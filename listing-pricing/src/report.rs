//! Pricing report
//!
//! Runs one price form state through the calculator and validator and
//! collects everything a caller needs to render it: savings, field
//! errors, the submission payload when valid, and display strings.

use crate::core::Config;
use crate::pricing::{FieldErrors, ListingPriceForm, SavingsResult, format_money, parse_money};
use serde::Serialize;
use shared::error::AppResult;
use shared::models::{ListingPricePayload, PriceInput};
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingReport {
    pub savings: SavingsResult,
    pub errors: FieldErrors,
    /// Present only when the input passes validation
    pub payload: Option<ListingPricePayload>,
    pub display: PriceDisplay,
}

impl PricingReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Display strings as the listing detail page shows them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDisplay {
    /// "POA" for Price on Application listings
    pub price: String,
    /// Struck-through "was" price, when savings are shown
    pub original_price: Option<String>,
    /// "Save £30,000 (17%)"
    pub savings: Option<String>,
}

/// Read a `PriceInput` JSON document from a file, or stdin when no path is given
pub fn read_input(path: Option<&Path>) -> AppResult<PriceInput> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

/// Evaluate a form state
pub fn evaluate(input: PriceInput, config: &Config) -> PricingReport {
    let form = ListingPriceForm::from_input(input, config.savings_tolerance);
    let errors = form.validate();
    let payload = form.submit().ok();
    let display = display_for(&form, &config.currency_symbol);

    PricingReport {
        savings: *form.savings(),
        errors,
        payload,
        display,
    }
}

fn display_for(form: &ListingPriceForm, currency_symbol: &str) -> PriceDisplay {
    let input = form.input();
    let savings = form.savings();

    let price = if input.show_price_as_poa {
        "POA".to_string()
    } else {
        format_money(parse_money(&input.price), currency_symbol)
    };

    let (original_price, savings_text) = if input.show_savings && savings.is_derivable() {
        (
            Some(format_money(savings.effective_original_price, currency_symbol)),
            Some(format!(
                "Save {} ({}%)",
                format_money(savings.amount, currency_symbol),
                savings.percentage.normalize()
            )),
        )
    } else {
        (None, None)
    };

    PriceDisplay {
        price,
        original_price,
        savings: savings_text,
    }
}
