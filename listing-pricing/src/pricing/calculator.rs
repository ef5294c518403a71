//! Savings Calculator
//!
//! Derives savings from the original price, the current price and the
//! dealer discount. Pure and deterministic: the listing forms call it on
//! every keystroke and expect identical output for identical input.
//!
//! Rounding is half away from zero throughout (see [`round_whole`]).

use super::money::round_whole;
use rust_decimal::prelude::*;
use serde::Serialize;

/// Which derivation produced a [`SavingsResult`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SavingsBranch {
    /// Original price supplied and above the current price
    OriginalPrice,
    /// Original price back-derived from the dealer discount
    DealerDiscount,
    /// Nothing derivable
    #[default]
    None,
}

/// Derived savings for a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsResult {
    /// Absolute savings, `effective_original_price - current price`
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Whole percentage of the effective original price
    #[serde(with = "rust_decimal::serde::float")]
    pub percentage: Decimal,
    /// Original price used in the calculation
    #[serde(with = "rust_decimal::serde::float")]
    pub effective_original_price: Decimal,
    pub branch: SavingsBranch,
}

impl SavingsResult {
    /// True when the result carries a positive saving
    #[inline]
    pub fn is_derivable(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    #[inline]
    pub fn branch(&self) -> SavingsBranch {
        self.branch
    }
}

/// Dealer discounts are valid strictly between 0% and 100%
#[inline]
pub fn discount_in_range(discount_percent: Decimal) -> bool {
    discount_percent > Decimal::ZERO && discount_percent < Decimal::ONE_HUNDRED
}

/// Compute savings, first applicable branch wins:
///
/// 1. `original > current > 0`: savings = original - current,
///    percentage = round(savings / original * 100)
/// 2. `discount > 0` and `current > 0`: original = round(current / (1 - discount/100)),
///    savings = original - current, percentage = discount
/// 3. otherwise all zero
///
/// The result is unspecified for `discount >= 100`; callers validate the
/// discount first (see [`discount_in_range`]).
pub fn compute_savings(
    original_price: Decimal,
    current_price: Decimal,
    dealer_discount_percent: Decimal,
) -> SavingsResult {
    if original_price > Decimal::ZERO
        && current_price > Decimal::ZERO
        && original_price > current_price
    {
        let amount = original_price - current_price;
        let percentage = amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|scaled| scaled.checked_div(original_price))
            .map(round_whole)
            .unwrap_or_default();

        return SavingsResult {
            amount,
            percentage,
            effective_original_price: original_price,
            branch: SavingsBranch::OriginalPrice,
        };
    }

    if dealer_discount_percent > Decimal::ZERO && current_price > Decimal::ZERO {
        let multiplier = Decimal::ONE - dealer_discount_percent / Decimal::ONE_HUNDRED;
        if let Some(derived) = current_price.checked_div(multiplier) {
            let effective_original_price = round_whole(derived);
            return SavingsResult {
                amount: effective_original_price - current_price,
                percentage: dealer_discount_percent,
                effective_original_price,
                branch: SavingsBranch::DealerDiscount,
            };
        }
    }

    SavingsResult::default()
}
