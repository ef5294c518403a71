//! Pricing Validator
//!
//! Checks the price fields of a listing form. Every rule runs; the
//! result lists all failing fields at once so the form can flag them
//! together. An empty [`FieldErrors`] is the only "valid" signal.

use super::calculator::{compute_savings, discount_in_range};
use super::money::{MONEY_TOLERANCE, PriceValues, format_amount, is_blank};
use rust_decimal::prelude::*;
use serde::Serialize;
use shared::error::{AppError, ErrorCode};
use shared::models::{PriceField, PriceInput};
use std::collections::BTreeMap;

pub const PRICE_REQUIRED: &str = "Price is required";
pub const PRICE_NOT_POSITIVE: &str = "Price must be greater than zero";
pub const SAVINGS_BASIS_REQUIRED: &str = "Original price or dealer discount is required for savings";
pub const ORIGINAL_PRICE_NOT_HIGHER: &str = "Original price must be higher than current price";
pub const DEALER_DISCOUNT_OUT_OF_RANGE: &str = "Dealer discount must be between 1% and 99%";

/// Field-level validation errors, one message per field
///
/// When two rules fail on the same field the earlier rule's message is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<PriceField, String>);

impl FieldErrors {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: PriceField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: PriceField) -> bool {
        self.0.contains_key(&field)
    }

    /// Failing fields in stable order
    pub fn fields(&self) -> impl Iterator<Item = PriceField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PriceField, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn record(&mut self, field: PriceField, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }
}

impl From<FieldErrors> for AppError {
    /// Blocked submission: one detail entry per failing field
    fn from(errors: FieldErrors) -> Self {
        errors
            .0
            .into_iter()
            .fold(AppError::new(ErrorCode::PriceValidationFailed), |err, (field, message)| {
                err.with_detail(field.as_str(), message)
            })
    }
}

/// Validate price fields with the default 0.01 savings tolerance
pub fn validate_pricing(input: &PriceInput) -> FieldErrors {
    validate_pricing_with_tolerance(input, MONEY_TOLERANCE)
}

/// Validate price fields
///
/// Rules, in precedence order:
/// 1. price required (> 0) unless Price on Application
/// 2. savings need an original price or a dealer discount
/// 3. original price must exceed the current price
/// 4. dealer discount must lie strictly between 0 and 100
/// 5. a manually entered savings amount must match the derived one
///    within `tolerance`
///
/// Rules 2-4 apply only while savings are shown.
pub fn validate_pricing_with_tolerance(input: &PriceInput, tolerance: Decimal) -> FieldErrors {
    let values = PriceValues::parse(input);
    let mut errors = FieldErrors::default();

    let has_original = !values.original_price.is_zero();
    let has_discount = !values.dealer_discount.is_zero();

    if !input.show_price_as_poa && values.price <= Decimal::ZERO {
        let message = if is_blank(&input.price) {
            PRICE_REQUIRED
        } else {
            PRICE_NOT_POSITIVE
        };
        errors.record(PriceField::Price, message);
    }

    if input.show_savings {
        if !has_original && !has_discount {
            errors.record(PriceField::OriginalPrice, SAVINGS_BASIS_REQUIRED);
        }

        if has_original && values.original_price <= values.price {
            errors.record(
                PriceField::OriginalPrice,
                format!(
                    "{ORIGINAL_PRICE_NOT_HIGHER} (original: {}, current: {})",
                    format_amount(values.original_price),
                    format_amount(values.price)
                ),
            );
        }

        if !is_blank(&input.dealer_discount) && !discount_in_range(values.dealer_discount) {
            errors.record(PriceField::DealerDiscount, DEALER_DISCOUNT_OUT_OF_RANGE);
        }
    }

    if let Some(supplied) = values.savings_amount {
        let discount = if discount_in_range(values.dealer_discount) {
            values.dealer_discount
        } else {
            Decimal::ZERO
        };
        let expected = compute_savings(values.original_price, values.price, discount);
        let mismatched = supplied
            .checked_sub(expected.amount)
            .is_none_or(|gap| gap.abs() > tolerance);
        if expected.is_derivable() && mismatched {
            errors.record(
                PriceField::SavingsAmount,
                format!(
                    "Savings amount should be {}",
                    format_amount(expected.amount)
                ),
            );
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn savings_input(price: &str, original: &str, discount: &str) -> PriceInput {
        PriceInput {
            price: price.to_string(),
            original_price: original.to_string(),
            dealer_discount: discount.to_string(),
            show_savings: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_plain_price_is_valid() {
        assert!(validate_pricing(&PriceInput::with_price("150000")).is_empty());
    }

    #[test]
    fn test_missing_price_only() {
        let errors = validate_pricing(&PriceInput::default());
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![PriceField::Price]);
        assert_eq!(errors.get(PriceField::Price), Some(PRICE_REQUIRED));
    }

    #[test]
    fn test_negative_and_zero_price_rejected() {
        let errors = validate_pricing(&PriceInput::with_price("-100"));
        assert_eq!(errors.get(PriceField::Price), Some(PRICE_NOT_POSITIVE));

        let errors = validate_pricing(&PriceInput::with_price("0"));
        assert!(errors.contains(PriceField::Price));

        let errors = validate_pricing(&PriceInput::with_price("abc"));
        assert!(errors.contains(PriceField::Price));
    }

    #[test]
    fn test_poa_exempts_price() {
        let input = PriceInput {
            price: "0".to_string(),
            show_price_as_poa: true,
            ..Default::default()
        };
        assert!(validate_pricing(&input).is_empty());
    }

    #[test]
    fn test_savings_without_basis() {
        let errors = validate_pricing(&savings_input("150000", "", ""));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(PriceField::OriginalPrice), Some(SAVINGS_BASIS_REQUIRED));

        // Zero counts as absent
        let errors = validate_pricing(&savings_input("150000", "0", ""));
        assert_eq!(errors.get(PriceField::OriginalPrice), Some(SAVINGS_BASIS_REQUIRED));
    }

    #[test]
    fn test_original_price_must_be_higher() {
        let errors = validate_pricing(&savings_input("150000", "100000", ""));
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![PriceField::OriginalPrice]);

        let message = errors.get(PriceField::OriginalPrice).unwrap();
        assert!(message.starts_with(ORIGINAL_PRICE_NOT_HIGHER));
        assert!(message.contains("100,000"));
        assert!(message.contains("150,000"));
    }

    #[test]
    fn test_original_price_equal_rejected() {
        let errors = validate_pricing(&savings_input("150000", "150000", ""));
        assert!(errors.contains(PriceField::OriginalPrice));
    }

    #[test]
    fn test_discount_bounds_exclusive() {
        for bad in ["0", "100", "150", "-5", "abc"] {
            let errors = validate_pricing(&savings_input("150000", "", bad));
            assert_eq!(
                errors.get(PriceField::DealerDiscount),
                Some(DEALER_DISCOUNT_OUT_OF_RANGE),
                "discount {bad:?} should be rejected"
            );
        }

        for good in ["1", "50", "99", "0.5", "99.9"] {
            let errors = validate_pricing(&savings_input("150000", "", good));
            assert!(errors.is_empty(), "discount {good:?} should pass: {errors:?}");
        }
    }

    #[test]
    fn test_discount_over_range_only_flags_discount() {
        let errors = validate_pricing(&savings_input("150000", "", "150"));
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![PriceField::DealerDiscount]);
    }

    #[test]
    fn test_savings_rules_skipped_when_hidden() {
        let input = PriceInput {
            price: "150000".to_string(),
            original_price: "100000".to_string(),
            dealer_discount: "150".to_string(),
            show_savings: false,
            ..Default::default()
        };
        assert!(validate_pricing(&input).is_empty());
    }

    #[test]
    fn test_all_violations_reported() {
        let input = PriceInput {
            price: "".to_string(),
            original_price: "".to_string(),
            dealer_discount: "".to_string(),
            savings_amount: "".to_string(),
            show_savings: true,
            show_price_as_poa: false,
        };
        let errors = validate_pricing(&input);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![PriceField::Price, PriceField::OriginalPrice]
        );

        let errors = validate_pricing(&savings_input("-1", "", "100"));
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![PriceField::Price, PriceField::DealerDiscount]
        );
    }

    #[test]
    fn test_first_rule_wins_per_field() {
        // "0" original with a discount present: no basis error, ordering rule skipped
        let errors = validate_pricing(&savings_input("150000", "0", "10"));
        assert!(errors.is_empty());

        // Negative original fails the ordering rule only
        let errors = validate_pricing(&savings_input("150000", "-5", ""));
        let message = errors.get(PriceField::OriginalPrice).unwrap();
        assert!(message.starts_with(ORIGINAL_PRICE_NOT_HIGHER));
    }

    #[test]
    fn test_savings_amount_reconciliation() {
        let mut input = savings_input("150000", "180000", "");
        input.savings_amount = "30000".to_string();
        assert!(validate_pricing(&input).is_empty());

        input.savings_amount = "30000.01".to_string();
        assert!(validate_pricing(&input).is_empty());

        input.savings_amount = "25000".to_string();
        let errors = validate_pricing(&input);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![PriceField::SavingsAmount]);
        assert_eq!(
            errors.get(PriceField::SavingsAmount),
            Some("Savings amount should be 30,000")
        );
    }

    #[test]
    fn test_savings_amount_reconciled_against_discount() {
        let mut input = savings_input("150000", "", "10");
        input.savings_amount = "16667".to_string();
        assert!(validate_pricing(&input).is_empty());

        input.savings_amount = "15000".to_string();
        assert!(validate_pricing(&input).contains(PriceField::SavingsAmount));
    }

    #[test]
    fn test_savings_amount_not_checked_when_underivable() {
        let mut input = savings_input("150000", "", "150");
        input.savings_amount = "5000".to_string();
        let errors = validate_pricing(&input);
        assert!(!errors.contains(PriceField::SavingsAmount));
    }

    #[test]
    fn test_custom_tolerance() {
        let mut input = savings_input("150000", "180000", "");
        input.savings_amount = "30000.50".to_string();
        assert!(validate_pricing(&input).contains(PriceField::SavingsAmount));
        assert!(validate_pricing_with_tolerance(&input, Decimal::ONE).is_empty());
    }

    #[test]
    fn test_savings_gap_overflow_is_a_mismatch() {
        // 6e28 - (6e28 - 1) is fine; -6e28 - (6e28 - 1) overflows Decimal
        let big = format!("6{}", "0".repeat(28));
        let input = PriceInput {
            price: "1".to_string(),
            original_price: big.clone(),
            savings_amount: format!("-{big}"),
            ..Default::default()
        };
        let errors = validate_pricing(&input);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![PriceField::SavingsAmount]);

        let input = PriceInput {
            price: "1".to_string(),
            original_price: "2".to_string(),
            savings_amount: format!("-{}", Decimal::MAX),
            ..Default::default()
        };
        assert!(validate_pricing(&input).contains(PriceField::SavingsAmount));
    }

    #[test]
    fn test_oversized_price_is_positive() {
        let huge = format!("1{}", "0".repeat(40));
        assert!(validate_pricing(&PriceInput::with_price(huge)).is_empty());
    }

    #[test]
    fn test_into_app_error() {
        let errors = validate_pricing(&savings_input("", "", "0"));
        let err: AppError = errors.into();

        assert_eq!(err.code, ErrorCode::PriceValidationFailed);
        assert_eq!(err.detail_str("price"), Some(PRICE_REQUIRED));
        assert_eq!(err.detail_str("dealerDiscount"), Some(DEALER_DISCOUNT_OUT_OF_RANGE));
        assert_eq!(err.detail_str("originalPrice"), Some(SAVINGS_BASIS_REQUIRED));
        assert_eq!(err.detail_str("savingsAmount"), None);
    }

    #[test]
    fn test_serialize_keyed_by_field_path() {
        let errors = validate_pricing(&savings_input("150000", "", "150"));
        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "dealerDiscount": DEALER_DISCOUNT_OUT_OF_RANGE })
        );
    }
}
