//! Listing price form
//!
//! The state every listing form (dealer add/update, user-submitted car
//! listing) shares for its price tab. Savings are recomputed after each
//! edit to a price field and merged back into the form state; submission
//! is blocked until the validator passes.

use super::calculator::{SavingsResult, compute_savings, discount_in_range};
use super::money::{MONEY_TOLERANCE, PriceValues, to_input_string};
use super::validator::{FieldErrors, validate_pricing_with_tolerance};
use rust_decimal::prelude::*;
use shared::error::AppResult;
use shared::models::{ListingPricePayload, PriceInput, PriceOptions};

#[derive(Debug, Clone, PartialEq)]
pub struct ListingPriceForm {
    input: PriceInput,
    savings: SavingsResult,
    /// User typed the savings amount by hand; derived values no longer overwrite it
    savings_overridden: bool,
    tolerance: Decimal,
}

impl Default for ListingPriceForm {
    fn default() -> Self {
        Self::with_tolerance(MONEY_TOLERANCE)
    }
}

impl ListingPriceForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty form with a custom savings reconciliation tolerance
    pub fn with_tolerance(tolerance: Decimal) -> Self {
        Self {
            input: PriceInput::default(),
            savings: SavingsResult::default(),
            savings_overridden: false,
            tolerance,
        }
    }

    /// Form pre-filled from raw field values
    ///
    /// A non-blank savings amount counts as a manual override.
    pub fn from_input(input: PriceInput, tolerance: Decimal) -> Self {
        let mut form = Self::with_tolerance(tolerance);
        form.savings_overridden = !input.savings_amount.trim().is_empty();
        form.input = input;
        form.recompute();
        form
    }

    /// Form pre-filled from an existing listing (update flow)
    pub fn from_payload(payload: &ListingPricePayload, tolerance: Decimal) -> Self {
        let options = &payload.price_options;
        let positive = |value: Decimal| {
            if value > Decimal::ZERO {
                to_input_string(value)
            } else {
                String::new()
            }
        };

        // Original price back-derived from the discount stays blank so the discount remains the basis
        let derived_original = discount_in_range(options.dealer_discount)
            && compute_savings(Decimal::ZERO, payload.price, options.dealer_discount)
                .effective_original_price
                == options.original_price;
        let original_price = if derived_original {
            String::new()
        } else {
            positive(options.original_price)
        };

        let mut form = Self::with_tolerance(tolerance);
        form.input = PriceInput {
            price: positive(payload.price),
            original_price,
            dealer_discount: positive(options.dealer_discount),
            savings_amount: String::new(),
            show_savings: options.show_savings,
            show_price_as_poa: payload.show_price_as_poa,
        };
        form.recompute();

        // A stored amount that differs from the derived one was entered by hand
        let differs = options
            .savings_amount
            .checked_sub(form.savings.amount)
            .is_none_or(|gap| gap.abs() > tolerance);
        if options.savings_amount > Decimal::ZERO && differs {
            form.savings_overridden = true;
            form.input.savings_amount = to_input_string(options.savings_amount);
        }
        form
    }

    pub fn input(&self) -> &PriceInput {
        &self.input
    }

    /// Last computed savings
    pub fn savings(&self) -> &SavingsResult {
        &self.savings
    }

    pub fn is_savings_overridden(&self) -> bool {
        self.savings_overridden
    }

    pub fn set_price(&mut self, value: impl Into<String>) {
        self.input.price = value.into();
        self.recompute();
    }

    pub fn set_original_price(&mut self, value: impl Into<String>) {
        self.input.original_price = value.into();
        self.recompute();
    }

    pub fn set_dealer_discount(&mut self, value: impl Into<String>) {
        self.input.dealer_discount = value.into();
        self.recompute();
    }

    /// Manual savings entry. Clearing the field hands control back to the calculator.
    pub fn set_savings_amount(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.savings_overridden = !value.trim().is_empty();
        self.input.savings_amount = value;
        if !self.savings_overridden {
            self.recompute();
        }
    }

    pub fn set_show_savings(&mut self, show: bool) {
        self.input.show_savings = show;
    }

    pub fn set_show_price_as_poa(&mut self, poa: bool) {
        self.input.show_price_as_poa = poa;
    }

    fn recompute(&mut self) {
        let values = PriceValues::parse(&self.input);
        // Out-of-range discounts never reach the calculator; the validator reports them
        let discount = if discount_in_range(values.dealer_discount) {
            values.dealer_discount
        } else {
            Decimal::ZERO
        };
        self.savings = compute_savings(values.original_price, values.price, discount);

        if !self.savings_overridden {
            self.input.savings_amount = if self.savings.is_derivable() {
                to_input_string(self.savings.amount)
            } else {
                String::new()
            };
        }
        if self.savings.is_derivable() {
            self.input.show_savings = true;
        }

        tracing::debug!(
            amount = %self.savings.amount,
            percentage = %self.savings.percentage,
            branch = ?self.savings.branch(),
            "Savings recomputed"
        );
    }

    pub fn validate(&self) -> FieldErrors {
        validate_pricing_with_tolerance(&self.input, self.tolerance)
    }

    /// Validate and build the submission payload
    pub fn submit(&self) -> AppResult<ListingPricePayload> {
        let errors = self.validate();
        if !errors.is_empty() {
            tracing::warn!(
                fields = ?errors.fields().collect::<Vec<_>>(),
                "Listing price submission blocked"
            );
            return Err(errors.into());
        }

        let values = PriceValues::parse(&self.input);
        let savings_amount = match values.savings_amount {
            Some(amount) if self.savings_overridden => amount,
            _ => self.savings.amount,
        };

        Ok(ListingPricePayload {
            price: values.price,
            show_price_as_poa: self.input.show_price_as_poa,
            price_options: PriceOptions {
                original_price: self.savings.effective_original_price,
                savings_amount,
                savings_percentage: self.savings.percentage,
                dealer_discount: values.dealer_discount,
                show_savings: self.input.show_savings,
            },
        })
    }
}
