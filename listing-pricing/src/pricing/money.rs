//! Money and percentage primitives
//!
//! Form fields arrive as free text and may be mid-edit ("", "12.", "£1,").
//! Parsing never fails: anything without a numeric prefix is zero.
//! Range and sanity checks belong to the validator, not here.

use rust_decimal::prelude::*;
use shared::models::PriceInput;

/// Money amounts are kept to 2 decimal places, half away from zero
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Currency symbols accepted in front of an amount
const CURRENCY_SYMBOLS: [char; 3] = ['£', '$', '€'];

/// Parse a money field. Empty or non-numeric input yields zero.
///
/// Negative values are returned as-is so the validator can reject them.
pub fn parse_money(input: &str) -> Decimal {
    parse_numeric(input, true)
}

/// Parse a percentage field. No clamping to 0..=100.
pub fn parse_percentage(input: &str) -> Decimal {
    parse_numeric(input, false)
}

/// True when a field holds nothing but whitespace
#[inline]
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Round to money precision (2 dp, half away from zero)
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to a whole number (half away from zero)
#[inline]
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Longest numeric prefix of `input`, after an optional sign and currency symbol.
///
/// `,` is a thousands separator inside the integer part. A trailing `.`
/// is dropped so "12." reads as 12.
///
/// Integer parts beyond `Decimal::MAX` saturate to it rather than reading
/// as zero, so a huge price is still a positive price.
fn parse_numeric(input: &str, allow_currency: bool) -> Decimal {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let mut rest = rest.trim_start();
    if allow_currency {
        rest = rest.strip_prefix(CURRENCY_SYMBOLS).unwrap_or(rest).trim_start();
    }

    let mut digits = String::with_capacity(rest.len() + 1);
    let mut seen_digit = false;
    let mut seen_point = false;
    for ch in rest.chars() {
        match ch {
            '0'..='9' => {
                digits.push(ch);
                seen_digit = true;
            }
            ',' if seen_digit && !seen_point => {}
            '.' if !seen_point => {
                if !seen_digit {
                    digits.push('0');
                }
                digits.push('.');
                seen_point = true;
            }
            _ => break,
        }
    }

    if !seen_digit {
        return Decimal::ZERO;
    }

    let number = digits.trim_end_matches('.');
    // Too many digits for a Decimal: drop the fraction, then saturate
    let value = Decimal::from_str(number)
        .or_else(|_| Decimal::from_str(number.split('.').next().unwrap_or_default()))
        .unwrap_or(Decimal::MAX);
    if negative { -value } else { value }
}

/// Render an amount for display: thousands separators, cents only when non-zero.
///
/// `150000` → `150,000`, `1234.5` → `1,234.50`
pub fn format_amount(amount: Decimal) -> String {
    let rounded = round_money(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let abs = rounded.abs();
    let whole = group_thousands(&abs.trunc().to_u128().unwrap_or_default().to_string());
    let cents = (abs.fract() * Decimal::ONE_HUNDRED)
        .to_u32()
        .unwrap_or_default();

    if cents == 0 {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{cents:02}")
    }
}

/// Render an amount with a currency symbol in front (`£150,000`)
pub fn format_money(amount: Decimal, currency_symbol: &str) -> String {
    let formatted = format_amount(amount);
    match formatted.strip_prefix('-') {
        Some(abs) => format!("-{currency_symbol}{abs}"),
        None => format!("{currency_symbol}{formatted}"),
    }
}

/// Render a derived amount back into a form field (plain digits, no grouping)
pub fn to_input_string(value: Decimal) -> String {
    round_money(value).normalize().to_string()
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Numeric view of a [`PriceInput`]
///
/// Produced once per evaluation; calculation and validation read these
/// values and never the raw strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceValues {
    pub price: Decimal,
    pub original_price: Decimal,
    pub dealer_discount: Decimal,
    /// `None` when the savings field is blank
    pub savings_amount: Option<Decimal>,
}

impl PriceValues {
    pub fn parse(input: &PriceInput) -> Self {
        Self {
            price: parse_money(&input.price),
            original_price: parse_money(&input.original_price),
            dealer_discount: parse_percentage(&input.dealer_discount),
            savings_amount: (!is_blank(&input.savings_amount))
                .then(|| parse_money(&input.savings_amount)),
        }
    }
}
