//! Display-side formatting.
//!
//! Kept strictly separate from value normalization: the estimator only ever
//! consumes normalized numbers, and these helpers only ever produce display
//! strings. Feeding a formatted string back through
//! [`normalize_amount`](crate::calculations::common::normalize_amount)
//! recovers the same value.

use rust_decimal::{Decimal, RoundingStrategy};

/// Reformats a raw typed amount as digit groups: `"1234567"` → `"1,234,567"`.
///
/// Mirrors the comma-insertion an amount field performs while the user
/// types: non-digits are dropped, leading zeros collapse, and an empty
/// entry stays empty.
pub fn group_digits(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let trimmed = digits.trim_start_matches('0');
    if digits.is_empty() {
        return String::new();
    }
    if trimmed.is_empty() {
        return "0".to_string();
    }
    group(trimmed)
}

/// Formats an amount for summary display: rounded to whole baht, grouped
/// thousands, sign preserved.
pub fn baht(value: Decimal) -> String {
    let whole = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = whole.abs().to_string();
    let grouped = group(&digits);
    if whole.is_sign_negative() && !whole.is_zero() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Inserts a comma every three digits from the right.
fn group(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // group_digits tests
    // =========================================================================

    #[test]
    fn group_digits_inserts_commas_from_the_right() {
        assert_eq!(group_digits("1234567"), "1,234,567");
        assert_eq!(group_digits("100"), "100");
        assert_eq!(group_digits("1000"), "1,000");
    }

    #[test]
    fn group_digits_drops_non_digits_and_leading_zeros() {
        assert_eq!(group_digits("12a34"), "1,234");
        assert_eq!(group_digits("007"), "7");
        assert_eq!(group_digits("000"), "0");
    }

    #[test]
    fn group_digits_keeps_empty_input_empty() {
        assert_eq!(group_digits(""), "");
        assert_eq!(group_digits("abc"), "");
    }

    // =========================================================================
    // baht tests
    // =========================================================================

    #[test]
    fn baht_groups_and_rounds_to_whole_amounts() {
        assert_eq!(baht(dec!(1234567)), "1,234,567");
        assert_eq!(baht(dec!(140000.49)), "140,000");
        assert_eq!(baht(dec!(140000.50)), "140,001");
        assert_eq!(baht(dec!(0)), "0");
    }

    #[test]
    fn baht_preserves_the_sign_of_refunds() {
        assert_eq!(baht(dec!(-2500)), "-2,500");
        assert_eq!(baht(dec!(-0.4)), "0");
    }
}
