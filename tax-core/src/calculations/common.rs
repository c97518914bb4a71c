//! Shared helpers for the tax calculations: free-text amount coercion and
//! the grouped-ceiling rescale.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::warn;

/// Everything that is not part of a plain decimal number: thousands
/// separators, currency symbols, whitespace, stray text.
static NON_AMOUNT_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.\-]").expect("valid literal pattern"));

/// Coerces a free-text amount into a [`Decimal`].
///
/// Strips every character except digits, `.` and `-`, then parses what is
/// left. Blank input, a lone `-` or `.`, and anything that still fails to
/// parse all coerce to zero; the computation downstream is total over its
/// input domain and never rejects a field. A non-empty field that ends up
/// unparseable is logged at warn level so the coercion is observable.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::normalize_amount;
///
/// assert_eq!(normalize_amount("1,234,567"), dec!(1234567));
/// assert_eq!(normalize_amount("  9,000 ฿"), dec!(9000));
/// assert_eq!(normalize_amount(""), dec!(0));
/// assert_eq!(normalize_amount("about 100"), dec!(100));
/// assert_eq!(normalize_amount("12.5.3"), dec!(0));
/// ```
pub fn normalize_amount(raw: &str) -> Decimal {
    let mut s = NON_AMOUNT_CHARS.replace_all(raw, "").into_owned();

    // Partial entries like "183." and ".5" are legitimate typing states.
    if s.ends_with('.') {
        s.pop();
    }
    if s.starts_with('.') {
        s.insert(0, '0');
    } else if s.starts_with("-.") {
        s.insert(1, '0');
    }
    if s.is_empty() || s == "-" {
        return Decimal::ZERO;
    }

    match s.parse::<Decimal>() {
        Ok(n) => n,
        Err(_) => {
            warn!(input = %raw, "unparseable amount coerced to zero");
            Decimal::ZERO
        }
    }
}

/// Applies a shared ceiling across a group of already-individually-capped
/// figures.
///
/// When the group total exceeds the ceiling, every member is scaled down
/// proportionally and floored to a whole baht so the group fits under the
/// ceiling. The floor means the rescaled total can land up to `N - 1` baht
/// short of the ceiling; the shortfall stays with the taxpayer rather than
/// being redistributed.
pub fn cap_group<const N: usize>(values: [Decimal; N], ceiling: Decimal) -> [Decimal; N] {
    let sum: Decimal = values.iter().copied().sum();
    if sum <= ceiling {
        return values;
    }
    let ratio = ceiling / sum;
    values.map(|v| (v * ratio).floor())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // normalize_amount tests
    // =========================================================================

    #[test]
    fn normalize_strips_thousands_separators() {
        assert_eq!(normalize_amount("1,234,567"), dec!(1234567));
    }

    #[test]
    fn normalize_strips_currency_symbols_and_spaces() {
        assert_eq!(normalize_amount("  25,000 ฿ "), dec!(25000));
        assert_eq!(normalize_amount("THB 9000"), dec!(9000));
    }

    #[test]
    fn normalize_blank_and_placeholder_collapse_to_zero() {
        assert_eq!(normalize_amount(""), dec!(0));
        assert_eq!(normalize_amount("   "), dec!(0));
        assert_eq!(normalize_amount("-"), dec!(0));
        assert_eq!(normalize_amount("."), dec!(0));
        assert_eq!(normalize_amount("-."), dec!(0));
    }

    #[test]
    fn normalize_keeps_sign_and_fraction() {
        assert_eq!(normalize_amount("-500"), dec!(-500));
        assert_eq!(normalize_amount("0.5"), dec!(0.5));
        assert_eq!(normalize_amount(".5"), dec!(0.5));
        assert_eq!(normalize_amount("-.5"), dec!(-0.5));
        assert_eq!(normalize_amount("183."), dec!(183));
    }

    #[test]
    fn normalize_unparseable_residue_coerces_to_zero() {
        assert_eq!(normalize_amount("abc"), dec!(0));
        assert_eq!(normalize_amount("12.5.3"), dec!(0));
        assert_eq!(normalize_amount("5-3"), dec!(0));
    }

    #[test]
    fn normalize_is_idempotent_over_its_own_output() {
        for raw in ["1,234.50", "-500", "  12 000", "9,000 ฿", "x", ""] {
            let once = normalize_amount(raw);
            let twice = normalize_amount(&once.to_string());
            assert_eq!(twice, once, "input {raw:?}");
        }
    }

    // =========================================================================
    // cap_group tests
    // =========================================================================

    #[test]
    fn cap_group_leaves_group_under_ceiling_untouched() {
        let values = [dec!(100000), dec!(50000), dec!(0), dec!(25000)];

        let result = cap_group(values, dec!(500000));

        assert_eq!(result, values);
    }

    #[test]
    fn cap_group_rescales_to_the_ceiling_exactly_when_ratios_divide() {
        let result = cap_group(
            [dec!(300000), dec!(200000), dec!(100000), dec!(200000)],
            dec!(500000),
        );

        // Ratio 0.625; every product is whole.
        assert_eq!(result, [dec!(187500), dec!(125000), dec!(62500), dec!(125000)]);
        assert_eq!(result.iter().copied().sum::<Decimal>(), dec!(500000));
    }

    #[test]
    fn cap_group_floor_may_leave_a_small_shortfall() {
        let result = cap_group(
            [dec!(200001), dec!(200001), dec!(100001), dec!(100001)],
            dec!(500000),
        );

        let sum: Decimal = result.iter().copied().sum();
        assert!(sum <= dec!(500000));
        assert!(sum >= dec!(499997), "floor loses at most one baht per member, got {sum}");
        for v in result {
            assert_eq!(v, v.floor());
        }
    }
}
