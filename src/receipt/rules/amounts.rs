//! Amount candidate extraction for receipt lines.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::patterns::{
    BARE_AMOUNT_CENTS, BARE_AMOUNT_TENTHS, CURRENCY_AMOUNT, LABELED_AMOUNT, WHOLE_AMOUNT,
};

/// Lower bound of the accepted range, exclusive.
const MIN_AMOUNT: Decimal = Decimal::ZERO;

/// Extract the amount candidate from a single line, if any.
///
/// Patterns are tried in priority order; the first one whose captured value
/// parses and falls inside the open range (0, 10000) wins. A pattern that
/// matches but yields an out-of-range value falls through to the next
/// pattern rather than disqualifying the line.
pub fn amount_candidate(line: &str) -> Option<Decimal> {
    let patterns = [
        &*LABELED_AMOUNT,
        &*CURRENCY_AMOUNT,
        &*BARE_AMOUNT_CENTS,
        &*BARE_AMOUNT_TENTHS,
        &*WHOLE_AMOUNT,
    ];

    for pattern in patterns {
        if let Some(caps) = pattern.captures(line) {
            if let Some(value) = parse_amount(&caps[1]) {
                if value > MIN_AMOUNT && value < Decimal::from(10_000) {
                    return Some(value);
                }
            }
        }
    }

    None
}

/// Parse a captured amount, tolerating a dangling decimal point ("45.").
fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim_end_matches('.')).ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn labeled_total_is_extracted() {
        assert_eq!(amount_candidate("Total: $45.67"), Some(dec("45.67")));
        assert_eq!(amount_candidate("AMOUNT 12.00"), Some(dec("12.00")));
        assert_eq!(amount_candidate("Subtotal: 9.99"), Some(dec("9.99")));
    }

    #[test]
    fn currency_amount_is_extracted() {
        assert_eq!(amount_candidate("$12.34"), Some(dec("12.34")));
        assert_eq!(amount_candidate("$12"), Some(dec("12")));
    }

    #[test]
    fn bare_decimal_amounts_are_extracted() {
        assert_eq!(amount_candidate("Latte 4.50"), Some(dec("4.50")));
        assert_eq!(amount_candidate("Tip 1.5"), Some(dec("1.5")));
    }

    #[test]
    fn dangling_decimal_point_parses_as_integer() {
        assert_eq!(amount_candidate("Total: 45."), Some(dec("45")));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert_eq!(amount_candidate("Serial 99999.99"), None);
        assert_eq!(amount_candidate("0.00"), None);
    }

    #[test]
    fn plain_text_yields_nothing() {
        assert_eq!(amount_candidate("Blueberry Muffin"), None);
        assert_eq!(amount_candidate(""), None);
    }

    #[test]
    fn labeled_value_beats_other_numbers_on_the_line() {
        // The label pattern is tried first, so its capture wins even when a
        // larger bare number appears earlier in the line.
        assert_eq!(amount_candidate("99.99 off, total: 5.00"), Some(dec("5.00")));
    }
}
