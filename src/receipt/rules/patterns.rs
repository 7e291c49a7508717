//! Compiled regex patterns for receipt field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Amount patterns, tried in priority order per line. The labeled form
    // deliberately has no word boundary, so "Subtotal" also counts as a
    // labeled line.
    pub static ref LABELED_AMOUNT: Regex = Regex::new(
        r"(?i)(?:total|amount):?\s*\$?(\d+\.?\d*)"
    ).unwrap();

    pub static ref CURRENCY_AMOUNT: Regex = Regex::new(
        r"\$(\d+\.?\d*)"
    ).unwrap();

    pub static ref BARE_AMOUNT_CENTS: Regex = Regex::new(
        r"(\d+\.\d{2})"
    ).unwrap();

    pub static ref BARE_AMOUNT_TENTHS: Regex = Regex::new(
        r"(\d+\.\d{1})"
    ).unwrap();

    pub static ref WHOLE_AMOUNT: Regex = Regex::new(
        r"(\d+)\.00"
    ).unwrap();

    // Date patterns, tried in this order per line.
    pub static ref DATE_MDY_SLASH: Regex = Regex::new(
        r"(\d{1,2})/(\d{1,2})/(\d{4})"
    ).unwrap();

    pub static ref DATE_MDY_DASH: Regex = Regex::new(
        r"(\d{1,2})-(\d{1,2})-(\d{4})"
    ).unwrap();

    pub static ref DATE_YMD: Regex = Regex::new(
        r"(\d{4})-(\d{1,2})-(\d{1,2})"
    ).unwrap();

    pub static ref DATE_MDY_SHORT: Regex = Regex::new(
        r"(\d{1,2})/(\d{1,2})/(\d{2})"
    ).unwrap();

    // Screen tests shared by the item filter.
    pub static ref CONTAINS_AMOUNT: Regex = Regex::new(
        r"(?i)\$\d+|\d+\.\d{2}|total|amount"
    ).unwrap();

    pub static ref CONTAINS_DATE: Regex = Regex::new(
        r"\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4}|\d{4}[/\-]\d{1,2}[/\-]\d{1,2}"
    ).unwrap();
}
