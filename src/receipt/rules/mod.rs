//! Rule-based field extraction for receipt lines.

pub mod amounts;
pub mod dates;
pub mod patterns;

pub use amounts::amount_candidate;
pub use dates::date_candidate;

use patterns::{CONTAINS_AMOUNT, CONTAINS_DATE};

/// True when the line carries a currency marker, a cents value, or a
/// total/amount label. Used to exclude lines from merchant joining and
/// item extraction.
pub fn contains_amount(line: &str) -> bool {
    CONTAINS_AMOUNT.is_match(line)
}

/// True when the line carries a slash- or dash-separated numeric date.
pub fn contains_date(line: &str) -> bool {
    CONTAINS_DATE.is_match(line)
}
