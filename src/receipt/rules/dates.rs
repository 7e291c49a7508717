//! Date candidate extraction and ISO normalization.

use chrono::NaiveDate;

use super::patterns::{DATE_MDY_DASH, DATE_MDY_SHORT, DATE_MDY_SLASH, DATE_YMD};

/// Extract a calendar date from a single line, if any.
///
/// Formats are tried in order: MM/DD/YYYY, MM-DD-YYYY, YYYY-MM-DD,
/// MM/DD/YY. A match that is not a valid calendar date falls through to
/// the next format instead of disqualifying the line.
pub fn date_candidate(line: &str) -> Option<NaiveDate> {
    if let Some(caps) = DATE_MDY_SLASH.captures(line) {
        if let Some(date) = month_day_year(&caps[1], &caps[2], &caps[3]) {
            return Some(date);
        }
    }

    if let Some(caps) = DATE_MDY_DASH.captures(line) {
        if let Some(date) = month_day_year(&caps[1], &caps[2], &caps[3]) {
            return Some(date);
        }
    }

    if let Some(caps) = DATE_YMD.captures(line) {
        if let Some(date) = year_month_day(&caps[1], &caps[2], &caps[3]) {
            return Some(date);
        }
    }

    if let Some(caps) = DATE_MDY_SHORT.captures(line) {
        if let Some(date) = month_day_year(&caps[1], &caps[2], &caps[3]) {
            return Some(date);
        }
    }

    None
}

fn month_day_year(month: &str, day: &str, year: &str) -> Option<NaiveDate> {
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    NaiveDate::from_ymd_opt(expand_year(year), month, day)
}

fn year_month_day(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Two-digit years: 00-50 map to the 2000s, 51-99 to the 1900s.
fn expand_year(year: i32) -> i32 {
    if year >= 100 {
        year
    } else if year <= 50 {
        2000 + year
    } else {
        1900 + year
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn slash_date_with_full_year() {
        assert_eq!(date_candidate("01/15/2024"), Some(ymd(2024, 1, 15)));
        assert_eq!(date_candidate("Paid on 3/7/2023 at register"), Some(ymd(2023, 3, 7)));
    }

    #[test]
    fn dash_date_with_full_year() {
        assert_eq!(date_candidate("01-15-2024"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn iso_date() {
        assert_eq!(date_candidate("2024-01-15"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn two_digit_year_expands_to_current_century() {
        assert_eq!(date_candidate("01/15/24"), Some(ymd(2024, 1, 15)));
        assert_eq!(date_candidate("01/15/99"), Some(ymd(1999, 1, 15)));
    }

    #[test]
    fn invalid_calendar_date_falls_through() {
        // 13/45 is no month/day; the short-year pattern then sees "13/45/20"
        // which is also invalid, so the line yields nothing.
        assert_eq!(date_candidate("13/45/2024"), None);
    }

    #[test]
    fn plain_text_yields_nothing() {
        assert_eq!(date_candidate("Grande Latte"), None);
        assert_eq!(date_candidate("Store #1234"), None);
    }
}
