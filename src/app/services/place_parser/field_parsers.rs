//! Field parsing utilities for gazetteer records
//!
//! Numeric gazetteer cells are frequently empty or carry trailing noise, so
//! the numeric parsers here are deliberately lenient: the longest valid
//! decimal prefix wins, and total failure yields a missing-value sentinel
//! rather than an error. The modification date is the one strictly parsed
//! field; a record with an unreadable date is rejected by the caller.

use crate::constants::{MODIFICATION_DATE_FORMAT, NAME_LIST_DELIMITER};
use chrono::NaiveDate;

/// Parse the longest valid decimal integer prefix of a field.
///
/// `"123abc"` parses to `123`; `"3.9"` parses to `3`; an empty or entirely
/// non-numeric field yields `None`.
pub fn parse_lenient_i64(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if !has_numeric_start(trimmed) {
        return None;
    }

    // Longest prefix that still parses wins.
    for end in (1..=trimmed.len()).rev() {
        if !trimmed.is_char_boundary(end) {
            continue;
        }
        if let Ok(value) = trimmed[..end].parse::<i64>() {
            return Some(value);
        }
    }
    None
}

/// Parse the longest valid decimal float prefix of a field.
///
/// `"48.85abc"` parses to `48.85`; an empty or entirely non-numeric field
/// yields `f64::NAN`.
pub fn parse_lenient_f64(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if !has_numeric_start(trimmed) {
        return f64::NAN;
    }

    for end in (1..=trimmed.len()).rev() {
        if !trimmed.is_char_boundary(end) {
            continue;
        }
        if let Ok(value) = trimmed[..end].parse::<f64>() {
            return value;
        }
    }
    f64::NAN
}

/// Split a comma-delimited name list field.
///
/// An empty field yields an empty list, not a list holding one empty name.
pub fn split_name_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(NAME_LIST_DELIMITER)
        .map(str::to_string)
        .collect()
}

/// Parse the ISO calendar date of the modification-date field
pub fn parse_modification_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw.trim(), MODIFICATION_DATE_FORMAT)
}

/// A numeric prefix must begin with a digit or decimal point after an
/// optional sign. Rust's float grammar also accepts words like `inf` and
/// `nan`; those must not be picked out of gazetteer text fields.
fn has_numeric_start(trimmed: &str) -> bool {
    let unsigned = trimmed
        .strip_prefix(['+', '-'])
        .unwrap_or(trimmed);
    unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_i64_plain_values() {
        assert_eq!(parse_lenient_i64("8961989"), Some(8961989));
        assert_eq!(parse_lenient_i64("-42"), Some(-42));
        assert_eq!(parse_lenient_i64("+7"), Some(7));
        assert_eq!(parse_lenient_i64("0"), Some(0));
    }

    #[test]
    fn test_lenient_i64_takes_longest_numeric_prefix() {
        assert_eq!(parse_lenient_i64("123abc"), Some(123));
        assert_eq!(parse_lenient_i64("3.9"), Some(3));
        assert_eq!(parse_lenient_i64("25m"), Some(25));
    }

    #[test]
    fn test_lenient_i64_sentinel_on_total_failure() {
        assert_eq!(parse_lenient_i64(""), None);
        assert_eq!(parse_lenient_i64("n/a"), None);
        assert_eq!(parse_lenient_i64("-"), None);
        assert_eq!(parse_lenient_i64("abc123"), None);
    }

    #[test]
    fn test_lenient_f64_plain_values() {
        assert_eq!(parse_lenient_f64("48.85341"), 48.85341);
        assert_eq!(parse_lenient_f64("-0.12574"), -0.12574);
        assert_eq!(parse_lenient_f64(".5"), 0.5);
    }

    #[test]
    fn test_lenient_f64_takes_longest_numeric_prefix() {
        assert_eq!(parse_lenient_f64("2.3488E"), 2.3488);
        assert_eq!(parse_lenient_f64("12.5abc"), 12.5);
        assert_eq!(parse_lenient_f64("1e3x"), 1000.0);
    }

    #[test]
    fn test_lenient_f64_sentinel_on_total_failure() {
        assert!(parse_lenient_f64("").is_nan());
        assert!(parse_lenient_f64("unknown").is_nan());
        // Words that Rust's float grammar would accept must not leak through.
        assert!(parse_lenient_f64("infinity").is_nan());
        assert!(parse_lenient_f64("nan").is_nan());
    }

    #[test]
    fn test_split_name_list() {
        assert_eq!(
            split_name_list("Lutetia,Paname"),
            vec!["Lutetia".to_string(), "Paname".to_string()]
        );
        assert_eq!(split_name_list("London"), vec!["London".to_string()]);
    }

    #[test]
    fn test_split_name_list_empty_field_is_empty_list() {
        assert!(split_name_list("").is_empty());
    }

    #[test]
    fn test_parse_modification_date() {
        assert_eq!(
            parse_modification_date("2023-02-07"),
            Ok(NaiveDate::from_ymd_opt(2023, 2, 7).unwrap())
        );
        assert!(parse_modification_date("07/02/2023").is_err());
        assert!(parse_modification_date("").is_err());
    }
}
