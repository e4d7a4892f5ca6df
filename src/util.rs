// Utility helpers for parsing and basic statistics.
//
// This module centralizes all the "dirty" CSV/timestamp handling so the
// rest of the code can assume clean, typed values.
use chrono::NaiveDateTime;
use num_format::{Locale, ToFormattedString};

/// Timestamp format used by the order-history export,
/// e.g. `11:38 PM, September 10 2024`.
const PLACED_AT_FORMAT: &str = "%I:%M %p, %B %d %Y";

/// Parse an `Order Placed At` value while being forgiving about the
/// whitespace issues common in CSV exports.
///
/// - Accepts `Option<&str>` so callers can pass through optional fields.
/// - Trims whitespace.
/// - Returns `None` for anything that does not match the export format.
pub fn parse_timestamp_safe(s: Option<&str>) -> Option<NaiveDateTime> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(s, PLACED_AT_FORMAT).ok()
}

/// Trim a string-valued field, treating empty and whitespace-only values
/// as missing.
pub fn nonempty(s: Option<&str>) -> Option<String> {
    let s = s?.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

pub fn average(v: &[f64]) -> f64 {
    // Standard arithmetic mean; returns 0 for an empty slice to avoid NaNs.
    if v.is_empty() {
        return 0.0;
    }
    let sum: f64 = v.iter().copied().sum();
    sum / v.len() as f64
}

pub fn format_number(n: f64, decimals: usize) -> String {
    // Format a floating-point value with:
    // - a fixed number of decimal places, and
    // - locale-aware thousands separators (e.g., `1,234,567.89`).
    let neg = n.is_sign_negative();
    let abs_n = n.abs();
    // First, format to a plain fixed-decimal string like `1234567.89`.
    let s = format!("{:.*}", decimals, abs_n);
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();
    // Use `num-format` to insert commas into the integer portion.
    let int_val: i64 = int_part.parse().unwrap_or(0);
    let mut res = int_val.to_formatted_string(&Locale::en);
    if let Some(frac) = frac_part {
        if decimals > 0 {
            res.push('.');
            res.push_str(frac);
        }
    } else if decimals > 0 {
        res.push('.');
        res.push_str(&"0".repeat(decimals));
    }
    if neg {
        format!("-{}", res)
    } else {
        res
    }
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` for integer-like values. This is used
    // for counts in console messages (e.g., `9,855 rows loaded`).
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn parses_export_timestamps() {
        let ts = parse_timestamp_safe(Some("11:38 PM, September 10 2024")).unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2024, 9, 10).unwrap());
        assert_eq!(ts.hour(), 23);
        assert_eq!(ts.minute(), 38);
    }

    #[test]
    fn rejects_garbage_timestamps() {
        assert!(parse_timestamp_safe(None).is_none());
        assert!(parse_timestamp_safe(Some("")).is_none());
        assert!(parse_timestamp_safe(Some("   ")).is_none());
        assert!(parse_timestamp_safe(Some("2024-09-10 23:38")).is_none());
        assert!(parse_timestamp_safe(Some("25:00 PM, September 10 2024")).is_none());
    }

    #[test]
    fn nonempty_trims_and_drops_blanks() {
        assert_eq!(nonempty(Some("  C123 ")), Some("C123".to_string()));
        assert_eq!(nonempty(Some("   ")), None);
        assert_eq!(nonempty(None), None);
    }

    #[test]
    fn format_int_groups_thousands() {
        assert_eq!(format_int(9855i64), "9,855");
        assert_eq!(format_number(12.5, 2), "12.50");
    }
}
