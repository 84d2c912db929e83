//! Numeric parsing for source counts.

/// Removes thousands separators (`,`) and surrounding whitespace.
pub fn strip_thousands(value: &str) -> String {
    value.trim().replace(',', "")
}

/// Parses a string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Coerces a count cell to an integer.
///
/// Thousands separators are removed first. Decimal values are truncated
/// toward zero. Blank, non-numeric and non-finite values become `0`.
///
/// # Examples
///
/// ```
/// use songnorm_common::coerce_count;
///
/// assert_eq!(coerce_count("2,000"), 2000);
/// assert_eq!(coerce_count("12.0"), 12);
/// assert_eq!(coerce_count("BPM110KeyAModeMajor"), 0);
/// assert_eq!(coerce_count(""), 0);
/// ```
pub fn coerce_count(value: &str) -> i64 {
    let cleaned = strip_thousands(value);
    if let Some(parsed) = parse_i64(&cleaned) {
        return parsed;
    }
    match cleaned.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => parsed.trunc() as i64,
        _ => 0,
    }
}
