//! Date formatting for production item cards and details
//!
//! The backend sends dates in several shapes (RFC 3339, ISO date-time without
//! offset, plain `YYYY-MM-DD`, parser output such as `Jan 15, 2024`). The
//! calendar date written in the value is what gets displayed; no time-zone
//! conversion is applied.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Shown when a date is missing
pub const DATE_MISSING: &str = "N/A";
/// Shown when a date is present but cannot be parsed
pub const DATE_INVALID: &str = "Invalid Date";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `Jan 5, 2025`
    Short,
    /// `Mon, Jan 6, 2025`
    Long,
}

impl DateStyle {
    fn pattern(&self) -> &'static str {
        match self {
            DateStyle::Short => "%b %-d, %Y",
            DateStyle::Long => "%a, %b %-d, %Y",
        }
    }
}

const DATETIME_PATTERNS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
// `%B` also accepts the three-letter abbreviation when parsing
const DATE_PATTERNS: [&str; 3] = ["%Y-%m-%d", "%B %d, %Y", "%d.%m.%Y"];

/// Extract the calendar date from any supported representation
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    for pattern in DATETIME_PATTERNS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return Some(dt.date());
        }
    }
    DATE_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDate::parse_from_str(value, pattern).ok())
}

/// Format an optional date value.
///
/// Missing, `null` or blank values render as `N/A`; anything unparseable
/// renders as `Invalid Date`.
pub fn format_date(value: Option<&str>, style: DateStyle) -> String {
    let value = match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return DATE_MISSING.to_string(),
    };
    match parse_calendar_date(value) {
        Some(date) => date.format(style.pattern()).to_string(),
        None => {
            log::warn!("Unparseable date value: {}", value);
            DATE_INVALID.to_string()
        }
    }
}

/// `Jan 5, 2025`, used on summary cards
pub fn format_short_date(value: Option<&str>) -> String {
    format_date(value, DateStyle::Short)
}

/// `Mon, Jan 6, 2025`, used in the detail view
pub fn format_long_date(value: Option<&str>) -> String {
    format_date(value, DateStyle::Long)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_short_date() {
        assert_eq!(format_short_date(Some("2025-01-05")), "Jan 5, 2025");
        assert_eq!(format_short_date(Some("2024-01-15")), "Jan 15, 2024");
        assert_eq!(format_short_date(Some("2024-01-10T08:30:00")), "Jan 10, 2024");
        assert_eq!(
            format_short_date(Some("2024-01-10T23:30:00.123456")),
            "Jan 10, 2024"
        );
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date(Some("2025-01-06")), "Mon, Jan 6, 2025");
        assert_eq!(
            format_long_date(Some("2024-03-15T14:02:26Z")),
            "Fri, Mar 15, 2024"
        );
    }

    #[test]
    fn test_offset_keeps_written_date() {
        assert_eq!(
            format_short_date(Some("2024-03-15T01:00:00+05:00")),
            "Mar 15, 2024"
        );
    }

    #[test]
    fn test_parser_output_dates() {
        assert_eq!(format_short_date(Some("Jan 20, 2024")), "Jan 20, 2024");
        assert_eq!(format_short_date(Some("February 1, 2024")), "Feb 1, 2024");
        assert_eq!(
            format_long_date(Some("September 30, 2024")),
            "Mon, Sep 30, 2024"
        );
        assert_eq!(format_short_date(Some("15.01.2024")), "Jan 15, 2024");
    }

    #[test]
    fn test_missing_dates() {
        assert_eq!(format_short_date(None), "N/A");
        assert_eq!(format_long_date(Some("")), "N/A");
        assert_eq!(format_long_date(Some("   ")), "N/A");
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(format_short_date(Some("soon")), "Invalid Date");
        assert_eq!(format_long_date(Some("2024-13-45")), "Invalid Date");
    }
}
