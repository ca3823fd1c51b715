//! SQLite helper utilities for type conversion
//!
//! SQLite has no native timestamp or boolean type. Timestamps are stored as
//! ISO8601 TEXT and booleans as 0/1 INTEGER; these helpers convert between
//! those representations and the Rust types used on the wire.

use anyhow::{Result, anyhow};
use chrono::{DateTime, SecondsFormat, Utc};

// ============================================================================
// Timestamp Helpers (stored as ISO8601 TEXT in SQLite)
// ============================================================================

/// Convert a chrono DateTime to the ISO8601 string written to the store
#[inline]
pub fn datetime_to_str(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parse an ISO8601 string to DateTime
#[inline]
pub fn str_to_datetime(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            // Try parsing SQLite's datetime() format: "YYYY-MM-DD HH:MM:SS"
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .map(|ndt| ndt.and_utc())
                .map_err(|e| anyhow!("Invalid datetime '{}': {}", s, e))
        })
}

// ============================================================================
// Boolean Helpers (SQLite uses 0/1 integers)
// ============================================================================

/// Convert bool to SQLite integer (0 or 1)
#[inline]
pub fn bool_to_int(b: bool) -> i32 {
    if b { 1 } else { 0 }
}

/// Convert SQLite integer to bool
#[inline]
pub fn int_to_bool(i: i32) -> bool {
    i != 0
}

// ============================================================================
// Query Building Helpers
// ============================================================================

/// Comma separated positional placeholders, e.g. `?, ?, ?` for 3
pub fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    #[test]
    fn test_datetime_roundtrip() {
        let dt = Utc.with_ymd_and_hms(2021, 3, 1, 0, 22, 51).unwrap();
        let s = datetime_to_str(dt);
        assert_eq!(s, "2021-03-01T00:22:51Z");
        assert_eq!(str_to_datetime(&s).unwrap(), dt);
    }

    #[test]
    fn test_datetime_roundtrip_keeps_subseconds() {
        let dt = Utc::now();
        let parsed = str_to_datetime(&datetime_to_str(dt)).unwrap();
        assert_eq!(dt, parsed);
    }

    #[test]
    fn test_sqlite_datetime_format() {
        let s = "2024-01-15 10:30:45";
        let parsed = str_to_datetime(s).unwrap();
        assert_eq!(parsed.year(), 2024);
        assert_eq!(parsed.month(), 1);
        assert_eq!(parsed.day(), 15);
    }

    #[test]
    fn test_invalid_datetime() {
        let err = str_to_datetime("not a time").unwrap_err();
        assert!(err.to_string().contains("not a time"));
    }

    #[test]
    fn test_bool_conversion() {
        assert_eq!(bool_to_int(true), 1);
        assert_eq!(bool_to_int(false), 0);
        assert!(int_to_bool(1));
        assert!(int_to_bool(42)); // Any non-zero is true
        assert!(!int_to_bool(0));
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders(1), "?");
        assert_eq!(placeholders(3), "?, ?, ?");
    }
}
