//! Display formatting
//!
//! Small helpers shared by the table and result views. Formatting is locale
//! independent so the same strings appear everywhere.

use chrono::{DateTime, Utc};

/// Format a confidence percentage for display, without the `%` sign.
///
/// Values are clamped into [0, 100] and trailing zeros are dropped, so
/// `92.3` renders as `92.3` and `98.0` as `98`.
pub fn confidence(value: f64) -> String {
    let clamped = value.clamp(0.0, 100.0);
    let fixed = format!("{clamped:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Format an ISO-8601 timestamp as e.g. `Feb 13, 10:30` (UTC).
///
/// Anything that fails to parse is shown raw rather than dropped.
pub fn timestamp(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt.with_timezone(&Utc).format("%b %d, %H:%M").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_keeps_meaningful_decimals() {
        assert_eq!(confidence(92.3), "92.3");
        assert_eq!(confidence(95.7), "95.7");
        assert_eq!(confidence(98.25), "98.25");
    }

    #[test]
    fn test_confidence_drops_trailing_zeros() {
        assert_eq!(confidence(98.0), "98");
        assert_eq!(confidence(70.10), "70.1");
    }

    #[test]
    fn test_confidence_clamps() {
        assert_eq!(confidence(120.0), "100");
        assert_eq!(confidence(-3.0), "0");
    }

    #[test]
    fn test_timestamp_formats_rfc3339() {
        assert_eq!(timestamp("2026-02-13T10:30:00Z"), "Feb 13, 10:30");
        assert_eq!(timestamp("2026-02-13T10:05:00+00:00"), "Feb 13, 10:05");
    }

    #[test]
    fn test_timestamp_passes_through_garbage() {
        assert_eq!(timestamp("yesterday"), "yesterday");
    }
}
