//! PhishGuard Domain Model
//!
//! Core types for URL verdicts, scan history, and the demo fallback engine
//! used when the prediction backend is unreachable. This crate has no browser
//! dependencies and is fully testable on a native target.

pub mod analytics;
pub mod fallback;
pub mod format;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("confidence out of range: {0}")]
    Confidence(f64),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Classification of a single URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Safe,
    Phishing,
}

impl Verdict {
    pub fn is_safe(&self) -> bool {
        matches!(self, Verdict::Safe)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Safe => write!(f, "Safe"),
            Verdict::Phishing => write!(f, "Phishing"),
        }
    }
}

/// A verdict plus its confidence, as returned by the backend or synthesized
/// by the fallback generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub result: Verdict,
    pub confidence: f64,
}

impl Prediction {
    /// Check the confidence invariant: finite and non-negative.
    ///
    /// The backend contract leaves the upper bound unspecified, so values
    /// above 100 pass here and are capped by [`Prediction::clamped`] instead.
    pub fn validate(&self) -> DomainResult<()> {
        if self.confidence.is_finite() && self.confidence >= 0.0 {
            Ok(())
        } else {
            Err(DomainError::Confidence(self.confidence))
        }
    }

    /// Cap the confidence at 100 without touching in-range values.
    pub fn clamped(mut self) -> Self {
        if self.confidence > 100.0 {
            self.confidence = 100.0;
        }
        self
    }
}

/// A past scan as recorded by the backend.
///
/// Read-only on the client: entries arrive newest-first and are displayed in
/// that order. The timestamp is carried verbatim as the ISO-8601 string the
/// backend sent and only parsed at display time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: String,
    pub result: Verdict,
    pub confidence: f64,
    pub timestamp: String,
}

/// Where a settled view state came from.
///
/// `Fallback` carries client-synthesized placeholder data and is rendered
/// with a visible notice; `Unavailable` means the backend failed and the
/// fallback path was disabled.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Backend(T),
    Fallback(T),
    Unavailable,
}

impl<T> Outcome<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Backend(v) | Outcome::Fallback(v) => Some(v),
            Outcome::Unavailable => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback(_))
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Outcome::Unavailable)
    }
}

/// Trim a submitted URL, rejecting empty input.
///
/// This is the only input validation the scanner performs; anything
/// non-empty goes to the backend as-is.
pub fn normalize_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_wire_format() {
        assert_eq!(serde_json::to_string(&Verdict::Safe).unwrap(), "\"Safe\"");
        assert_eq!(
            serde_json::from_str::<Verdict>("\"Phishing\"").unwrap(),
            Verdict::Phishing
        );
        assert!(serde_json::from_str::<Verdict>("\"Malware\"").is_err());
    }

    #[test]
    fn test_prediction_decodes_backend_payload() {
        let p: Prediction =
            serde_json::from_str(r#"{"result":"Phishing","confidence":92.3}"#).unwrap();
        assert_eq!(p.result, Verdict::Phishing);
        assert_eq!(p.confidence, 92.3);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_prediction_validate_rejects_non_finite() {
        let nan = Prediction {
            result: Verdict::Safe,
            confidence: f64::NAN,
        };
        assert!(nan.validate().is_err());

        let negative = Prediction {
            result: Verdict::Safe,
            confidence: -1.0,
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_prediction_clamped() {
        let overshoot = Prediction {
            result: Verdict::Safe,
            confidence: 120.5,
        };
        assert_eq!(overshoot.clamped().confidence, 100.0);

        let in_range = Prediction {
            result: Verdict::Phishing,
            confidence: 92.3,
        };
        assert_eq!(in_range.clamped().confidence, 92.3);
    }

    #[test]
    fn test_outcome_accessors() {
        assert_eq!(Outcome::Backend(1).value(), Some(&1));
        assert_eq!(Outcome::Fallback(2).value(), Some(&2));
        assert_eq!(Outcome::<i32>::Unavailable.value(), None);
        assert!(Outcome::Fallback(0).is_fallback());
        assert!(!Outcome::Backend(0).is_fallback());
        assert!(Outcome::<i32>::Unavailable.is_unavailable());
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url(""), None);
        assert_eq!(normalize_url("   \t"), None);
        assert_eq!(
            normalize_url("  https://example.com  "),
            Some("https://example.com".to_string())
        );
    }
}
