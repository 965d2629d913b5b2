//! Error types for parameter validation and transport failures.

use thiserror::Error;

/// Single unmet field constraint.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Violation {
    /// Name of the offending field.
    pub field: String,
    /// Human-readable description of the unmet constraint.
    pub constraint: String,
}

impl Violation {
    /// Violation for a required field absent from the input.
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            constraint: "missing required field".into(),
        }
    }

    /// Violation for a present field that failed its predicate.
    pub fn unmet(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            constraint: constraint.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.constraint)
    }
}

/// Errors returned by the public contact operations.
///
/// `InvalidParams` is raised locally, before any network traffic. Transport
/// failures pass through unchanged in the `Transport` variant.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid params: {} violation(s)", violations.len())]
    InvalidParams { violations: Vec<Violation> },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    /// Per-field detail behind an `InvalidParams`, empty for transport errors.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Error::InvalidParams { violations } => violations,
            Error::Transport(_) => &[],
        }
    }
}

impl From<Vec<Violation>> for Error {
    fn from(violations: Vec<Violation>) -> Self {
        Error::InvalidParams { violations }
    }
}

/// Errors raised by [`Transport`](crate::Transport) implementations.
#[derive(Debug, Error)]
pub enum TransportError {
    #[cfg(feature = "remote")]
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status {status}")]
    Status { status: u16, body: String },

    #[error("failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_display() {
        let violation = Violation::unmet("limit", "must be an integer >= 1");
        assert_eq!(violation.to_string(), "limit: must be an integer >= 1");
    }

    #[test]
    fn missing_violation_message() {
        let violation = Violation::missing("access_token");
        assert_eq!(
            violation.to_string(),
            "access_token: missing required field"
        );
    }

    #[test]
    fn invalid_params_counts_violations() {
        let err = Error::from(vec![
            Violation::missing("id"),
            Violation::unmet("emails", "every element must be a valid email address"),
        ]);
        assert_eq!(err.to_string(), "invalid params: 2 violation(s)");
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn transport_error_has_no_violations() {
        let err = Error::Transport(TransportError::Status {
            status: 500,
            body: "boom".into(),
        });
        assert!(err.violations().is_empty());
        assert_eq!(err.to_string(), "unexpected status 500");
    }
}
