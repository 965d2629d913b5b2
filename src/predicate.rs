//! Field predicates over dynamic JSON values.
//!
//! Each predicate is a pure, total function over `serde_json::Value`: it
//! never panics and never inspects anything beyond the value it is given.
//! Conjunction happens structurally (one predicate per field, `ArrayOf` for
//! element-wise checks) instead of through chained validator objects.

use serde_json::Value;

/// Value-shape predicate attached to a schema field.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// String with at least one character.
    StringNonEmpty,
    /// Integer (floats rejected) with an inclusive lower bound.
    IntMin(i64),
    /// Boolean.
    Bool,
    /// Syntactically valid email address.
    Email,
    /// ISO-8601 / RFC 3339 date-time, e.g. `2004-02-12T15:19:21+00:00`.
    DateTime,
    /// Array whose every element satisfies the inner predicate.
    ArrayOf(Box<Predicate>),
    /// Any array, elements unchecked.
    Array,
}

impl Predicate {
    /// Apply the predicate to a value.
    pub fn check(&self, value: &Value) -> bool {
        match self {
            Predicate::StringNonEmpty => value.as_str().is_some_and(|s| !s.is_empty()),
            Predicate::IntMin(min) => value.as_i64().is_some_and(|n| n >= *min),
            Predicate::Bool => value.is_boolean(),
            Predicate::Email => value.as_str().is_some_and(is_email),
            Predicate::DateTime => value
                .as_str()
                .is_some_and(|s| chrono::DateTime::parse_from_rfc3339(s).is_ok()),
            Predicate::ArrayOf(inner) => value
                .as_array()
                .is_some_and(|items| items.iter().all(|item| inner.check(item))),
            Predicate::Array => value.is_array(),
        }
    }

    /// Human-readable constraint description used in violations.
    pub fn constraint(&self) -> String {
        match self {
            Predicate::StringNonEmpty => "must be a non-empty string".into(),
            Predicate::IntMin(min) => format!("must be an integer >= {min}"),
            Predicate::Bool => "must be a boolean".into(),
            Predicate::Email => "must be a valid email address".into(),
            Predicate::DateTime => "must be an ISO-8601 date-time".into(),
            Predicate::ArrayOf(inner) => format!("every element {}", inner.constraint()),
            Predicate::Array => "must be an array".into(),
        }
    }
}

/// Syntactic email check: one `@`, non-empty local part, dotted domain.
fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if s.contains(char::is_whitespace) {
        return false;
    }
    domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}
