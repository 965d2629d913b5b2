//! Field schemas and the validation engine.
//!
//! A [`Schema`] is an ordered list of field descriptors. Validation walks the
//! schema once, collecting every violation before reporting, so callers can
//! assert on the complete set. Fields present in the input but absent from
//! the schema are ignored, not rejected: payloads stay forward-compatible
//! with fields this crate does not know about yet.

use serde_json::{Map, Value};

use crate::error::Violation;
use crate::predicate::Predicate;

/// Loosely-typed input map accepted by the public operations.
pub type Params = Map<String, Value>;

/// One field descriptor: name, requiredness, and the value predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: &'static str,
    required: bool,
    check: Predicate,
}

impl Field {
    /// Field that must be present and satisfy `check`.
    pub fn required(name: &'static str, check: Predicate) -> Self {
        Self {
            name,
            required: true,
            check,
        }
    }

    /// Field that may be absent; when present it must satisfy `check`.
    pub fn optional(name: &'static str, check: Predicate) -> Self {
        Self {
            name,
            required: false,
            check,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Ordered set of field descriptors for one operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    /// Build a schema from descriptors. Field names must be unique.
    pub fn new(fields: Vec<Field>) -> Self {
        debug_assert!(
            {
                let names: std::collections::HashSet<_> =
                    fields.iter().map(Field::name).collect();
                names.len() == fields.len()
            },
            "field names must be unique within a schema"
        );
        Self { fields }
    }

    /// Extend the schema with one more field, preserving order.
    pub fn with(mut self, field: Field) -> Self {
        self.fields.push(field);
        Self::new(self.fields)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

/// Validate an input map against a schema.
///
/// Collects all violations instead of failing fast. The input is never
/// mutated and no I/O happens here.
///
/// # Errors
///
/// Returns the full list of violations: one `missing required field` per
/// absent required field, one constraint violation per present field whose
/// predicate fails.
pub fn validate(schema: &Schema, input: &Params) -> Result<(), Vec<Violation>> {
    let mut violations = Vec::new();

    for field in schema.fields() {
        match input.get(field.name) {
            None if field.required => violations.push(Violation::missing(field.name)),
            None => {}
            Some(value) => {
                if !field.check.check(value) {
                    violations.push(Violation::unmet(field.name, field.check.constraint()));
                }
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
