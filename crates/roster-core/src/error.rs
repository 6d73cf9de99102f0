//! # Error Types — Violation Taxonomy
//!
//! Validation never fails fast. Each problem found in a record becomes a
//! [`Violation`], and a rejected record carries all of them in a
//! [`Violations`] set.
//!
//! ## Taxonomy
//!
//! - **Coercion**: a raw value could not be converted to the field's type,
//!   a required key was absent, or the input was not a mapping at all.
//!   Raised by the field normalizer.
//! - **Constraint**: a typed value broke a single-field rule (emptiness,
//!   pattern, range, age, closed-set membership). Raised by the field
//!   validator.
//! - **BusinessRule**: a fully populated record broke a rule spanning
//!   several fields. Raised by the record validator and reported against
//!   the pseudo-field `"record"`.
//!
//! Configuration problems are not violations; they surface as
//! [`PolicyError`] before any record is looked at.

use std::fmt;

use thiserror::Error;

use crate::field::Field;

/// Field label used for violations that concern the whole record.
pub const RECORD_LABEL: &str = "record";

/// The stage of the pipeline that detected a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// Raw value could not be converted to its semantic type.
    Coercion,
    /// Typed value broke a single-field constraint.
    Constraint,
    /// Record broke a cross-field business rule.
    BusinessRule,
}

impl ViolationKind {
    /// Stable identifier used in machine-readable output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coercion => "coercion_error",
            Self::Constraint => "constraint_error",
            Self::BusinessRule => "business_rule_error",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single problem found while validating a record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Violation {
    /// A required key was absent and the field has no default.
    #[error("{field}: field required")]
    Missing {
        /// The missing field.
        field: Field,
    },

    /// A raw value could not be converted to the field's type.
    #[error("{field}: expected {expected}, got {found}")]
    Coercion {
        /// The field whose value was rejected.
        field: Field,
        /// Description of the accepted type.
        expected: &'static str,
        /// Description of the value that was supplied.
        found: String,
    },

    /// A typed value broke a single-field constraint.
    #[error("{field}: {message}")]
    Constraint {
        /// The field whose value was rejected.
        field: Field,
        /// Name of the constraint descriptor that failed.
        constraint: &'static str,
        /// Human-readable reason.
        message: String,
    },

    /// The record broke a cross-field business rule.
    #[error("record: {message}")]
    BusinessRule {
        /// Name of the rule that failed.
        rule: &'static str,
        /// Human-readable reason.
        message: String,
    },

    /// The input was not a mapping of field names to values.
    #[error("record: expected a mapping of field names to values, got {found}")]
    NotAnObject {
        /// Description of the value that was supplied.
        found: String,
    },
}

impl Violation {
    /// The pipeline stage that produced this violation.
    pub fn kind(&self) -> ViolationKind {
        match self {
            Self::Missing { .. } | Self::Coercion { .. } | Self::NotAnObject { .. } => {
                ViolationKind::Coercion
            }
            Self::Constraint { .. } => ViolationKind::Constraint,
            Self::BusinessRule { .. } => ViolationKind::BusinessRule,
        }
    }

    /// Internal name of the failing field, or `"record"` for record-level
    /// violations.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::Coercion { field, .. }
            | Self::Constraint { field, .. } => field.as_str(),
            Self::BusinessRule { .. } | Self::NotAnObject { .. } => RECORD_LABEL,
        }
    }

    /// Human-readable reason, without the field prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Missing { .. } => "field required".to_string(),
            Self::Coercion {
                expected, found, ..
            } => format!("expected {expected}, got {found}"),
            Self::Constraint { message, .. } | Self::BusinessRule { message, .. } => {
                message.clone()
            }
            Self::NotAnObject { found } => {
                format!("expected a mapping of field names to values, got {found}")
            }
        }
    }
}

/// The ordered set of violations attached to a rejected record.
///
/// Field-level violations appear in field declaration order; record-level
/// violations (present only when every field passed) follow in rule order.
#[derive(Debug, Clone, PartialEq)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Wrap a list of violations.
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Iterate over the violations in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Violations reported against the given field label.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.field() == field)
    }

    /// True if at least one violation has the given kind.
    pub fn has_kind(&self, kind: ViolationKind) -> bool {
        self.violations.iter().any(|v| v.kind() == kind)
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl From<Vec<Violation>> for Violations {
    fn from(violations: Vec<Violation>) -> Self {
        Self::new(violations)
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "employee record rejected with {} violation(s)",
            self.violations.len()
        )?;
        for v in &self.violations {
            writeln!(f)?;
            write!(f, "  {v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

/// Department text outside the closed set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown department {0:?}; expected one of HR, SALES, IT, ENGINEERING")]
pub struct DepartmentParseError(pub String);

/// Date text that is not an ISO `YYYY-MM-DD` calendar date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid calendar date {0:?} (expected YYYY-MM-DD)")]
pub struct DateParseError(pub String);

/// Errors loading or checking a validation policy.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// The policy file could not be read.
    #[error("cannot read policy file '{path}': {source}")]
    Read {
        /// Path that was attempted.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The policy document is not valid YAML or JSON for the policy shape.
    #[error("invalid policy document: {0}")]
    Parse(String),

    /// The policy parsed but holds unusable values.
    #[error("invalid policy: {0}")]
    Invalid(String),
}
