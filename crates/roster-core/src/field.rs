//! # Record Fields and Input Aliases
//!
//! `Field` names the seven attributes of an employee record. It is the
//! single place that knows how a field is addressed from outside
//! (`input_key`), whether it can change after construction (`is_frozen`),
//! and whether it is left out of human-readable renderings (`is_redacted`).
//!
//! Two fields are addressable only through an alias: `date_of_birth` is
//! supplied as `birth_date` and `salary` as `compensation`. Their internal
//! names are not accepted as input keys.

use serde::{Deserialize, Serialize};

/// An attribute of the employee record, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Unique identifier, generated when absent.
    EmployeeId,
    /// Full name.
    Name,
    /// Work email address.
    Email,
    /// Calendar date of birth.
    DateOfBirth,
    /// Annual compensation.
    Salary,
    /// Organisational department.
    Department,
    /// Whether the employee elected benefits.
    ElectedBenefits,
}

impl Field {
    /// Returns all fields in declaration order.
    ///
    /// Normalization and field validation visit fields in this order, so
    /// field-level violations are reported in this order too.
    pub fn all() -> &'static [Field] {
        &[
            Self::EmployeeId,
            Self::Name,
            Self::Email,
            Self::DateOfBirth,
            Self::Salary,
            Self::Department,
            Self::ElectedBenefits,
        ]
    }

    /// Internal field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmployeeId => "employee_id",
            Self::Name => "name",
            Self::Email => "email",
            Self::DateOfBirth => "date_of_birth",
            Self::Salary => "salary",
            Self::Department => "department",
            Self::ElectedBenefits => "elected_benefits",
        }
    }

    /// Key under which this field is supplied in raw input.
    pub fn input_key(&self) -> &'static str {
        match self {
            Self::DateOfBirth => "birth_date",
            Self::Salary => "compensation",
            other => other.as_str(),
        }
    }

    /// Resolve a raw input key to a field.
    ///
    /// Returns `None` for unknown keys and for the internal names of
    /// aliased fields (`date_of_birth`, `salary`).
    pub fn from_input_key(key: &str) -> Option<Field> {
        Self::all().iter().copied().find(|f| f.input_key() == key)
    }

    /// True for fields that are set once at construction and never change.
    pub fn is_frozen(&self) -> bool {
        matches!(self, Self::EmployeeId | Self::Name | Self::DateOfBirth)
    }

    /// True for fields excluded from human-readable renderings.
    pub fn is_redacted(&self) -> bool {
        matches!(self, Self::DateOfBirth | Self::Salary)
    }

    /// True when the field has an alias distinct from its internal name.
    pub fn is_aliased(&self) -> bool {
        self.input_key() != self.as_str()
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
