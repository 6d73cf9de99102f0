//! # Constraint Descriptors
//!
//! A constraint is a named predicate over one field's typed value, paired
//! with the message reported when it fails. Field rules are lists of these
//! descriptors rather than annotations on the record type, so they can be
//! listed, tested and extended independently of [`Employee`].
//!
//! Predicates receive a [`ValidationContext`] carrying the reference date.
//! Everything else a predicate needs (domain, minimum age) is captured when
//! the descriptor is built from a [`ValidationPolicy`].
//!
//! [`Employee`]: crate::Employee
//! [`ValidationPolicy`]: crate::ValidationPolicy

use std::fmt;
use std::sync::{Arc, LazyLock};

use chrono::NaiveDate;
use regex::Regex;

use roster_core::{meets_minimum_age, Department, Field, Violation};

/// General email shape: a local part, `@`, and a dotted domain, no spaces.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email shape regex is valid")
});

/// Per-call inputs shared by every predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    /// The date ages are measured against.
    pub today: NaiveDate,
}

impl ValidationContext {
    /// Context for a validation run on the given reference date.
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

/// A named single-field rule: predicate plus failure message.
pub struct Constraint<T: ?Sized> {
    name: &'static str,
    message: String,
    predicate: Arc<dyn Fn(&T, &ValidationContext) -> bool + Send + Sync>,
}

impl<T: ?Sized> Constraint<T> {
    /// Build a descriptor. The predicate returns `true` when the value is
    /// acceptable.
    pub fn new<F>(name: &'static str, message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&T, &ValidationContext) -> bool + Send + Sync + 'static,
    {
        Self {
            name,
            message: message.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Stable identifier of the rule.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Message reported when the rule fails.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// True when `value` satisfies the rule.
    pub fn check(&self, value: &T, ctx: &ValidationContext) -> bool {
        (self.predicate)(value, ctx)
    }

    /// The violation reported when this rule fails on `field`.
    pub fn violation(&self, field: Field) -> Violation {
        Violation::Constraint {
            field,
            constraint: self.name,
            message: self.message.clone(),
        }
    }
}

impl<T: ?Sized> Clone for Constraint<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            message: self.message.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Constraint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Text must contain at least one character.
pub fn non_empty() -> Constraint<str> {
    Constraint::new(
        "non_empty",
        "String should have at least 1 character",
        |value: &str, _: &ValidationContext| !value.is_empty(),
    )
}

/// Text must look like an email address. No DNS or mailbox check.
pub fn email_shape() -> Constraint<str> {
    Constraint::new(
        "email_shape",
        "value is not a valid email address",
        |value: &str, _: &ValidationContext| EMAIL_SHAPE.is_match(value),
    )
}

/// Address must be `<local>@<domain>` for the organisation's domain.
///
/// The domain comparison is ASCII case-insensitive.
pub fn organization_domain(domain: &str) -> Constraint<str> {
    let domain = domain.to_ascii_lowercase();
    let message = format!("email must be an address at the {domain} domain");
    Constraint::new(
        "organization_domain",
        message,
        move |value: &str, _: &ValidationContext| {
            value
                .rsplit_once('@')
                .is_some_and(|(local, d)| !local.is_empty() && d.eq_ignore_ascii_case(&domain))
        },
    )
}

/// Age on the reference date must be at least `min_years`, with years of
/// `days_per_year` days.
pub fn minimum_age(min_years: u32, days_per_year: u32) -> Constraint<NaiveDate> {
    Constraint::new(
        "minimum_age",
        format!("Employees must be at least {min_years} years old."),
        move |date_of_birth: &NaiveDate, ctx: &ValidationContext| {
            meets_minimum_age(*date_of_birth, ctx.today, min_years, days_per_year)
        },
    )
}

/// Number must be strictly greater than zero.
pub fn positive() -> Constraint<f64> {
    Constraint::new(
        "positive",
        "Input should be greater than 0",
        |value: &f64, _: &ValidationContext| *value > 0.0,
    )
}

/// Text must name one of the departments.
pub fn one_of_departments() -> Constraint<str> {
    let allowed: Vec<String> = Department::all()
        .iter()
        .map(|d| format!("'{d}'"))
        .collect();
    Constraint::new(
        "one_of_departments",
        format!("Input should be one of {}", allowed.join(", ")),
        |value: &str, _: &ValidationContext| value.parse::<Department>().is_ok(),
    )
}
