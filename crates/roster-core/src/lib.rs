//! # roster-core — Foundational Types for Employee Validation
//!
//! This crate defines the primitives the validation engine is built on.
//! Every other crate in the workspace depends on `roster-core`; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype identifiers.** `EmployeeId` wraps a UUID. No bare strings
//!    for identifiers.
//!
//! 2. **Single `Department` enum.** One definition, four variants, exhaustive
//!    `match` everywhere. Adding a department forces every consumer to handle it.
//!
//! 3. **Single `Field` enum.** Internal names, external input keys, frozen
//!    and redacted flags all live on one type, so aliasing cannot drift
//!    between the normalizer and the record renderer.
//!
//! 4. **Explicit reference date.** Age arithmetic takes "today" as an
//!    argument. Nothing in this crate reads the clock.
//!
//! 5. **Structured violations.** Every failure carries its kind
//!    (coercion, constraint, business rule), the field it concerns, and a
//!    human-readable message.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `roster-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod department;
pub mod error;
pub mod field;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use department::{Department, DEPARTMENT_COUNT};
pub use error::{
    DateParseError, DepartmentParseError, PolicyError, Violation, ViolationKind, Violations,
    RECORD_LABEL,
};
pub use field::Field;
pub use identity::EmployeeId;
pub use temporal::{age_in_days, meets_minimum_age, parse_iso_date};
