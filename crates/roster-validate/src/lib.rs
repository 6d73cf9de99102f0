//! # roster-validate — Employee Record Validation
//!
//! Turns an untrusted mapping of input keys to JSON values into an
//! immutable, fully validated [`Employee`], or into the complete list of
//! reasons it was rejected.
//!
//! ## Pipeline
//!
//! 1. **Normalize** ([`normalize`]): resolve the `birth_date` and
//!    `compensation` aliases, coerce raw values to typed ones, and generate
//!    an `employee_id` when none is given.
//! 2. **Field constraints** ([`fields`]): evaluate each field's constraint
//!    descriptors. Coercion and constraint failures from every field are
//!    collected together.
//! 3. **Business rules** ([`record`]): cross-field checks on the assembled
//!    record. Run only when phases 1 and 2 found nothing.
//!
//! [`EmployeeValidator`] in [`pipeline`] composes the three.
//!
//! ## Reference date
//!
//! Age rules need a "today". Every entry point takes it as an argument so
//! results are reproducible; the library never reads the clock.
//!
//! ```
//! use chrono::NaiveDate;
//! use serde_json::json;
//!
//! let raw = json!({
//!     "name": "Chris DeTuma",
//!     "email": "cdetuma@company.com",
//!     "birth_date": "1998-04-02",
//!     "compensation": 100000,
//!     "department": "IT",
//!     "elected_benefits": false,
//! });
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let employee = roster_validate::EmployeeValidator::default()
//!     .validate_value(&raw, today)
//!     .unwrap();
//! assert_eq!(employee.name(), "Chris DeTuma");
//! ```

pub mod constraint;
pub mod employee;
pub mod fields;
pub mod normalize;
pub mod pipeline;
pub mod policy;
pub mod record;

pub use constraint::{Constraint, ValidationContext};
pub use employee::{Amendment, Employee};
pub use fields::{ConstraintDescriptor, FieldValidator};
pub use normalize::{FieldNormalizer, NormalizedInput};
pub use pipeline::{validate, EmployeeValidator};
pub use policy::ValidationPolicy;
pub use record::{BusinessRule, ItContractorExclusion, RecordValidator};

pub use roster_core::{Department, EmployeeId, Field, Violation, ViolationKind, Violations};
