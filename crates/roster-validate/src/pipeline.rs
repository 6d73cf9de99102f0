//! # Validation Pipeline
//!
//! Composes the three stages into a single call:
//!
//! ```text
//! raw mapping ──► FieldNormalizer ──► FieldValidator ──► RecordValidator ──► Employee
//!                      │                    │                   │
//!                      └──── coercion ──────┴── constraint ─────┴── business rule
//!                                     violations ──► Violations
//! ```
//!
//! Coercion and constraint violations from all fields are gathered
//! together. Business rules run only when that first phase produced no
//! violation at all.
//!
//! A run is a pure function of the input mapping, the reference date and
//! the configured rules. There is no shared mutable state, so one
//! [`EmployeeValidator`] can serve any number of threads.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use roster_core::{Department, Field, Violation, Violations};

use crate::constraint::ValidationContext;
use crate::employee::{Amendment, Employee};
use crate::fields::FieldValidator;
use crate::normalize::{describe, FieldNormalizer, NormalizedInput};
use crate::policy::ValidationPolicy;
use crate::record::{BusinessRule, RecordValidator};

/// The full two-phase validator.
#[derive(Debug)]
pub struct EmployeeValidator {
    policy: ValidationPolicy,
    normalizer: FieldNormalizer,
    fields: FieldValidator,
    record: RecordValidator,
}

impl EmployeeValidator {
    /// Build the standard rule set for `policy`.
    pub fn new(policy: ValidationPolicy) -> Self {
        let fields = FieldValidator::with_policy(&policy);
        Self {
            policy,
            normalizer: FieldNormalizer::new(),
            fields,
            record: RecordValidator::default(),
        }
    }

    /// Add a business rule, evaluated after the existing ones.
    pub fn with_rule(mut self, rule: impl BusinessRule + 'static) -> Self {
        self.record.push(rule);
        self
    }

    /// The policy the field rules were built from.
    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// The field-level constraint lists.
    pub fn field_validator(&self) -> &FieldValidator {
        &self.fields
    }

    /// Mutable access to the field-level constraint lists.
    pub fn field_validator_mut(&mut self) -> &mut FieldValidator {
        &mut self.fields
    }

    /// The record-level business rules.
    pub fn record_validator(&self) -> &RecordValidator {
        &self.record
    }

    /// Validate a raw input mapping against the rules, with ages measured
    /// on `today`.
    ///
    /// # Errors
    ///
    /// Returns every violation found. Field-level violations come first,
    /// in field declaration order; business-rule violations appear only
    /// when there are no field-level ones.
    pub fn validate(
        &self,
        raw: &Map<String, Value>,
        today: NaiveDate,
    ) -> Result<Employee, Violations> {
        let ctx = ValidationContext::new(today);

        let (input, mut violations) = self.normalizer.normalize(raw);
        violations.extend(self.fields.check(&input, &ctx));
        // Coercion and constraint failures on one field are mutually
        // exclusive, so ordering by field keeps each field's entries together.
        violations.sort_by_key(field_position);

        if !violations.is_empty() {
            return Err(reject(violations, "field"));
        }

        let employee = assemble(input).map_err(|v| reject(v, "field"))?;

        let violations = self.record.check(&employee);
        if !violations.is_empty() {
            return Err(reject(violations, "record"));
        }

        tracing::debug!(employee_id = %employee.employee_id(), "employee record accepted");
        Ok(employee)
    }

    /// Validate any JSON value. Non-object input is rejected with a single
    /// record-level coercion violation.
    ///
    /// # Errors
    ///
    /// Same as [`EmployeeValidator::validate`].
    pub fn validate_value(&self, raw: &Value, today: NaiveDate) -> Result<Employee, Violations> {
        match raw {
            Value::Object(map) => self.validate(map, today),
            other => Err(reject(
                vec![Violation::NotAnObject {
                    found: describe(other),
                }],
                "input",
            )),
        }
    }

    /// Run both phases again on an accepted record.
    ///
    /// # Errors
    ///
    /// Returns the violations if the record no longer satisfies the rules,
    /// for instance under a stricter policy.
    pub fn revalidate(&self, employee: &Employee, today: NaiveDate) -> Result<Employee, Violations> {
        self.validate(&employee.to_input(), today)
    }

    /// Apply changes to the mutable fields and validate the result.
    ///
    /// Frozen fields are carried over unchanged. The original record is
    /// untouched whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns the violations of the amended record.
    pub fn amend(
        &self,
        employee: &Employee,
        amendment: &Amendment,
        today: NaiveDate,
    ) -> Result<Employee, Violations> {
        let mut input = employee.to_input();
        amendment.apply_to(&mut input);
        self.validate(&input, today)
    }
}

impl Default for EmployeeValidator {
    fn default() -> Self {
        Self::new(ValidationPolicy::default())
    }
}

/// Validate a raw input mapping with the standard rules and default policy.
///
/// # Errors
///
/// See [`EmployeeValidator::validate`].
pub fn validate(raw: &Map<String, Value>, today: NaiveDate) -> Result<Employee, Violations> {
    EmployeeValidator::default().validate(raw, today)
}

fn field_position(v: &Violation) -> usize {
    Field::all()
        .iter()
        .position(|f| f.as_str() == v.field())
        .unwrap_or(Field::all().len())
}

fn reject(violations: Vec<Violation>, stage: &'static str) -> Violations {
    tracing::debug!(stage, count = violations.len(), "employee record rejected");
    Violations::new(violations)
}

/// Build the record from a fully coerced, constraint-clean input.
///
/// A field can still be empty, or the department text unparseable, when
/// the caller removed the default constraints; those cases are reported
/// instead of assumed away.
fn assemble(input: NormalizedInput) -> Result<Employee, Vec<Violation>> {
    let mut violations = Vec::new();

    let department = match input.department.as_deref().map(str::parse::<Department>) {
        Some(Ok(department)) => Some(department),
        Some(Err(e)) => {
            violations.push(Violation::Constraint {
                field: Field::Department,
                constraint: "one_of_departments",
                message: e.to_string(),
            });
            None
        }
        None => None,
    };

    let mut present = |value_missing: bool, field: Field| {
        if value_missing {
            violations.push(Violation::Missing { field });
        }
    };
    present(input.employee_id.is_none(), Field::EmployeeId);
    present(input.name.is_none(), Field::Name);
    present(input.email.is_none(), Field::Email);
    present(input.date_of_birth.is_none(), Field::DateOfBirth);
    present(input.salary.is_none(), Field::Salary);
    present(input.department.is_none(), Field::Department);
    present(input.elected_benefits.is_none(), Field::ElectedBenefits);

    match (
        input.employee_id,
        input.name,
        input.email,
        input.date_of_birth,
        input.salary,
        department,
        input.elected_benefits,
    ) {
        (
            Some(employee_id),
            Some(name),
            Some(email),
            Some(date_of_birth),
            Some(salary),
            Some(department),
            Some(elected_benefits),
        ) => Ok(Employee::new(
            employee_id,
            name,
            email,
            date_of_birth,
            salary,
            department,
            elected_benefits,
        )),
        _ => {
            violations.sort_by_key(field_position);
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::ViolationKind;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn raw(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            _ => panic!("test input must be an object"),
        }
    }

    fn base() -> Map<String, Value> {
        raw(json!({
            "name": "Chris DeTuma",
            "email": "cdetuma@company.com",
            "birth_date": "1998-04-02",
            "compensation": 100_000,
            "department": "IT",
            "elected_benefits": false,
        }))
    }

    #[test]
    fn test_accepts_valid_record() {
        let employee = validate(&base(), today()).unwrap();
        assert_eq!(employee.department(), Department::It);
        assert_eq!(employee.salary(), 100_000.0);
    }

    #[test]
    fn test_field_failures_suppress_business_rules() {
        let mut input = base();
        input.insert("elected_benefits".to_string(), json!(true));
        input.insert("name".to_string(), json!(""));
        let err = validate(&input, today()).unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(!err.has_kind(ViolationKind::BusinessRule));
    }

    #[test]
    fn test_coercion_and_constraint_violations_sorted_by_field() {
        let mut input = base();
        input.insert("compensation".to_string(), json!(-5));
        input.insert("email".to_string(), json!(7));
        input.insert("name".to_string(), json!(""));
        let err = validate(&input, today()).unwrap_err();
        let fields: Vec<&str> = err.iter().map(Violation::field).collect();
        assert_eq!(fields, ["name", "email", "salary"]);
        let kinds: Vec<ViolationKind> = err.iter().map(Violation::kind).collect();
        assert_eq!(
            kinds,
            [ViolationKind::Constraint, ViolationKind::Coercion, ViolationKind::Constraint]
        );
    }

    #[test]
    fn test_validate_value_rejects_non_objects() {
        let err = EmployeeValidator::default()
            .validate_value(&json!(["not", "a", "record"]), today())
            .unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.violations()[0].field(), "record");
        assert_eq!(err.violations()[0].kind(), ViolationKind::Coercion);
    }

    #[test]
    fn test_assemble_reports_unparseable_department_without_constraint() {
        let mut validator = EmployeeValidator::default();
        *validator.field_validator_mut() = FieldValidator::empty();
        let mut input = base();
        input.insert("department".to_string(), json!("MARKETING"));
        let err = validator.validate(&input, today()).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.violations()[0].field(), "department");
        assert!(err.violations()[0].message().contains("MARKETING"));
    }

    #[test]
    fn test_validator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EmployeeValidator>();
    }
}
