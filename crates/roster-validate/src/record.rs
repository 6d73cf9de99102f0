//! # Record Validator
//!
//! Third pipeline stage. Runs business rules that look at more than one
//! field. It only ever sees records whose fields all passed coercion and
//! their own constraints, so rules can rely on well-typed values.
//!
//! Every rule is evaluated and every failure reported; a failing rule does
//! not stop the ones after it.

use std::fmt;

use roster_core::{Department, Violation};

use crate::employee::Employee;

/// A cross-field check on a fully populated record.
///
/// Implementations must be pure: no I/O, no clock reads, no shared mutable
/// state. The `Send + Sync` bounds let a validator be shared across threads.
pub trait BusinessRule: Send + Sync {
    /// Stable identifier of the rule.
    fn name(&self) -> &'static str;

    /// Return `Err(message)` when the record breaks the rule.
    fn check(&self, employee: &Employee) -> Result<(), String>;
}

/// IT staff are contractors and cannot elect benefits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItContractorExclusion;

impl BusinessRule for ItContractorExclusion {
    fn name(&self) -> &'static str {
        "it_contractor_exclusion"
    }

    fn check(&self, employee: &Employee) -> Result<(), String> {
        if employee.department() == Department::It && employee.elected_benefits() {
            return Err("IT employees are contractors and don't qualify for benefits.".to_string());
        }
        Ok(())
    }
}

/// Ordered list of business rules.
pub struct RecordValidator {
    rules: Vec<Box<dyn BusinessRule>>,
}

impl RecordValidator {
    /// A validator with no rules.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule, evaluated after the existing ones.
    pub fn with_rule(mut self, rule: impl BusinessRule + 'static) -> Self {
        self.push(rule);
        self
    }

    /// Add a rule in place.
    pub fn push(&mut self, rule: impl BusinessRule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Evaluate every rule and return one violation per failure.
    pub fn check(&self, employee: &Employee) -> Vec<Violation> {
        self.rules
            .iter()
            .filter_map(|rule| {
                rule.check(employee)
                    .err()
                    .map(|message| Violation::BusinessRule {
                        rule: rule.name(),
                        message,
                    })
            })
            .collect()
    }
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::empty().with_rule(ItContractorExclusion)
    }
}

impl fmt::Debug for RecordValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordValidator")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use roster_core::EmployeeId;

    fn employee(department: Department, elected_benefits: bool, salary: f64) -> Employee {
        Employee::new(
            EmployeeId::new(),
            "Chris DeTuma".to_string(),
            "cdetuma@company.com".to_string(),
            NaiveDate::from_ymd_opt(1998, 4, 2).unwrap(),
            salary,
            department,
            elected_benefits,
        )
    }

    struct SalesSalaryFloor;

    impl BusinessRule for SalesSalaryFloor {
        fn name(&self) -> &'static str {
            "sales_salary_floor"
        }

        fn check(&self, employee: &Employee) -> Result<(), String> {
            if employee.department() == Department::Sales && employee.salary() < 30_000.0 {
                return Err("Sales salaries start at 30000.".to_string());
            }
            Ok(())
        }
    }

    struct NoBenefitsAboveCap;

    impl BusinessRule for NoBenefitsAboveCap {
        fn name(&self) -> &'static str {
            "benefits_salary_cap"
        }

        fn check(&self, employee: &Employee) -> Result<(), String> {
            if employee.elected_benefits() && employee.salary() > 200_000.0 {
                return Err("Benefits are capped at 200000 salary.".to_string());
            }
            Ok(())
        }
    }

    #[test]
    fn test_it_with_benefits_rejected() {
        let violations = RecordValidator::default().check(&employee(Department::It, true, 1.0));
        assert_eq!(
            violations,
            vec![Violation::BusinessRule {
                rule: "it_contractor_exclusion",
                message: "IT employees are contractors and don't qualify for benefits."
                    .to_string(),
            }]
        );
        assert_eq!(violations[0].field(), "record");
    }

    #[test]
    fn test_it_without_benefits_and_others_with_benefits_pass() {
        let validator = RecordValidator::default();
        assert!(validator.check(&employee(Department::It, false, 1.0)).is_empty());
        for department in [Department::Hr, Department::Sales, Department::Engineering] {
            assert!(validator.check(&employee(department, true, 1.0)).is_empty());
        }
    }

    #[test]
    fn test_all_rule_failures_collected() {
        let validator = RecordValidator::default()
            .with_rule(SalesSalaryFloor)
            .with_rule(NoBenefitsAboveCap);
        let violations = validator.check(&employee(Department::It, true, 250_000.0));
        let rules: Vec<&str> = violations
            .iter()
            .map(|v| match v {
                Violation::BusinessRule { rule, .. } => *rule,
                other => panic!("unexpected {other}"),
            })
            .collect();
        assert_eq!(rules, ["it_contractor_exclusion", "benefits_salary_cap"]);
    }

    #[test]
    fn test_rule_names_in_order() {
        let validator = RecordValidator::default().with_rule(SalesSalaryFloor);
        assert_eq!(
            validator.rule_names(),
            ["it_contractor_exclusion", "sales_salary_floor"]
        );
        assert!(format!("{validator:?}").contains("sales_salary_floor"));
        assert!(RecordValidator::empty().rule_names().is_empty());
    }
}
