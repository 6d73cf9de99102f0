//! # Field Validator
//!
//! Second pipeline stage. Applies each field's constraint list to the value
//! produced by the normalizer. Every constraint of every present field is
//! evaluated; nothing short-circuits.
//!
//! Fields that failed coercion are skipped here: their coercion violation
//! already explains the problem.

use chrono::NaiveDate;

use roster_core::{EmployeeId, Field, Violation};

use crate::constraint::{self, Constraint, ValidationContext};
use crate::normalize::NormalizedInput;
use crate::policy::ValidationPolicy;

/// Inspectable summary of one constraint attached to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintDescriptor {
    /// Field the constraint applies to.
    pub field: Field,
    /// Constraint name.
    pub name: &'static str,
    /// Failure message.
    pub message: String,
}

/// Per-field constraint lists.
///
/// Every field has a list. The standard lists for `employee_id` and
/// `elected_benefits` are empty: any value that survives coercion is
/// acceptable unless a caller pushes a constraint.
#[derive(Debug, Clone)]
pub struct FieldValidator {
    employee_id: Vec<Constraint<EmployeeId>>,
    name: Vec<Constraint<str>>,
    email: Vec<Constraint<str>>,
    date_of_birth: Vec<Constraint<NaiveDate>>,
    salary: Vec<Constraint<f64>>,
    department: Vec<Constraint<str>>,
    elected_benefits: Vec<Constraint<bool>>,
}

impl FieldValidator {
    /// The standard rule set, parameterised by `policy`.
    pub fn with_policy(policy: &ValidationPolicy) -> Self {
        Self {
            employee_id: Vec::new(),
            name: vec![constraint::non_empty()],
            email: vec![
                constraint::email_shape(),
                constraint::organization_domain(&policy.organization_domain),
            ],
            date_of_birth: vec![constraint::minimum_age(
                policy.minimum_age_years,
                policy.days_per_year,
            )],
            salary: vec![constraint::positive()],
            department: vec![constraint::one_of_departments()],
            elected_benefits: Vec::new(),
        }
    }

    /// A validator with no constraints at all.
    pub fn empty() -> Self {
        Self {
            employee_id: Vec::new(),
            name: Vec::new(),
            email: Vec::new(),
            date_of_birth: Vec::new(),
            salary: Vec::new(),
            department: Vec::new(),
            elected_benefits: Vec::new(),
        }
    }

    /// Append a constraint to `employee_id`.
    pub fn push_employee_id(&mut self, c: Constraint<EmployeeId>) -> &mut Self {
        self.employee_id.push(c);
        self
    }

    /// Append a constraint to `name`.
    pub fn push_name(&mut self, c: Constraint<str>) -> &mut Self {
        self.name.push(c);
        self
    }

    /// Append a constraint to `email`.
    pub fn push_email(&mut self, c: Constraint<str>) -> &mut Self {
        self.email.push(c);
        self
    }

    /// Append a constraint to `date_of_birth`.
    pub fn push_date_of_birth(&mut self, c: Constraint<NaiveDate>) -> &mut Self {
        self.date_of_birth.push(c);
        self
    }

    /// Append a constraint to `salary`.
    pub fn push_salary(&mut self, c: Constraint<f64>) -> &mut Self {
        self.salary.push(c);
        self
    }

    /// Append a constraint to `department`.
    pub fn push_department(&mut self, c: Constraint<str>) -> &mut Self {
        self.department.push(c);
        self
    }

    /// Append a constraint to `elected_benefits`.
    pub fn push_elected_benefits(&mut self, c: Constraint<bool>) -> &mut Self {
        self.elected_benefits.push(c);
        self
    }

    /// Every constraint, grouped by field in declaration order.
    pub fn describe(&self) -> Vec<ConstraintDescriptor> {
        fn entries<T: ?Sized>(
            field: Field,
            list: &[Constraint<T>],
        ) -> impl Iterator<Item = ConstraintDescriptor> + '_ {
            list.iter().map(move |c| ConstraintDescriptor {
                field,
                name: c.name(),
                message: c.message().to_string(),
            })
        }

        entries(Field::EmployeeId, &self.employee_id)
            .chain(entries(Field::Name, &self.name))
            .chain(entries(Field::Email, &self.email))
            .chain(entries(Field::DateOfBirth, &self.date_of_birth))
            .chain(entries(Field::Salary, &self.salary))
            .chain(entries(Field::Department, &self.department))
            .chain(entries(Field::ElectedBenefits, &self.elected_benefits))
            .collect()
    }

    /// Evaluate all constraints against the coerced values.
    ///
    /// Returns one violation per failed constraint, in field declaration
    /// order and, within a field, in constraint order.
    pub fn check(&self, input: &NormalizedInput, ctx: &ValidationContext) -> Vec<Violation> {
        let mut violations = Vec::new();
        apply(
            Field::EmployeeId,
            input.employee_id.as_ref(),
            &self.employee_id,
            ctx,
            &mut violations,
        );
        apply(Field::Name, input.name.as_deref(), &self.name, ctx, &mut violations);
        apply(Field::Email, input.email.as_deref(), &self.email, ctx, &mut violations);
        apply(
            Field::DateOfBirth,
            input.date_of_birth.as_ref(),
            &self.date_of_birth,
            ctx,
            &mut violations,
        );
        apply(Field::Salary, input.salary.as_ref(), &self.salary, ctx, &mut violations);
        apply(
            Field::Department,
            input.department.as_deref(),
            &self.department,
            ctx,
            &mut violations,
        );
        apply(
            Field::ElectedBenefits,
            input.elected_benefits.as_ref(),
            &self.elected_benefits,
            ctx,
            &mut violations,
        );
        violations
    }
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::with_policy(&ValidationPolicy::default())
    }
}

fn apply<T: ?Sized>(
    field: Field,
    value: Option<&T>,
    constraints: &[Constraint<T>],
    ctx: &ValidationContext,
    out: &mut Vec<Violation>,
) {
    let Some(value) = value else {
        return;
    };
    out.extend(
        constraints
            .iter()
            .filter(|c| !c.check(value, ctx))
            .map(|c| c.violation(field)),
    );
}
