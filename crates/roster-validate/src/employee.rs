//! # Employee Record
//!
//! The immutable value produced by a successful validation run. Instances
//! can only be built inside this crate, by the pipeline, so holding an
//! [`Employee`] means holding a record that passed every rule.
//!
//! `employee_id`, `name` and `date_of_birth` are frozen: there is no way to
//! change them after construction. `salary`, `department` and
//! `elected_benefits` can change, but only through
//! [`EmployeeValidator::amend`], which re-runs every rule and yields a new
//! record.
//!
//! `date_of_birth` and `salary` are left out of the `Debug` and `Display`
//! renderings. They remain available through their accessors and in the
//! serialized form.
//!
//! [`EmployeeValidator::amend`]: crate::EmployeeValidator::amend

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use roster_core::{Department, EmployeeId, Field};

/// A validated employee profile.
///
/// Serializes with internal field names. Has no `Deserialize` impl;
/// records enter the system through the validator.
#[derive(Clone, PartialEq, Serialize)]
pub struct Employee {
    employee_id: EmployeeId,
    name: String,
    email: String,
    date_of_birth: NaiveDate,
    salary: f64,
    department: Department,
    elected_benefits: bool,
}

impl Employee {
    pub(crate) fn new(
        employee_id: EmployeeId,
        name: String,
        email: String,
        date_of_birth: NaiveDate,
        salary: f64,
        department: Department,
        elected_benefits: bool,
    ) -> Self {
        Self {
            employee_id,
            name,
            email,
            date_of_birth,
            salary,
            department,
            elected_benefits,
        }
    }

    /// Unique identifier.
    pub fn employee_id(&self) -> EmployeeId {
        self.employee_id
    }

    /// Full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Work email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Date of birth.
    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// Annual compensation.
    pub fn salary(&self) -> f64 {
        self.salary
    }

    /// Department.
    pub fn department(&self) -> Department {
        self.department
    }

    /// Whether benefits were elected.
    pub fn elected_benefits(&self) -> bool {
        self.elected_benefits
    }

    /// Render the record as a raw input mapping, keyed by input key.
    ///
    /// Feeding the result back into the validator reproduces an equal
    /// record, provided the same rules still hold on the new reference date.
    pub fn to_input(&self) -> Map<String, Value> {
        Field::all()
            .iter()
            .map(|field| (field.input_key().to_string(), self.raw_value(*field)))
            .collect()
    }

    fn raw_value(&self, field: Field) -> Value {
        match field {
            Field::EmployeeId => Value::String(self.employee_id.to_string()),
            Field::Name => Value::String(self.name.clone()),
            Field::Email => Value::String(self.email.clone()),
            Field::DateOfBirth => Value::String(self.date_of_birth.format("%Y-%m-%d").to_string()),
            Field::Salary => Value::from(self.salary),
            Field::Department => Value::String(self.department.as_str().to_string()),
            Field::ElectedBenefits => Value::Bool(self.elected_benefits),
        }
    }
}

impl fmt::Debug for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Employee")
            .field("employee_id", &self.employee_id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("department", &self.department)
            .field("elected_benefits", &self.elected_benefits)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "employee_id={} name={:?} email={:?} department={} elected_benefits={}",
            self.employee_id, self.name, self.email, self.department, self.elected_benefits
        )
    }
}

/// Changes to the mutable fields of a record.
///
/// Frozen fields have no counterpart here, so they cannot be amended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Amendment {
    /// New salary.
    pub salary: Option<f64>,
    /// New department.
    pub department: Option<Department>,
    /// New benefits election.
    pub elected_benefits: Option<bool>,
}

impl Amendment {
    /// An amendment that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the new salary.
    pub fn salary(mut self, salary: f64) -> Self {
        self.salary = Some(salary);
        self
    }

    /// Set the new department.
    pub fn department(mut self, department: Department) -> Self {
        self.department = Some(department);
        self
    }

    /// Set the new benefits election.
    pub fn elected_benefits(mut self, elected: bool) -> Self {
        self.elected_benefits = Some(elected);
        self
    }

    /// Overlay the amendment onto an input mapping built by
    /// [`Employee::to_input`].
    pub(crate) fn apply_to(&self, input: &mut Map<String, Value>) {
        if let Some(salary) = self.salary {
            input.insert(Field::Salary.input_key().to_string(), Value::from(salary));
        }
        if let Some(department) = self.department {
            input.insert(
                Field::Department.input_key().to_string(),
                Value::String(department.as_str().to_string()),
            );
        }
        if let Some(elected) = self.elected_benefits {
            input.insert(
                Field::ElectedBenefits.input_key().to_string(),
                Value::Bool(elected),
            );
        }
    }
}
