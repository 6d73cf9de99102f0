//! # Field Normalizer
//!
//! First pipeline stage. Maps raw input keys onto record fields, converts
//! raw JSON values to typed values, and generates an `employee_id` when none
//! is supplied.
//!
//! Every field is visited, in declaration order, whatever happened to the
//! previous one. A field that cannot be coerced is left empty in the
//! [`NormalizedInput`] and reported as a coercion violation.
//!
//! ## Coercion table
//!
//! | Field | Input key | Accepted raw values |
//! |-------|-----------|---------------------|
//! | `employee_id` | `employee_id` | UUID string; generated when absent |
//! | `name` | `name` | string |
//! | `email` | `email` | string; domain part lower-cased |
//! | `date_of_birth` | `birth_date` | `YYYY-MM-DD` string |
//! | `salary` | `compensation` | finite number, or numeric string |
//! | `department` | `department` | string (membership checked later) |
//! | `elected_benefits` | `elected_benefits` | boolean, `0`/`1` (whole floats too), or a boolean word |

use chrono::NaiveDate;
use serde_json::{Map, Value};

use roster_core::{parse_iso_date, EmployeeId, Field, Violation};

/// Field values after coercion, before any constraint is applied.
///
/// `None` means the field was absent or could not be coerced; the matching
/// violation is returned alongside.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedInput {
    /// Supplied or generated identifier.
    pub employee_id: Option<EmployeeId>,
    /// Name text.
    pub name: Option<String>,
    /// Email text, domain part lower-cased.
    pub email: Option<String>,
    /// Parsed date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Finite salary amount.
    pub salary: Option<f64>,
    /// Department text, not yet checked against the closed set.
    pub department: Option<String>,
    /// Benefits election.
    pub elected_benefits: Option<bool>,
}

/// Converts raw input mappings into [`NormalizedInput`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldNormalizer;

impl FieldNormalizer {
    /// Create a normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Resolve aliases, coerce values, and fill defaults.
    ///
    /// Returns the coerced values together with every coercion violation
    /// found, in field declaration order. Keys that do not address a field
    /// are ignored.
    pub fn normalize(&self, raw: &Map<String, Value>) -> (NormalizedInput, Vec<Violation>) {
        for key in raw.keys() {
            if Field::from_input_key(key).is_none() {
                tracing::debug!(key = %key, "ignoring input key that addresses no field");
            }
        }

        let mut input = NormalizedInput::default();
        let mut violations = Vec::new();

        for field in Field::all() {
            let Some(value) = raw.get(field.input_key()) else {
                if *field == Field::EmployeeId {
                    input.employee_id = Some(EmployeeId::new());
                } else {
                    violations.push(Violation::Missing { field: *field });
                }
                continue;
            };

            let result = match field {
                Field::EmployeeId => coerce_employee_id(value).map(|v| input.employee_id = Some(v)),
                Field::Name => coerce_string(*field, value).map(|v| input.name = Some(v)),
                Field::Email => coerce_email(value).map(|v| input.email = Some(v)),
                Field::DateOfBirth => coerce_date(value).map(|v| input.date_of_birth = Some(v)),
                Field::Salary => coerce_amount(value).map(|v| input.salary = Some(v)),
                Field::Department => {
                    coerce_string(*field, value).map(|v| input.department = Some(v))
                }
                Field::ElectedBenefits => {
                    coerce_bool(value).map(|v| input.elected_benefits = Some(v))
                }
            };

            if let Err(violation) = result {
                violations.push(violation);
            }
        }

        (input, violations)
    }
}

/// Short description of a raw value for coercion messages.
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}

fn coercion(field: Field, expected: &'static str, value: &Value) -> Violation {
    Violation::Coercion {
        field,
        expected,
        found: describe(value),
    }
}

fn coerce_employee_id(value: &Value) -> Result<EmployeeId, Violation> {
    value
        .as_str()
        .and_then(|s| EmployeeId::parse(s).ok())
        .ok_or_else(|| coercion(Field::EmployeeId, "a UUID string", value))
}

fn coerce_string(field: Field, value: &Value) -> Result<String, Violation> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(coercion(field, "a string", other)),
    }
}

fn coerce_email(value: &Value) -> Result<String, Violation> {
    let text = coerce_string(Field::Email, value)?;
    // Mail domains are case-insensitive; the local part is left alone.
    Ok(match text.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_ascii_lowercase()),
        None => text,
    })
}

fn coerce_date(value: &Value) -> Result<NaiveDate, Violation> {
    value
        .as_str()
        .and_then(|s| parse_iso_date(s).ok())
        .ok_or_else(|| coercion(Field::DateOfBirth, "an ISO 8601 date (YYYY-MM-DD)", value))
}

fn coerce_amount(value: &Value) -> Result<f64, Violation> {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    amount
        .filter(|a| a.is_finite())
        .ok_or_else(|| coercion(Field::Salary, "a finite number", value))
}

fn coerce_bool(value: &Value) -> Result<bool, Violation> {
    let flag = match value {
        Value::Bool(b) => Some(*b),
        // Integers and whole floats, 0 or 1 only.
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 => Some(false),
            Some(f) if f == 1.0 => Some(true),
            _ => None,
        },
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "on" | "1" => Some(true),
            "false" | "f" | "no" | "n" | "off" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    };
    flag.ok_or_else(|| coercion(Field::ElectedBenefits, "a boolean", value))
}
