//! # Department — Closed Category Set
//!
//! Defines the `Department` enum with the four organisational categories an
//! employee can belong to. This is the ONE definition used across the
//! workspace. Every `match` on `Department` must be exhaustive.
//!
//! External values are the upper-case names (`"HR"`, `"SALES"`, `"IT"`,
//! `"ENGINEERING"`). Parsing is exact and case-sensitive.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DepartmentParseError;

/// Organisational department of an employee.
///
/// | Variant | External value | Notes |
/// |---------|----------------|-------|
/// | `Hr` | `HR` | |
/// | `Sales` | `SALES` | |
/// | `It` | `IT` | Staffed by contractors; not eligible for benefits |
/// | `Engineering` | `ENGINEERING` | |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Department {
    /// Human resources.
    Hr,
    /// Sales.
    Sales,
    /// Information technology.
    It,
    /// Engineering.
    Engineering,
}

/// Total number of departments.
pub const DEPARTMENT_COUNT: usize = 4;

impl Department {
    /// Returns all departments in canonical order.
    pub fn all() -> &'static [Department] {
        &[Self::Hr, Self::Sales, Self::It, Self::Engineering]
    }

    /// Returns the external string value for this department.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hr => "HR",
            Self::Sales => "SALES",
            Self::It => "IT",
            Self::Engineering => "ENGINEERING",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = DepartmentParseError;

    /// Parse a department from its external value.
    ///
    /// Accepts the same strings produced by [`Department::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HR" => Ok(Self::Hr),
            "SALES" => Ok(Self::Sales),
            "IT" => Ok(Self::It),
            "ENGINEERING" => Ok(Self::Engineering),
            other => Err(DepartmentParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_departments_count() {
        assert_eq!(Department::all().len(), DEPARTMENT_COUNT);
    }

    #[test]
    fn test_as_str_roundtrip() {
        for department in Department::all() {
            let parsed: Department = department.as_str().parse().unwrap();
            assert_eq!(*department, parsed);
        }
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!("it".parse::<Department>().is_err());
        assert!("Sales".parse::<Department>().is_err());
        assert!("".parse::<Department>().is_err());
        assert!("MARKETING".parse::<Department>().is_err());
    }

    #[test]
    fn test_parse_error_names_allowed_values() {
        let err = "MARKETING".parse::<Department>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("MARKETING"));
        assert!(msg.contains("HR, SALES, IT, ENGINEERING"));
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for department in Department::all() {
            let json = serde_json::to_string(department).unwrap();
            assert_eq!(json, format!("\"{}\"", department.as_str()));
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        for department in Department::all() {
            assert_eq!(department.to_string(), department.as_str());
        }
    }
}
