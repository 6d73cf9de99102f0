//! # Identity Newtypes
//!
//! `EmployeeId` wraps a UUID so that an employee identifier cannot be
//! confused with any other string or UUID in a caller's code.
//!
//! Generated identifiers are random v4 UUIDs. Uniqueness is best-effort:
//! the 128-bit space makes collisions negligible, and nothing here checks
//! for them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    /// Generate a new random employee identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an employee identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Parse an identifier from UUID text (hyphenated or simple hex form).
    ///
    /// # Errors
    ///
    /// Returns the underlying [`uuid::Error`] if the text is not a UUID.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_distinct() {
        let a = EmployeeId::new();
        let b = EmployeeId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_parse_hyphenated_and_simple() {
        let hyphenated = EmployeeId::parse("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        let simple = EmployeeId::parse("67e5504410b1426f9247bb680e5fe0c8").unwrap();
        assert_eq!(hyphenated, simple);
        assert_eq!(hyphenated.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(EmployeeId::parse("not-a-uuid").is_err());
        assert!(EmployeeId::parse("").is_err());
    }

    #[test]
    fn test_serde_is_plain_uuid_string() {
        let id = EmployeeId::parse("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"67e55044-10b1-426f-9247-bb680e5fe0c8\"");
        let back: EmployeeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
