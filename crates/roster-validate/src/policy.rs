//! # Validation Policy
//!
//! The tunable parameters of the built-in rule set. The defaults reproduce
//! the organisation's standing rules: addresses at `company.com`, a minimum
//! age of 18, and 365-day years for age arithmetic.
//!
//! Policies are plain serde documents and can be loaded from YAML or JSON.
//! Omitted keys fall back to the defaults; unknown keys are rejected so a
//! misspelt setting cannot silently fall back.
//!
//! ```yaml
//! organization_domain: company.com
//! minimum_age_years: 18
//! days_per_year: 365
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use roster_core::PolicyError;

/// Parameters of the built-in field constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationPolicy {
    /// Domain every employee email must belong to, without the `@`.
    pub organization_domain: String,
    /// Minimum age, in years, on the reference date.
    pub minimum_age_years: u32,
    /// Length of a year, in days, for age arithmetic.
    pub days_per_year: u32,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            organization_domain: "company.com".to_string(),
            minimum_age_years: 18,
            days_per_year: 365,
        }
    }
}

impl ValidationPolicy {
    /// Parse and check a policy from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::Parse`] for malformed YAML or unknown keys and
    /// [`PolicyError::Invalid`] for unusable values.
    pub fn from_yaml_str(s: &str) -> Result<Self, PolicyError> {
        let policy: Self =
            serde_yaml::from_str(s).map_err(|e| PolicyError::Parse(e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Parse and check a policy from JSON text.
    ///
    /// # Errors
    ///
    /// Same as [`ValidationPolicy::from_yaml_str`].
    pub fn from_json_str(s: &str) -> Result<Self, PolicyError> {
        let policy: Self =
            serde_json::from_str(s).map_err(|e| PolicyError::Parse(e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Load a policy file. `.json` files are parsed as JSON, anything else
    /// as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::Read`] if the file cannot be read, otherwise
    /// the errors of the matching `from_*_str` constructor.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| PolicyError::Read {
            path: path.display().to_string(),
            source,
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_yaml_str(&content),
        }
    }

    /// Check that the policy values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::Invalid`] if the domain is empty, contains `@`
    /// or whitespace, is not made of at least two dot-separated labels, or
    /// if `days_per_year` is zero.
    pub fn validate(&self) -> Result<(), PolicyError> {
        let domain = &self.organization_domain;
        if domain.is_empty() {
            return Err(PolicyError::Invalid(
                "organization_domain must be non-empty".to_string(),
            ));
        }
        if domain.contains('@') || domain.chars().any(char::is_whitespace) {
            return Err(PolicyError::Invalid(format!(
                "organization_domain must be a bare domain name, got {domain:?}"
            )));
        }
        // Same domain shape the email pattern accepts: two or more
        // non-empty dot-separated labels.
        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
            return Err(PolicyError::Invalid(format!(
                "organization_domain must be a dotted domain name such as company.com, got {domain:?}"
            )));
        }
        if self.days_per_year == 0 {
            return Err(PolicyError::Invalid(
                "days_per_year must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = ValidationPolicy::default();
        assert_eq!(policy.organization_domain, "company.com");
        assert_eq!(policy.minimum_age_years, 18);
        assert_eq!(policy.days_per_year, 365);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_yaml_partial_document_uses_defaults() {
        let policy = ValidationPolicy::from_yaml_str("minimum_age_years: 21\n").unwrap();
        assert_eq!(policy.minimum_age_years, 21);
        assert_eq!(policy.organization_domain, "company.com");
    }

    #[test]
    fn test_json_document() {
        let policy =
            ValidationPolicy::from_json_str(r#"{"organization_domain": "example.org"}"#).unwrap();
        assert_eq!(policy.organization_domain, "example.org");
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = ValidationPolicy::from_yaml_str("minimum_age: 21\n").unwrap_err();
        assert!(matches!(err, PolicyError::Parse(_)), "got {err}");
    }

    #[test]
    fn test_invalid_values_rejected() {
        for doc in [
            "organization_domain: ''\n",
            "organization_domain: '@company.com'\n",
            "organization_domain: 'company .com'\n",
            "days_per_year: 0\n",
            "organization_domain: localhost\n",
            "organization_domain: company.\n",
            "organization_domain: .com\n",
            "organization_domain: company..com\n",
        ] {
            let err = ValidationPolicy::from_yaml_str(doc).unwrap_err();
            assert!(matches!(err, PolicyError::Invalid(_)), "{doc}: got {err}");
        }
    }

    #[test]
    fn test_accepted_domains_admit_addresses() {
        use crate::constraint::{email_shape, organization_domain, ValidationContext};

        let ctx = ValidationContext::new(chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        for domain in ["company.com", "corp.example", "mail.example.co.uk"] {
            let policy = ValidationPolicy::from_yaml_str(&format!("organization_domain: {domain}\n"))
                .unwrap();
            let address = format!("someone@{}", policy.organization_domain);
            assert!(email_shape().check(&address, &ctx), "{address}");
            assert!(
                organization_domain(&policy.organization_domain).check(&address, &ctx),
                "{address}"
            );
        }
    }

    #[test]
    fn test_dotless_domain_rejected_at_load() {
        let err = ValidationPolicy::from_yaml_str("organization_domain: localhost\n").unwrap_err();
        assert!(matches!(err, PolicyError::Invalid(_)), "got {err}");
        assert!(err.to_string().contains("localhost"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = ValidationPolicy::from_path("/nonexistent/roster-policy.yaml").unwrap_err();
        assert!(matches!(err, PolicyError::Read { .. }));
        assert!(err.to_string().contains("roster-policy.yaml"));
    }

    #[test]
    fn test_from_path_reads_yaml_and_json() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();

        let yaml = dir.join("policy.yaml");
        std::fs::write(&yaml, "organization_domain: corp.example\n").unwrap();
        assert_eq!(
            ValidationPolicy::from_path(&yaml).unwrap().organization_domain,
            "corp.example"
        );

        let json = dir.join("policy.json");
        std::fs::write(&json, r#"{"days_per_year": 360}"#).unwrap();
        assert_eq!(ValidationPolicy::from_path(&json).unwrap().days_per_year, 360);
    }
}
