//! # Validate Subcommand
//!
//! Loads one employee record, validates it on a reference date, and prints
//! the accepted record or every violation found.
//!
//! The reference date defaults to the local calendar date. This is the only
//! place in the workspace that reads the clock.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use serde_json::{json, Value};

use roster_core::{parse_iso_date, Violations};
use roster_validate::{Employee, EmployeeValidator, ValidationPolicy};

use crate::{load_document, EXIT_ACCEPTED, EXIT_REJECTED};

/// Arguments for the `roster validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Record to validate (.json, or YAML for any other extension).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Reference date for age rules. Defaults to today's local date.
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<String>,

    /// Validation policy file (.json, or YAML for any other extension).
    #[arg(long, value_name = "FILE")]
    pub policy: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line for the record, or one line per violation.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Execute the validate subcommand.
///
/// Returns the exit code: 0 when the record is accepted, 1 when it is
/// rejected. Operational failures are returned as errors.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let today = resolve_today(args.today.as_deref())?;

    let policy = match &args.policy {
        Some(path) => ValidationPolicy::from_path(path)
            .with_context(|| format!("failed to load policy {}", path.display()))?,
        None => ValidationPolicy::default(),
    };
    tracing::info!(
        organization_domain = %policy.organization_domain,
        minimum_age_years = policy.minimum_age_years,
        %today,
        "validating employee record"
    );

    let raw = load_document(&args.path)?;
    let validator = EmployeeValidator::new(policy);

    match validator.validate_value(&raw, today) {
        Ok(employee) => {
            println!("{}", render_accepted(&employee, args.format)?);
            Ok(EXIT_ACCEPTED)
        }
        Err(violations) => {
            println!("{}", render_rejected(&violations, args.format)?);
            Ok(EXIT_REJECTED)
        }
    }
}

fn resolve_today(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(text) => parse_iso_date(text).context("invalid --today argument"),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Render an accepted record.
pub fn render_accepted(employee: &Employee, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("ACCEPTED {employee}")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(employee).context("failed to serialize employee record")
        }
    }
}

/// Render a rejection.
pub fn render_rejected(violations: &Violations, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = format!("REJECTED: {} violation(s)", violations.len());
            for v in violations {
                out.push_str(&format!("\n  FAIL: {}: {} ({})", v.field(), v.message(), v.kind()));
            }
            Ok(out)
        }
        OutputFormat::Json => serde_json::to_string_pretty(&violations_json(violations))
            .context("failed to serialize violations"),
    }
}

/// `{"errors": [{"kind", "field", "message"}, ...]}`
pub fn violations_json(violations: &Violations) -> Value {
    let errors: Vec<Value> = violations
        .iter()
        .map(|v| {
            json!({
                "kind": v.kind().as_str(),
                "field": v.field(),
                "message": v.message(),
            })
        })
        .collect();
    json!({ "errors": errors })
}
