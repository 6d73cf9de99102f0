//! # roster-cli — Command-Line Front End
//!
//! Provides the `roster` binary. File loading and result rendering live
//! here, and so does the reference date; the validation engine itself
//! never touches the filesystem or the clock.
//!
//! ```bash
//! roster validate employee.json
//! roster validate employee.yaml --today 2024-01-01 --format json
//! roster -vv validate employee.json --policy policy.yaml
//! ```
//!
//! ## Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | record accepted |
//! | 1 | record rejected |
//! | 2 | operational error (unreadable file, bad policy, bad date) |

pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Exit code for an accepted record.
pub const EXIT_ACCEPTED: u8 = 0;
/// Exit code for a rejected record.
pub const EXIT_REJECTED: u8 = 1;
/// Exit code for failures unrelated to the record's content.
pub const EXIT_OPERATIONAL: u8 = 2;

/// Read a JSON or YAML document. `.json` files are parsed as JSON,
/// anything else as YAML.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON from {}", path.display()))
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML from {}", path.display()))
    }
}
