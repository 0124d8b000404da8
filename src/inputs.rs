//! Action input retrieval
//!
//! The runner exposes each declared input as an `INPUT_<NAME>` environment
//! variable. Values are trimmed; empty means "not supplied".

use std::env;

use crate::domain::parse_bool_token;
use crate::error::Result;

/// Inputs supplied through the pipeline's parameter store
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionInputs {
    /// Print inputs and build context before resolving
    pub debug: bool,
    /// Base version number the suffix is appended to
    pub version: String,
    /// Raw branch-override records, one per line
    pub branch_overrides: Vec<String>,
}

impl ActionInputs {
    /// Read all inputs from the environment.
    ///
    /// # Returns
    /// * `Ok(ActionInputs)` - Inputs with defaults applied where unset
    /// * `Err` - If the debug flag is not a recognized boolean spelling
    pub fn from_env() -> Result<Self> {
        Ok(ActionInputs {
            debug: input_bool("debug")?,
            version: input_string("version", ""),
            branch_overrides: input_multiline("branch_overrides"),
        })
    }
}

fn input_raw(key: &str) -> Option<String> {
    env::var(format!("INPUT_{}", key.to_uppercase())).ok()
}

/// Trimmed input value, or the default when unset or empty
pub fn input_string(key: &str, default: &str) -> String {
    match input_raw(key) {
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                default.to_string()
            } else {
                trimmed.to_string()
            }
        }
        None => default.to_string(),
    }
}

/// Boolean input in the YAML core-schema spellings; unset or empty means false
pub fn input_bool(key: &str) -> Result<bool> {
    match input_raw(key) {
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Ok(false)
            } else {
                parse_bool_token(trimmed)
            }
        }
        None => Ok(false),
    }
}

/// Multiline input split into trimmed, non-empty lines
pub fn input_multiline(key: &str) -> Vec<String> {
    match input_raw(key) {
        Some(raw) => raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}
