//! Output emission
//!
//! Hands the derived values back to the pipeline by appending `key=value`
//! records to the file named by `GITHUB_OUTPUT`. Local runs without that
//! variable print the workflow-command form instead so the values are still
//! visible.

use std::env;
use std::fs::OpenOptions;
use std::io::Write;

use crate::error::{Result, VersionSuffixError};
use crate::resolver::Resolution;

/// The six values handed back to the pipeline, one set per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutputs {
    pub version_full: String,
    pub version_number: String,
    pub version_suffix: String,
    pub version_run_number: String,
    pub version_latest_commit: String,
    pub version_version_only: String,
}

impl ActionOutputs {
    /// Assemble the output set from the base version and the resolution
    pub fn new(base_version: &str, resolution: &Resolution) -> Self {
        ActionOutputs {
            version_full: resolution.full_version(base_version),
            version_number: base_version.to_string(),
            version_suffix: resolution.suffix.clone(),
            version_run_number: resolution.run_number.to_string(),
            version_latest_commit: resolution.commit_sha_short.clone(),
            version_version_only: resolution.version_only.to_string(),
        }
    }

    /// Outputs in emission order
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("version_full", self.version_full.as_str()),
            ("version_number", self.version_number.as_str()),
            ("version_suffix", self.version_suffix.as_str()),
            ("version_run_number", self.version_run_number.as_str()),
            ("version_latest_commit", self.version_latest_commit.as_str()),
            ("version_version_only", self.version_version_only.as_str()),
        ]
    }

    /// Publish the outputs to the pipeline.
    ///
    /// # Returns
    /// * `Ok(())` - All six outputs written
    /// * `Err` - If the output file cannot be opened or written
    pub fn emit(&self) -> Result<()> {
        match env::var("GITHUB_OUTPUT") {
            Ok(path) => self.append_to_output_file(&path),
            Err(_) => {
                self.print_workflow_commands();
                Ok(())
            }
        }
    }

    fn append_to_output_file(&self, path: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                VersionSuffixError::output(format!("cannot open output file '{}': {}", path, e))
            })?;

        for (key, value) in self.entries() {
            if value.contains('\n') {
                // Multiline values need the heredoc form
                let delimiter = "EOF";
                writeln!(file, "{}<<{}", key, delimiter)?;
                writeln!(file, "{}", value)?;
                writeln!(file, "{}", delimiter)?;
            } else {
                writeln!(file, "{}={}", key, value)?;
            }
        }

        Ok(())
    }

    fn print_workflow_commands(&self) {
        for (key, value) in self.entries() {
            let escaped = value
                .replace('%', "%25")
                .replace('\n', "%0A")
                .replace('\r', "%0D");
            println!("::set-output name={}::{}", key, escaped);
        }
    }
}
