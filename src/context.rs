//! Build context retrieval
//!
//! Reads the event metadata the runner exposes to every job: the triggering
//! ref, the commit hash, and the run number. The ref comes from the JSON
//! event payload when one is present, since that is the ref that actually
//! triggered the run; `GITHUB_REF` covers runs without a payload file.

use serde::Deserialize;
use std::env;
use std::fs;

use crate::error::{Result, VersionSuffixError};

/// Length of the short commit hash kept in version fragments
const SHORT_SHA_LEN: usize = 7;

/// The event payload fields this tool cares about
#[derive(Debug, Deserialize)]
struct EventPayload {
    #[serde(default, rename = "ref")]
    git_ref: Option<String>,
}

/// Build metadata handed to the resolver, read once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    /// The raw triggering ref, e.g. `refs/heads/feature/login`
    pub ref_full: String,
    /// Branch name derived from the ref
    pub branch_name: String,
    /// Full commit hash
    pub commit_sha: String,
    /// Last seven characters of the commit hash
    pub commit_sha_short: String,
    /// Pipeline run number
    pub run_number: u64,
    /// True when the run number was missing or unparsable and 0 was used
    pub run_number_defaulted: bool,
}

impl BuildContext {
    /// Read the build context from the runner environment.
    ///
    /// # Returns
    /// * `Ok(BuildContext)` - Context for this run
    /// * `Err` - If no ref is available or the commit hash is not set
    pub fn from_env() -> Result<Self> {
        let ref_full = read_ref()?;
        let commit_sha = env::var("GITHUB_SHA")
            .map_err(|_| VersionSuffixError::context("GITHUB_SHA is not set"))?;
        let (run_number, run_number_defaulted) = read_run_number();

        Ok(BuildContext {
            branch_name: branch_from_ref(&ref_full).to_string(),
            commit_sha_short: short_sha(&commit_sha).to_string(),
            ref_full,
            commit_sha,
            run_number,
            run_number_defaulted,
        })
    }
}

fn read_ref() -> Result<String> {
    if let Ok(path) = env::var("GITHUB_EVENT_PATH") {
        let raw = fs::read_to_string(&path).map_err(|e| {
            VersionSuffixError::context(format!("cannot read event payload '{}': {}", path, e))
        })?;
        let payload: EventPayload = serde_json::from_str(&raw).map_err(|e| {
            VersionSuffixError::context(format!("invalid event payload '{}': {}", path, e))
        })?;
        if let Some(git_ref) = payload.git_ref {
            return Ok(git_ref);
        }
    }

    env::var("GITHUB_REF")
        .map_err(|_| VersionSuffixError::context("neither the event payload nor GITHUB_REF provides a ref"))
}

/// Run number with an explicit used-default marker instead of a silent
/// fallback. Missing and unparsable values both resolve to (0, true).
fn read_run_number() -> (u64, bool) {
    match env::var("GITHUB_RUN_NUMBER") {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(n) => (n, false),
            Err(_) => (0, true),
        },
        Err(_) => (0, true),
    }
}

/// Branch name is the third `/`-separated segment of the ref; refs with
/// fewer than three segments have no branch name.
pub fn branch_from_ref(ref_full: &str) -> &str {
    let parts: Vec<&str> = ref_full.split('/').collect();
    if parts.len() >= 3 {
        parts[2]
    } else {
        ""
    }
}

/// Last seven characters of the full commit hash
pub fn short_sha(sha: &str) -> &str {
    if sha.len() > SHORT_SHA_LEN {
        &sha[sha.len() - SHORT_SHA_LEN..]
    } else {
        sha
    }
}
