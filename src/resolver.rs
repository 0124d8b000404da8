//! Version suffix resolution
//!
//! Classifies a branch name against the override table and the built-in
//! category prefixes, in a fixed priority order, and derives the suffix and
//! version fragment for the build. Pure functions over their inputs.

use crate::domain::{BranchCategory, CategoryRule};
use crate::overrides::OverrideTable;

/// Outcome of matching a branch name against one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchKind {
    /// The category's override prefix matched
    Override,
    /// One of the category's built-in prefixes matched
    Default,
    None,
}

/// Result of classifying one branch for one build.
///
/// Created once per invocation and not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub suffix: String,
    pub version_only: bool,
    pub run_number: u64,
    pub commit_sha_short: String,
}

impl Resolution {
    /// The fragment appended to the base version number.
    ///
    /// Empty in version-only mode; otherwise the suffix runs directly into
    /// the run number, followed by a dash and the short commit hash.
    pub fn new_version_fragment(&self) -> String {
        if self.version_only {
            return String::new();
        }
        format!("{}{}-{}", self.suffix, self.run_number, self.commit_sha_short)
    }

    /// Full version string for the given base version number
    pub fn full_version(&self, base_version: &str) -> String {
        format!("{}{}", base_version, self.new_version_fragment())
    }
}

/// Match one category against the lower-cased branch name.
///
/// The override prefix, when present, takes precedence over the built-in
/// prefixes. Prefixes are compared as-is against the lower-cased branch.
fn match_category(branch_lower: &str, rule: &CategoryRule, category: BranchCategory) -> MatchKind {
    if rule.has_override_prefix() && branch_lower.starts_with(&rule.match_name) {
        return MatchKind::Override;
    }

    for prefix in category.default_prefixes() {
        if branch_lower.starts_with(prefix) {
            return MatchKind::Default;
        }
    }

    MatchKind::None
}

/// Classify a branch and derive its version suffix.
///
/// Walks the categories in priority order; the first match wins. An override
/// match takes the suffix and version-only flag from the matched category's
/// table rule, a default match uses the category's built-in rule. A branch
/// that matches nothing resolves to an unclassified alpha build.
///
/// # Arguments
/// * `branch_name` - Branch name, matched case-insensitively
/// * `commit_sha_short` - Short commit hash, copied into the result
/// * `run_number` - Pipeline run number, copied into the result
/// * `table` - Override table built from the run's inputs
pub fn resolve(
    branch_name: &str,
    commit_sha_short: &str,
    run_number: u64,
    table: &OverrideTable,
) -> Resolution {
    let branch_lower = branch_name.to_lowercase();

    for category in BranchCategory::PRIORITY {
        let rule = table.rule(category);
        match match_category(&branch_lower, rule, category) {
            MatchKind::Override => {
                return Resolution {
                    suffix: rule.suffix.clone(),
                    version_only: rule.version_only,
                    run_number,
                    commit_sha_short: commit_sha_short.to_string(),
                };
            }
            MatchKind::Default => {
                let defaults = category.default_rule();
                return Resolution {
                    suffix: defaults.suffix,
                    version_only: defaults.version_only,
                    run_number,
                    commit_sha_short: commit_sha_short.to_string(),
                };
            }
            MatchKind::None => {}
        }
    }

    // Unmatched branches build like an unclassified feature branch.
    Resolution {
        suffix: "-alpha".to_string(),
        version_only: false,
        run_number,
        commit_sha_short: commit_sha_short.to_string(),
    }
}
