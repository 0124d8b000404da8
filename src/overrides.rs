//! Branch-override table
//!
//! Built once per run from the user's override lines, pre-seeded with the
//! built-in rule for every category, and immutable afterwards.

use crate::domain::{BranchCategory, CategoryRule, OverrideRecord};
use crate::error::Result;

/// Mapping from branch category to its active rule.
///
/// Every category always has a rule; user overrides replace the built-in
/// entry wholesale (`match_name`, `suffix`, and `version_only` together).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideTable {
    feature: CategoryRule,
    develop: CategoryRule,
    master: CategoryRule,
    release: CategoryRule,
    bugfix: CategoryRule,
    hotfix: CategoryRule,
}

impl Default for OverrideTable {
    fn default() -> Self {
        OverrideTable {
            feature: BranchCategory::Feature.default_rule(),
            develop: BranchCategory::Develop.default_rule(),
            master: BranchCategory::Master.default_rule(),
            release: BranchCategory::Release.default_rule(),
            bugfix: BranchCategory::Bugfix.default_rule(),
            hotfix: BranchCategory::Hotfix.default_rule(),
        }
    }
}

impl OverrideTable {
    /// Build a table from raw override lines.
    ///
    /// Folds the records over the default table; the first malformed record
    /// aborts the whole build.
    ///
    /// # Arguments
    /// * `lines` - Raw 4-field records as described in [OverrideRecord]
    ///
    /// # Returns
    /// * `Ok(OverrideTable)` - Defaults with all overrides applied
    /// * `Err` - The first parse failure encountered
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        lines.iter().try_fold(OverrideTable::default(), |table, line| {
            OverrideRecord::parse(line.as_ref()).map(|record| table.with_record(record))
        })
    }

    /// The active rule for a category
    pub fn rule(&self, category: BranchCategory) -> &CategoryRule {
        match category {
            BranchCategory::Feature => &self.feature,
            BranchCategory::Develop => &self.develop,
            BranchCategory::Master => &self.master,
            BranchCategory::Release => &self.release,
            BranchCategory::Bugfix => &self.bugfix,
            BranchCategory::Hotfix => &self.hotfix,
        }
    }

    fn with_record(mut self, record: OverrideRecord) -> Self {
        let rule = CategoryRule::new(record.match_name, record.suffix, record.version_only);
        match record.category {
            BranchCategory::Feature => self.feature = rule,
            BranchCategory::Develop => self.develop = rule,
            BranchCategory::Master => self.master = rule,
            BranchCategory::Release => self.release = rule,
            BranchCategory::Bugfix => self.bugfix = rule,
            BranchCategory::Hotfix => self.hotfix = rule,
        }
        self
    }
}
