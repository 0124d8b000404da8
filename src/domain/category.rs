use crate::error::{Result, VersionSuffixError};
use std::fmt;
use std::str::FromStr;

use super::rule::CategoryRule;

/// Conventional branch role used to infer a release-suffix convention.
///
/// Closed set; branches that fit none of these roles fall back to an
/// unclassified alpha build during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BranchCategory {
    Feature,
    Develop,
    Master,
    Release,
    Bugfix,
    Hotfix,
}

impl BranchCategory {
    /// Classification order. Earlier categories win when prefixes collide,
    /// so resolution must walk this array front to back.
    pub const PRIORITY: [BranchCategory; 6] = [
        BranchCategory::Feature,
        BranchCategory::Develop,
        BranchCategory::Release,
        BranchCategory::Bugfix,
        BranchCategory::Hotfix,
        BranchCategory::Master,
    ];

    /// Get the category name as a string
    pub fn name(&self) -> &'static str {
        match self {
            BranchCategory::Feature => "feature",
            BranchCategory::Develop => "develop",
            BranchCategory::Master => "master",
            BranchCategory::Release => "release",
            BranchCategory::Bugfix => "bugfix",
            BranchCategory::Hotfix => "hotfix",
        }
    }

    /// Branch-name prefixes recognized for this category without any override
    pub fn default_prefixes(&self) -> &'static [&'static str] {
        match self {
            BranchCategory::Feature => &["feature"],
            BranchCategory::Develop => &["dev", "develop"],
            BranchCategory::Master => &["main", "master"],
            BranchCategory::Release => &["release"],
            BranchCategory::Bugfix => &["bug", "bugfix"],
            BranchCategory::Hotfix => &["hot", "hotfix"],
        }
    }

    /// Built-in rule applied when a branch matches this category through a
    /// default prefix. Master is the only category that is version-only out
    /// of the box.
    pub fn default_rule(&self) -> CategoryRule {
        match self {
            BranchCategory::Feature => CategoryRule::new("", "-alpha", false),
            BranchCategory::Develop => CategoryRule::new("", "-dev", false),
            BranchCategory::Master => CategoryRule::new("", "", true),
            BranchCategory::Release => CategoryRule::new("", "-rc", false),
            BranchCategory::Bugfix => CategoryRule::new("", "-bug", false),
            BranchCategory::Hotfix => CategoryRule::new("", "-hot", false),
        }
    }
}

impl FromStr for BranchCategory {
    type Err = VersionSuffixError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "feature" => Ok(BranchCategory::Feature),
            "develop" => Ok(BranchCategory::Develop),
            "master" => Ok(BranchCategory::Master),
            "release" => Ok(BranchCategory::Release),
            "bugfix" => Ok(BranchCategory::Bugfix),
            "hotfix" => Ok(BranchCategory::Hotfix),
            other => Err(VersionSuffixError::unknown_category(format!(
                "'{}' is not one of feature, develop, master, release, bugfix, hotfix",
                other
            ))),
        }
    }
}

impl fmt::Display for BranchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
