use crate::error::{Result, VersionSuffixError};

use super::category::BranchCategory;

/// Suffix rule for one branch category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    /// Override prefix matched against the branch name. Empty means the
    /// category only matches through its built-in prefixes.
    pub match_name: String,
    /// Suffix text placed in front of the run number
    pub suffix: String,
    /// When true, the version is the bare version number with no
    /// build-metadata fragment appended
    pub version_only: bool,
}

impl CategoryRule {
    /// Create a new rule
    pub fn new(match_name: impl Into<String>, suffix: impl Into<String>, version_only: bool) -> Self {
        CategoryRule {
            match_name: match_name.into(),
            suffix: suffix.into(),
            version_only,
        }
    }

    /// Whether this rule carries a user-supplied match prefix
    pub fn has_override_prefix(&self) -> bool {
        !self.match_name.is_empty()
    }
}

/// One parsed override line
///
/// Raw lines are comma-separated 4-field records:
/// `category,match_name,suffix,version_only`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideRecord {
    pub category: BranchCategory,
    pub match_name: String,
    pub suffix: String,
    pub version_only: bool,
}

impl OverrideRecord {
    /// Parse a raw override line, trimming whitespace from every field.
    ///
    /// # Arguments
    /// * `line` - Raw record, e.g. `"release,rel,-preview,false"`
    ///
    /// # Returns
    /// * `Ok(OverrideRecord)` - Parsed record
    /// * `Err` - If the line does not have exactly 4 fields, the category is
    ///   unknown, or the flag is not a recognized boolean spelling
    pub fn parse(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 4 {
            return Err(VersionSuffixError::malformed_record(format!(
                "expected 4 comma-separated fields, got {} in '{}'",
                fields.len(),
                line
            )));
        }

        let category: BranchCategory = fields[0].trim().parse()?;
        let match_name = fields[1].trim().to_string();
        let suffix = fields[2].trim().to_string();
        let version_only = parse_bool_token(fields[3])?;

        Ok(OverrideRecord {
            category,
            match_name,
            suffix,
            version_only,
        })
    }
}

/// Parse a version-only flag token.
///
/// Accepts the YAML core-schema boolean spellings:
/// `true | True | TRUE | false | False | FALSE`.
pub fn parse_bool_token(token: &str) -> Result<bool> {
    match token.trim() {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        other => Err(VersionSuffixError::malformed_boolean(format!(
            "'{}' must be either 'true' or 'false'",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record() {
        let record = OverrideRecord::parse("release,rel,-preview,false").unwrap();
        assert_eq!(record.category, BranchCategory::Release);
        assert_eq!(record.match_name, "rel");
        assert_eq!(record.suffix, "-preview");
        assert!(!record.version_only);
    }

    #[test]
    fn test_parse_record_trims_fields() {
        let record = OverrideRecord::parse(" hotfix , fix/ , -patch , TRUE ").unwrap();
        assert_eq!(record.category, BranchCategory::Hotfix);
        assert_eq!(record.match_name, "fix/");
        assert_eq!(record.suffix, "-patch");
        assert!(record.version_only);
    }

    #[test]
    fn test_parse_record_empty_match_name() {
        let record = OverrideRecord::parse("develop,,custom-dev,false").unwrap();
        assert_eq!(record.match_name, "");
        assert_eq!(record.suffix, "custom-dev");
    }

    #[test]
    fn test_parse_record_too_few_fields() {
        let err = OverrideRecord::parse("feature,x,y").unwrap_err();
        assert!(matches!(err, VersionSuffixError::MalformedRecord(_)));
    }

    #[test]
    fn test_parse_record_too_many_fields() {
        let err = OverrideRecord::parse("feature,x,y,true,extra").unwrap_err();
        assert!(matches!(err, VersionSuffixError::MalformedRecord(_)));
    }

    #[test]
    fn test_parse_record_unknown_category() {
        let err = OverrideRecord::parse("wip,x,-w,false").unwrap_err();
        assert!(matches!(err, VersionSuffixError::UnknownCategory(_)));
    }

    #[test]
    fn test_parse_record_bad_flag() {
        let err = OverrideRecord::parse("feature,x,-a,maybe").unwrap_err();
        assert!(matches!(err, VersionSuffixError::MalformedBoolean(_)));
    }

    #[test]
    fn test_parse_bool_token_spellings() {
        for token in ["true", "True", "TRUE"] {
            assert!(parse_bool_token(token).unwrap());
        }
        for token in ["false", "False", "FALSE"] {
            assert!(!parse_bool_token(token).unwrap());
        }
    }

    #[test]
    fn test_parse_bool_token_rejects_other_spellings() {
        for token in ["tRuE", "yes", "1", ""] {
            assert!(parse_bool_token(token).is_err());
        }
    }

    #[test]
    fn test_has_override_prefix() {
        assert!(CategoryRule::new("rel", "-rc", false).has_override_prefix());
        assert!(!CategoryRule::new("", "-rc", false).has_override_prefix());
    }
}
