// tests/resolver_test.rs
//
// End-to-end classification scenarios through the public API: override
// lines in, resolution out.

use version_suffix::overrides::OverrideTable;
use version_suffix::resolver::resolve;

#[test]
fn test_main_branch_without_overrides() {
    let table = OverrideTable::default();
    let res = resolve("main", "abc1234", 42, &table);

    assert_eq!(res.suffix, "");
    assert!(res.version_only);
    assert_eq!(res.run_number, 42);
    assert_eq!(res.commit_sha_short, "abc1234");
    assert_eq!(res.new_version_fragment(), "");
    assert_eq!(res.full_version("2.0.0"), "2.0.0");
}

#[test]
fn test_feature_branch_without_overrides() {
    let table = OverrideTable::default();
    let res = resolve("feature/login", "abc1234", 5, &table);

    assert_eq!(res.suffix, "-alpha");
    assert!(!res.version_only);
    assert_eq!(res.new_version_fragment(), "-alpha5-abc1234");
    assert_eq!(res.full_version("1.2.3"), "1.2.3-alpha5-abc1234");
}

#[test]
fn test_each_category_default_suffix() {
    let table = OverrideTable::default();
    let cases = [
        ("feature/a", "-alpha"),
        ("develop", "-dev"),
        ("dev/a", "-dev"),
        ("release/1.0", "-rc"),
        ("bugfix/a", "-bug"),
        ("bug/a", "-bug"),
        ("hotfix/a", "-hot"),
        ("hot/a", "-hot"),
    ];
    for (branch, expected) in cases {
        let res = resolve(branch, "abc1234", 1, &table);
        assert_eq!(res.suffix, expected, "branch '{}'", branch);
        assert!(!res.version_only, "branch '{}'", branch);
    }
}

#[test]
fn test_branch_name_case_is_ignored() {
    let table = OverrideTable::default();
    for branch in ["Feature/x", "FEATURE/x", "feature/x"] {
        let res = resolve(branch, "abc1234", 1, &table);
        assert_eq!(res.suffix, "-alpha", "branch '{}'", branch);
    }
}

#[test]
fn test_unmatched_branch_gets_alpha_fallback() {
    let table = OverrideTable::default();
    let res = resolve("randomname", "abc1234", 7, &table);
    assert_eq!(res.suffix, "-alpha");
    assert!(!res.version_only);
    assert_eq!(res.new_version_fragment(), "-alpha7-abc1234");
}

#[test]
fn test_override_match_reflects_override_values() {
    let table = OverrideTable::from_lines(&["hotfix,urgent/,-fire,true"]).unwrap();
    let res = resolve("urgent/crash", "abc1234", 11, &table);
    assert_eq!(res.suffix, "-fire");
    assert!(res.version_only);
}

#[test]
fn test_override_with_empty_match_name_only_matches_by_default_prefix() {
    // The override changes the table entry, but with no match prefix the
    // branch can only hit the built-in prefix, which is a default match and
    // uses the built-in suffix.
    let table = OverrideTable::from_lines(&["develop,,custom-dev,false"]).unwrap();
    let res = resolve("develop/foo", "abc1234", 2, &table);
    assert_eq!(res.suffix, "-dev");
    assert!(!res.version_only);
}

#[test]
fn test_priority_order_feature_beats_develop() {
    // Feature override prefix collides with develop's built-in prefix;
    // feature is checked first and wins.
    let table = OverrideTable::from_lines(&["feature,dev,-feat,false"]).unwrap();
    let res = resolve("dev/thing", "abc1234", 3, &table);
    assert_eq!(res.suffix, "-feat");
}

#[test]
fn test_priority_order_release_beats_hotfix() {
    let table = OverrideTable::from_lines(&["release,hot,-rel,false"]).unwrap();
    let res = resolve("hotfix/x", "abc1234", 3, &table);
    assert_eq!(res.suffix, "-rel");
}

#[test]
fn test_master_override_prefix() {
    let table = OverrideTable::from_lines(&["master,trunk,,true"]).unwrap();
    let res = resolve("trunk", "abc1234", 10, &table);
    assert_eq!(res.suffix, "");
    assert!(res.version_only);
    assert_eq!(res.full_version("3.1.4"), "3.1.4");
}

#[test]
fn test_version_only_true_always_yields_empty_fragment() {
    let table = OverrideTable::from_lines(&["feature,topic/,-alpha,true"]).unwrap();
    let res = resolve("topic/x", "abc1234", 123, &table);
    assert!(res.version_only);
    assert_eq!(res.new_version_fragment(), "");
}

#[test]
fn test_fragment_has_no_extra_characters() {
    let table = OverrideTable::default();
    let res = resolve("release/2.0", "deadbee", 8, &table);
    assert_eq!(res.new_version_fragment(), "-rc8-deadbee");
}
