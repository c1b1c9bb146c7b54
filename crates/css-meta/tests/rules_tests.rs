//! Rule table loading from disk.

use css_fs::NormalizedPath;
use css_meta::{Error, RuleTable};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_full_toml_table() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("csspipe.toml");
    fs::write(
        &file_path,
        r#"
app_subtree = "review"
excluded_subtrees = ["review/pages", "review/embeds"]
legacy_marker = "ie9"
pseudo_class_blacklist = [":not("]
"#,
    )
    .unwrap();

    let table = RuleTable::load(&NormalizedPath::new(&file_path)).unwrap();

    assert_eq!(
        table,
        RuleTable {
            app_subtree: "review".to_string(),
            excluded_subtrees: vec!["review/pages".to_string(), "review/embeds".to_string()],
            legacy_marker: "ie9".to_string(),
            pseudo_class_blacklist: vec![":not(".to_string()],
        }
    );
}

#[test]
fn test_partial_table_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("csspipe.toml");
    fs::write(&file_path, "legacy_marker = \"oldie\"\n").unwrap();

    let table = RuleTable::load(&NormalizedPath::new(&file_path)).unwrap();

    assert_eq!(table.legacy_marker, "oldie");
    assert_eq!(table.app_subtree, "app");
    assert_eq!(table.excluded_subtrees, RuleTable::default().excluded_subtrees);
}

#[test]
fn test_load_json_table() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("rules.json");
    fs::write(&file_path, r#"{ "excluded_subtrees": [] }"#).unwrap();

    let table = RuleTable::load(&NormalizedPath::new(&file_path)).unwrap();

    assert!(table.excluded_subtrees.is_empty());
}

#[test]
fn test_invalid_table_reports_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("csspipe.toml");
    fs::write(&file_path, "excluded_subtrees = [\"elsewhere\"]\n").unwrap();

    let err = RuleTable::load(&NormalizedPath::new(&file_path)).unwrap_err();

    match err {
        Error::InvalidRuleTableFile { path, message } => {
            assert!(path.ends_with("csspipe.toml"));
            assert!(message.contains("elsewhere"));
        }
        other => panic!("expected InvalidRuleTableFile, got {other:?}"),
    }
}

#[test]
fn test_load_or_default_without_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("csspipe.toml");

    let table = RuleTable::load_or_default(&NormalizedPath::new(&file_path)).unwrap();

    assert_eq!(table, RuleTable::default());
}

#[test]
fn test_parse_error_is_wrapped() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("csspipe.toml");
    fs::write(&file_path, "app_subtree = [").unwrap();

    let err = RuleTable::load(&NormalizedPath::new(&file_path)).unwrap_err();

    assert!(matches!(err, Error::Fs(css_fs::Error::ConfigParse { .. })));
}

#[test]
fn test_default_table_round_trips_through_toml() {
    let rendered = toml::to_string_pretty(&RuleTable::default()).unwrap();
    let parsed: RuleTable = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed, RuleTable::default());
}
