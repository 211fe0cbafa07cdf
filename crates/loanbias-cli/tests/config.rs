use std::fs;

use loanbias_cli::config::{OptionOverrides, load_options, resolve_options};
use loanbias_model::GenderMode;

#[test]
fn loads_options_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("loanbias.toml");
    fs::write(
        &path,
        r#"
gender_mode = "strict"

[thresholds]
approval_rate = 0.1
credit_score = 15.0

[approval_rule]
min_credit_score = 700
"#,
    )
    .expect("write config");

    let options = load_options(Some(&path)).expect("load config");

    assert_eq!(options.gender_mode, GenderMode::Strict);
    assert_eq!(options.thresholds.approval_rate, 0.1);
    assert_eq!(options.thresholds.credit_score, 15.0);
    assert_eq!(options.thresholds.income, 10_000.0);
    assert_eq!(options.approval_rule.min_credit_score, 700);
    assert_eq!(options.approval_rule.min_income, 50_000.0);

    let resolved = resolve_options(
        options,
        OptionOverrides {
            credit_threshold: Some(30.0),
            ..Default::default()
        },
    )
    .expect("resolve");
    assert_eq!(resolved.thresholds.credit_score, 30.0);
}

#[test]
fn malformed_file_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "thresholds = 3").expect("write config");

    let error = load_options(Some(&path)).unwrap_err();
    assert!(error.to_string().starts_with("parse config:"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let error = load_options(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(error.to_string().starts_with("read config:"));
}
