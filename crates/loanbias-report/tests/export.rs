use std::fs;

use chrono::NaiveDate;
use proptest::prelude::*;

use loanbias_core::{inject_bias, run_comparison};
use loanbias_ingest::{parse_applicants, read_applicants};
use loanbias_model::{AnalysisOptions, Applicant, Gender, GenderMode};
use loanbias_report::{
    dataset_to_csv_string, export_dataset, report_to_json, write_dataset_file, write_report_json,
};

fn applicant(gender: Gender, occupation: &str, income: f64, credit_score: i32) -> Applicant {
    Applicant {
        age: 41,
        gender,
        occupation: occupation.to_string(),
        education_level: "Bachelor's".to_string(),
        marital_status: "Married".to_string(),
        income,
        credit_score,
    }
}

fn sample() -> Vec<Applicant> {
    vec![
        applicant(Gender::Male, "Engineer", 85_000.0, 720),
        applicant(Gender::Female, "Sales, Retail", 55_000.0, 670),
        applicant(Gender::Other("Non-binary".to_string()), "Artist", 42_500.5, 610),
    ]
}

#[test]
fn exported_csv_layout() {
    let csv = dataset_to_csv_string(&inject_bias(&sample())).expect("export csv");
    insta::assert_snapshot!(csv, @r#"
    age,gender,occupation,education_level,marital_status,income,credit_score
    41,Male,Engineer,Bachelor's,Married,85000,720
    41,Female,"Sales, Retail",Bachelor's,Married,49500,650
    41,Non-binary,Artist,Bachelor's,Married,42500.5,610
    "#);
}

#[test]
fn export_writes_timestamped_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let timestamp = NaiveDate::from_ymd_opt(2025, 1, 2)
        .and_then(|date| date.and_hms_opt(3, 4, 5))
        .expect("valid timestamp");
    let target = dir.path().join("temp");

    let exported = export_dataset(&target, &sample(), timestamp).expect("export");

    assert_eq!(exported.file_name, "biased_data_20250102_030405.csv");
    assert_eq!(exported.records, 3);
    assert!(exported.path.starts_with(&target));
    let reloaded = read_applicants(&exported.path, GenderMode::Lenient).expect("reload");
    assert_eq!(reloaded, sample());
}

#[test]
fn dataset_file_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out/nested/biased.csv");
    write_dataset_file(&path, &sample()).expect("write file");
    assert!(path.exists());
}

#[test]
fn empty_dataset_exports_header_only() {
    let csv = dataset_to_csv_string(&[]).expect("export csv");
    assert_eq!(
        csv,
        "age,gender,occupation,education_level,marital_status,income,credit_score\n"
    );
    assert!(parse_applicants(&csv, GenderMode::Lenient).expect("parse").is_empty());
}

#[test]
fn json_report_contains_both_datasets() {
    let comparison = run_comparison(&sample(), &AnalysisOptions::default());
    let json = report_to_json(&comparison).expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["original"]["records"], 3);
    assert_eq!(
        value["biased"]["bias_metrics"]["credit_score_bias"]["female_avg_credit"],
        650.0
    );
    assert_eq!(value["biased"]["bias_present"]["gender_bias"], true);
    assert!(value["differences"]["income"]["mean_differences"]["Female"].is_number());
    assert!(value.get("biased_records").is_none());
    assert!(value.get("export_path").is_none());

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("report.json");
    write_report_json(&path, &comparison).expect("write json");
    let written = fs::read_to_string(&path).expect("read json");
    assert_eq!(written.trim_end(), json);
}

#[test]
fn json_report_links_exported_dataset() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut comparison = run_comparison(&sample(), &AnalysisOptions::default());
    let exported = export_dataset(
        dir.path(),
        &comparison.biased_records,
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .expect("valid timestamp"),
    )
    .expect("export");
    comparison.export_path = Some(exported.path.clone());

    let json = report_to_json(&comparison).expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    let linked = value["export_path"].as_str().expect("export path");
    assert!(linked.ends_with("biased_data_20250601_120000.csv"));
    assert_eq!(read_applicants(&exported.path, GenderMode::Lenient).expect("reload").len(), 3);
}

#[test]
fn padded_text_survives_export_and_reload() {
    let applicants = vec![
        applicant(Gender::Female, " Sales Lead ", 55_000.0, 670),
        applicant(Gender::Other("Female ".to_string()), "Nurse", 52_000.0, 660),
    ];
    let csv = dataset_to_csv_string(&applicants).expect("export csv");
    let parsed = parse_applicants(&csv, GenderMode::Lenient).expect("parse csv");
    assert_eq!(parsed, applicants);
    assert!(!parsed[1].is_female());
}

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![
        Just(Gender::Male),
        Just(Gender::Female),
        "[A-Za-z-]{1,10}".prop_map(Gender::from),
        " {0,2}(Male|Female) {0,2}".prop_map(Gender::from),
    ]
}

fn text() -> impl Strategy<Value = String> {
    " {0,2}[A-Za-z]([A-Za-z ,'\"]{0,10}[A-Za-z])? {0,2}"
}

fn arbitrary_applicant() -> impl Strategy<Value = Applicant> {
    (
        0u32..120,
        gender(),
        text(),
        text(),
        text(),
        0.0f64..10_000_000.0,
        0i32..1000,
    )
        .prop_map(
            |(age, gender, occupation, education_level, marital_status, income, credit_score)| {
                Applicant {
                    age,
                    gender,
                    occupation,
                    education_level,
                    marital_status,
                    income,
                    credit_score,
                }
            },
        )
}

proptest! {
    #[test]
    fn export_round_trips_through_ingestion(
        applicants in prop::collection::vec(arbitrary_applicant(), 0..25)
    ) {
        let csv = dataset_to_csv_string(&applicants).expect("export csv");
        let parsed = parse_applicants(&csv, GenderMode::Lenient).expect("parse csv");
        prop_assert_eq!(parsed, applicants);
    }
}
