//! Delimited-text export of applicant datasets.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use csv::Writer;
use tracing::info;

use loanbias_model::Applicant;

use crate::error::{ReportError, Result};

/// File name prefix for exported biased datasets.
pub const EXPORT_FILE_PREFIX: &str = "biased_data";

/// An exported dataset on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDataset {
    pub path: PathBuf,
    pub file_name: String,
    pub records: usize,
}

/// Integral values print without a fractional part; others use the shortest
/// representation that parses back to the same value.
pub fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn record_fields(applicant: &Applicant) -> [String; 7] {
    [
        applicant.age.to_string(),
        applicant.gender.to_string(),
        applicant.occupation.clone(),
        applicant.education_level.clone(),
        applicant.marital_status.clone(),
        format_numeric(applicant.income),
        applicant.credit_score.to_string(),
    ]
}

/// Write a header row and one row per applicant.
pub fn write_dataset_csv<W: Write>(writer: W, applicants: &[Applicant]) -> Result<()> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(Applicant::FIELD_NAMES)?;
    for applicant in applicants {
        writer.write_record(record_fields(applicant))?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn dataset_to_csv_string(applicants: &[Applicant]) -> Result<String> {
    let mut buffer = Vec::new();
    write_dataset_csv(&mut buffer, applicants)?;
    // The writer only ever receives UTF-8 field text.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// `biased_data_YYYYmmdd_HHMMSS.csv`
pub fn export_file_name(timestamp: NaiveDateTime) -> String {
    format!(
        "{EXPORT_FILE_PREFIX}_{}.csv",
        timestamp.format("%Y%m%d_%H%M%S")
    )
}

/// Write `applicants` into `dir` under a timestamped file name, creating the
/// directory when needed.
pub fn export_dataset(
    dir: &Path,
    applicants: &[Applicant],
    timestamp: NaiveDateTime,
) -> Result<ExportedDataset> {
    fs::create_dir_all(dir).map_err(|error| ReportError::io(dir, error))?;
    let file_name = export_file_name(timestamp);
    let path = dir.join(&file_name);
    let file = File::create(&path).map_err(|error| ReportError::io(&path, error))?;
    write_dataset_csv(file, applicants)?;
    info!(path = %path.display(), records = applicants.len(), "exported dataset");
    Ok(ExportedDataset {
        path,
        file_name,
        records: applicants.len(),
    })
}

/// [`export_dataset`] stamped with the current local time.
pub fn export_biased_dataset(dir: &Path, applicants: &[Applicant]) -> Result<ExportedDataset> {
    export_dataset(dir, applicants, Local::now().naive_local())
}

/// Write `applicants` to an explicit path.
pub fn write_dataset_file(path: &Path, applicants: &[Applicant]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|error| ReportError::io(parent, error))?;
    }
    let file = File::create(path).map_err(|error| ReportError::io(path, error))?;
    write_dataset_csv(file, applicants)?;
    info!(path = %path.display(), records = applicants.len(), "wrote dataset");
    Ok(())
}
