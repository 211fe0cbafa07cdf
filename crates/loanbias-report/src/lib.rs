//! Loan bias report generation.
//!
//! - **CSV export**: the biased dataset in the same tabular layout ingestion
//!   reads, under a timestamped file name
//! - **JSON payload**: metrics, flags, distributions and differences for
//!   external renderers

mod error;
mod export;
mod json;

pub use error::{ReportError, Result};
pub use export::{
    EXPORT_FILE_PREFIX, ExportedDataset, dataset_to_csv_string, export_biased_dataset,
    export_dataset, export_file_name, format_numeric, write_dataset_csv, write_dataset_file,
};
pub use json::{report_to_json, write_report_json};
