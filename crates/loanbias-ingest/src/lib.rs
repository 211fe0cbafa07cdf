//! Loan applicant ingestion: CSV loading and row validation.

pub mod csv_reader;
pub mod error;
pub mod numeric;

pub use csv_reader::{parse_applicants, parse_record, read_applicants, read_applicants_from_reader};
pub use error::{IngestError, Result};
pub use numeric::{parse_integer, parse_number};
