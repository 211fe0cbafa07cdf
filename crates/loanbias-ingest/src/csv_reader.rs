use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use loanbias_model::{Applicant, Gender, GenderMode, ModelError};

use crate::error::{IngestError, Result};
use crate::numeric::{parse_integer, parse_number};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn check_headers(headers: &StringRecord) -> Result<()> {
    let found: Vec<String> = headers.iter().map(normalize_header).collect();
    if found.iter().all(String::is_empty) {
        return Err(ModelError::EmptyDataset.into());
    }
    if found.iter().map(String::as_str).ne(Applicant::FIELD_NAMES) {
        return Err(IngestError::HeaderMismatch {
            expected: Applicant::FIELD_NAMES.join(","),
            found: found.join(","),
        });
    }
    Ok(())
}

/// Raw cell text. Text fields are kept verbatim so exported records read back
/// unchanged; numeric parsing trims on its own.
fn field<'r>(record: &'r StringRecord, index: usize) -> std::result::Result<&'r str, ModelError> {
    record
        .get(index)
        .ok_or_else(|| ModelError::invalid(Applicant::FIELD_NAMES[index], "", "missing field"))
}

fn non_negative_u32(name: &'static str, raw: &str) -> std::result::Result<u32, ModelError> {
    let value = parse_integer(name, raw)?;
    u32::try_from(value)
        .map_err(|_| ModelError::invalid(name, raw, "must be a non-negative integer"))
}

fn credit_score(raw: &str) -> std::result::Result<i32, ModelError> {
    i32::try_from(parse_integer("credit_score", raw)?)
        .map_err(|_| ModelError::invalid("credit_score", raw, "out of range"))
}

/// Convert one CSV row (already known to have the expected header) into an
/// [`Applicant`].
pub fn parse_record(
    record: &StringRecord,
    mode: GenderMode,
) -> std::result::Result<Applicant, ModelError> {
    let applicant = Applicant {
        age: non_negative_u32("age", field(record, 0)?)?,
        gender: Gender::parse(field(record, 1)?, mode)?,
        occupation: field(record, 2)?.to_string(),
        education_level: field(record, 3)?.to_string(),
        marital_status: field(record, 4)?.to_string(),
        income: parse_number("income", field(record, 5)?)?,
        credit_score: credit_score(field(record, 6)?)?,
    };
    applicant.validate()?;
    Ok(applicant)
}

/// Read applicant records from any CSV source.
///
/// The header row must name the applicant fields exactly and in order. Blank
/// rows are skipped. The first invalid row aborts the whole batch.
///
/// # Errors
///
/// - [`ModelError::EmptyDataset`] when the input has no header row.
/// - [`IngestError::HeaderMismatch`] when the header differs from
///   [`Applicant::FIELD_NAMES`].
/// - [`IngestError::Record`] for the first row that fails to parse.
pub fn read_applicants_from_reader<R: Read>(
    reader: R,
    mode: GenderMode,
) -> Result<Vec<Applicant>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = reader.headers()?.clone();
    check_headers(&headers)?;

    let mut applicants = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|value| value.trim().is_empty()) {
            skipped += 1;
            continue;
        }
        let line = record.position().map_or(0, csv::Position::line);
        let applicant =
            parse_record(&record, mode).map_err(|source| IngestError::Record { line, source })?;
        applicants.push(applicant);
    }
    debug!(records = applicants.len(), blank_rows = skipped, "parsed applicant rows");
    Ok(applicants)
}

/// Parse applicant records from CSV text.
pub fn parse_applicants(text: &str, mode: GenderMode) -> Result<Vec<Applicant>> {
    read_applicants_from_reader(text.as_bytes(), mode)
}

/// Read applicant records from a CSV file.
pub fn read_applicants(path: &Path, mode: GenderMode) -> Result<Vec<Applicant>> {
    let file = File::open(path).map_err(|error| IngestError::io(path, error))?;
    let applicants = read_applicants_from_reader(file, mode)?;
    info!(
        path = %path.display(),
        records = applicants.len(),
        "loaded applicants"
    );
    Ok(applicants)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "age,gender,occupation,education_level,marital_status,income,credit_score";

    #[test]
    fn parses_rows_in_order() {
        let text = format!(
            "{HEADER}\n30,Male,Engineer,Bachelor's,Single,85000,720\n41,Female,Teacher,Master's,Married,48000.5,640\n"
        );
        let applicants = parse_applicants(&text, GenderMode::Lenient).expect("parse");
        assert_eq!(applicants.len(), 2);
        assert_eq!(applicants[0].gender, Gender::Male);
        assert_eq!(applicants[1].income, 48000.5);
        assert_eq!(applicants[1].credit_score, 640);
        assert_eq!(applicants[1].education_level, "Master's");
    }

    #[test]
    fn empty_input_is_empty_dataset() {
        let error = parse_applicants("", GenderMode::Lenient).unwrap_err();
        assert!(matches!(error, IngestError::Model(ModelError::EmptyDataset)));
    }

    #[test]
    fn header_only_is_an_empty_dataset_not_an_error() {
        let applicants = parse_applicants(HEADER, GenderMode::Lenient).expect("parse");
        assert!(applicants.is_empty());
    }

    #[test]
    fn header_names_must_match_exactly() {
        let text = "Age,gender,occupation,education_level,marital_status,income,credit_score\n";
        let error = parse_applicants(text, GenderMode::Lenient).unwrap_err();
        assert!(matches!(error, IngestError::HeaderMismatch { .. }));

        let reordered = "gender,age,occupation,education_level,marital_status,income,credit_score\n";
        assert!(parse_applicants(reordered, GenderMode::Lenient).is_err());
    }

    #[test]
    fn header_whitespace_and_bom_are_trimmed() {
        let text = format!("\u{feff}{}\n", HEADER.replace(',', " , "));
        assert!(parse_applicants(&text, GenderMode::Lenient).is_ok());
    }

    #[test]
    fn first_bad_row_aborts_batch_with_line_number() {
        let text = format!(
            "{HEADER}\n30,Male,Engineer,PhD,Single,85000,720\n31,Female,Nurse,BSc,Single,,700\n"
        );
        let error = parse_applicants(&text, GenderMode::Lenient).unwrap_err();
        match error {
            IngestError::Record { line, source } => {
                assert_eq!(line, 3);
                assert!(matches!(
                    source,
                    ModelError::InvalidRecord {
                        field: "income",
                        ..
                    }
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn short_rows_are_invalid_records() {
        let text = format!("{HEADER}\n30,Male,Engineer\n");
        let error = parse_applicants(&text, GenderMode::Lenient).unwrap_err();
        assert!(matches!(
            error.model_error(),
            Some(ModelError::InvalidRecord {
                field: "education_level",
                ..
            })
        ));
    }

    #[test]
    fn blank_rows_are_skipped() {
        let text = format!("{HEADER}\n,,,,,,\n30,Male,Engineer,PhD,Single,85000,720\n");
        let applicants = parse_applicants(&text, GenderMode::Lenient).expect("parse");
        assert_eq!(applicants.len(), 1);
    }

    #[test]
    fn strict_mode_rejects_unknown_gender() {
        let text = format!("{HEADER}\n30,Non-binary,Engineer,PhD,Single,85000,720\n");
        let lenient = parse_applicants(&text, GenderMode::Lenient).expect("lenient parse");
        assert_eq!(lenient[0].gender, Gender::Other("Non-binary".to_string()));

        let error = parse_applicants(&text, GenderMode::Strict).unwrap_err();
        assert!(matches!(
            error.model_error(),
            Some(ModelError::UnsupportedCategory { field: "gender", .. })
        ));
    }

    #[test]
    fn text_cells_keep_surrounding_whitespace() {
        let text = format!("{HEADER}\n 30 , Female, Sales Lead ,PhD,Single, 85000 ,720\n");
        let applicants = parse_applicants(&text, GenderMode::Lenient).expect("parse");
        assert_eq!(applicants[0].age, 30);
        assert_eq!(applicants[0].occupation, " Sales Lead ");
        assert_eq!(applicants[0].income, 85000.0);
        assert_eq!(applicants[0].gender, Gender::Other(" Female".to_string()));

        let error = parse_applicants(&text, GenderMode::Strict).unwrap_err();
        assert!(matches!(
            error.model_error(),
            Some(ModelError::UnsupportedCategory { field: "gender", .. })
        ));
    }

    #[test]
    fn negative_age_is_rejected() {
        let text = format!("{HEADER}\n-3,Male,Engineer,PhD,Single,85000,720\n");
        assert!(parse_applicants(&text, GenderMode::Lenient).is_err());
    }
}
