//! JSON report payload.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use loanbias_model::BiasComparison;

use crate::error::{ReportError, Result};

pub fn report_to_json(report: &BiasComparison) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write the comparison payload as pretty-printed JSON.
pub fn write_report_json(path: &Path, report: &BiasComparison) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|error| ReportError::io(parent, error))?;
    }
    let file = File::create(path).map_err(|error| ReportError::io(path, error))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|error| ReportError::io(path, error))?;
    info!(path = %path.display(), "wrote report");
    Ok(())
}
