use std::path::PathBuf;

use loanbias_model::BiasComparison;
use loanbias_report::ExportedDataset;

#[derive(Debug)]
pub struct AnalysisResult {
    pub input: PathBuf,
    pub comparison: BiasComparison,
    /// Applicants approved in the original data but denied after injection.
    pub flipped_decisions: usize,
    pub export: Option<ExportedDataset>,
    pub report_json: Option<PathBuf>,
}

#[derive(Debug)]
pub struct DecisionResult {
    pub income: f64,
    pub credit_score: i32,
    pub approved: bool,
}
