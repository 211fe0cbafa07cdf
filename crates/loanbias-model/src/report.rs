//! Report payloads exchanged with renderers and exporters.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::applicant::Applicant;
use crate::metrics::{BiasFlags, BiasMetrics, VisualizationData};

/// Analysis result for one dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetReport {
    pub records: usize,
    pub bias_metrics: BiasMetrics,
    pub bias_present: BiasFlags,
    pub visualization_data: VisualizationData,
}

/// Signed change (`biased - original`) of each metric value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsDelta {
    pub male_approval_rate: f64,
    pub female_approval_rate: f64,
    pub male_avg_income: f64,
    pub female_avg_income: f64,
    pub male_avg_credit: f64,
    pub female_avg_credit: f64,
}

/// Side-by-side comparison of two datasets' metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsComparison {
    pub delta: MetricsDelta,
    pub original_flags: BiasFlags,
    pub biased_flags: BiasFlags,
}

impl MetricsComparison {
    /// Flags raised in the biased dataset but not in the original.
    pub fn introduced(&self) -> BiasFlags {
        BiasFlags {
            gender_bias: self.biased_flags.gender_bias && !self.original_flags.gender_bias,
            income_bias: self.biased_flags.income_bias && !self.original_flags.income_bias,
            credit_score_bias: self.biased_flags.credit_score_bias
                && !self.original_flags.credit_score_bias,
        }
    }
}

/// Per-column mean change between an original and a derived dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnDifference {
    /// Mean change per gender label (`biased - original`).
    pub mean_differences: BTreeMap<String, f64>,
    pub original_mean: f64,
    pub biased_mean: f64,
    pub total_change: f64,
}

/// Column differences keyed by column name.
pub type Differences = BTreeMap<String, ColumnDifference>;

/// Full output of one original-vs-biased run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BiasComparison {
    pub original: DatasetReport,
    pub biased: DatasetReport,
    pub comparison: MetricsComparison,
    pub differences: Differences,
    /// Where the biased dataset was written, once exported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_path: Option<PathBuf>,
    #[serde(skip)]
    pub original_records: Vec<Applicant>,
    #[serde(skip)]
    pub biased_records: Vec<Applicant>,
}
