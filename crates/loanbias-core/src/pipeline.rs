//! One-shot bias demonstration pipeline.
//!
//! Stages, in order:
//! 1. **Inject**: derive the biased dataset from the original
//! 2. **Measure**: compute metrics and distributions for each dataset
//! 3. **Detect**: flag disparities above the configured thresholds
//! 4. **Compare**: diff the two metric sets and column means
//!
//! Every stage is a pure function of its inputs; the original records are
//! returned untouched alongside the biased copy.

use tracing::{debug, info, info_span};

use loanbias_model::{AnalysisOptions, Applicant, BiasComparison, DatasetReport};

use crate::differences::calculate_differences;
use crate::inject::inject_bias;
use crate::metrics::{compute_bias_metrics, visualization_data};
use crate::reporter::{compare_metrics, detect_bias};

/// Report payload for a single dataset.
pub fn analyze_dataset(applicants: &[Applicant], options: &AnalysisOptions) -> DatasetReport {
    let bias_metrics = compute_bias_metrics(applicants, &options.approval_rule);
    let bias_present = detect_bias(&bias_metrics, &options.thresholds);
    debug!(
        records = applicants.len(),
        gender_bias = bias_present.gender_bias,
        income_bias = bias_present.income_bias,
        credit_score_bias = bias_present.credit_score_bias,
        "analyzed dataset"
    );
    DatasetReport {
        records: applicants.len(),
        bias_metrics,
        bias_present,
        visualization_data: visualization_data(applicants),
    }
}

/// Inject bias into `applicants` and analyze both datasets.
pub fn run_comparison(applicants: &[Applicant], options: &AnalysisOptions) -> BiasComparison {
    let span = info_span!("comparison", records = applicants.len());
    let _guard = span.enter();

    let biased_records = inject_bias(applicants);
    let original = analyze_dataset(applicants, options);
    let biased = analyze_dataset(&biased_records, options);
    let comparison = compare_metrics(
        &original.bias_metrics,
        &biased.bias_metrics,
        &options.thresholds,
    );
    let differences = calculate_differences(applicants, &biased_records);

    info!(
        records = applicants.len(),
        original_flags = original.bias_present.count(),
        biased_flags = biased.bias_present.count(),
        "comparison complete"
    );

    BiasComparison {
        original,
        biased,
        comparison,
        differences,
        export_path: None,
        original_records: applicants.to_vec(),
        biased_records,
    }
}
