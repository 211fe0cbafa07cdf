//! Bias injection, disparity metrics and bias detection over loan applicant
//! datasets. Everything here is synchronous, in-memory and side-effect free.

pub mod decision;
pub mod differences;
pub mod inject;
pub mod metrics;
pub mod pipeline;
pub mod reporter;
pub mod skew;

pub use decision::{DecisionRule, approves};
pub use differences::{NUMERIC_COLUMNS, calculate_differences};
pub use inject::{
    CREDIT_SCORE_FLOOR, CREDIT_SCORE_PENALTY, INCOME_FACTOR, INCOME_FLOOR, inject_bias, penalize,
    penalize_credit_score, penalize_income,
};
pub use metrics::{
    CREDIT_SCORE_BUCKET_WIDTH, INCOME_BUCKET_WIDTH, approval_rate, average_credit_score,
    average_income, bucket_label, bucket_start, bucketed_distribution, compute_bias_metrics,
    credit_score_distribution, gender_distribution, income_distribution, visualization_data,
};
pub use pipeline::{analyze_dataset, run_comparison};
pub use reporter::{compare_metrics, detect_bias};
pub use skew::{apply_group_bias, apply_selection_bias, scale_column};
