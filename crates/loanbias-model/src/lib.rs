//! Data model for loan-approval bias analysis.

pub mod applicant;
pub mod bias;
pub mod error;
pub mod metrics;
pub mod options;
pub mod report;

pub use applicant::{Applicant, Gender};
pub use bias::{
    DEFAULT_GROUP_STRENGTH, GroupBias, NumericColumn, SelectionBias, SelectionDirection,
};
pub use error::{ModelError, Result};
pub use metrics::{
    BiasFlags, BiasMetrics, Bucket, CreditScoreBias, Distribution, GenderBias, IncomeBias,
    VisualizationData,
};
pub use options::{
    AnalysisOptions, ApprovalRule, BiasThresholds, DEFAULT_APPROVAL_RATE_THRESHOLD,
    DEFAULT_CREDIT_SCORE_THRESHOLD, DEFAULT_INCOME_THRESHOLD, DEFAULT_MIN_CREDIT_SCORE,
    DEFAULT_MIN_INCOME, GenderMode,
};
pub use report::{
    BiasComparison, ColumnDifference, DatasetReport, Differences, MetricsComparison,
    MetricsDelta,
};
