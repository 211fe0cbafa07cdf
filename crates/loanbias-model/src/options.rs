//! Configuration options for bias analysis.

use serde::{Deserialize, Serialize};

/// Minimum credit score for loan approval (inclusive).
pub const DEFAULT_MIN_CREDIT_SCORE: i32 = 650;

/// Minimum income for loan approval (inclusive).
pub const DEFAULT_MIN_INCOME: f64 = 50_000.0;

/// Approval-rate gap (as a fraction, 0.05 = 5 percentage points) above which
/// gender bias is flagged.
pub const DEFAULT_APPROVAL_RATE_THRESHOLD: f64 = 0.05;

/// Average-income gap above which income bias is flagged.
pub const DEFAULT_INCOME_THRESHOLD: f64 = 10_000.0;

/// Average-credit-score gap above which credit score bias is flagged.
pub const DEFAULT_CREDIT_SCORE_THRESHOLD: f64 = 20.0;

/// How gender labels outside `Male`/`Female` are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderMode {
    /// Reject unrecognized labels at ingestion.
    Strict,
    /// Keep unrecognized labels as a separate `Other` category.
    #[default]
    Lenient,
}

/// Loan decision rule: approve iff both minimums are met.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApprovalRule {
    pub min_credit_score: i32,
    pub min_income: f64,
}

impl Default for ApprovalRule {
    fn default() -> Self {
        Self {
            min_credit_score: DEFAULT_MIN_CREDIT_SCORE,
            min_income: DEFAULT_MIN_INCOME,
        }
    }
}

/// Absolute male/female differences above which a disparity is flagged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiasThresholds {
    pub approval_rate: f64,
    pub income: f64,
    pub credit_score: f64,
}

impl Default for BiasThresholds {
    fn default() -> Self {
        Self {
            approval_rate: DEFAULT_APPROVAL_RATE_THRESHOLD,
            income: DEFAULT_INCOME_THRESHOLD,
            credit_score: DEFAULT_CREDIT_SCORE_THRESHOLD,
        }
    }
}

/// Options controlling one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    pub gender_mode: GenderMode,
    pub thresholds: BiasThresholds,
    pub approval_rule: ApprovalRule,
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gender_mode(mut self, mode: GenderMode) -> Self {
        self.gender_mode = mode;
        self
    }

    pub fn with_thresholds(mut self, thresholds: BiasThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_approval_rule(mut self, rule: ApprovalRule) -> Self {
        self.approval_rule = rule;
        self
    }

    /// Options with strict gender handling.
    pub fn strict() -> Self {
        Self {
            gender_mode: GenderMode::Strict,
            ..Default::default()
        }
    }
}
