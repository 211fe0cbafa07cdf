//! Distribution and disparity value types.

use serde::{Deserialize, Serialize};

/// One labelled count in a [`Distribution`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub label: String,
    pub count: usize,
}

/// Ordered category counts. Counts sum to the size of the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution {
    pub buckets: Vec<Bucket>,
}

impl Distribution {
    pub fn new(buckets: Vec<Bucket>) -> Self {
        Self { buckets }
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.count).sum()
    }

    /// Count for a label; absent labels count as zero.
    pub fn get(&self, label: &str) -> usize {
        self.buckets
            .iter()
            .find(|bucket| bucket.label == label)
            .map_or(0, |bucket| bucket.count)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|bucket| bucket.label.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GenderBias {
    pub male_approval_rate: f64,
    pub female_approval_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeBias {
    pub male_avg_income: f64,
    pub female_avg_income: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditScoreBias {
    pub male_avg_credit: f64,
    pub female_avg_credit: f64,
}

/// Male/female disparity statistics for one dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BiasMetrics {
    pub gender_bias: GenderBias,
    pub income_bias: IncomeBias,
    pub credit_score_bias: CreditScoreBias,
}

impl BiasMetrics {
    pub fn approval_rate_gap(&self) -> f64 {
        (self.gender_bias.male_approval_rate - self.gender_bias.female_approval_rate).abs()
    }

    pub fn income_gap(&self) -> f64 {
        (self.income_bias.male_avg_income - self.income_bias.female_avg_income).abs()
    }

    pub fn credit_score_gap(&self) -> f64 {
        (self.credit_score_bias.male_avg_credit - self.credit_score_bias.female_avg_credit).abs()
    }
}

/// Whether each disparity exceeds its threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasFlags {
    pub gender_bias: bool,
    pub income_bias: bool,
    pub credit_score_bias: bool,
}

impl BiasFlags {
    pub fn any(&self) -> bool {
        self.gender_bias || self.income_bias || self.credit_score_bias
    }

    pub fn count(&self) -> usize {
        [self.gender_bias, self.income_bias, self.credit_score_bias]
            .iter()
            .filter(|flag| **flag)
            .count()
    }
}

/// Distributions consumed by chart renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizationData {
    pub gender_distribution: Distribution,
    pub credit_score_ranges: Distribution,
    pub income_ranges: Distribution,
}
