//! Bias detection and metric comparison.

use loanbias_model::{BiasFlags, BiasMetrics, BiasThresholds, MetricsComparison, MetricsDelta};

/// Flag each metric whose male/female gap strictly exceeds its threshold.
pub fn detect_bias(metrics: &BiasMetrics, thresholds: &BiasThresholds) -> BiasFlags {
    BiasFlags {
        gender_bias: metrics.approval_rate_gap() > thresholds.approval_rate,
        income_bias: metrics.income_gap() > thresholds.income,
        credit_score_bias: metrics.credit_score_gap() > thresholds.credit_score,
    }
}

/// Signed per-metric change from `original` to `biased`, with both sides'
/// flags.
pub fn compare_metrics(
    original: &BiasMetrics,
    biased: &BiasMetrics,
    thresholds: &BiasThresholds,
) -> MetricsComparison {
    MetricsComparison {
        delta: MetricsDelta {
            male_approval_rate: biased.gender_bias.male_approval_rate
                - original.gender_bias.male_approval_rate,
            female_approval_rate: biased.gender_bias.female_approval_rate
                - original.gender_bias.female_approval_rate,
            male_avg_income: biased.income_bias.male_avg_income
                - original.income_bias.male_avg_income,
            female_avg_income: biased.income_bias.female_avg_income
                - original.income_bias.female_avg_income,
            male_avg_credit: biased.credit_score_bias.male_avg_credit
                - original.credit_score_bias.male_avg_credit,
            female_avg_credit: biased.credit_score_bias.female_avg_credit
                - original.credit_score_bias.female_avg_credit,
        },
        original_flags: detect_bias(original, thresholds),
        biased_flags: detect_bias(biased, thresholds),
    }
}
