//! Distribution and disparity statistics over a dataset.
//!
//! All functions are order-independent aggregates. Averages and rates over an
//! empty subgroup are `0.0`.

use std::collections::BTreeMap;

use loanbias_model::{
    Applicant, BiasMetrics, Bucket, CreditScoreBias, Distribution, Gender, GenderBias, IncomeBias,
    VisualizationData,
};

use crate::decision::DecisionRule;

/// Width of a credit score bucket (`650-699`).
pub const CREDIT_SCORE_BUCKET_WIDTH: i64 = 50;

/// Width of an income bucket (`40000-49999`).
pub const INCOME_BUCKET_WIDTH: i64 = 10_000;

/// Count per gender category: `Male` and `Female` are always listed, `Other`
/// only when present.
pub fn gender_distribution(applicants: &[Applicant]) -> Distribution {
    let mut male = 0usize;
    let mut female = 0usize;
    let mut other = 0usize;
    for applicant in applicants {
        match applicant.gender {
            Gender::Male => male += 1,
            Gender::Female => female += 1,
            Gender::Other(_) => other += 1,
        }
    }
    let mut buckets = vec![
        bucket(Gender::MALE_LABEL, male),
        bucket(Gender::FEMALE_LABEL, female),
    ];
    if other > 0 {
        buckets.push(bucket(Gender::OTHER_LABEL, other));
    }
    Distribution::new(buckets)
}

fn bucket(label: &str, count: usize) -> Bucket {
    Bucket {
        label: label.to_string(),
        count,
    }
}

/// Start of the fixed-width bucket containing `value`.
pub fn bucket_start(value: i64, width: i64) -> i64 {
    value.div_euclid(width) * width
}

/// Label for the bucket starting at `start`, e.g. `650-699`.
pub fn bucket_label(start: i64, width: i64) -> String {
    format!("{}-{}", start, start + width - 1)
}

/// Count values per fixed-width bucket, ordered by bucket start. Only
/// non-empty buckets are listed.
pub fn bucketed_distribution(values: impl IntoIterator<Item = i64>, width: i64) -> Distribution {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(bucket_start(value, width)).or_insert(0) += 1;
    }
    Distribution::new(
        counts
            .into_iter()
            .map(|(start, count)| Bucket {
                label: bucket_label(start, width),
                count,
            })
            .collect(),
    )
}

pub fn credit_score_distribution(applicants: &[Applicant]) -> Distribution {
    bucketed_distribution(
        applicants.iter().map(|a| i64::from(a.credit_score)),
        CREDIT_SCORE_BUCKET_WIDTH,
    )
}

pub fn income_distribution(applicants: &[Applicant]) -> Distribution {
    bucketed_distribution(
        applicants.iter().map(|a| a.income.floor() as i64),
        INCOME_BUCKET_WIDTH,
    )
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

pub fn average_income(applicants: &[Applicant], gender: &Gender) -> f64 {
    mean(
        applicants
            .iter()
            .filter(|a| &a.gender == gender)
            .map(|a| a.income),
    )
}

pub fn average_credit_score(applicants: &[Applicant], gender: &Gender) -> f64 {
    mean(
        applicants
            .iter()
            .filter(|a| &a.gender == gender)
            .map(|a| f64::from(a.credit_score)),
    )
}

/// Fraction of `gender` records whose parallel entry in `approvals` is true.
pub fn approval_rate(applicants: &[Applicant], approvals: &[bool], gender: &Gender) -> f64 {
    debug_assert_eq!(applicants.len(), approvals.len());
    mean(
        applicants
            .iter()
            .zip(approvals)
            .filter(|(a, _)| &a.gender == gender)
            .map(|(_, approved)| if *approved { 1.0 } else { 0.0 }),
    )
}

/// Male/female approval rates, average incomes and average credit scores.
pub fn compute_bias_metrics<R: DecisionRule + ?Sized>(
    applicants: &[Applicant],
    rule: &R,
) -> BiasMetrics {
    let approvals = rule.decide_all(applicants);
    BiasMetrics {
        gender_bias: GenderBias {
            male_approval_rate: approval_rate(applicants, &approvals, &Gender::Male),
            female_approval_rate: approval_rate(applicants, &approvals, &Gender::Female),
        },
        income_bias: IncomeBias {
            male_avg_income: average_income(applicants, &Gender::Male),
            female_avg_income: average_income(applicants, &Gender::Female),
        },
        credit_score_bias: CreditScoreBias {
            male_avg_credit: average_credit_score(applicants, &Gender::Male),
            female_avg_credit: average_credit_score(applicants, &Gender::Female),
        },
    }
}

pub fn visualization_data(applicants: &[Applicant]) -> VisualizationData {
    VisualizationData {
        gender_distribution: gender_distribution(applicants),
        credit_score_ranges: credit_score_distribution(applicants),
        income_ranges: income_distribution(applicants),
    }
}
