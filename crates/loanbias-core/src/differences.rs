//! Column mean differences between an original and a derived dataset.

use std::collections::{BTreeMap, BTreeSet};

use loanbias_model::{Applicant, ColumnDifference, Differences};

/// Numeric columns compared by [`calculate_differences`].
pub const NUMERIC_COLUMNS: [&str; 3] = ["age", "income", "credit_score"];

fn numeric_value(applicant: &Applicant, column: &str) -> f64 {
    match column {
        "age" => f64::from(applicant.age),
        "income" => applicant.income,
        "credit_score" => f64::from(applicant.credit_score),
        _ => 0.0,
    }
}

fn mean_where(
    applicants: &[Applicant],
    column: &str,
    keep: impl Fn(&Applicant) -> bool,
) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for applicant in applicants.iter().filter(|a| keep(a)) {
        sum += numeric_value(applicant, column);
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}

/// Per numeric column: mean change per gender label, overall means and
/// overall change. Gender labels present in only one dataset compare against
/// a mean of zero.
pub fn calculate_differences(original: &[Applicant], biased: &[Applicant]) -> Differences {
    let labels: BTreeSet<&str> = original
        .iter()
        .chain(biased)
        .map(|a| a.gender.as_str())
        .collect();

    let mut differences = BTreeMap::new();
    for column in NUMERIC_COLUMNS {
        let mut mean_differences = BTreeMap::new();
        for label in &labels {
            let before = mean_where(original, column, |a| a.gender.as_str() == *label);
            let after = mean_where(biased, column, |a| a.gender.as_str() == *label);
            mean_differences.insert(
                (*label).to_string(),
                after.unwrap_or(0.0) - before.unwrap_or(0.0),
            );
        }
        let original_mean = mean_where(original, column, |_| true).unwrap_or(0.0);
        let biased_mean = mean_where(biased, column, |_| true).unwrap_or(0.0);
        differences.insert(
            column.to_string(),
            ColumnDifference {
                mean_differences,
                original_mean,
                biased_mean,
                total_change: biased_mean - original_mean,
            },
        );
    }
    differences
}
