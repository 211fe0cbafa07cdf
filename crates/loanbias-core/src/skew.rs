//! Group and selection bias over the numeric applicant columns.
//!
//! Both are pure: the input slice is never mutated.

use tracing::debug;

use loanbias_model::{Applicant, GroupBias, NumericColumn, SelectionBias};

/// Copy of `applicant` with `column` multiplied by `factor` and rounded to
/// whole units.
pub fn scale_column(applicant: &Applicant, column: NumericColumn, factor: f64) -> Applicant {
    let scaled = (column.value(applicant) * factor).round();
    let mut result = applicant.clone();
    match column {
        NumericColumn::Age => result.age = scaled.max(0.0) as u32,
        NumericColumn::Income => result.income = scaled.max(0.0),
        NumericColumn::CreditScore => result.credit_score = scaled.max(0.0) as i32,
    }
    result
}

/// Scale the target column up for male records and down for female records.
pub fn apply_group_bias(applicants: &[Applicant], bias: &GroupBias) -> Vec<Applicant> {
    let biased: Vec<Applicant> = applicants
        .iter()
        .map(|applicant| match bias.factor(&applicant.gender) {
            Some(factor) => scale_column(applicant, bias.target, factor),
            None => applicant.clone(),
        })
        .collect();
    debug!(
        records = biased.len(),
        target = %bias.target,
        strength = bias.strength,
        "injected group bias"
    );
    biased
}

/// Keep only the records on the selected side of the threshold, in order.
pub fn apply_selection_bias(applicants: &[Applicant], bias: &SelectionBias) -> Vec<Applicant> {
    let kept: Vec<Applicant> = applicants
        .iter()
        .filter(|applicant| bias.keeps(applicant))
        .cloned()
        .collect();
    debug!(
        records = applicants.len(),
        kept = kept.len(),
        column = %bias.column,
        threshold = bias.threshold,
        "injected selection bias"
    );
    kept
}
