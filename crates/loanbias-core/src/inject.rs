//! Synthetic gender bias injection.
//!
//! Every `Female` record gets a lower credit score and income, clamped at
//! fixed floors. Other records are copied unchanged. The input is never
//! mutated.

use tracing::debug;

use loanbias_model::Applicant;

/// Lowest credit score the penalty can produce.
pub const CREDIT_SCORE_FLOOR: i32 = 500;

/// Points subtracted from a penalized credit score.
pub const CREDIT_SCORE_PENALTY: i32 = 20;

/// Lowest income the penalty can produce.
pub const INCOME_FLOOR: f64 = 20_000.0;

/// Multiplier applied to a penalized income before rounding.
pub const INCOME_FACTOR: f64 = 0.9;

/// `max(CREDIT_SCORE_FLOOR, score - CREDIT_SCORE_PENALTY)`. A score below the
/// floor comes out at the floor.
pub fn penalize_credit_score(score: i32) -> i32 {
    score
        .saturating_sub(CREDIT_SCORE_PENALTY)
        .max(CREDIT_SCORE_FLOOR)
}

/// `max(INCOME_FLOOR, round(income * INCOME_FACTOR))`. An income below the
/// floor comes out at the floor.
pub fn penalize_income(income: f64) -> f64 {
    (income * INCOME_FACTOR).round().max(INCOME_FLOOR)
}

/// Biased copy of one record.
pub fn penalize(applicant: &Applicant) -> Applicant {
    if !applicant.is_female() {
        return applicant.clone();
    }
    Applicant {
        credit_score: penalize_credit_score(applicant.credit_score),
        income: penalize_income(applicant.income),
        ..applicant.clone()
    }
}

/// Build the biased dataset: same length and order as `applicants`.
pub fn inject_bias(applicants: &[Applicant]) -> Vec<Applicant> {
    let biased: Vec<Applicant> = applicants.iter().map(penalize).collect();
    let penalized = applicants.iter().filter(|a| a.is_female()).count();
    debug!(records = biased.len(), penalized, "injected gender bias");
    biased
}

#[cfg(test)]
mod tests {
    use super::*;
    use loanbias_model::Gender;

    fn applicant(gender: Gender, credit_score: i32, income: f64) -> Applicant {
        Applicant {
            age: 28,
            gender,
            occupation: "Designer".to_string(),
            education_level: "Bachelor's".to_string(),
            marital_status: "Single".to_string(),
            income,
            credit_score,
        }
    }

    #[test]
    fn female_records_are_penalized() {
        let biased = penalize(&applicant(Gender::Female, 600, 40_000.0));
        assert_eq!(biased.credit_score, 580);
        assert_eq!(biased.income, 36_000.0);
        assert_eq!(biased.occupation, "Designer");
    }

    #[test]
    fn penalty_clamps_at_floors() {
        assert_eq!(penalize_credit_score(510), 500);
        assert_eq!(penalize_credit_score(520), 500);
        assert_eq!(penalize_credit_score(521), 501);
        assert_eq!(penalize_income(21_000.0), 20_000.0);
        assert_eq!(penalize_income(22_500.0), 20_250.0);
    }

    #[test]
    fn values_below_floor_land_on_floor() {
        assert_eq!(penalize_credit_score(480), 500);
        assert_eq!(penalize_credit_score(500), 500);
        assert_eq!(penalize_income(15_000.0), 20_000.0);
        assert_eq!(penalize_income(0.0), 20_000.0);
    }

    #[test]
    fn income_rounds_half_away_from_zero() {
        // 50_005 * 0.9 = 45_004.5
        assert_eq!(penalize_income(50_005.0), 45_005.0);
        assert_eq!(penalize_income(33_333.0), 30_000.0);
    }

    #[test]
    fn male_and_other_records_are_copied() {
        let male = applicant(Gender::Male, 600, 40_000.0);
        let other = applicant(Gender::Other("Non-binary".to_string()), 600, 40_000.0);
        assert_eq!(penalize(&male), male);
        assert_eq!(penalize(&other), other);
    }

    #[test]
    fn input_dataset_is_untouched() {
        let original = vec![
            applicant(Gender::Female, 700, 60_000.0),
            applicant(Gender::Male, 700, 60_000.0),
        ];
        let snapshot = original.clone();
        let biased = inject_bias(&original);
        assert_eq!(original, snapshot);
        assert_eq!(biased.len(), 2);
        assert_eq!(biased[0].credit_score, 680);
        assert_eq!(biased[1], original[1]);
    }
}
