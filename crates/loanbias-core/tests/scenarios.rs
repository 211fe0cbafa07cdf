//! Concrete decision scenarios around bias injection.

use loanbias_core::{
    DecisionRule, apply_group_bias, apply_selection_bias, detect_bias, inject_bias, penalize,
};
use loanbias_model::{
    Applicant, ApprovalRule, BiasMetrics, BiasThresholds, CreditScoreBias, Gender, GenderBias,
    GroupBias, IncomeBias, NumericColumn, SelectionBias, SelectionDirection,
};

fn female(credit_score: i32, income: f64) -> Applicant {
    Applicant {
        age: 36,
        gender: Gender::Female,
        occupation: "Teacher".to_string(),
        education_level: "Master's".to_string(),
        marital_status: "Married".to_string(),
        income,
        credit_score,
    }
}

fn with_approval_rates(male: f64, female: f64) -> BiasMetrics {
    BiasMetrics {
        gender_bias: GenderBias {
            male_approval_rate: male,
            female_approval_rate: female,
        },
        income_bias: IncomeBias::default(),
        credit_score_bias: CreditScoreBias::default(),
    }
}

#[test]
fn injection_without_decision_flip() {
    let rule = ApprovalRule::default();
    let original = female(600, 40_000.0);
    let biased = penalize(&original);

    assert_eq!(biased.credit_score, 580);
    assert_eq!(biased.income, 36_000.0);
    assert!(!rule.is_approved(&original));
    assert!(!rule.is_approved(&biased));
}

#[test]
fn injection_flips_decision_at_boundary() {
    let rule = ApprovalRule::default();
    let original = vec![female(670, 55_000.0)];
    let biased = inject_bias(&original);

    assert_eq!(biased[0].credit_score, 650);
    assert_eq!(biased[0].income, 49_500.0);
    assert_eq!(rule.decide_all(&original), vec![true]);
    assert_eq!(rule.decide_all(&biased), vec![false]);
}

#[test]
fn gender_bias_flag_is_exclusive_at_threshold() {
    let thresholds = BiasThresholds {
        approval_rate: 0.25,
        ..Default::default()
    };
    // Exactly at the threshold: not flagged.
    assert!(!detect_bias(&with_approval_rates(0.5, 0.25), &thresholds).gender_bias);
    // Just above: flagged.
    assert!(detect_bias(&with_approval_rates(0.5, 0.125), &thresholds).gender_bias);
    // Below: not flagged.
    assert!(!detect_bias(&with_approval_rates(0.5, 0.375), &thresholds).gender_bias);
}

#[test]
fn default_approval_threshold_is_five_points() {
    let thresholds = BiasThresholds::default();
    assert!(detect_bias(&with_approval_rates(0.5, 0.4375), &thresholds).gender_bias);
    assert!(!detect_bias(&with_approval_rates(0.5, 0.46875), &thresholds).gender_bias);
}

#[test]
fn layered_group_and_selection_bias() {
    let male = Applicant {
        gender: Gender::Male,
        ..female(700, 60_000.0)
    };
    let applicants = vec![male, female(700, 60_000.0), female(480, 15_000.0)];

    let penalized = inject_bias(&applicants);
    assert_eq!(penalized[2].credit_score, 500);
    assert_eq!(penalized[2].income, 20_000.0);

    let group = GroupBias::new(NumericColumn::Income, 0.2).expect("valid group bias");
    let grouped = apply_group_bias(&penalized, &group);
    assert_eq!(grouped[0].income, 72_000.0);
    assert_eq!(grouped[1].income, 43_200.0);

    let selection =
        SelectionBias::new(NumericColumn::Income, 20_000.0, SelectionDirection::Above)
            .expect("valid selection bias");
    let selected = apply_selection_bias(&grouped, &selection);
    assert_eq!(selected.len(), 2);
    assert_eq!(selected[0].gender, Gender::Male);

    let rule = ApprovalRule::default();
    assert!(rule.is_approved(&selected[0]));
    assert!(!rule.is_approved(&selected[1]));
}
