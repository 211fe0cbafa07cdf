//! Loan decision rule.

use loanbias_model::{Applicant, ApprovalRule};

/// Decides whether a single application is approved.
pub trait DecisionRule {
    fn is_approved(&self, applicant: &Applicant) -> bool;

    /// Decisions parallel to `applicants`.
    fn decide_all(&self, applicants: &[Applicant]) -> Vec<bool> {
        applicants
            .iter()
            .map(|applicant| self.is_approved(applicant))
            .collect()
    }
}

impl DecisionRule for ApprovalRule {
    /// Approved iff credit score and income both meet their minimums
    /// (inclusive).
    fn is_approved(&self, applicant: &Applicant) -> bool {
        approves(self, applicant.credit_score, applicant.income)
    }
}

/// Apply the rule to bare values, as submitted through a single application
/// form.
pub fn approves(rule: &ApprovalRule, credit_score: i32, income: f64) -> bool {
    credit_score >= rule.min_credit_score && income >= rule.min_income
}
