//! Optional bias kinds that can be layered on top of the gender penalty.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::applicant::{Applicant, Gender};
use crate::error::{ModelError, Result};

/// Default multiplier offset for [`GroupBias`].
pub const DEFAULT_GROUP_STRENGTH: f64 = 0.8;

/// Numeric applicant columns a bias can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericColumn {
    Age,
    Income,
    CreditScore,
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 3] = [Self::Age, Self::Income, Self::CreditScore];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Income => "income",
            Self::CreditScore => "credit_score",
        }
    }

    pub fn value(self, applicant: &Applicant) -> f64 {
        match self {
            Self::Age => f64::from(applicant.age),
            Self::Income => applicant.income,
            Self::CreditScore => f64::from(applicant.credit_score),
        }
    }
}

impl fmt::Display for NumericColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of a selection threshold survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionDirection {
    /// Keep values strictly greater than the threshold.
    #[default]
    Above,
    /// Keep values strictly less than the threshold.
    Below,
}

impl SelectionDirection {
    pub fn keeps(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::Above => value > threshold,
            Self::Below => value < threshold,
        }
    }
}

/// Systematic group difference: male values of `target` are scaled by
/// `1 + strength`, female values by `1 - strength`. Other genders are left
/// alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupBias {
    pub target: NumericColumn,
    pub strength: f64,
}

impl GroupBias {
    /// # Errors
    ///
    /// [`ModelError::InvalidRecord`] unless `strength` lies in `0..=1`.
    pub fn new(target: NumericColumn, strength: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&strength) {
            return Err(ModelError::invalid(
                "group_strength",
                strength,
                "must be between 0 and 1",
            ));
        }
        Ok(Self { target, strength })
    }

    /// Multiplier for one record, `None` when the record is not in either group.
    pub fn factor(&self, gender: &Gender) -> Option<f64> {
        match gender {
            Gender::Male => Some(1.0 + self.strength),
            Gender::Female => Some(1.0 - self.strength),
            Gender::Other(_) => None,
        }
    }
}

/// Sampling bias: only records on one side of a threshold are kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionBias {
    pub column: NumericColumn,
    pub threshold: f64,
    #[serde(default)]
    pub direction: SelectionDirection,
}

impl SelectionBias {
    /// # Errors
    ///
    /// [`ModelError::InvalidRecord`] when `threshold` is not finite.
    pub fn new(
        column: NumericColumn,
        threshold: f64,
        direction: SelectionDirection,
    ) -> Result<Self> {
        if !threshold.is_finite() {
            return Err(ModelError::invalid(
                "selection_threshold",
                threshold,
                "must be a finite number",
            ));
        }
        Ok(Self {
            column,
            threshold,
            direction,
        })
    }

    pub fn keeps(&self, applicant: &Applicant) -> bool {
        self.direction
            .keeps(self.column.value(applicant), self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_strength_must_be_a_fraction() {
        assert!(GroupBias::new(NumericColumn::Income, 0.0).is_ok());
        assert!(GroupBias::new(NumericColumn::Income, 1.0).is_ok());
        assert!(GroupBias::new(NumericColumn::Income, 1.5).is_err());
        assert!(GroupBias::new(NumericColumn::Income, -0.1).is_err());
        assert!(GroupBias::new(NumericColumn::Income, f64::NAN).is_err());
    }

    #[test]
    fn group_factor_by_gender() {
        let bias = GroupBias::new(NumericColumn::CreditScore, 0.25).expect("valid");
        assert_eq!(bias.factor(&Gender::Male), Some(1.25));
        assert_eq!(bias.factor(&Gender::Female), Some(0.75));
        assert_eq!(bias.factor(&Gender::Other("Non-binary".to_string())), None);
    }

    #[test]
    fn selection_is_strict_on_both_sides() {
        assert!(SelectionDirection::Above.keeps(651.0, 650.0));
        assert!(!SelectionDirection::Above.keeps(650.0, 650.0));
        assert!(SelectionDirection::Below.keeps(649.0, 650.0));
        assert!(!SelectionDirection::Below.keeps(650.0, 650.0));
    }

    #[test]
    fn selection_rejects_non_finite_threshold() {
        let error = SelectionBias::new(
            NumericColumn::Income,
            f64::INFINITY,
            SelectionDirection::Above,
        )
        .unwrap_err();
        assert!(error.to_string().contains("selection_threshold"));
    }

    #[test]
    fn column_names_match_csv_header() {
        for column in NumericColumn::ALL {
            assert!(Applicant::FIELD_NAMES.contains(&column.as_str()));
        }
    }
}
