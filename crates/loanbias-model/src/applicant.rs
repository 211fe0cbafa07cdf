//! Loan applicant record.
//!
//! An [`Applicant`] is immutable once loaded. Transformations such as bias
//! injection build new records instead of mutating the originals, so an
//! original dataset stays available for comparison.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::options::GenderMode;

/// Applicant gender.
///
/// Only the exact labels `Male` and `Female` are recognized. Any other label
/// is kept verbatim in [`Gender::Other`] so exports reproduce it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    Other(String),
}

impl Gender {
    pub const MALE_LABEL: &'static str = "Male";
    pub const FEMALE_LABEL: &'static str = "Female";
    pub const OTHER_LABEL: &'static str = "Other";

    /// Parse a raw label, rejecting unrecognized values in strict mode.
    pub fn parse(raw: &str, mode: GenderMode) -> Result<Self> {
        let gender = Self::from(raw.to_string());
        if mode == GenderMode::Strict && gender.is_other() {
            return Err(ModelError::UnsupportedCategory {
                field: "gender",
                value: raw.to_string(),
            });
        }
        Ok(gender)
    }

    /// Label as written in the source data.
    pub fn as_str(&self) -> &str {
        match self {
            Gender::Male => Self::MALE_LABEL,
            Gender::Female => Self::FEMALE_LABEL,
            Gender::Other(label) => label,
        }
    }

    /// Distribution bucket for this value: `Male`, `Female` or `Other`.
    pub fn category(&self) -> &'static str {
        match self {
            Gender::Male => Self::MALE_LABEL,
            Gender::Female => Self::FEMALE_LABEL,
            Gender::Other(_) => Self::OTHER_LABEL,
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, Gender::Other(_))
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        match value.as_str() {
            Self::MALE_LABEL => Gender::Male,
            Self::FEMALE_LABEL => Gender::Female,
            _ => Gender::Other(value),
        }
    }
}

impl From<Gender> for String {
    fn from(value: Gender) -> Self {
        match value {
            Gender::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One loan applicant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub age: u32,
    pub gender: Gender,
    pub occupation: String,
    pub education_level: String,
    pub marital_status: String,
    pub income: f64,
    pub credit_score: i32,
}

impl Applicant {
    /// Column names in tabular order.
    pub const FIELD_NAMES: [&'static str; 7] = [
        "age",
        "gender",
        "occupation",
        "education_level",
        "marital_status",
        "income",
        "credit_score",
    ];

    /// Check numeric fields against their domains.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidRecord`] for a negative or non-finite
    /// income, or a negative credit score.
    pub fn validate(&self) -> Result<()> {
        if !self.income.is_finite() {
            return Err(ModelError::invalid("income", self.income, "not a finite number"));
        }
        if self.income < 0.0 {
            return Err(ModelError::invalid("income", self.income, "must not be negative"));
        }
        if self.credit_score < 0 {
            return Err(ModelError::invalid(
                "credit_score",
                self.credit_score,
                "must not be negative",
            ));
        }
        Ok(())
    }

    pub fn is_female(&self) -> bool {
        self.gender == Gender::Female
    }

    pub fn is_male(&self) -> bool {
        self.gender == Gender::Male
    }
}
