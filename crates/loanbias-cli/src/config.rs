//! Analysis options from a TOML file plus command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use loanbias_model::{AnalysisOptions, GenderMode};

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionOverrides {
    pub strict_gender: bool,
    pub approval_threshold: Option<f64>,
    pub income_threshold: Option<f64>,
    pub credit_threshold: Option<f64>,
}

/// Load options from `path`, or defaults when no file is given.
pub fn load_options(path: Option<&Path>) -> Result<AnalysisOptions> {
    let Some(path) = path else {
        return Ok(AnalysisOptions::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let options: AnalysisOptions =
        toml::from_str(&text).with_context(|| format!("parse config: {}", path.display()))?;
    debug!(path = %path.display(), ?options, "loaded analysis options");
    Ok(options)
}

/// Apply overrides and check that every threshold is a non-negative number.
pub fn resolve_options(
    mut options: AnalysisOptions,
    overrides: OptionOverrides,
) -> Result<AnalysisOptions> {
    if overrides.strict_gender {
        options.gender_mode = GenderMode::Strict;
    }
    if let Some(value) = overrides.approval_threshold {
        options.thresholds.approval_rate = value;
    }
    if let Some(value) = overrides.income_threshold {
        options.thresholds.income = value;
    }
    if let Some(value) = overrides.credit_threshold {
        options.thresholds.credit_score = value;
    }
    let thresholds = [
        ("approval rate", options.thresholds.approval_rate),
        ("income", options.thresholds.income),
        ("credit score", options.thresholds.credit_score),
    ];
    for (name, value) in thresholds {
        if !value.is_finite() || value < 0.0 {
            bail!("{name} threshold must be a non-negative number, got {value}");
        }
    }
    if !options.approval_rule.min_income.is_finite() {
        bail!("minimum income must be a finite number");
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let options = load_options(None).expect("defaults");
        assert_eq!(options, AnalysisOptions::default());
    }

    #[test]
    fn overrides_take_precedence() {
        let options = resolve_options(
            AnalysisOptions::default(),
            OptionOverrides {
                strict_gender: true,
                income_threshold: Some(2_500.0),
                ..Default::default()
            },
        )
        .expect("resolve");
        assert_eq!(options.gender_mode, GenderMode::Strict);
        assert_eq!(options.thresholds.income, 2_500.0);
        assert_eq!(options.thresholds.approval_rate, 0.05);
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let error = resolve_options(
            AnalysisOptions::default(),
            OptionOverrides {
                approval_threshold: Some(-0.1),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(error.to_string().contains("approval rate threshold"));
    }
}
