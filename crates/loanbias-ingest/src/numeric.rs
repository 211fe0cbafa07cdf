//! Numeric field parsing.

use loanbias_model::ModelError;

/// Parse an integer field; integral float spellings such as `650.0` are
/// accepted.
pub fn parse_integer(field: &'static str, raw: &str) -> Result<i64, ModelError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ModelError::invalid(field, raw, "missing value"));
    }
    if let Ok(parsed) = value.parse::<i64>() {
        return Ok(parsed);
    }
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() && parsed.fract() == 0.0 => {
            if parsed < i64::MIN as f64 || parsed > i64::MAX as f64 {
                Err(ModelError::invalid(field, raw, "out of range"))
            } else {
                Ok(parsed as i64)
            }
        }
        Ok(_) => Err(ModelError::invalid(field, raw, "not an integer")),
        Err(_) => Err(ModelError::invalid(field, raw, "not a number")),
    }
}

/// Parse a floating-point field, rejecting NaN and infinities.
pub fn parse_number(field: &'static str, raw: &str) -> Result<f64, ModelError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ModelError::invalid(field, raw, "missing value"));
    }
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        Ok(_) => Err(ModelError::invalid(field, raw, "not a finite number")),
        Err(_) => Err(ModelError::invalid(field, raw, "not a number")),
    }
}
