use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("invalid record: field `{field}` has value {value:?} ({reason})")]
    InvalidRecord {
        field: &'static str,
        value: String,
        reason: String,
    },
    #[error("unsupported {field} category: {value:?}")]
    UnsupportedCategory { field: &'static str, value: String },
    #[error("dataset is empty")]
    EmptyDataset,
}

impl ModelError {
    pub fn invalid(
        field: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidRecord {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
