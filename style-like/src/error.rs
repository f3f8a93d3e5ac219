#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
    #[error("invalid {field}: {value:?}")]
    InvalidEnum { field: &'static str, value: String },
    #[error("invalid {field}: {value}")]
    InvalidNumber { field: &'static str, value: f64 },
    #[error("missing required option: {0}")]
    MissingField(&'static str),
    #[error("invalid image source: {0}")]
    InvalidSource(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StyleError {
    pub(crate) fn number(field: &'static str, value: f64) -> Self {
        StyleError::InvalidNumber { field, value }
    }
}
