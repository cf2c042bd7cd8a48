use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("failed to parse provider response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("provider response field '{field}' is not an array")]
    InvalidField { field: &'static str },
}

pub type ProviderResult<T> = Result<T, SearchError>;
