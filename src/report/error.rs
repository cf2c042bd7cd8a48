use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report content is empty")]
    EmptyContent,

    #[error("report content too short: {len} chars (minimum {min})")]
    ContentTooShort { len: usize, min: usize },

    #[error("malformed report payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
