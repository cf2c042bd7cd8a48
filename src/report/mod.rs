//! Synthesised research reports and their validity rules.

pub mod error;

pub use error::ReportError;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::search::SearchResult;

/// A cited source attached to a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSource {
    pub title: String,
    pub url: String,
    pub credibility_score: f32,
}

impl From<&SearchResult> for ReportSource {
    fn from(result: &SearchResult) -> Self {
        Self {
            title: result.title().to_string(),
            url: result.url().to_string(),
            credibility_score: result.credibility_score(),
        }
    }
}

/// Markdown answer to a research query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub query: String,
    pub content: String,
    pub sources: Vec<ReportSource>,
    pub timestamp: DateTime<Utc>,
}

impl Report {
    pub fn new(
        query: impl Into<String>,
        content: impl Into<String>,
        sources: Vec<ReportSource>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            query: query.into(),
            content: content.into(),
            sources,
            timestamp,
        }
    }

    /// Builds a report citing `results` in order.
    pub fn from_results(
        query: impl Into<String>,
        content: impl Into<String>,
        results: &[SearchResult],
        timestamp: DateTime<Utc>,
    ) -> Self {
        let sources = results.iter().map(ReportSource::from).collect();
        Self::new(query, content, sources, timestamp)
    }

    /// Parses a report produced by the generator collaborator.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Length of the trimmed content, in characters.
    pub fn content_len(&self) -> usize {
        self.content.trim().chars().count()
    }

    /// Checks the content is non-empty and, unless `ignore_short_content`, at least
    /// `min_chars` long after trimming.
    pub fn validate(&self, min_chars: usize, ignore_short_content: bool) -> Result<(), ReportError> {
        let len = self.content_len();
        if len == 0 {
            return Err(ReportError::EmptyContent);
        }
        if !ignore_short_content && len < min_chars {
            return Err(ReportError::ContentTooShort {
                len,
                min: min_chars,
            });
        }
        Ok(())
    }
}
