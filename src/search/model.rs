use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::scoring::{CredibilityScorer, CredibilityTier, clamp_score, parse_published_date};

use super::error::{ProviderResult, SearchError};

const ORGANIC_FIELD: &str = "organic";

/// One hit as returned by the search provider.
///
/// Every field is optional; missing or `null` values are tolerated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSearchHit {
    pub title: Option<String>,
    pub link: Option<String>,
    pub snippet: Option<String>,
    pub date: Option<String>,
}

impl RawSearchHit {
    pub fn new(title: &str, link: &str, snippet: &str, date: Option<&str>) -> Self {
        Self {
            title: Some(title.to_string()),
            link: Some(link.to_string()),
            snippet: Some(snippet.to_string()),
            date: date.map(str::to_string),
        }
    }
}

/// Extracts the `organic` hits from a provider JSON body.
///
/// A body without an `organic` field yields no hits. Entries that are not objects are
/// skipped.
pub fn parse_provider_response(body: &str) -> ProviderResult<Vec<RawSearchHit>> {
    let value: Value = serde_json::from_str(body)?;

    let organic = match value.get(ORGANIC_FIELD) {
        None | Some(Value::Null) => {
            debug!("Provider response has no organic results");
            return Ok(Vec::new());
        }
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(SearchError::InvalidField {
                field: ORGANIC_FIELD,
            });
        }
    };

    let hits = organic
        .iter()
        .filter_map(|item| match serde_json::from_value::<RawSearchHit>(item.clone()) {
            Ok(hit) => Some(hit),
            Err(e) => {
                warn!(error = %e, "Skipping malformed provider hit");
                None
            }
        })
        .collect();

    Ok(hits)
}

/// A scored, immutable search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    title: String,
    url: String,
    snippet: String,
    published_date: Option<String>,
    credibility_score: f32,
}

impl SearchResult {
    /// Scores `hit` with the scorer's clock.
    pub fn from_hit(hit: RawSearchHit, scorer: &CredibilityScorer) -> Self {
        Self::from_hit_at(hit, scorer, scorer.now())
    }

    /// Scores `hit` as of `now`.
    ///
    /// Relative dates ("3 days ago") are resolved against `now` and stored in RFC 3339
    /// form; unparseable dates are dropped after contributing a neutral freshness.
    pub fn from_hit_at(hit: RawSearchHit, scorer: &CredibilityScorer, now: DateTime<Utc>) -> Self {
        let title = hit.title.unwrap_or_default();
        let url = hit.link.unwrap_or_default();
        let snippet = hit.snippet.unwrap_or_default();
        let raw_date = hit.date.filter(|d| !d.trim().is_empty());

        let credibility_score = scorer.score_at(&url, &snippet, raw_date.as_deref(), now);
        let published_date = raw_date
            .as_deref()
            .and_then(|raw| parse_published_date(raw, now))
            .map(|date| date.to_rfc3339());

        Self {
            title,
            url,
            snippet,
            published_date,
            credibility_score,
        }
    }

    /// Builds a result with a precomputed score (clamped into range).
    pub fn with_score(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
        published_date: Option<String>,
        credibility_score: f32,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
            published_date,
            credibility_score: clamp_score(credibility_score),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn snippet(&self) -> &str {
        &self.snippet
    }

    /// Publication date in RFC 3339 form, if one could be parsed.
    pub fn published_date(&self) -> Option<&str> {
        self.published_date.as_deref()
    }

    pub fn credibility_score(&self) -> f32 {
        self.credibility_score
    }

    pub fn tier(&self) -> CredibilityTier {
        CredibilityTier::from_score(self.credibility_score)
    }

    /// Returns `true` if the score reaches `threshold`.
    pub fn is_trusted(&self, threshold: f32) -> bool {
        self.credibility_score >= threshold
    }
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.url)
    }
}

/// Scores a batch of provider hits, preserving provider order.
pub fn score_hits(
    hits: impl IntoIterator<Item = RawSearchHit>,
    scorer: &CredibilityScorer,
    now: DateTime<Utc>,
) -> Vec<SearchResult> {
    hits.into_iter()
        .map(|hit| SearchResult::from_hit_at(hit, scorer, now))
        .collect()
}

/// Concatenates result batches, keeping the first result seen for each URL.
///
/// Results with an empty URL are dropped.
pub fn merge_results(batches: impl IntoIterator<Item = Vec<SearchResult>>) -> Vec<SearchResult> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for batch in batches {
        for result in batch {
            if result.url.is_empty() || !seen.insert(result.url.clone()) {
                continue;
            }
            merged.push(result);
        }
    }

    merged
}

/// Sorts by descending credibility; ties keep their original order.
pub fn rank_by_credibility(results: &mut [SearchResult]) {
    results.sort_by(|a, b| b.credibility_score.total_cmp(&a.credibility_score));
}
