use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::constants::{AUTHOR_SIGNAL_VALUE, CITATION_SIGNAL_VALUE};

use super::domain::{DomainTable, extract_domain};
use super::freshness::freshness_score;
use super::signals::SnippetSignals;
use super::types::{ScoreBreakdown, ScoringWeights, clamp_score};

/// Heuristic trust estimate for search results.
///
/// Combines domain authority, freshness, citation markers, academic vocabulary and
/// author credentials into a weighted sum clamped to `[0.1, 1.0]`. Scoring is pure for a
/// fixed `now`: use [`score_at`](Self::score_at) when determinism matters.
#[derive(Clone)]
pub struct CredibilityScorer {
    domains: DomainTable,
    weights: ScoringWeights,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for CredibilityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredibilityScorer")
            .field("overrides", &self.domains.overrides.len())
            .field("penalties", &self.domains.penalties.len())
            .field("tld_scores", &self.domains.tld_scores.len())
            .field("weights", &self.weights)
            .finish()
    }
}

impl Default for CredibilityScorer {
    fn default() -> Self {
        Self::new(DomainTable::default(), ScoringWeights::default())
    }
}

impl CredibilityScorer {
    pub fn new(domains: DomainTable, weights: ScoringWeights) -> Self {
        Self::with_clock(domains, weights, Arc::new(SystemClock))
    }

    pub fn with_clock(domains: DomainTable, weights: ScoringWeights, clock: Arc<dyn Clock>) -> Self {
        Self {
            domains,
            weights,
            clock,
        }
    }

    pub fn domains(&self) -> &DomainTable {
        &self.domains
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Current time according to the scorer's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Scores a result against the scorer's clock.
    pub fn score(&self, url: &str, snippet: &str, published_date: Option<&str>) -> f32 {
        self.score_at(url, snippet, published_date, self.clock.now())
    }

    /// Scores a result as of `now`.
    pub fn score_at(
        &self,
        url: &str,
        snippet: &str,
        published_date: Option<&str>,
        now: DateTime<Utc>,
    ) -> f32 {
        self.breakdown_at(url, snippet, published_date, now).score
    }

    pub fn breakdown(&self, url: &str, snippet: &str, published_date: Option<&str>) -> ScoreBreakdown {
        self.breakdown_at(url, snippet, published_date, self.clock.now())
    }

    pub fn breakdown_at(
        &self,
        url: &str,
        snippet: &str,
        published_date: Option<&str>,
        now: DateTime<Utc>,
    ) -> ScoreBreakdown {
        let domain = extract_domain(url);
        let domain_authority = self.domains.score_domain(&domain);
        let freshness = freshness_score(published_date, domain_authority, now);

        let signals = SnippetSignals::new(snippet);
        let citations = if signals.has_citations() {
            CITATION_SIGNAL_VALUE
        } else {
            0.0
        };
        let author_credentials = if signals.has_author_credentials() {
            AUTHOR_SIGNAL_VALUE
        } else {
            0.0
        };
        let content_quality = signals.academic_density();

        let w = &self.weights;
        let raw_total = domain_authority * w.domain_authority
            + freshness * w.freshness
            + citations * w.citations
            + author_credentials * w.author_credentials
            + content_quality * w.content_quality;
        let score = clamp_score(raw_total);

        debug!(
            domain = %domain,
            domain_authority,
            freshness,
            citations,
            author_credentials,
            content_quality,
            score,
            "Scored search result"
        );

        ScoreBreakdown {
            domain_authority,
            freshness,
            citations,
            author_credentials,
            content_quality,
            raw_total,
            score,
        }
    }
}

/// Scores a single result with explicit tables, weights and reference time.
pub fn score(
    url: &str,
    snippet: &str,
    published_date: Option<&str>,
    domains: &DomainTable,
    weights: &ScoringWeights,
    now: DateTime<Utc>,
) -> f32 {
    CredibilityScorer::new(domains.clone(), *weights).score_at(url, snippet, published_date, now)
}
