//! Domain extraction and domain-authority lookup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{DEFAULT_DOMAIN_SCORE, DEFAULT_TLD_KEY, MIN_CREDIBILITY_SCORE};

const REPUTABLE_DOMAINS: &[(&str, f32)] = &[
    ("wikipedia.org", 0.9),
    ("nature.com", 0.95),
    ("science.org", 0.95),
    ("nih.gov", 0.95),
    ("cdc.gov", 0.95),
    ("who.int", 0.95),
    ("ieee.org", 0.9),
    ("acm.org", 0.9),
    ("mit.edu", 0.95),
    ("harvard.edu", 0.95),
    ("stanford.edu", 0.95),
    ("arxiv.org", 0.85),
    ("jstor.org", 0.85),
    ("sciencedirect.com", 0.85),
    ("springer.com", 0.85),
    ("wiley.com", 0.85),
    ("ncbi.nlm.nih.gov", 0.95),
    ("pubmed.gov", 0.95),
    ("reuters.com", 0.85),
    ("apnews.com", 0.85),
    ("bbc.com", 0.8),
    ("nytimes.com", 0.8),
    ("wsj.com", 0.8),
    ("economist.com", 0.85),
    ("ft.com", 0.8),
    ("bloomberg.com", 0.8),
];

const LOW_RELIABILITY_DOMAINS: &[(&str, f32)] = &[
    ("wordpress.com", -0.2),
    ("blogspot.com", -0.2),
    ("medium.com", -0.1),
    ("substack.com", -0.1),
    ("facebook.com", -0.3),
    ("twitter.com", -0.2),
    ("instagram.com", -0.3),
    ("tiktok.com", -0.3),
    ("reddit.com", -0.1),
];

const TLD_SCORES: &[(&str, f32)] = &[
    ("edu", 0.9),
    ("gov", 0.9),
    ("org", 0.7),
    (DEFAULT_TLD_KEY, DEFAULT_DOMAIN_SCORE),
];

/// Extracts the lowercase host of `url` without a leading `www.`.
///
/// URLs without a scheme are treated as `https://`; any explicit scheme is kept.
/// Returns an empty string when no host can be recovered.
pub fn extract_domain(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }

    let candidate = if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    };

    let host = match Url::parse(&candidate) {
        Ok(parsed) => parsed.host_str().map(str::to_string),
        Err(_) => candidate.split('/').nth(2).map(str::to_string),
    };

    let host = host.unwrap_or_default().to_lowercase();
    host.strip_prefix("www.").map(str::to_string).unwrap_or(host)
}

/// Base-score tables for domain authority.
///
/// `overrides` and `penalties` match a host or any of its parent domains; the most
/// specific match wins. `tld_scores` is consulted by top-level label, falling back to
/// its `default` entry and then to [`DEFAULT_DOMAIN_SCORE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainTable {
    pub overrides: HashMap<String, f32>,
    pub penalties: HashMap<String, f32>,
    pub tld_scores: HashMap<String, f32>,
}

impl Default for DomainTable {
    fn default() -> Self {
        Self {
            overrides: to_map(REPUTABLE_DOMAINS),
            penalties: to_map(LOW_RELIABILITY_DOMAINS),
            tld_scores: to_map(TLD_SCORES),
        }
    }
}

impl DomainTable {
    /// Creates a table with no entries (every domain scores the global default).
    pub fn empty() -> Self {
        Self {
            overrides: HashMap::new(),
            penalties: HashMap::new(),
            tld_scores: HashMap::new(),
        }
    }

    pub fn with_override(mut self, domain: &str, score: f32) -> Self {
        self.overrides.insert(normalize_key(domain), score);
        self
    }

    pub fn with_penalty(mut self, domain: &str, adjustment: f32) -> Self {
        self.penalties.insert(normalize_key(domain), adjustment);
        self
    }

    pub fn with_tld(mut self, tld: &str, score: f32) -> Self {
        self.tld_scores.insert(normalize_key(tld), score);
        self
    }

    /// Trims and lowercases every key so externally loaded tables match extracted hosts.
    pub fn normalized(self) -> Self {
        Self {
            overrides: normalize_keys(self.overrides),
            penalties: normalize_keys(self.penalties),
            tld_scores: normalize_keys(self.tld_scores),
        }
    }

    /// Fallback score for unknown TLDs.
    pub fn default_score(&self) -> f32 {
        self.tld_scores
            .get(DEFAULT_TLD_KEY)
            .copied()
            .unwrap_or(DEFAULT_DOMAIN_SCORE)
    }

    /// Scores an already-extracted domain.
    pub fn score_domain(&self, domain: &str) -> f32 {
        if domain.is_empty() {
            return self.default_score();
        }

        if let Some(score) = most_specific(&self.overrides, domain) {
            return score;
        }

        let tld = domain.rsplit_once('.').map(|(_, tld)| tld).unwrap_or("");
        let base = self
            .tld_scores
            .get(tld)
            .copied()
            .unwrap_or_else(|| self.default_score());

        match most_specific(&self.penalties, domain) {
            Some(penalty) => (base + penalty).max(MIN_CREDIBILITY_SCORE),
            None => base,
        }
    }

    /// Extracts the domain from `url` and scores it.
    pub fn score_url(&self, url: &str) -> f32 {
        self.score_domain(&extract_domain(url))
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

fn normalize_keys(table: HashMap<String, f32>) -> HashMap<String, f32> {
    table
        .into_iter()
        .map(|(key, score)| (normalize_key(&key), score))
        .collect()
}

fn to_map(entries: &[(&str, f32)]) -> HashMap<String, f32> {
    entries
        .iter()
        .map(|(domain, score)| (domain.to_string(), *score))
        .collect()
}

// Walks "a.b.example.com", "b.example.com", "example.com"; the bare TLD is never matched.
fn most_specific(table: &HashMap<String, f32>, domain: &str) -> Option<f32> {
    let mut candidate = domain;
    loop {
        if let Some(score) = table.get(candidate) {
            return Some(*score);
        }
        let (_, parent) = candidate.split_once('.')?;
        if !parent.contains('.') {
            return None;
        }
        candidate = parent;
    }
}
