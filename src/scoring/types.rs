use serde::{Deserialize, Serialize};

use crate::constants::{MAX_CREDIBILITY_SCORE, MIN_CREDIBILITY_SCORE};

/// Relative weight of each credibility factor.
///
/// Weights are applied to factors normalised to `[0, 1]`; they need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub domain_authority: f32,
    pub freshness: f32,
    pub citations: f32,
    pub author_credentials: f32,
    pub content_quality: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            domain_authority: 0.3,
            freshness: 0.2,
            citations: 0.2,
            author_credentials: 0.15,
            content_quality: 0.15,
        }
    }
}

impl ScoringWeights {
    /// `(name, weight)` pairs, in a stable order.
    pub fn entries(&self) -> [(&'static str, f32); 5] {
        [
            ("domain_authority", self.domain_authority),
            ("freshness", self.freshness),
            ("citations", self.citations),
            ("author_credentials", self.author_credentials),
            ("content_quality", self.content_quality),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Per-factor view of a credibility computation.
pub struct ScoreBreakdown {
    /// Extracted domain authority in `[0, 1]`.
    pub domain_authority: f32,
    /// Freshness in `[0, 1]` (0.5 when the date is unknown).
    pub freshness: f32,
    /// Citation signal (0 or the fixed marker value).
    pub citations: f32,
    /// Author-credential signal (0 or the fixed marker value).
    pub author_credentials: f32,
    /// Fraction of academic vocabulary present.
    pub content_quality: f32,
    /// Weighted sum before clamping.
    pub raw_total: f32,
    /// Final score, clamped to `[0.1, 1.0]`.
    pub score: f32,
}

/// Clamps a raw score into the published credibility range.
///
/// NaN clamps to the floor.
#[inline]
pub fn clamp_score(raw: f32) -> f32 {
    if raw.is_nan() {
        return MIN_CREDIBILITY_SCORE;
    }
    raw.clamp(MIN_CREDIBILITY_SCORE, MAX_CREDIBILITY_SCORE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredibilityTier {
    Poor,
    Low,
    Medium,
    Good,
    High,
}

impl CredibilityTier {
    pub fn from_score(score: f32) -> Self {
        if score >= 0.8 {
            Self::High
        } else if score >= 0.6 {
            Self::Good
        } else if score >= 0.4 {
            Self::Medium
        } else if score >= 0.2 {
            Self::Low
        } else {
            Self::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Good => "Good",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for CredibilityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
