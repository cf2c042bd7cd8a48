//! Source credibility scoring for web search results.
//!
//! A score is a weighted sum of five factors, each normalised to `[0, 1]`:
//!
//! | Factor | Source |
//! |---|---|
//! | domain authority | [`DomainTable`] override, penalty and TLD tables |
//! | freshness | publication date decayed over a window picked by domain tier |
//! | citations | citation markers in the snippet |
//! | content quality | density of academic vocabulary in the snippet |
//! | author credentials | credential markers in the snippet |
//!
//! The total is clamped to `[0.1, 1.0]`. Malformed URLs, empty snippets and unparseable
//! dates never fail scoring; each degrades to a neutral contribution.

pub mod domain;
pub mod freshness;
pub mod scorer;
pub mod signals;
pub mod types;


pub use domain::{DomainTable, extract_domain};
pub use freshness::{freshness_score, parse_published_date};
pub use scorer::{CredibilityScorer, score};
pub use signals::SnippetSignals;
pub use types::{CredibilityTier, ScoreBreakdown, ScoringWeights, clamp_score};
