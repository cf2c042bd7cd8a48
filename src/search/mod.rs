//! Search-provider hits turned into scored [`SearchResult`]s.

pub mod error;
mod model;

#[cfg(test)]
mod tests;

pub use error::{ProviderResult, SearchError};
pub use model::{
    RawSearchHit, SearchResult, merge_results, parse_provider_response, rank_by_credibility,
    score_hits,
};
