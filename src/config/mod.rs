//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `CREDENCE_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cache::ExpirationPolicy;
use crate::constants::{
    DEFAULT_ACADEMIC_TTL_SECS, DEFAULT_CACHE_CAPACITY, DEFAULT_HISTORICAL_TTL_SECS,
    DEFAULT_MIN_REPORT_CHARS, DEFAULT_NEWS_TTL_SECS,
};
use crate::clock::Clock;
use crate::scoring::{CredibilityScorer, DomainTable, ScoringWeights};

/// Cache and scoring configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `CREDENCE_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Lifetime of `news` entries. Default: 3 days.
    pub news_ttl: Duration,

    /// Lifetime of `academic` entries. Default: 90 days.
    pub academic_ttl: Duration,

    /// Lifetime of `historical` entries. Default: 360 days.
    pub historical_ttl: Duration,

    /// Max entries per cache. Default: `10_000`.
    pub cache_capacity: u64,

    /// Minimum trimmed report length served from the report cache. Default: `50`.
    pub min_report_chars: usize,

    /// JSON file with domain tables and weights. Built-in tables when unset.
    pub scoring_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            news_ttl: Duration::from_secs(DEFAULT_NEWS_TTL_SECS),
            academic_ttl: Duration::from_secs(DEFAULT_ACADEMIC_TTL_SECS),
            historical_ttl: Duration::from_secs(DEFAULT_HISTORICAL_TTL_SECS),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            min_report_chars: DEFAULT_MIN_REPORT_CHARS,
            scoring_path: None,
        }
    }
}

impl Config {
    const ENV_NEWS_TTL: &'static str = "CREDENCE_NEWS_TTL_SECS";
    const ENV_ACADEMIC_TTL: &'static str = "CREDENCE_ACADEMIC_TTL_SECS";
    const ENV_HISTORICAL_TTL: &'static str = "CREDENCE_HISTORICAL_TTL_SECS";
    const ENV_CACHE_CAPACITY: &'static str = "CREDENCE_CACHE_CAPACITY";
    const ENV_MIN_REPORT_CHARS: &'static str = "CREDENCE_MIN_REPORT_CHARS";
    const ENV_SCORING_PATH: &'static str = "CREDENCE_SCORING_PATH";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let news_ttl = Self::parse_ttl_from_env(Self::ENV_NEWS_TTL, defaults.news_ttl)?;
        let academic_ttl = Self::parse_ttl_from_env(Self::ENV_ACADEMIC_TTL, defaults.academic_ttl)?;
        let historical_ttl =
            Self::parse_ttl_from_env(Self::ENV_HISTORICAL_TTL, defaults.historical_ttl)?;
        let cache_capacity =
            Self::parse_u64_from_env(Self::ENV_CACHE_CAPACITY, defaults.cache_capacity);
        let min_report_chars =
            Self::parse_u64_from_env(Self::ENV_MIN_REPORT_CHARS, defaults.min_report_chars as u64)
                as usize;
        let scoring_path = Self::parse_optional_path_from_env(Self::ENV_SCORING_PATH);

        Ok(Self {
            news_ttl,
            academic_ttl,
            historical_ttl,
            cache_capacity,
            min_report_chars,
            scoring_path,
        })
    }

    /// Validates paths and basic invariants (does not read the scoring file).
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, ttl) in [
            (Self::ENV_NEWS_TTL, self.news_ttl),
            (Self::ENV_ACADEMIC_TTL, self.academic_ttl),
            (Self::ENV_HISTORICAL_TTL, self.historical_ttl),
        ] {
            if ttl.is_zero() {
                return Err(ConfigError::ZeroExpiration { name });
            }
        }

        if let Some(ref path) = self.scoring_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    pub fn expiration_policy(&self) -> ExpirationPolicy {
        ExpirationPolicy::new(self.news_ttl, self.academic_ttl, self.historical_ttl)
    }

    /// Loads scoring tables from [`scoring_path`](Self::scoring_path), or the built-ins.
    pub fn load_scoring(&self) -> Result<ScoringConfig, ConfigError> {
        let scoring = match &self.scoring_path {
            Some(path) => ScoringConfig::from_file(path)?,
            None => ScoringConfig::default(),
        };
        scoring.validate()?;
        Ok(scoring)
    }

    fn parse_ttl_from_env(var_name: &'static str, default: Duration) -> Result<Duration, ConfigError> {
        match env::var(var_name) {
            Ok(value) => {
                let secs: u64 = value
                    .trim()
                    .parse()
                    .map_err(|e| ConfigError::DurationParseError {
                        name: var_name,
                        value: value.clone(),
                        source: e,
                    })?;

                if secs == 0 {
                    return Err(ConfigError::ZeroExpiration { name: var_name });
                }

                Ok(Duration::from_secs(secs))
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }
}

/// Domain tables and factor weights for the credibility scorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub domains: DomainTable,
    pub weights: ScoringWeights,
}

impl ScoringConfig {
    /// Reads a JSON scoring file. Omitted sections keep their built-in values.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut scoring: Self =
            serde_json::from_str(&raw).map_err(|e| ConfigError::ScoringParseError {
                path: path.to_path_buf(),
                source: e,
            })?;
        scoring.domains = scoring.domains.normalized();

        info!(
            path = %path.display(),
            overrides = scoring.domains.overrides.len(),
            penalties = scoring.domains.penalties.len(),
            tlds = scoring.domains.tld_scores.len(),
            "Loaded scoring tables"
        );
        Ok(scoring)
    }

    pub fn into_scorer(self) -> CredibilityScorer {
        CredibilityScorer::new(self.domains, self.weights)
    }

    /// Builds a scorer that reads time from `clock`.
    pub fn into_scorer_with_clock(self, clock: Arc<dyn Clock>) -> CredibilityScorer {
        CredibilityScorer::with_clock(self.domains, self.weights, clock)
    }

    /// Checks table scores are in `[0, 1]`, penalties in `[-1, 0]`, and weights are finite,
    /// non-negative and not all zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tables = [
            ("overrides", &self.domains.overrides),
            ("tld_scores", &self.domains.tld_scores),
        ];
        for (table, entries) in tables {
            for (domain, score) in entries {
                if !(0.0..=1.0).contains(score) {
                    return Err(ConfigError::InvalidDomainScore {
                        table,
                        domain: domain.clone(),
                        value: *score,
                    });
                }
            }
        }

        for (domain, penalty) in &self.domains.penalties {
            if !(-1.0..=0.0).contains(penalty) {
                return Err(ConfigError::InvalidDomainScore {
                    table: "penalties",
                    domain: domain.clone(),
                    value: *penalty,
                });
            }
        }

        let weights = self.weights.entries();
        for (factor, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    factor,
                    value: weight,
                });
            }
        }
        if weights.iter().all(|(_, weight)| *weight == 0.0) {
            return Err(ConfigError::AllWeightsZero);
        }

        Ok(())
    }
}
