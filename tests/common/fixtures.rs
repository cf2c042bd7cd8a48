//! Test fixtures for integration tests.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use credence::{
    Clock, CredibilityScorer, DomainTable, ExpirationPolicy, ManualClock, RawSearchHit, Report,
    ResearchCache, ScoringWeights, SearchResult,
};

pub const FIXED_TIMESTAMP: i64 = 1718452800;

pub const SAMPLE_QUERY: &str = "climate change 2024";

pub const SAMPLE_REPORT: &str = "# Climate change in 2024\n\n\
    Global mean temperature exceeded 1.5C above pre-industrial levels for the first time \
    across a full calendar year.";

pub const SAMPLE_PROVIDER_RESPONSE: &str = r#"{
    "searchParameters": {"q": "climate change 2024"},
    "organic": [
        {
            "title": "Global Climate Highlights 2024",
            "link": "https://climate.copernicus.eu/global-climate-highlights-2024",
            "snippet": "2024 was the warmest year on record according to ERA5 data.",
            "date": "2 days ago"
        },
        {
            "title": "Peer-reviewed analysis of 2024 warming",
            "link": "https://www.nature.com/articles/d41586-024-00001",
            "snippet": "A peer-reviewed study published in the journal [1] reports research findings (Smith et al., 2024).",
            "date": "2024-05-20"
        },
        {
            "title": "NASA: 2024 temperatures",
            "link": "https://climate.nasa.gov/news/2024",
            "snippet": "Dr. Gavin Schmidt, Ph.D., discusses the analysis."
        },
        {
            "title": "My thoughts on the weather",
            "link": "https://someone.blogspot.com/2024/06/weather.html",
            "snippet": "It was hot.",
            "date": null
        }
    ]
}"#;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.timestamp_opt(FIXED_TIMESTAMP, 0).unwrap()
}

pub fn manual_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(fixed_now()))
}

pub fn scorer_with_clock(clock: Arc<ManualClock>) -> CredibilityScorer {
    let clock: Arc<dyn Clock> = clock;
    CredibilityScorer::with_clock(DomainTable::default(), ScoringWeights::default(), clock)
}

pub fn research_cache(clock: Arc<ManualClock>) -> ResearchCache {
    ResearchCache::with_clock(ExpirationPolicy::default(), clock)
}

#[derive(Default)]
pub struct HitBuilder {
    title: Option<String>,
    link: Option<String>,
    snippet: Option<String>,
    date: Option<String>,
}

impl HitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn link(mut self, link: &str) -> Self {
        self.link = Some(link.to_string());
        self
    }

    pub fn snippet(mut self, snippet: &str) -> Self {
        self.snippet = Some(snippet.to_string());
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }

    pub fn build(self) -> RawSearchHit {
        RawSearchHit {
            title: self.title,
            link: self.link,
            snippet: self.snippet,
            date: self.date,
        }
    }
}

pub fn result(title: &str, url: &str, score: f32) -> SearchResult {
    SearchResult::with_score(title, url, "", None, score)
}

pub fn create_batch_results(prefix: &str, count: usize) -> Vec<SearchResult> {
    (0..count)
        .map(|i| {
            result(
                &format!("{prefix} {i}"),
                &format!("https://{prefix}.example.org/{i}"),
                0.1 + (i % 10) as f32 * 0.1,
            )
        })
        .collect()
}

pub fn sample_report(results: &[SearchResult]) -> Report {
    Report::from_results(SAMPLE_QUERY, SAMPLE_REPORT, results, fixed_now())
}
