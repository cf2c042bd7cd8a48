//! Integration tests for the research caches.

mod common;

use std::sync::Arc;
use std::thread;

use chrono::Duration;
use common::fixtures::{
    SAMPLE_QUERY, create_batch_results, manual_clock, research_cache, result, sample_report,
};
use credence::{
    CacheKey, CacheStatus, ContentCache, ContentType, ExpirationPolicy, Report, ResearchCache,
};

#[test]
fn test_query_hash_is_stable_hex() {
    let key = CacheKey::from_query(SAMPLE_QUERY);
    let hex = key.to_hex();

    assert_eq!(hex.len(), 64);
    assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    assert_eq!(hex, CacheKey::from_query(SAMPLE_QUERY).to_hex());
    assert_ne!(hex, CacheKey::from_query("climate change 2025").to_hex());
}

#[test]
fn test_search_results_survive_within_window() {
    let clock = manual_clock();
    let cache = research_cache(clock.clone());
    let results = create_batch_results("news", 5);

    cache.search().set_results(SAMPLE_QUERY, results.clone());

    clock.advance(Duration::days(1));
    assert_eq!(cache.search().get_results(SAMPLE_QUERY), Some(results));
}

#[test]
fn test_lookup_status_progression() {
    let clock = manual_clock();
    let cache = research_cache(clock.clone());
    let search = cache.search();

    assert_eq!(search.lookup(SAMPLE_QUERY).status(), CacheStatus::Miss);

    search.set_results(SAMPLE_QUERY, vec![result("A", "https://a.org", 0.7)]);
    assert_eq!(search.lookup(SAMPLE_QUERY).status(), CacheStatus::Hit);

    clock.advance(Duration::days(4));
    assert_eq!(search.lookup(SAMPLE_QUERY).status(), CacheStatus::Expired);
    assert_eq!(search.lookup(SAMPLE_QUERY).status(), CacheStatus::Miss);
}

#[test]
fn test_report_cache_validates_on_read() {
    let clock = manual_clock();
    let cache = research_cache(clock);
    let results = create_batch_results("source", 3);

    cache.report().set_report(SAMPLE_QUERY, sample_report(&results));
    let report = cache.report().get(SAMPLE_QUERY).expect("valid report");
    assert_eq!(report.sources.len(), 3);
    assert_eq!(report.sources[0].url, "https://source.example.org/0");

    let stub = Report::new("stub", "ok", vec![], report.timestamp);
    cache.report().set_report("stub", stub);
    assert!(cache.report().get("stub").is_none());
    assert!(!cache.report().contains("stub"));
}

#[test]
fn test_report_from_collaborator_json() {
    let clock = manual_clock();
    let cache = research_cache(clock);
    let json = r##"{
        "query": "history of the printing press",
        "content": "# The printing press\n\nGutenberg's press spread across Europe within decades.",
        "sources": [{"title": "Britannica", "url": "https://www.britannica.com/", "credibility_score": 0.8}],
        "timestamp": "2024-06-15T12:00:00Z"
    }"##;

    let report = Report::from_json(json).expect("valid report json");
    let query = report.query.clone();
    cache
        .report()
        .set_report_as(&query, report, ContentType::Historical);

    assert!(cache.report().get("history of the printing press").is_some());
    assert!(Report::from_json(r#"{"query": "q"}"#).is_err());
}

#[test]
fn test_shared_handles_across_threads() {
    let clock = manual_clock();
    let cache = research_cache(clock);

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let cache = cache.clone();
            thread::spawn(move || {
                for i in 0..25 {
                    let query = format!("worker {t} query {i}");
                    cache
                        .search()
                        .set_results(&query, create_batch_results("t", 2));
                    assert!(cache.search().get(&query).is_some());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.search().len(), 100);
}

#[test]
fn test_concurrent_writers_same_query_last_write_wins() {
    let clock = manual_clock();
    let cache: Arc<ContentCache<usize>> = Arc::new(ContentCache::with_clock(
        ExpirationPolicy::default(),
        clock,
    ));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                cache.set(SAMPLE_QUERY, t, ContentType::News);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.len(), 1);
    let value = cache.get(SAMPLE_QUERY).expect("one writer wins");
    assert!(value < 8);
}

#[test]
fn test_from_config_uses_configured_lifetimes() {
    let clock = manual_clock();
    let config = credence::Config {
        news_ttl: std::time::Duration::from_secs(3600),
        ..credence::Config::default()
    };
    let cache = ResearchCache::from_config_with_clock(&config, clock.clone());

    cache.search().set_results(SAMPLE_QUERY, vec![]);
    clock.advance(Duration::minutes(59));
    assert!(cache.search().get(SAMPLE_QUERY).is_some());
    clock.advance(Duration::minutes(2));
    assert!(cache.search().get(SAMPLE_QUERY).is_none());
}
