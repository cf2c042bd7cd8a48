//! End-to-end research flow: provider response to scored results to cached report.

mod common;

use chrono::Duration;
use common::fixtures::{
    SAMPLE_PROVIDER_RESPONSE, SAMPLE_QUERY, SAMPLE_REPORT, fixed_now, manual_clock,
    research_cache, scorer_with_clock,
};
use credence::{
    Report, merge_results, parse_provider_response, rank_by_credibility, score_hits,
};

#[test]
fn test_news_results_expire_after_three_days() {
    let clock = manual_clock();
    let scorer = scorer_with_clock(clock.clone());
    let cache = research_cache(clock.clone());

    let hits = parse_provider_response(SAMPLE_PROVIDER_RESPONSE).expect("valid response");
    let results = score_hits(hits, &scorer, scorer.now());
    assert_eq!(results.len(), 4);

    cache.search().set_results(SAMPLE_QUERY, results.clone());

    clock.advance(Duration::days(1));
    let cached = cache.search().get(SAMPLE_QUERY).expect("fresh after one day");
    assert_eq!(cached.results, results);
    assert_eq!(cached.timestamp, fixed_now());

    clock.advance(Duration::days(3));
    assert!(cache.search().get(SAMPLE_QUERY).is_none());
    assert!(cache.search().get(SAMPLE_QUERY).is_none());
}

#[test]
fn test_full_flow_with_cached_report() {
    let clock = manual_clock();
    let scorer = scorer_with_clock(clock.clone());
    let cache = research_cache(clock.clone());

    let sub_queries = ["climate change 2024", "2024 temperature record"];
    let batches = sub_queries
        .iter()
        .map(|_| {
            let hits = parse_provider_response(SAMPLE_PROVIDER_RESPONSE).expect("valid response");
            score_hits(hits, &scorer, fixed_now())
        })
        .collect::<Vec<_>>();

    let mut merged = merge_results(batches);
    assert_eq!(merged.len(), 4);
    rank_by_credibility(&mut merged);

    let trusted: Vec<_> = merged.into_iter().filter(|r| r.is_trusted(0.4)).collect();
    assert_eq!(trusted.len(), 3);

    let report = Report::from_results(SAMPLE_QUERY, SAMPLE_REPORT, &trusted, scorer.now());
    cache.report().set_report(SAMPLE_QUERY, report.clone());

    clock.advance(Duration::days(30));
    assert_eq!(cache.report().get(SAMPLE_QUERY), Some(report));

    clock.advance(Duration::days(61));
    assert!(cache.report().get(SAMPLE_QUERY).is_none());
}
