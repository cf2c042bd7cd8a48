use chrono::{DateTime, TimeZone, Utc};

use super::*;
use crate::scoring::CredibilityScorer;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn result(url: &str, score: f32) -> SearchResult {
    SearchResult::with_score("title", url, "snippet", None, score)
}

#[test]
fn test_parse_provider_response_extracts_organic_hits() {
    let body = r#"{
        "searchParameters": {"q": "climate change 2024"},
        "organic": [
            {"title": "IPCC report", "link": "https://www.ipcc.ch/report", "snippet": "Findings...", "date": "Mar 20, 2024", "position": 1},
            {"title": "No link"},
            {"link": "https://example.com", "snippet": null},
            "not an object",
            {"title": 42}
        ]
    }"#;

    let hits = parse_provider_response(body).expect("should parse");

    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0].title.as_deref(), Some("IPCC report"));
    assert_eq!(hits[0].date.as_deref(), Some("Mar 20, 2024"));
    assert_eq!(hits[1].link, None);
    assert_eq!(hits[2].snippet, None);
}

#[test]
fn test_parse_provider_response_without_organic() {
    assert!(parse_provider_response(r#"{"answerBox": {}}"#).unwrap().is_empty());
    assert!(parse_provider_response(r#"{"organic": null}"#).unwrap().is_empty());
}

#[test]
fn test_parse_provider_response_errors() {
    assert!(matches!(
        parse_provider_response("not json"),
        Err(SearchError::Parse(_))
    ));
    assert!(matches!(
        parse_provider_response(r#"{"organic": {"title": "x"}}"#),
        Err(SearchError::InvalidField { field: "organic" })
    ));
}

#[test]
fn test_from_hit_scores_and_normalises_date() {
    let scorer = CredibilityScorer::default();
    let hit = RawSearchHit::new(
        "Ocean warming",
        "https://www.nature.com/articles/ocean",
        "A peer-reviewed study",
        Some("2 days ago"),
    );

    let result = SearchResult::from_hit_at(hit.clone(), &scorer, fixed_now());

    assert_eq!(result.title(), "Ocean warming");
    assert_eq!(result.url(), "https://www.nature.com/articles/ocean");
    assert_eq!(result.published_date(), Some("2024-06-13T12:00:00+00:00"));
    let expected = scorer.score_at(
        "https://www.nature.com/articles/ocean",
        "A peer-reviewed study",
        Some("2 days ago"),
        fixed_now(),
    );
    assert_eq!(result.credibility_score(), expected);
    assert_eq!(result.to_string(), "Ocean warming (https://www.nature.com/articles/ocean)");
}

#[test]
fn test_from_hit_tolerates_missing_fields() {
    let scorer = CredibilityScorer::default();
    let result = SearchResult::from_hit_at(RawSearchHit::default(), &scorer, fixed_now());

    assert_eq!(result.title(), "");
    assert_eq!(result.url(), "");
    assert_eq!(result.published_date(), None);
    assert!((0.1..=1.0).contains(&result.credibility_score()));
}

#[test]
fn test_from_hit_drops_unparseable_date() {
    let scorer = CredibilityScorer::default();
    let hit = RawSearchHit::new("t", "https://example.com", "", Some("sometime last spring"));

    let result = SearchResult::from_hit_at(hit, &scorer, fixed_now());
    assert_eq!(result.published_date(), None);
}

#[test]
fn test_with_score_clamps() {
    assert_eq!(result("https://a.com", 0.0).credibility_score(), 0.1);
    assert_eq!(result("https://a.com", 3.0).credibility_score(), 1.0);
}

#[test]
fn test_trust_gate_and_tier() {
    let r = result("https://a.com", 0.65);
    assert!(r.is_trusted(0.6));
    assert!(!r.is_trusted(0.7));
    assert_eq!(r.tier(), crate::scoring::CredibilityTier::Good);
}

#[test]
fn test_merge_results_deduplicates_by_url() {
    let merged = merge_results(vec![
        vec![result("https://a.com", 0.5), result("https://b.com", 0.6)],
        vec![result("https://b.com", 0.9), result("", 0.9), result("https://c.com", 0.4)],
    ]);

    let urls: Vec<_> = merged.iter().map(|r| r.url()).collect();
    assert_eq!(urls, ["https://a.com", "https://b.com", "https://c.com"]);
    assert_eq!(merged[1].credibility_score(), 0.6);
}

#[test]
fn test_rank_by_credibility_is_stable_descending() {
    let mut results = vec![
        SearchResult::with_score("first", "https://a.com", "", None, 0.5),
        SearchResult::with_score("top", "https://b.com", "", None, 0.9),
        SearchResult::with_score("second", "https://c.com", "", None, 0.5),
    ];

    rank_by_credibility(&mut results);

    let titles: Vec<_> = results.iter().map(|r| r.title()).collect();
    assert_eq!(titles, ["top", "first", "second"]);
}

#[test]
fn test_score_hits_preserves_order() {
    let scorer = CredibilityScorer::default();
    let hits = vec![
        RawSearchHit::new("one", "https://example.com/1", "", None),
        RawSearchHit::new("two", "https://nature.com/2", "", None),
    ];

    let results = score_hits(hits, &scorer, fixed_now());

    assert_eq!(results[0].title(), "one");
    assert_eq!(results[1].title(), "two");
    assert!(results[1].credibility_score() > results[0].credibility_score());
}
