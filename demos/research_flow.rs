//! Research flow against a canned provider response, with simulated time.

use anyhow::Result;

#[cfg(feature = "mock")]
const PROVIDER_RESPONSE: &str = r#"{
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
            "snippet": "A peer-reviewed study [1] reports research findings (Smith et al., 2024).",
            "date": "2024-05-20"
        },
        {
            "title": "My thoughts on the weather",
            "link": "https://someone.blogspot.com/2024/06/weather.html",
            "snippet": "It was hot."
        }
    ]
}"#;

#[cfg(feature = "mock")]
fn main() -> Result<()> {
    use std::sync::Arc;

    use chrono::Duration;
    use credence::{
        Clock, Config, ManualClock, Report, ResearchCache, merge_results,
        parse_provider_response, rank_by_credibility, score_hits,
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    let clock = Arc::new(ManualClock::starting_now());
    let scorer = config.load_scoring()?.into_scorer_with_clock(clock.clone());
    let cache = ResearchCache::from_config_with_clock(&config, clock.clone());

    let query = "climate change 2024";

    let results = match cache.search().get_results(query) {
        Some(results) => results,
        None => {
            let hits = parse_provider_response(PROVIDER_RESPONSE)?;
            let mut results = merge_results([score_hits(hits, &scorer, clock.now())]);
            rank_by_credibility(&mut results);
            cache.search().set_results(query, results.clone());
            results
        }
    };

    for result in &results {
        println!(
            "{:.3} [{}] {}",
            result.credibility_score(),
            result.tier(),
            result
        );
    }

    let trusted: Vec<_> = results
        .into_iter()
        .filter(|r| r.is_trusted(0.4))
        .collect();
    let content = format!(
        "# {query}\n\n{} sources rated Medium or better were consulted for this summary.",
        trusted.len()
    );
    let report = Report::from_results(query, content, &trusted, clock.now());
    cache.report().set_report(query, report);

    clock.advance(Duration::days(1));
    println!(
        "after 1 day: search {}, report {}",
        cache.search().lookup(query).status(),
        cache.report().contains(query)
    );

    clock.advance(Duration::days(3));
    println!(
        "after 4 days: search {}, report {}",
        cache.search().lookup(query).status(),
        cache.report().contains(query)
    );

    Ok(())
}

#[cfg(not(feature = "mock"))]
fn main() -> Result<()> {
    eprintln!("Run with: cargo run --example research_flow --features mock");
    Ok(())
}
