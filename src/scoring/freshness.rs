//! Best-effort publication-date parsing and freshness decay.
//!
//! Search providers report dates in whatever shape they like ("2 days ago",
//! "Mar 4, 2024", RFC 3339, ...). Parsing never fails loudly: anything unrecognised
//! yields `None` and the scorer substitutes [`NEUTRAL_FRESHNESS`].

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::constants::{
    ACADEMIC_DOMAIN_THRESHOLD, ACADEMIC_FRESHNESS_WINDOW_DAYS, DEFAULT_FRESHNESS_WINDOW_DAYS,
    NEUTRAL_FRESHNESS, NEWS_DOMAIN_THRESHOLD, NEWS_FRESHNESS_WINDOW_DAYS,
};

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%d/%m/%Y", "%B %d, %Y", "%b %d, %Y", "%d %B %Y",
    "%d %b %Y",
];

/// Parses `raw` into a UTC timestamp, resolving relative forms against `now`.
pub fn parse_published_date(raw: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(relative) = parse_relative(raw, now) {
        return Some(relative);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(raw, format) {
            return parsed.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    find_embedded_iso_date(raw)
}

// "<n> <unit>[s] ago"
fn parse_relative(raw: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let lower = raw.to_lowercase();
    let body = lower.strip_suffix("ago")?.trim_end();

    let (amount, unit) = body.split_once(char::is_whitespace)?;
    let amount: i64 = amount.trim().parse().ok()?;
    if amount < 0 {
        return None;
    }
    let unit = unit.trim();
    let unit = unit.strip_suffix('s').unwrap_or(unit);

    let offset = match unit {
        "second" | "sec" => Duration::try_seconds(amount)?,
        "minute" | "min" => Duration::try_minutes(amount)?,
        "hour" => Duration::try_hours(amount)?,
        "day" => Duration::try_days(amount)?,
        "week" => Duration::try_weeks(amount)?,
        "month" => Duration::try_days(amount.checked_mul(30)?)?,
        "year" => Duration::try_days(amount.checked_mul(365)?)?,
        _ => return None,
    };

    now.checked_sub_signed(offset)
}

fn find_embedded_iso_date(raw: &str) -> Option<DateTime<Utc>> {
    let bytes = raw.as_bytes();
    if bytes.len() < 10 {
        return None;
    }

    (0..=bytes.len() - 10).find_map(|start| {
        let window = raw.get(start..start + 10)?;
        let shaped = window.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
        if !shaped {
            return None;
        }
        NaiveDate::parse_from_str(window, "%Y-%m-%d")
            .ok()?
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc())
    })
}

/// Linear decay window (in days) for a source with the given domain score.
pub fn freshness_window_days(domain_score: f32) -> f32 {
    if domain_score > ACADEMIC_DOMAIN_THRESHOLD {
        ACADEMIC_FRESHNESS_WINDOW_DAYS
    } else if domain_score > NEWS_DOMAIN_THRESHOLD {
        NEWS_FRESHNESS_WINDOW_DAYS
    } else {
        DEFAULT_FRESHNESS_WINDOW_DAYS
    }
}

/// Normalised freshness in `[0, 1]`.
///
/// Future dates count as age zero. Missing or unparseable dates yield [`NEUTRAL_FRESHNESS`].
pub fn freshness_score(published: Option<&str>, domain_score: f32, now: DateTime<Utc>) -> f32 {
    let Some(published) = published.and_then(|raw| parse_published_date(raw, now)) else {
        return NEUTRAL_FRESHNESS;
    };

    let age_days = (now - published).num_days().max(0) as f32;
    (1.0 - age_days / freshness_window_days(domain_score)).clamp(0.0, 1.0)
}
