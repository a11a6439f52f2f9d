//! Sample payloads shaped like the trends API responses.

use serde_json::{Value, json};
use trendlens_types::{QueryTerm, RegionPoint, TrendPoint, TrendsResponse};

/// Three monthly samples: 10, 50, 30.
pub fn sample_series() -> Vec<TrendPoint> {
    vec![
        TrendPoint::new("2024-01-01", 10),
        TrendPoint::new("2024-02-01", 50),
        TrendPoint::new("2024-03-01", 30),
    ]
}

/// A complete payload for `keyword`.
pub fn sample_trends(keyword: &str) -> TrendsResponse {
    TrendsResponse {
        keyword: Some(keyword.to_string()),
        interest_over_time: sample_series(),
        interest_by_region: vec![
            RegionPoint::new("Alaska", 100),
            RegionPoint::new("Montana", 64),
            RegionPoint::new("Vermont", 0),
        ],
        related_queries: vec![
            QueryTerm::new(format!("{} price", keyword.to_lowercase()), 100),
            QueryTerm::new(format!("{} review", keyword.to_lowercase()), 40),
        ],
        rising_queries: vec![QueryTerm::new(
            format!("{} deals", keyword.to_lowercase()),
            250,
        )],
    }
}

/// A payload whose series carries `value` only, to tell responses apart.
pub fn marked_trends(keyword: &str, value: u32) -> TrendsResponse {
    TrendsResponse {
        keyword: Some(keyword.to_string()),
        interest_over_time: vec![TrendPoint::new("2024-01-01", value)],
        ..Default::default()
    }
}

pub fn sample_trends_json(keyword: &str) -> Value {
    serde_json::to_value(sample_trends(keyword)).unwrap_or(Value::Null)
}

pub fn healthy_json() -> Value {
    json!({
        "status": "healthy",
        "version": "1.0.0",
        "environment": "test",
        "cache_status": "connected"
    })
}

pub fn topics_json() -> Value {
    json!({
        "topics": [
            {"id": "broadband", "label": "Broadband", "keywords": ["Xfinity", "Starlink"]},
            {"id": "cord_cutting", "label": "Cord Cutting", "keywords": ["YouTube TV"]},
            {"id": "mobile", "label": "Mobile", "keywords": ["Verizon", "T-Mobile"]}
        ]
    })
}

pub fn compare_json(keywords: &[&str]) -> Value {
    let comparisons: Vec<Value> = keywords.iter().map(|k| sample_trends_json(k)).collect();
    json!({ "comparisons": comparisons })
}
