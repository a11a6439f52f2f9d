//! Request and response bodies of the trends HTTP API.

use serde::{Deserialize, Serialize};

use crate::domain::{RegionPoint, Timeframe, TrendPoint, TrendsResponse};

pub const DEFAULT_GEO: &str = "US";

/// The compare endpoint refuses more keywords than this.
pub const MAX_COMPARE_KEYWORDS: usize = 5;

/// Body of `POST /api/trends` (and the region/overtime variants).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendRequest {
    pub keyword: String,
    #[serde(default)]
    pub timeframe: Timeframe,
    #[serde(default = "default_geo")]
    pub geo: String,
}

impl TrendRequest {
    pub fn new(keyword: impl Into<String>, timeframe: Timeframe, geo: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            timeframe,
            geo: geo.into(),
        }
    }
}

fn default_geo() -> String {
    DEFAULT_GEO.to_string()
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_status: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy") || self.status.eq_ignore_ascii_case("ok")
    }
}

/// One entry of `GET /api/topics`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSummary {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicsResponse {
    #[serde(default)]
    pub topics: Vec<TopicSummary>,
}

impl TopicsResponse {
    pub fn find(&self, topic_id: &str) -> Option<&TopicSummary> {
        self.topics.iter().find(|t| t.id == topic_id)
    }
}

/// Response of `GET /api/trends/compare`: one trend payload per keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareResponse {
    #[serde(default)]
    pub comparisons: Vec<TrendsResponse>,
}

/// Response of `POST /api/trends/region`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionResponse {
    #[serde(default)]
    pub interest_by_region: Vec<RegionPoint>,
}

/// Response of `POST /api/trends/overtime`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverTimeResponse {
    #[serde(default)]
    pub interest_over_time: Vec<TrendPoint>,
}
