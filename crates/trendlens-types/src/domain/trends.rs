use serde::{Deserialize, Serialize};

/// One interest-over-time sample. Values are normalized to 0-100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    pub value: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl TrendPoint {
    pub fn new(date: impl Into<String>, value: u32) -> Self {
        Self {
            date: date.into(),
            value,
            keyword: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionPoint {
    pub region: String,
    pub value: u32,
}

impl RegionPoint {
    pub fn new(region: impl Into<String>, value: u32) -> Self {
        Self {
            region: region.into(),
            value,
        }
    }
}

/// Related or rising search term with its relevance/growth weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTerm {
    pub text: String,
    pub value: u32,
}

impl QueryTerm {
    pub fn new(text: impl Into<String>, value: u32) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}

/// Trend payload for a single keyword.
///
/// The shape comes from an external service and is not validated: every
/// list falls back to empty when the field is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(default)]
    pub interest_over_time: Vec<TrendPoint>,
    #[serde(default)]
    pub interest_by_region: Vec<RegionPoint>,
    #[serde(default)]
    pub related_queries: Vec<QueryTerm>,
    #[serde(default)]
    pub rising_queries: Vec<QueryTerm>,
}

impl TrendsResponse {
    pub fn is_empty(&self) -> bool {
        self.interest_over_time.is_empty()
            && self.interest_by_region.is_empty()
            && self.related_queries.is_empty()
            && self.rising_queries.is_empty()
    }
}
