use serde::Serialize;
use trendlens_types::CompareResponse;

use crate::stats::{TrendStats, summarize};

/// One card of the topic comparison view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordOverview {
    pub keyword: String,
    pub data_points: usize,
    pub regions: usize,
    pub related_queries: usize,
    pub stats: Option<TrendStats>,
}

/// Per-keyword counts for a compare response, in response order.
///
/// Entries without a keyword fall back to the requested keyword at the same
/// position, then to an empty string.
pub fn comparison_overview(response: &CompareResponse, requested: &[String]) -> Vec<KeywordOverview> {
    response
        .comparisons
        .iter()
        .enumerate()
        .map(|(i, entry)| KeywordOverview {
            keyword: entry
                .keyword
                .clone()
                .or_else(|| requested.get(i).cloned())
                .unwrap_or_default(),
            data_points: entry.interest_over_time.len(),
            regions: entry.interest_by_region.len(),
            related_queries: entry.related_queries.len(),
            stats: summarize(&entry.interest_over_time),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use trendlens_types::{RegionPoint, TrendPoint, TrendsResponse};

    #[test]
    fn test_counts_per_keyword() {
        let response = CompareResponse {
            comparisons: vec![
                TrendsResponse {
                    keyword: Some("Roku".to_string()),
                    interest_over_time: vec![TrendPoint::new("2024-01-01", 5)],
                    interest_by_region: vec![
                        RegionPoint::new("Ohio", 1),
                        RegionPoint::new("Iowa", 2),
                    ],
                    ..Default::default()
                },
                TrendsResponse::default(),
            ],
        };
        let requested = vec!["Roku".to_string(), "Apple TV".to_string()];
        let overview = comparison_overview(&response, &requested);

        assert_eq!(overview.len(), 2);
        assert_eq!(overview[0].data_points, 1);
        assert_eq!(overview[0].regions, 2);
        assert_eq!(overview[0].stats.as_ref().map(|s| s.peak), Some(5));
        assert_eq!(overview[1].keyword, "Apple TV");
        assert!(overview[1].stats.is_none());
    }
}
