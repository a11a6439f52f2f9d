// Engine module - pure derivations over trends payloads
// This layer sits between the API types and the CLI presentation

pub mod comparison;
pub mod regions;
pub mod series;
pub mod stats;
pub mod word_cloud;

pub use comparison::{KeywordOverview, comparison_overview};
pub use regions::{NO_REGION_DATA, RegionBar, RegionChart, region_chart};
pub use series::{SeriesPoint, TrendSeries, trend_series};
pub use stats::{TrendStats, summarize};
pub use word_cloud::{WeightedTerm, word_cloud};

use trendlens_types::TrendsResponse;

/// Everything the dashboard panels need for one keyword.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DashboardModel {
    pub keyword: Option<String>,
    pub stats: Option<TrendStats>,
    pub series: TrendSeries,
    pub regions: RegionChart,
    pub related: Vec<WeightedTerm>,
    pub rising: Vec<WeightedTerm>,
}

/// Regions shown in the dashboard's region panel.
pub const DASHBOARD_REGION_LIMIT: usize = 10;

pub fn build_dashboard(response: &TrendsResponse) -> DashboardModel {
    DashboardModel {
        keyword: response.keyword.clone(),
        stats: summarize(&response.interest_over_time),
        series: trend_series(&response.interest_over_time),
        regions: region_chart(&response.interest_by_region, DASHBOARD_REGION_LIMIT),
        related: word_cloud(&response.related_queries),
        rising: word_cloud(&response.rising_queries),
    }
}
