use serde::Serialize;
use std::fmt;
use trendlens_engine::{KeywordOverview, RegionChart, TrendSeries, TrendStats, WeightedTerm};
use trendlens_types::KeywordLocation;

use super::{CreateView, ViewOptions};

/// Everything known about one keyword over one timeframe.
///
/// Same shape feeds the console view and the dashboard panels.
#[derive(Debug, Clone, Serialize)]
pub struct TrendsViewModel {
    pub keyword: String,
    pub timeframe: String,
    pub timeframe_label: String,
    /// Catalog position, when the keyword is a catalog keyword.
    pub location: Option<KeywordLocation>,
    pub stats: Option<TrendStats>,
    pub series: TrendSeries,
    pub regions: RegionChart,
    pub related: Vec<WeightedTerm>,
    pub rising: Vec<WeightedTerm>,
}

#[derive(Debug, Serialize)]
pub struct CompareViewModel {
    /// Title-cased topic id when the comparison came from the catalog.
    pub heading: Option<String>,
    pub timeframe: String,
    pub timeframe_label: String,
    pub keywords: Vec<KeywordOverview>,
}

impl CreateView for TrendsViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::trends::TrendsView;
        Box::new(TrendsView::new(self, options))
    }
}

impl CreateView for CompareViewModel {
    fn create_view<'a>(&'a self, _options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::trends::CompareView;
        Box::new(CompareView::new(self))
    }
}
