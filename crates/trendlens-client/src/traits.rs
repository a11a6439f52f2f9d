use async_trait::async_trait;
use trendlens_types::{
    CompareResponse, HealthStatus, RegionPoint, Timeframe, TopicsResponse, TrendPoint,
    TrendsResponse,
};

use crate::Result;

/// Operations offered by the trends API.
///
/// Implementations carry their own geo; callers pass only what varies per
/// request.
#[async_trait]
pub trait TrendsApi: Send + Sync {
    /// `GET /health`
    async fn health(&self) -> Result<HealthStatus>;

    /// `GET /api/topics`
    async fn topics(&self) -> Result<TopicsResponse>;

    /// `POST /api/trends`
    async fn trends(&self, keyword: &str, timeframe: Timeframe) -> Result<TrendsResponse>;

    /// `POST /api/trends/region`
    async fn region(&self, keyword: &str, timeframe: Timeframe) -> Result<Vec<RegionPoint>>;

    /// `POST /api/trends/overtime`
    async fn over_time(&self, keyword: &str, timeframe: Timeframe) -> Result<Vec<TrendPoint>>;

    /// `GET /api/trends/compare`, at most five keywords.
    async fn compare(&self, keywords: &[String], timeframe: Timeframe)
    -> Result<CompareResponse>;
}
