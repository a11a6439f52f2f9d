use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use trendlens_types::{
    CompareResponse, DEFAULT_GEO, HealthStatus, MAX_COMPARE_KEYWORDS, OverTimeResponse,
    RegionPoint, RegionResponse, Timeframe, TopicsResponse, TrendPoint, TrendRequest,
    TrendsResponse,
};

use crate::traits::TrendsApi;
use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// reqwest-backed [`TrendsApi`].
///
/// ```no_run
/// use std::time::Duration;
/// use trendlens_client::HttpTrendsClient;
///
/// let client = HttpTrendsClient::new("http://localhost:8000")
///     .with_geo("US")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct HttpTrendsClient {
    client: reqwest::Client,
    base_url: String,
    geo: String,
    timeout: Duration,
}

impl HttpTrendsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            geo: DEFAULT_GEO.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_geo(mut self, geo: impl Into<String>) -> Self {
        self.geo = geo.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn geo(&self) -> &str {
        &self.geo
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request_body(&self, keyword: &str, timeframe: Timeframe) -> TrendRequest {
        TrendRequest::new(keyword, timeframe, self.geo.clone())
    }

    async fn get_json<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let mut request = self.client.get(self.url(path)).timeout(self.timeout);
        if let Some(query) = query {
            request = request.query(query);
        }
        debug!(endpoint = path, "GET");
        let response = request.send().await?;
        decode(path, response).await
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        debug!(endpoint = path, "POST");
        let response = self
            .client
            .post(self.url(path))
            .timeout(self.timeout)
            .json(body)
            .send()
            .await?;
        decode(path, response).await
    }
}

async fn decode<T: DeserializeOwned>(endpoint: &str, response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(Error::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body: body.trim().to_string(),
        });
    }

    serde_json::from_str(&body).map_err(|source| Error::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

fn validate_keyword(keyword: &str) -> Result<()> {
    if keyword.trim().is_empty() {
        return Err(Error::InvalidRequest("keyword must not be empty".to_string()));
    }
    Ok(())
}

#[async_trait]
impl TrendsApi for HttpTrendsClient {
    async fn health(&self) -> Result<HealthStatus> {
        self.get_json::<_, [(&str, &str)]>("/health", None).await
    }

    async fn topics(&self) -> Result<TopicsResponse> {
        self.get_json::<_, [(&str, &str)]>("/api/topics", None).await
    }

    async fn trends(&self, keyword: &str, timeframe: Timeframe) -> Result<TrendsResponse> {
        validate_keyword(keyword)?;
        self.post_json("/api/trends", &self.request_body(keyword, timeframe))
            .await
    }

    async fn region(&self, keyword: &str, timeframe: Timeframe) -> Result<Vec<RegionPoint>> {
        validate_keyword(keyword)?;
        let response: RegionResponse = self
            .post_json("/api/trends/region", &self.request_body(keyword, timeframe))
            .await?;
        Ok(response.interest_by_region)
    }

    async fn over_time(&self, keyword: &str, timeframe: Timeframe) -> Result<Vec<TrendPoint>> {
        validate_keyword(keyword)?;
        let response: OverTimeResponse = self
            .post_json(
                "/api/trends/overtime",
                &self.request_body(keyword, timeframe),
            )
            .await?;
        Ok(response.interest_over_time)
    }

    async fn compare(
        &self,
        keywords: &[String],
        timeframe: Timeframe,
    ) -> Result<CompareResponse> {
        if keywords.is_empty() {
            return Err(Error::InvalidRequest(
                "at least one keyword is required".to_string(),
            ));
        }
        if keywords.len() > MAX_COMPARE_KEYWORDS {
            return Err(Error::InvalidRequest(format!(
                "at most {} keywords can be compared, got {}",
                MAX_COMPARE_KEYWORDS,
                keywords.len()
            )));
        }
        for keyword in keywords {
            validate_keyword(keyword)?;
        }

        let joined = keywords.join(",");
        let query = [
            ("keywords", joined.as_str()),
            ("timeframe", timeframe.as_str()),
            ("geo", self.geo.as_str()),
        ];
        self.get_json("/api/trends/compare", Some(&query[..])).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = HttpTrendsClient::new("http://example.test/");
        assert_eq!(client.base_url(), "http://example.test");
        assert_eq!(client.url("/health"), "http://example.test/health");
    }

    #[test]
    fn test_builder_defaults() {
        let client = HttpTrendsClient::new(DEFAULT_BASE_URL);
        assert_eq!(client.geo(), "US");
        assert_eq!(client.timeout, DEFAULT_TIMEOUT);

        let client = client.with_geo("CA").with_timeout(Duration::from_secs(5));
        assert_eq!(client.geo(), "CA");
        assert_eq!(client.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_request_body_carries_geo() {
        let client = HttpTrendsClient::new(DEFAULT_BASE_URL).with_geo("GB");
        let body = client.request_body("Max", Timeframe::ThreeMonths);
        assert_eq!(body.geo, "GB");
        assert_eq!(body.timeframe, Timeframe::ThreeMonths);
    }
}
