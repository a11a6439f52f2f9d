//! wiremock-backed stand-in for the trends HTTP API.

use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::fixtures;

/// A mock trends API with canned routes.
///
/// ```no_run
/// # async fn demo() {
/// use trendlens_testing::MockTrendsServer;
///
/// let server = MockTrendsServer::start().await.with_health().await;
/// println!("{}", server.uri());
/// # }
/// ```
pub struct MockTrendsServer {
    server: MockServer,
}

impl MockTrendsServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn inner(&self) -> &MockServer {
        &self.server
    }

    pub async fn with_health(self) -> Self {
        self.mount_json("GET", "/health", 200, fixtures::healthy_json())
            .await
    }

    pub async fn with_topics(self) -> Self {
        self.mount_json("GET", "/api/topics", 200, fixtures::topics_json())
            .await
    }

    /// Serve the sample payload for any `POST /api/trends`.
    pub async fn with_trends(self, keyword: &str) -> Self {
        self.mount_json(
            "POST",
            "/api/trends",
            200,
            fixtures::sample_trends_json(keyword),
        )
        .await
    }

    pub async fn with_compare(self, keywords: &[&str]) -> Self {
        Mock::given(method("GET"))
            .and(path("/api/trends/compare"))
            .and(query_param("keywords", keywords.join(",")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(fixtures::compare_json(keywords)),
            )
            .mount(&self.server)
            .await;
        self
    }

    /// Answer every request to `route` with `status` and a plain-text body.
    pub async fn with_failure(self, http_method: &str, route: &str, status: u16) -> Self {
        Mock::given(method(http_method))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string("upstream unavailable"))
            .mount(&self.server)
            .await;
        self
    }

    pub async fn mount_json(self, http_method: &str, route: &str, status: u16, body: Value) -> Self {
        Mock::given(method(http_method))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
        self
    }

    /// Requests received so far, as `METHOD path` strings.
    pub async fn received(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| format!("{} {}", r.method, r.url.path()))
            .collect()
    }
}
