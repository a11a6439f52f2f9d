use std::time::Duration;

use serde_json::json;
use trendlens_client::{Error, HttpTrendsClient, TrendsApi};
use trendlens_types::Timeframe;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn trends_body(keyword: &str) -> serde_json::Value {
    json!({
        "keyword": keyword,
        "interest_over_time": [
            {"date": "2024-01-01", "value": 10, "keyword": keyword},
            {"date": "2024-02-01", "value": 50, "keyword": keyword},
            {"date": "2024-03-01", "value": 30, "keyword": keyword}
        ],
        "interest_by_region": [{"region": "Texas", "value": 100}],
        "related_queries": [{"text": "starlink cost", "value": 100}],
        "rising_queries": [{"text": "starlink mini", "value": 100}]
    })
}

#[tokio::test]
async fn test_health_decodes_status() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "version": "1.0.0",
            "environment": "development",
            "cache_status": "connected"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpTrendsClient::new(server.uri());
    let health = client.health().await?;

    assert!(health.is_healthy());
    assert_eq!(health.version.as_deref(), Some("1.0.0"));
    assert_eq!(health.cache_status.as_deref(), Some("connected"));
    Ok(())
}

#[tokio::test]
async fn test_trends_posts_keyword_timeframe_and_geo() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/trends"))
        .and(body_json(json!({
            "keyword": "Starlink",
            "timeframe": "today 3-m",
            "geo": "US"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(trends_body("Starlink")))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpTrendsClient::new(server.uri());
    let response = client.trends("Starlink", Timeframe::ThreeMonths).await?;

    assert_eq!(response.keyword.as_deref(), Some("Starlink"));
    assert_eq!(response.interest_over_time.len(), 3);
    assert_eq!(response.interest_by_region[0].region, "Texas");
    assert_eq!(response.rising_queries[0].text, "starlink mini");
    Ok(())
}

#[tokio::test]
async fn test_compare_sends_joined_keywords() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/trends/compare"))
        .and(query_param("keywords", "Roku,Apple TV"))
        .and(query_param("timeframe", "today 12-m"))
        .and(query_param("geo", "US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "comparisons": [trends_body("Roku"), trends_body("Apple TV")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpTrendsClient::new(server.uri());
    let keywords = vec!["Roku".to_string(), "Apple TV".to_string()];
    let response = client.compare(&keywords, Timeframe::TwelveMonths).await?;

    assert_eq!(response.comparisons.len(), 2);
    assert_eq!(response.comparisons[1].keyword.as_deref(), Some("Apple TV"));
    Ok(())
}

#[tokio::test]
async fn test_compare_rejects_more_than_five_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = HttpTrendsClient::new(server.uri());
    let keywords: Vec<String> = (0..6).map(|i| format!("kw{}", i)).collect();
    let err = client
        .compare(&keywords, Timeframe::TwelveMonths)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidRequest(_)), "got {err:?}");
}

#[tokio::test]
async fn test_region_and_over_time_unwrap_envelopes() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/trends/region"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "interest_by_region": [{"region": "Ohio", "value": 80}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/trends/overtime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "interest_over_time": [{"date": "2024-01-01", "value": 42}]
        })))
        .mount(&server)
        .await;

    let client = HttpTrendsClient::new(server.uri());
    let regions = client.region("Max", Timeframe::OneMonth).await?;
    let points = client.over_time("Max", Timeframe::OneMonth).await?;

    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].value, 80);
    assert_eq!(points[0].value, 42);
    Ok(())
}

#[tokio::test]
async fn test_non_success_status_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/trends"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"detail": "Failed to fetch trends data: 429"})),
        )
        .mount(&server)
        .await;

    let client = HttpTrendsClient::new(server.uri());
    let err = client
        .trends("Netflix", Timeframe::TwelveMonths)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("Failed to fetch trends data"));
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/topics"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = HttpTrendsClient::new(server.uri());
    let err = client.topics().await.unwrap_err();

    assert!(matches!(err, Error::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "healthy"}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = HttpTrendsClient::new(server.uri()).with_timeout(Duration::from_millis(100));
    let err = client.health().await.unwrap_err();

    assert!(err.is_timeout(), "got {err:?}");
}

#[tokio::test]
async fn test_empty_keyword_is_rejected_locally() {
    let client = HttpTrendsClient::new("http://127.0.0.1:9");
    let err = client
        .trends("  ", Timeframe::TwelveMonths)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidRequest(_)));
}
