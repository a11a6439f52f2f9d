use trendlens_engine::{NO_REGION_DATA, RegionChart, build_dashboard};
use trendlens_types::{QueryTerm, RegionPoint, TrendPoint, TrendsResponse};

fn sample_response() -> TrendsResponse {
    TrendsResponse {
        keyword: Some("Starlink".to_string()),
        interest_over_time: vec![
            TrendPoint::new("2024-01-01", 10),
            TrendPoint::new("2024-02-01", 50),
            TrendPoint::new("2024-03-01", 30),
        ],
        interest_by_region: vec![
            RegionPoint::new("Montana", 64),
            RegionPoint::new("Alaska", 100),
        ],
        related_queries: vec![
            QueryTerm::new("starlink cost", 100),
            QueryTerm::new("starlink dish", 20),
        ],
        rising_queries: vec![QueryTerm::new("starlink mini", 100)],
    }
}

#[test]
fn test_dashboard_stats_match_documented_example() {
    let model = build_dashboard(&sample_response());
    let stats = model.stats.expect("three samples produce stats");

    assert_eq!(stats.peak, 50);
    assert_eq!(stats.average, 30.0);
    assert_eq!(stats.current, 30);
}

#[test]
fn test_dashboard_region_panel() {
    let model = build_dashboard(&sample_response());

    insta::assert_json_snapshot!(model.regions, @r#"
    {
      "kind": "bars",
      "bars": [
        {
          "region": "Alaska",
          "value": 100
        },
        {
          "region": "Montana",
          "value": 64
        }
      ],
      "max": 100
    }
    "#);
}

#[test]
fn test_dashboard_without_regions_uses_placeholder() {
    let response = TrendsResponse {
        interest_by_region: Vec::new(),
        ..sample_response()
    };
    let model = build_dashboard(&response);

    assert_eq!(
        model.regions,
        RegionChart::Placeholder {
            message: NO_REGION_DATA
        }
    );
}

#[test]
fn test_dashboard_word_cloud_weights() {
    let model = build_dashboard(&sample_response());

    assert_eq!(model.related.len(), 2);
    assert_eq!(model.related[0].font_size, 72.0);
    assert_eq!(model.related[1].font_size, 16.0);
    // A single rising term has a degenerate domain.
    assert_eq!(model.rising[0].font_size, 44.0);
}

#[test]
fn test_empty_payload_has_no_stats_and_placeholder() {
    let model = build_dashboard(&TrendsResponse::default());

    assert!(model.stats.is_none());
    assert!(model.series.is_empty());
    assert!(model.regions.is_placeholder());
    assert!(model.related.is_empty());
}
