use trendlens_engine::{build_dashboard, comparison_overview};
use trendlens_types::{CompareResponse, Timeframe, TrendsResponse};

use crate::presentation::view_models::{
    CommandResultViewModel, CompareViewModel, Guidance, StatusBadge, TrendsViewModel,
};

pub fn trends_view_model(
    keyword: &str,
    timeframe: Timeframe,
    response: &TrendsResponse,
) -> TrendsViewModel {
    let model = build_dashboard(response);

    TrendsViewModel {
        keyword: keyword.to_string(),
        timeframe: timeframe.to_string(),
        timeframe_label: timeframe.label().to_string(),
        location: trendlens_catalog::locate(keyword),
        stats: model.stats,
        series: model.series,
        regions: model.regions,
        related: model.related,
        rising: model.rising,
    }
}

pub fn present_trends(
    keyword: &str,
    timeframe: Timeframe,
    response: &TrendsResponse,
) -> CommandResultViewModel<TrendsViewModel> {
    let view_model = trends_view_model(keyword, timeframe, response);
    let no_data = view_model.stats.is_none();
    let result = CommandResultViewModel::new(view_model);

    if no_data {
        result
            .with_badge(StatusBadge::warning("No interest data returned"))
            .with_suggestion(
                Guidance::new("Try a longer timeframe")
                    .with_command(format!("trendlens trends \"{}\" --timeframe 5y", keyword)),
            )
    } else {
        result
    }
}

pub fn present_compare(
    heading: Option<String>,
    timeframe: Timeframe,
    response: &CompareResponse,
    requested: &[String],
) -> CommandResultViewModel<CompareViewModel> {
    CommandResultViewModel::new(CompareViewModel {
        heading,
        timeframe: timeframe.to_string(),
        timeframe_label: timeframe.label().to_string(),
        keywords: comparison_overview(response, requested),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use trendlens_types::TrendPoint;

    #[test]
    fn test_catalog_keyword_carries_location() {
        let response = TrendsResponse {
            interest_over_time: vec![TrendPoint::new("2024-01-01", 7)],
            ..Default::default()
        };
        let vm = trends_view_model("Starlink", Timeframe::OneMonth, &response);

        let location = vm.location.expect("Starlink is in the catalog");
        assert_eq!(location.topic_id, "broadband");
        assert_eq!(vm.timeframe, "today 1-m");
    }

    #[test]
    fn test_empty_payload_gets_warning_and_hint() {
        let result = present_trends("nothing", Timeframe::OneMonth, &TrendsResponse::default());

        assert!(result.badge.is_some());
        assert_eq!(result.suggestions.len(), 1);
        assert!(result.content.location.is_none());
    }
}
