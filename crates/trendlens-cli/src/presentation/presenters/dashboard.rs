use trendlens_runtime::ViewState;

use super::trends::trends_view_model;
use crate::presentation::view_models::PanelViewModel;

pub fn present_panel(state: &ViewState) -> PanelViewModel {
    match state {
        ViewState::Idle => PanelViewModel::Idle,
        ViewState::Loading(key) => PanelViewModel::Loading {
            keyword: key.keyword.clone(),
        },
        ViewState::Ready(displayed) => PanelViewModel::Ready {
            trends: Box::new(trends_view_model(
                &displayed.key.keyword,
                displayed.key.timeframe,
                &displayed.data,
            )),
        },
        ViewState::NoData(key) => PanelViewModel::NoData {
            keyword: key.keyword.clone(),
        },
        ViewState::Failed { key, message } => PanelViewModel::Failed {
            keyword: key.keyword.clone(),
            message: message.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use trendlens_runtime::Displayed;
    use trendlens_types::{CacheKey, Timeframe, TrendPoint, TrendsResponse};

    #[test]
    fn test_ready_state_becomes_trends_panel() {
        let displayed = Displayed {
            key: CacheKey::new("Roku", Timeframe::FiveYears),
            data: Arc::new(TrendsResponse {
                interest_over_time: vec![TrendPoint::new("2020-01-01", 40)],
                ..Default::default()
            }),
        };

        match present_panel(&ViewState::Ready(displayed)) {
            PanelViewModel::Ready { trends } => {
                assert_eq!(trends.keyword, "Roku");
                assert_eq!(trends.timeframe_label, "5 Years");
                assert_eq!(trends.stats.map(|s| s.peak), Some(40));
            }
            other => panic!("expected ready panel, got {other:?}"),
        }
    }

    #[test]
    fn test_loading_state_keeps_keyword() {
        let state = ViewState::Loading(CacheKey::new("Max", Timeframe::OneMonth));
        assert!(matches!(
            present_panel(&state),
            PanelViewModel::Loading { keyword } if keyword == "Max"
        ));
    }
}
