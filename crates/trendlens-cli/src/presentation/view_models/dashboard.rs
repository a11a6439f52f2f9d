use serde::Serialize;

use super::TrendsViewModel;

/// What the main dashboard panel shows for the current selection.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PanelViewModel {
    Idle,
    Loading { keyword: String },
    Ready { trends: Box<TrendsViewModel> },
    NoData { keyword: String },
    Failed { keyword: String, message: String },
}
