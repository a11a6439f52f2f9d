use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewOptions};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct HealthViewModel {
    pub base_url: String,
    pub healthy: bool,
    pub status: String,
    pub version: Option<String>,
    pub environment: Option<String>,
    pub cache_status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub base_url: String,
    pub geo: String,
    pub timeout_secs: u64,
    pub timeframe: String,
}

#[derive(Debug, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub overwritten: bool,
}

#[derive(Debug, Serialize)]
pub struct ExportViewModel {
    pub keyword: String,
    pub timeframe: String,
    pub rows: usize,
    pub output: String,
}

#[derive(Debug, Serialize)]
pub struct GuidanceViewModel {
    pub config_exists: bool,
    pub base_url: String,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for HealthViewModel {
    fn create_view<'a>(&'a self, _options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::HealthView;
        Box::new(HealthView::new(self))
    }
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::ConfigView;
        Box::new(ConfigView::new(self))
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, _options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::ConfigInitView;
        Box::new(ConfigInitView::new(self))
    }
}

impl CreateView for ExportViewModel {
    fn create_view<'a>(&'a self, _options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::ExportView;
        Box::new(ExportView::new(self))
    }
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, _options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::GuidanceView;
        Box::new(GuidanceView::new(self))
    }
}
