pub mod cache;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetch;

pub use cache::{CacheStats, CachedTrends, FetchTicket, Lookup, TrendCache};
pub use config::{
    API_URL_ENV, ApiConfig, CONFIG_ENV, Config, DashboardConfig, default_log_path,
    resolve_config_path,
};
pub use dashboard::{ApplyOutcome, Dashboard, Displayed, SelectOutcome, Selection, ViewState};
pub use error::{Error, Result};
pub use fetch::{FetchCompletion, FetchDriver};
