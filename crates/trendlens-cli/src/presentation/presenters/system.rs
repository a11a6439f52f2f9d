use std::path::Path;
use trendlens_runtime::Config;
use trendlens_types::HealthStatus;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, ExportViewModel, Guidance,
    GuidanceViewModel, HealthViewModel, StatusBadge,
};

pub fn present_health(
    base_url: &str,
    health: HealthStatus,
) -> CommandResultViewModel<HealthViewModel> {
    let healthy = health.is_healthy();
    let badge = if healthy {
        StatusBadge::success("Trends API is healthy")
    } else {
        StatusBadge::warning(format!("Trends API reported status '{}'", health.status))
    };

    CommandResultViewModel::new(HealthViewModel {
        base_url: base_url.to_string(),
        healthy,
        status: health.status,
        version: health.version,
        environment: health.environment,
        cache_status: health.cache_status,
    })
    .with_badge(badge)
}

pub fn present_config(
    path: &Path,
    exists: bool,
    config: &Config,
) -> CommandResultViewModel<ConfigViewModel> {
    let result = CommandResultViewModel::new(ConfigViewModel {
        path: path.display().to_string(),
        exists,
        base_url: config.api.base_url.clone(),
        geo: config.api.geo.clone(),
        timeout_secs: config.api.timeout_secs,
        timeframe: config.dashboard.timeframe.to_string(),
    });

    if exists {
        result
    } else {
        result.with_suggestion(
            Guidance::new("No config file yet, defaults are in effect")
                .with_command("trendlens config init"),
        )
    }
}

pub fn present_config_init(
    path: &Path,
    overwritten: bool,
) -> CommandResultViewModel<ConfigInitViewModel> {
    CommandResultViewModel::new(ConfigInitViewModel {
        path: path.display().to_string(),
        overwritten,
    })
    .with_badge(StatusBadge::success("Configuration written"))
}

pub fn present_export(
    keyword: &str,
    timeframe: &str,
    rows: usize,
    output: &Path,
) -> CommandResultViewModel<ExportViewModel> {
    CommandResultViewModel::new(ExportViewModel {
        keyword: keyword.to_string(),
        timeframe: timeframe.to_string(),
        rows,
        output: output.display().to_string(),
    })
}

pub fn present_guidance(
    config_exists: bool,
    base_url: &str,
) -> CommandResultViewModel<GuidanceViewModel> {
    let result = CommandResultViewModel::new(GuidanceViewModel {
        config_exists,
        base_url: base_url.to_string(),
    })
    .with_suggestion(Guidance::new("Check the API").with_command("trendlens health"))
    .with_suggestion(Guidance::new("Browse keywords").with_command("trendlens topics"))
    .with_suggestion(Guidance::new("Open the dashboard").with_command("trendlens dashboard"));

    if config_exists {
        result
    } else {
        result.with_suggestion(
            Guidance::new("Create a config file").with_command("trendlens config init"),
        )
    }
}
