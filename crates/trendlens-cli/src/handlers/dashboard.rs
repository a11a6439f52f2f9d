use super::HandlerContext;
use super::topics::available_topics;
use crate::presentation::renderers::tui::{self, AppState};
use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use tracing::info;
use trendlens_runtime::Dashboard;
use trendlens_types::Timeframe;

pub fn handle(ctx: &HandlerContext, timeframe: Timeframe, topic: Option<&str>) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("The dashboard needs an interactive terminal; try `trendlens trends <keyword>`");
    }

    let topic_idx = match topic {
        None => 0,
        Some(id) => match trendlens_catalog::topics().iter().position(|t| t.id == id) {
            Some(idx) => idx,
            None => bail!("Unknown topic '{}'. Available: {}", id, available_topics()),
        },
    };

    info!(base_url = %ctx.config.api.base_url, timeframe = %timeframe, "dashboard started");
    let mut dashboard = Dashboard::new(ctx.shared_api(), ctx.handle(), timeframe);
    tui::run(&mut dashboard, AppState::new(topic_idx, timeframe))
}
