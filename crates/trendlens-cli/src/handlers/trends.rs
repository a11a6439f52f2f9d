use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use tracing::info;
use trendlens_types::Timeframe;

pub fn handle(ctx: &HandlerContext, keyword: &str, timeframe: Timeframe) -> Result<()> {
    let keyword = keyword.trim();
    let response = ctx.block_on(ctx.api().trends(keyword, timeframe))?;
    info!(
        keyword,
        timeframe = %timeframe,
        points = response.interest_over_time.len(),
        "trends loaded"
    );

    ctx.render(presenters::present_trends(keyword, timeframe, &response))
}
