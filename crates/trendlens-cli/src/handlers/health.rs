use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let base_url = &ctx.config.api.base_url;
    let health = ctx
        .block_on(ctx.api().health())
        .with_context(|| format!("Trends API at {} is not reachable", base_url))?;

    ctx.render(presenters::present_health(base_url, health))
}
