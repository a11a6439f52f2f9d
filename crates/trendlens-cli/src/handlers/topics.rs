use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Result, bail};

pub fn handle(ctx: &HandlerContext, remote: bool, topic: Option<&str>) -> Result<()> {
    if remote {
        let response = ctx.block_on(ctx.api().topics())?;
        if let Some(id) = topic {
            if response.find(id).is_none() {
                bail!("Topic '{}' is not served by the API", id);
            }
        }
        return ctx.render(presenters::present_remote_topics(response, topic));
    }

    let entries: Vec<_> = match topic {
        Some(id) => match trendlens_catalog::topic(id) {
            Some(entry) => vec![entry],
            None => bail!("Unknown topic '{}'. Available: {}", id, available_topics()),
        },
        None => trendlens_catalog::topics().iter().collect(),
    };

    ctx.render(presenters::present_catalog_topics(&entries))
}

pub(crate) fn available_topics() -> String {
    trendlens_catalog::topics()
        .iter()
        .map(|t| t.id)
        .collect::<Vec<_>>()
        .join(", ")
}
