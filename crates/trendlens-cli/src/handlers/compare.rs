use super::HandlerContext;
use super::topics::available_topics;
use crate::presentation::presenters;
use anyhow::{Result, anyhow};
use tracing::debug;
use trendlens_types::{CompareResponse, Timeframe};

pub enum Source {
    Keywords(Vec<String>),
    /// Every keyword of a catalog sub-topic, batched to the endpoint limit.
    SubTopic { topic: String, sub_topic: String },
}

pub fn handle(ctx: &HandlerContext, source: Source, timeframe: Timeframe) -> Result<()> {
    match source {
        Source::Keywords(keywords) => {
            let keywords: Vec<String> = keywords
                .iter()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect();
            let response = ctx.block_on(ctx.api().compare(&keywords, timeframe))?;
            ctx.render(presenters::present_compare(
                None, timeframe, &response, &keywords,
            ))
        }
        Source::SubTopic { topic, sub_topic } => {
            if trendlens_catalog::topic(&topic).is_none() {
                return Err(anyhow!(
                    "Unknown topic '{}'. Available: {}",
                    topic,
                    available_topics()
                ));
            }
            let entry = trendlens_catalog::sub_topic(&topic, &sub_topic).ok_or_else(|| {
                anyhow!("Topic '{}' has no sub-topic '{}'", topic, sub_topic)
            })?;

            let mut merged = CompareResponse::default();
            for batch in trendlens_catalog::comparison_batches(entry.keywords) {
                let batch: Vec<String> = batch.into_iter().map(String::from).collect();
                debug!(keywords = ?batch, "compare batch");
                let response = ctx.block_on(ctx.api().compare(&batch, timeframe))?;
                merged.comparisons.extend(response.comparisons);
            }

            let requested: Vec<String> = entry.keywords.iter().map(|k| k.to_string()).collect();
            ctx.render(presenters::present_compare(
                Some(trendlens_catalog::heading(&sub_topic)),
                timeframe,
                &merged,
                &requested,
            ))
        }
    }
}
