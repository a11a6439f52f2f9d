use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext, compare::Source};
use crate::logging::{self, LogTarget};
use anyhow::Result;
use trendlens_runtime::{Config, default_log_path, resolve_config_path};

pub fn run(cli: Cli) -> Result<()> {
    let target = match &cli.command {
        Some(Commands::Dashboard { log_file, .. }) => {
            LogTarget::File(log_file.clone().unwrap_or_else(default_log_path))
        }
        _ => LogTarget::Stderr,
    };
    logging::init(cli.log_level, target)?;

    let format = cli.format;
    let config_path = cli.config;
    let api_url = cli.api_url;
    let context = || -> Result<HandlerContext> {
        let config = load_config(config_path.as_deref(), api_url.clone())?;
        HandlerContext::new(format, config)
    };

    let Some(command) = cli.command else {
        let exists = resolve_config_path(config_path.as_deref())?.exists();
        let config = load_config(config_path.as_deref(), api_url.clone())?;
        return handlers::guidance::handle(format, exists, &config);
    };

    match command {
        Commands::Health => handlers::health::handle(&context()?),

        Commands::Topics { remote, topic } => {
            handlers::topics::handle(&context()?, remote, topic.as_deref())
        }

        Commands::Trends { keyword, timeframe } => {
            let ctx = context()?;
            handlers::trends::handle(&ctx, &keyword, ctx.timeframe(timeframe))
        }

        Commands::Compare {
            keywords,
            topic,
            sub_topic,
            timeframe,
        } => {
            let ctx = context()?;
            let source = match (topic, sub_topic) {
                (Some(topic), Some(sub_topic)) => Source::SubTopic { topic, sub_topic },
                _ => Source::Keywords(keywords),
            };
            handlers::compare::handle(&ctx, source, ctx.timeframe(timeframe))
        }

        Commands::Export {
            keyword,
            output,
            timeframe,
        } => {
            let ctx = context()?;
            handlers::export::handle(&ctx, &keyword, ctx.timeframe(timeframe), output.as_deref())
        }

        Commands::Dashboard {
            timeframe, topic, ..
        } => {
            let ctx = context()?;
            handlers::dashboard::handle(&ctx, ctx.timeframe(timeframe), topic.as_deref())
        }

        Commands::Config { command } => {
            handlers::config::handle(command, config_path.as_deref(), api_url.clone(), format)
        }
    }
}

/// Effective configuration: file, then `TRENDLENS_API_URL`, then `--api-url`.
pub(crate) fn load_config(explicit_path: Option<&str>, api_url: Option<String>) -> Result<Config> {
    let config = Config::load(explicit_path)?.with_base_url_override(api_url);
    config.validate()?;
    Ok(config)
}
