use crate::args::ConfigCommand;
use crate::commands::load_config;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;
use anyhow::{Result, bail};
use tracing::info;
use trendlens_runtime::{Config, resolve_config_path};

pub fn handle(
    command: ConfigCommand,
    explicit_path: Option<&str>,
    api_url: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let path = resolve_config_path(explicit_path)?;
    let renderer = ConsoleRenderer::new(format);

    match command {
        ConfigCommand::Show => {
            let config = load_config(explicit_path, api_url)?;
            renderer.render(presenters::present_config(&path, path.exists(), &config))
        }
        ConfigCommand::Init { force } => {
            let exists = path.exists();
            if exists && !force {
                bail!(
                    "Config file already exists at {}. Use --force to overwrite",
                    path.display()
                );
            }

            let config = Config::default().with_base_url_override(api_url);
            config.validate()?;
            config.save_to(&path)?;
            info!(path = %path.display(), "config written");

            renderer.render(presenters::present_config_init(&path, exists))
        }
    }
}
