use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;
use anyhow::Result;
use trendlens_runtime::Config;

pub fn handle(format: OutputFormat, config_exists: bool, config: &Config) -> Result<()> {
    let renderer = ConsoleRenderer::new(format);
    renderer.render(presenters::present_guidance(
        config_exists,
        &config.api.base_url,
    ))
}
