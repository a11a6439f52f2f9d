use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::{OutputFormat, TimeframeArg};
use anyhow::{Context, Result};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::{Handle, Runtime};
use trendlens_client::TrendsApi;
use trendlens_runtime::Config;
use trendlens_types::Timeframe;

/// Everything a command needs: output format, effective config, an API
/// client and the runtime its requests run on.
pub struct HandlerContext {
    pub format: OutputFormat,
    pub config: Config,
    api: Arc<dyn TrendsApi>,
    runtime: Runtime,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, config: Config) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;
        let api: Arc<dyn TrendsApi> = Arc::new(config.client());

        Ok(Self {
            format,
            config,
            api,
            runtime,
        })
    }

    pub fn api(&self) -> &dyn TrendsApi {
        self.api.as_ref()
    }

    pub fn shared_api(&self) -> Arc<dyn TrendsApi> {
        self.api.clone()
    }

    pub fn handle(&self) -> Handle {
        self.runtime.handle().clone()
    }

    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// The `--timeframe` flag when given, else the configured default.
    pub fn timeframe(&self, arg: Option<TimeframeArg>) -> Timeframe {
        arg.map(Timeframe::from)
            .unwrap_or(self.config.dashboard.timeframe)
    }

    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        let renderer = ConsoleRenderer::new(self.format);
        renderer.render(view_model)
    }
}
