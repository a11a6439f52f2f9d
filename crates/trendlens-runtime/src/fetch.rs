use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::debug;
use trendlens_client::TrendsApi;
use trendlens_types::TrendsResponse;

use crate::cache::FetchTicket;

/// Outcome of one spawned trends request.
#[derive(Debug)]
pub struct FetchCompletion {
    pub ticket: FetchTicket,
    pub result: trendlens_client::Result<TrendsResponse>,
}

/// Runs trends requests on a tokio runtime and reports back over a channel.
///
/// Requests are never cancelled; whoever drains the receiver decides what a
/// late completion means.
#[derive(Clone)]
pub struct FetchDriver {
    api: Arc<dyn TrendsApi>,
    handle: Handle,
    tx: mpsc::UnboundedSender<FetchCompletion>,
}

impl FetchDriver {
    pub fn new(
        api: Arc<dyn TrendsApi>,
        handle: Handle,
    ) -> (Self, mpsc::UnboundedReceiver<FetchCompletion>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { api, handle, tx }, rx)
    }

    pub fn spawn(&self, ticket: FetchTicket) {
        let api = self.api.clone();
        let tx = self.tx.clone();

        debug!(key = %ticket.key(), generation = ticket.generation(), "spawning trends request");
        self.handle.spawn(async move {
            let key = ticket.key();
            let result = api.trends(&key.keyword, key.timeframe).await;
            // Receiver gone means the dashboard shut down.
            let _ = tx.send(FetchCompletion { ticket, result });
        });
    }
}
