//! Dashboard controller: current selection, displayed data and the fetch
//! lifecycle behind them.
//!
//! Selecting a keyword resolves through the cache. Only a miss issues a
//! request, and at most one request per key runs at a time. A completion is
//! always cached, but it replaces the displayed data only when its key is
//! still the current selection. Anything else is a stale response.

use chrono::{TimeDelta, Utc};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, error, info};
use trendlens_client::TrendsApi;
use trendlens_engine::{DashboardModel, TrendStats, build_dashboard, summarize};
use trendlens_types::{CacheKey, Timeframe, TrendsResponse};

use crate::cache::{CacheStats, Lookup, TrendCache};
use crate::fetch::{FetchCompletion, FetchDriver};

/// The keyword/timeframe pair the user is looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub key: CacheKey,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Served from the cache and displayed immediately.
    Cached,
    /// A request for the same key is pending; its completion will display.
    AlreadyInFlight,
    /// A new request was spawned.
    Started,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Displayed,
    /// Cached but not shown; the selection moved on.
    Stale,
    Failed,
}

/// Data currently on screen and the key it belongs to.
#[derive(Debug, Clone)]
pub struct Displayed {
    pub key: CacheKey,
    pub data: Arc<TrendsResponse>,
}

#[derive(Debug, Clone)]
pub enum ViewState {
    /// Nothing selected yet.
    Idle,
    Loading(CacheKey),
    Ready(Displayed),
    /// The selection loaded but the payload carried no series.
    NoData(CacheKey),
    /// The last request for the selection failed.
    Failed { key: CacheKey, message: String },
}

pub struct Dashboard {
    cache: TrendCache,
    driver: FetchDriver,
    completions: mpsc::UnboundedReceiver<FetchCompletion>,
    timeframe: Timeframe,
    generation: u64,
    selection: Option<Selection>,
    displayed: Option<Displayed>,
    last_error: Option<(CacheKey, String)>,
}

impl Dashboard {
    pub fn new(api: Arc<dyn TrendsApi>, handle: Handle, timeframe: Timeframe) -> Self {
        let (driver, completions) = FetchDriver::new(api, handle);
        Self {
            cache: TrendCache::new(),
            driver,
            completions,
            timeframe,
            generation: 0,
            selection: None,
            displayed: None,
            last_error: None,
        }
    }

    /// Select `keyword` under the active timeframe.
    pub fn select(&mut self, keyword: &str) -> SelectOutcome {
        let key = CacheKey::new(keyword, self.timeframe);
        self.select_key(key)
    }

    /// Select `keyword` and make `timeframe` the active timeframe.
    pub fn select_with(&mut self, keyword: &str, timeframe: Timeframe) -> SelectOutcome {
        self.timeframe = timeframe;
        self.select(keyword)
    }

    /// Change the active timeframe and re-select the current keyword under it.
    ///
    /// Returns `None` when no keyword has been selected yet.
    pub fn set_timeframe(&mut self, timeframe: Timeframe) -> Option<SelectOutcome> {
        self.timeframe = timeframe;
        let keyword = self.selection.as_ref()?.key.keyword.clone();
        Some(self.select(&keyword))
    }

    fn select_key(&mut self, key: CacheKey) -> SelectOutcome {
        self.generation += 1;
        let generation = self.generation;
        info!(key = %key, generation, "keyword selected");

        let lookup = self.cache.begin(&key, generation);
        self.selection = Some(Selection {
            key: key.clone(),
            generation,
        });

        match lookup {
            Lookup::Hit(data) => {
                self.displayed = Some(Displayed { key, data });
                SelectOutcome::Cached
            }
            Lookup::InFlight => SelectOutcome::AlreadyInFlight,
            Lookup::Miss(ticket) => {
                self.driver.spawn(ticket);
                SelectOutcome::Started
            }
        }
    }

    /// Settle one completion against the cache and the current selection.
    pub fn apply(&mut self, completion: FetchCompletion) -> ApplyOutcome {
        let FetchCompletion { ticket, result } = completion;
        let current = self.is_current(ticket.key());

        match result {
            Ok(data) => {
                let Some(data) = self.cache.finish(&ticket, Some(data)) else {
                    return ApplyOutcome::Failed;
                };
                if !current {
                    debug!(
                        key = %ticket.key(),
                        generation = ticket.generation(),
                        "stale response cached, not displayed"
                    );
                    return ApplyOutcome::Stale;
                }
                if self.last_error.as_ref().is_some_and(|(key, _)| key == ticket.key()) {
                    self.last_error = None;
                }
                self.displayed = Some(Displayed {
                    key: ticket.key().clone(),
                    data,
                });
                ApplyOutcome::Displayed
            }
            Err(err) => {
                error!(key = %ticket.key(), error = %err, "failed to fetch trends");
                self.cache.finish(&ticket, None);
                if current {
                    self.last_error = Some((ticket.key().clone(), err.to_string()));
                }
                ApplyOutcome::Failed
            }
        }
    }

    /// Apply every completion that is already waiting, without blocking.
    pub fn poll(&mut self) -> Vec<ApplyOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(completion) = self.completions.try_recv() {
            outcomes.push(self.apply(completion));
        }
        outcomes
    }

    /// Wait for the next completion and apply it.
    pub async fn next_completion(&mut self) -> Option<ApplyOutcome> {
        let completion = self.completions.recv().await?;
        Some(self.apply(completion))
    }

    fn is_current(&self, key: &CacheKey) -> bool {
        self.selection.as_ref().is_some_and(|s| &s.key == key)
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn displayed(&self) -> Option<&Displayed> {
        self.displayed.as_ref()
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// How long ago the displayed payload was fetched.
    pub fn displayed_age(&self) -> Option<TimeDelta> {
        let displayed = self.displayed.as_ref()?;
        let entry = self.cache.get(&displayed.key)?;
        Some(Utc::now() - entry.fetched_at)
    }

    /// Summary stats of the displayed series.
    pub fn stats(&self) -> Option<TrendStats> {
        summarize(&self.displayed.as_ref()?.data.interest_over_time)
    }

    /// Panel data for the displayed payload.
    pub fn model(&self) -> Option<DashboardModel> {
        self.displayed.as_ref().map(|d| build_dashboard(&d.data))
    }

    pub fn view_state(&self) -> ViewState {
        let Some(selection) = &self.selection else {
            return ViewState::Idle;
        };
        let key = &selection.key;

        if let Some(displayed) = self.displayed.as_ref().filter(|d| &d.key == key) {
            if displayed.data.interest_over_time.is_empty() {
                return ViewState::NoData(key.clone());
            }
            return ViewState::Ready(displayed.clone());
        }

        if self.cache.is_in_flight(key) {
            return ViewState::Loading(key.clone());
        }

        match &self.last_error {
            Some((failed, message)) if failed == key => ViewState::Failed {
                key: key.clone(),
                message: message.clone(),
            },
            _ => ViewState::Loading(key.clone()),
        }
    }
}
