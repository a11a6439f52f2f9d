//! In-process [`TrendsApi`] for exercising the fetch lifecycle without HTTP.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::Semaphore;
use trendlens_client::{Error, Result, TrendsApi};
use trendlens_types::{
    CacheKey, CompareResponse, HealthStatus, RegionPoint, Timeframe, TopicsResponse, TrendPoint,
    TrendsResponse,
};

use crate::fixtures::sample_trends;

#[derive(Default)]
struct State {
    responses: HashMap<CacheKey, TrendsResponse>,
    failures: HashSet<CacheKey>,
    gates: HashMap<CacheKey, Arc<Semaphore>>,
    calls: Vec<CacheKey>,
}

/// Records every `trends` call and answers from canned payloads.
///
/// A held key blocks its requests until [`FakeTrendsApi::release`] is
/// called, which makes arrival order deterministic in tests.
#[derive(Default)]
pub struct FakeTrendsApi {
    state: Mutex<State>,
}

impl FakeTrendsApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Answer requests for `key` with `response` instead of the sample payload.
    pub fn respond(&self, key: CacheKey, response: TrendsResponse) {
        self.state().responses.insert(key, response);
    }

    /// Answer requests for `key` with a 500.
    pub fn fail(&self, key: CacheKey) {
        self.state().failures.insert(key);
    }

    pub fn recover(&self, key: &CacheKey) {
        self.state().failures.remove(key);
    }

    /// Block requests for `key` until released.
    pub fn hold(&self, key: CacheKey) {
        self.state()
            .gates
            .insert(key, Arc::new(Semaphore::new(0)));
    }

    /// Let one held request for `key` through.
    pub fn release(&self, key: &CacheKey) {
        if let Some(gate) = self.state().gates.get(key) {
            gate.add_permits(1);
        }
    }

    pub fn call_count(&self) -> usize {
        self.state().calls.len()
    }

    pub fn calls_for(&self, key: &CacheKey) -> usize {
        self.state().calls.iter().filter(|c| *c == key).count()
    }

    pub fn calls(&self) -> Vec<CacheKey> {
        self.state().calls.clone()
    }
}

#[async_trait]
impl TrendsApi for FakeTrendsApi {
    async fn health(&self) -> Result<HealthStatus> {
        Ok(HealthStatus {
            status: "healthy".to_string(),
            ..Default::default()
        })
    }

    async fn topics(&self) -> Result<TopicsResponse> {
        Ok(TopicsResponse::default())
    }

    async fn trends(&self, keyword: &str, timeframe: Timeframe) -> Result<TrendsResponse> {
        let key = CacheKey::new(keyword, timeframe);
        let gate = {
            let mut state = self.state();
            state.calls.push(key.clone());
            state.gates.get(&key).cloned()
        };

        if let Some(gate) = gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }

        let state = self.state();
        if state.failures.contains(&key) {
            return Err(Error::Status {
                endpoint: "/api/trends".to_string(),
                status: 500,
                body: "upstream unavailable".to_string(),
            });
        }
        Ok(state
            .responses
            .get(&key)
            .cloned()
            .unwrap_or_else(|| sample_trends(keyword)))
    }

    async fn region(&self, keyword: &str, timeframe: Timeframe) -> Result<Vec<RegionPoint>> {
        Ok(self.trends(keyword, timeframe).await?.interest_by_region)
    }

    async fn over_time(&self, keyword: &str, timeframe: Timeframe) -> Result<Vec<TrendPoint>> {
        Ok(self.trends(keyword, timeframe).await?.interest_over_time)
    }

    async fn compare(
        &self,
        keywords: &[String],
        timeframe: Timeframe,
    ) -> Result<CompareResponse> {
        let mut comparisons = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            comparisons.push(self.trends(keyword, timeframe).await?);
        }
        Ok(CompareResponse { comparisons })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_records_calls_and_serves_samples() {
        let api = FakeTrendsApi::new();
        let response = api.trends("Netflix", Timeframe::OneMonth).await.unwrap();

        assert_eq!(response.keyword.as_deref(), Some("Netflix"));
        assert_eq!(api.calls_for(&CacheKey::new("Netflix", Timeframe::OneMonth)), 1);
    }

    #[tokio::test]
    async fn test_held_key_waits_for_release() {
        let api = Arc::new(FakeTrendsApi::new());
        let key = CacheKey::new("Roku", Timeframe::TwelveMonths);
        api.hold(key.clone());

        let task = {
            let api = api.clone();
            tokio::spawn(async move { api.trends("Roku", Timeframe::TwelveMonths).await })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!task.is_finished());

        api.release(&key);
        let response = task.await.unwrap().unwrap();
        assert_eq!(response.keyword.as_deref(), Some("Roku"));
    }

    #[tokio::test]
    async fn test_failure_is_a_status_error() {
        let api = FakeTrendsApi::new();
        api.fail(CacheKey::new("Sling", Timeframe::TwelveMonths));

        let err = api.trends("Sling", Timeframe::TwelveMonths).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }
}
