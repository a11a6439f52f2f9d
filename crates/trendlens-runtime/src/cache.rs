//! In-memory trends cache with an in-flight guard.
//!
//! Entries live for the life of the process: no capacity limit, no TTL, no
//! persistence. A key is either cached, in flight, or unknown; a key is
//! never in flight twice.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;
use trendlens_types::{CacheKey, TrendsResponse};

#[derive(Debug, Clone)]
pub struct CachedTrends {
    pub data: Arc<TrendsResponse>,
    pub fetched_at: DateTime<Utc>,
}

/// Permission to run exactly one fetch for `key`.
///
/// Only [`TrendCache::begin`] hands these out; returning it through
/// [`TrendCache::finish`] clears the in-flight marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    key: CacheKey,
    generation: u64,
}

impl FetchTicket {
    pub fn key(&self) -> &CacheKey {
        &self.key
    }

    /// Selection generation that issued this fetch.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone)]
pub enum Lookup {
    /// Served from memory, no request needed.
    Hit(Arc<TrendsResponse>),
    /// A request for this key is already running.
    InFlight,
    /// Caller must fetch and hand the ticket back.
    Miss(FetchTicket),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub in_flight: usize,
}

#[derive(Debug, Default)]
pub struct TrendCache {
    entries: HashMap<CacheKey, CachedTrends>,
    in_flight: HashSet<CacheKey>,
}

impl TrendCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check `key` and, on a miss, mark it in flight.
    pub fn begin(&mut self, key: &CacheKey, generation: u64) -> Lookup {
        if let Some(entry) = self.entries.get(key) {
            debug!(key = %key, "cache hit");
            return Lookup::Hit(entry.data.clone());
        }

        if self.in_flight.contains(key) {
            debug!(key = %key, "request already in flight");
            return Lookup::InFlight;
        }

        self.in_flight.insert(key.clone());
        debug!(key = %key, generation, "cache miss, fetch started");
        Lookup::Miss(FetchTicket {
            key: key.clone(),
            generation,
        })
    }

    /// Settle a fetch. `Some` stores the payload; `None` records a failure
    /// and leaves the key uncached so a later selection can retry.
    pub fn finish(
        &mut self,
        ticket: &FetchTicket,
        data: Option<TrendsResponse>,
    ) -> Option<Arc<TrendsResponse>> {
        self.in_flight.remove(&ticket.key);

        let data = Arc::new(data?);
        self.entries.insert(
            ticket.key.clone(),
            CachedTrends {
                data: data.clone(),
                fetched_at: Utc::now(),
            },
        );
        Some(data)
    }

    pub fn get(&self, key: &CacheKey) -> Option<&CachedTrends> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_in_flight(&self, key: &CacheKey) -> bool {
        self.in_flight.contains(key)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            in_flight: self.in_flight.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trendlens_types::{Timeframe, TrendPoint};

    fn key(keyword: &str) -> CacheKey {
        CacheKey::new(keyword, Timeframe::TwelveMonths)
    }

    fn payload(value: u32) -> TrendsResponse {
        TrendsResponse {
            interest_over_time: vec![TrendPoint::new("2024-01-01", value)],
            ..Default::default()
        }
    }

    #[test]
    fn test_miss_then_in_flight_then_hit() {
        let mut cache = TrendCache::new();
        let k = key("Netflix");

        let ticket = match cache.begin(&k, 1) {
            Lookup::Miss(ticket) => ticket,
            other => panic!("expected miss, got {other:?}"),
        };
        assert_eq!(ticket.key(), &k);
        assert_eq!(ticket.generation(), 1);
        assert!(matches!(cache.begin(&k, 2), Lookup::InFlight));
        assert_eq!(cache.stats(), CacheStats { entries: 0, in_flight: 1 });

        let stored = cache.finish(&ticket, Some(payload(42)));
        assert!(stored.is_some());
        assert!(!cache.is_in_flight(&k));

        match cache.begin(&k, 3) {
            Lookup::Hit(data) => assert_eq!(data.interest_over_time[0].value, 42),
            other => panic!("expected hit, got {other:?}"),
        }
        assert_eq!(cache.stats(), CacheStats { entries: 1, in_flight: 0 });
    }

    #[test]
    fn test_failure_clears_marker_without_caching() {
        let mut cache = TrendCache::new();
        let k = key("Hulu Live TV");

        let Lookup::Miss(ticket) = cache.begin(&k, 1) else {
            panic!("expected miss");
        };
        assert!(cache.finish(&ticket, None).is_none());

        assert!(!cache.contains(&k));
        assert!(!cache.is_in_flight(&k));
        assert!(matches!(cache.begin(&k, 2), Lookup::Miss(_)));
    }

    #[test]
    fn test_keys_are_independent_per_timeframe() {
        let mut cache = TrendCache::new();
        let year = CacheKey::new("Roku", Timeframe::TwelveMonths);
        let month = CacheKey::new("Roku", Timeframe::OneMonth);

        assert!(matches!(cache.begin(&year, 1), Lookup::Miss(_)));
        assert!(matches!(cache.begin(&month, 2), Lookup::Miss(_)));
        assert_eq!(cache.stats().in_flight, 2);
    }

    #[test]
    fn test_entries_record_fetch_time() {
        let mut cache = TrendCache::new();
        let k = key("Max");
        let before = Utc::now();

        let Lookup::Miss(ticket) = cache.begin(&k, 1) else {
            panic!("expected miss");
        };
        cache.finish(&ticket, Some(payload(1)));

        assert!(cache.get(&k).unwrap().fetched_at >= before);
    }
}
