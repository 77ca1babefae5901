//! String-keyed cache with per-entry time to live.
//!
//! Expiry is only checked when an entry is read. Nothing sweeps the store in
//! the background, so keys that are written once and never read again stay
//! resident. The key space here (station ids, search terms, rounded
//! coordinates) is small enough that this is acceptable.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::trace;

use crate::metrics::Metrics;

// ---------- DEFINE `Clock` TRAIT ----------

/// Source of "now" for expiry checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to. Used to simulate elapsed time.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

// ---------- DEFINE `TtlCache` STRUCT ----------

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    /// `None` when the TTL overflows the clock, i.e. never expires.
    expires_at: Option<Instant>,
}

/// Key-value store whose entries stop being returned once their TTL passes.
///
/// Every `get` and `set` takes the internal lock, so a cache can be shared
/// between threads behind an `Arc`.
pub struct TtlCache<V, C = SystemClock> {
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
    clock: C,
    metrics: Arc<Metrics>,
}

impl<V: Clone> TtlCache<V, SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<V: Clone> Default for TtlCache<V, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone, C: Clock> TtlCache<V, C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// Shares hit/miss counters with other components.
    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Stores `value` until `ttl` from now, replacing any existing entry.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let key = key.into();
        let expires_at = self.clock.now().checked_add(ttl);
        trace!(target: "ttl_cache", key = %key, ttl_ms = ttl.as_millis() as u64, "set");
        self.entries
            .lock()
            .insert(key, CacheEntry { value, expires_at });
    }

    /// The stored value, if present and not yet expired.
    ///
    /// An expired entry is removed and reported as a miss.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now();
        let mut entries = self.entries.lock();

        let expired = entries
            .get(key)
            .map(|entry| entry.expires_at.is_some_and(|deadline| now >= deadline));
        let live = match expired {
            Some(false) => entries.get(key).map(|entry| entry.value.clone()),
            Some(true) => {
                entries.remove(key);
                trace!(target: "ttl_cache", key, "evicted expired entry");
                None
            }
            None => None,
        };

        if live.is_some() {
            self.metrics.record_cache_hit();
        } else {
            self.metrics.record_cache_miss();
        }
        live
    }

    pub fn remove(&self, key: &str) -> Option<V> {
        self.entries.lock().remove(key).map(|entry| entry.value)
    }

    /// Number of stored entries, counting expired ones not yet read.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }
}
