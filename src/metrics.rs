use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Lock-free counters for cache effectiveness and annotation cost.
#[derive(Debug, Default)]
pub struct Metrics {
    calculation_time: AtomicU64,
    months_annotated: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_calculation(&self, duration: Duration) {
        self.calculation_time
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
        self.months_annotated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn cache_hits(&self) -> u64 {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn cache_misses(&self) -> u64 {
        self.cache_misses.load(Ordering::Relaxed)
    }

    pub fn months_annotated(&self) -> u64 {
        self.months_annotated.load(Ordering::Relaxed)
    }

    pub fn cache_hit_rate(&self) -> f64 {
        let hits = self.cache_hits() as f64;
        let total = hits + self.cache_misses() as f64;
        if total > 0.0 {
            hits / total
        } else {
            0.0
        }
    }

    pub fn report(&self) -> String {
        format!(
            "Performance Metrics:\n\
             Calculation Time: {}µs\n\
             Months Annotated: {}\n\
             Cache Hits: {}\n\
             Cache Misses: {}\n\
             Cache Hit Rate: {:.2}%",
            self.calculation_time.load(Ordering::Relaxed),
            self.months_annotated(),
            self.cache_hits(),
            self.cache_misses(),
            self.cache_hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_rate_with_no_lookups_is_zero() {
        assert_eq!(Metrics::new().cache_hit_rate(), 0.0);
    }

    #[test]
    fn hit_rate_counts_hits_over_lookups() {
        let metrics = Metrics::new();
        metrics.record_cache_hit();
        metrics.record_cache_hit();
        metrics.record_cache_hit();
        metrics.record_cache_miss();
        assert!((metrics.cache_hit_rate() - 0.75).abs() < f64::EPSILON);
        assert!(metrics.report().contains("Cache Hit Rate: 75.00%"));
    }
}
