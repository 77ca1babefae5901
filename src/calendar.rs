//! Per-month calendar annotation.
//!
//! A month grid needs, for every day, the exact full/new moon marks from the
//! ephemeris, any solar event, and the approximate phase for the moon icon.
//! Months are built once and kept in an LRU cache, since a calendar view
//! tends to flip back and forth between the same few months.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Instant;

use chrono::{Datelike, NaiveDate};
use lru::LruCache;
use parking_lot::Mutex;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::date::CalendarDate;
use crate::error::{LunarError, Result};
use crate::lunar::LunarEngine;
use crate::metrics::Metrics;
use crate::names::{self, FullMoonName};
use crate::phase::MoonPhaseResult;
use crate::solar::{self, SolarEvent};

// ---------- DEFINE `DayAnnotation` STRUCT ----------

#[derive(Debug, Clone, PartialEq)]
pub struct DayAnnotation {
    pub date: CalendarDate,
    pub full_moon: bool,
    pub new_moon: bool,
    pub solar_event: Option<&'static SolarEvent>,
    /// Approximate phase at noon UTC, for display only.
    pub phase: MoonPhaseResult,
}

// ---------- DEFINE `MonthAnnotation` STRUCT ----------

#[derive(Debug, Clone, PartialEq)]
pub struct MonthAnnotation {
    pub year: i32,
    pub month: u32,
    pub days: Vec<DayAnnotation>,
    /// Name of the month's full moon, present only if the ephemeris lists one.
    pub full_moon_name: Option<FullMoonName>,
    pub solar_events: Vec<&'static SolarEvent>,
}

impl MonthAnnotation {
    pub fn full_moon_days(&self) -> impl Iterator<Item = &DayAnnotation> {
        self.days.iter().filter(|d| d.full_moon)
    }

    pub fn new_moon_days(&self) -> impl Iterator<Item = &DayAnnotation> {
        self.days.iter().filter(|d| d.new_moon)
    }

    pub fn day(&self, day: u32) -> Option<&DayAnnotation> {
        self.days.iter().find(|d| d.date.day() == day)
    }
}

/// Moves `delta` months from `year`/`month`, carrying across year boundaries.
pub fn shift_month(year: i32, month: u32, delta: i32) -> Result<(i32, u32)> {
    if !(1..=12).contains(&month) {
        return Err(LunarError::InvalidMonth { month });
    }
    let index = i64::from(year) * 12 + i64::from(month - 1) + i64::from(delta);
    let shifted_year = i32::try_from(index.div_euclid(12))
        .map_err(|_| LunarError::MonthOutOfRange { year, month, delta })?;
    let shifted_month = index.rem_euclid(12) as u32 + 1;
    Ok((shifted_year, shifted_month))
}

// ---------- DEFINE `MonthAnnotator` STRUCT ----------

pub struct MonthAnnotator {
    engine: LunarEngine,
    cache: Mutex<LruCache<(i32, u32), Arc<MonthAnnotation>>>,
    metrics: Arc<Metrics>,
}

impl MonthAnnotator {
    pub fn new(engine: LunarEngine, capacity: NonZeroUsize) -> Self {
        Self::with_metrics(engine, capacity, Arc::new(Metrics::new()))
    }

    pub fn with_metrics(engine: LunarEngine, capacity: NonZeroUsize, metrics: Arc<Metrics>) -> Self {
        Self {
            engine,
            cache: Mutex::new(LruCache::new(capacity)),
            metrics,
        }
    }

    pub fn engine(&self) -> &LunarEngine {
        &self.engine
    }

    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }

    /// Number of months currently cached.
    pub fn cached_months(&self) -> usize {
        self.cache.lock().len()
    }

    /// Annotation for one month, built on first request and cached.
    pub fn annotate_month(&self, year: i32, month: u32) -> Result<Arc<MonthAnnotation>> {
        if let Some(cached) = self.cache.lock().get(&(year, month)) {
            self.metrics.record_cache_hit();
            return Ok(Arc::clone(cached));
        }
        self.metrics.record_cache_miss();

        let start = Instant::now();
        let annotation = Arc::new(self.build_month(year, month)?);
        self.metrics.record_calculation(start.elapsed());

        debug!(
            target: "calendar_annotation",
            year,
            month,
            days = annotation.days.len(),
            "Annotated month in {}µs",
            start.elapsed().as_micros()
        );

        self.cache
            .lock()
            .put((year, month), Arc::clone(&annotation));
        Ok(annotation)
    }

    /// `count` consecutive months starting at `year`/`month`, in calendar order.
    pub fn annotate_range(&self, year: i32, month: u32, count: u32) -> Result<Vec<Arc<MonthAnnotation>>> {
        let start = Instant::now();

        let months = (0..count)
            .map(|offset| shift_month(year, month, offset as i32))
            .collect::<Result<Vec<_>>>()?;

        let results = months
            .into_par_iter()
            .map(|(y, m)| self.annotate_month(y, m))
            .collect::<Result<Vec<_>>>()?;

        info!(
            target: "calendar_annotation",
            "Annotated {} months in {}µs",
            count,
            start.elapsed().as_micros()
        );

        Ok(results)
    }

    /// Warms the cache with the months either side of `year`/`month`.
    pub fn preload_adjacent(&self, year: i32, month: u32) -> Result<()> {
        let neighbours = [shift_month(year, month, -1)?, shift_month(year, month, 1)?];
        neighbours
            .into_par_iter()
            .try_for_each(|(y, m)| self.annotate_month(y, m).map(|_| ()))
    }

    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }

    fn build_month(&self, year: i32, month: u32) -> Result<MonthAnnotation> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(LunarError::InvalidMonth { month })?;

        let days: Vec<DayAnnotation> = first
            .iter_days()
            .take_while(|d| d.month() == month)
            .map(|d| self.annotate_day(CalendarDate::from(d)))
            .collect();

        let full_moon_name = days
            .iter()
            .find(|d| d.full_moon)
            .and_then(|d| names::full_moon_name_for_month(d.date.month()));
        let solar_events = solar::solar_events_in_month(month).collect();

        Ok(MonthAnnotation {
            year,
            month,
            days,
            full_moon_name,
            solar_events,
        })
    }

    fn annotate_day(&self, date: CalendarDate) -> DayAnnotation {
        DayAnnotation {
            date,
            full_moon: self.engine.is_full_moon(date),
            new_moon: self.engine.is_new_moon(date),
            solar_event: solar::solar_event(&date.naive()),
            phase: self.engine.phase_on(date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotator(capacity: usize) -> MonthAnnotator {
        MonthAnnotator::new(LunarEngine::builtin(), NonZeroUsize::new(capacity).unwrap())
    }

    #[test]
    fn shift_month_crosses_years() {
        assert_eq!(shift_month(2024, 12, 1).unwrap(), (2025, 1));
        assert_eq!(shift_month(2024, 1, -1).unwrap(), (2023, 12));
        assert_eq!(shift_month(2024, 6, -18).unwrap(), (2022, 12));
        assert_eq!(shift_month(2024, 6, 0).unwrap(), (2024, 6));
        assert!(matches!(
            shift_month(2024, 0, 1),
            Err(LunarError::InvalidMonth { month: 0 })
        ));
    }

    #[test]
    fn shift_past_last_year_reports_the_input() {
        assert!(matches!(
            shift_month(i32::MAX, 12, 1),
            Err(LunarError::MonthOutOfRange { year: i32::MAX, month: 12, delta: 1 })
        ));
        assert!(matches!(
            shift_month(i32::MIN, 1, -1),
            Err(LunarError::MonthOutOfRange { year: i32::MIN, month: 1, delta: -1 })
        ));
        assert_eq!(shift_month(i32::MAX, 11, 1).unwrap(), (i32::MAX, 12));
    }

    #[test]
    fn june_2024() {
        let june = annotator(4).annotate_month(2024, 6).unwrap();
        assert_eq!(june.days.len(), 30);

        let full: Vec<_> = june.full_moon_days().map(|d| d.date.canonical()).collect();
        let new: Vec<_> = june.new_moon_days().map(|d| d.date.canonical()).collect();
        assert_eq!(full, vec!["2024-06-22"]);
        assert_eq!(new, vec!["2024-06-06"]);

        assert_eq!(june.full_moon_name.map(|n| n.name), Some("Strawberry Moon"));
        assert_eq!(june.solar_events.len(), 1);
        assert_eq!(june.day(21).and_then(|d| d.solar_event).map(|e| e.name), Some("Summer Solstice"));
    }

    #[test]
    fn month_without_listed_full_moon_has_no_name() {
        let table = crate::ephemeris::EphemerisTable::parse("new 2030-02-02\n").unwrap();
        let engine = LunarEngine::new(Arc::new(table));
        let annotator = MonthAnnotator::new(engine, NonZeroUsize::new(2).unwrap());
        let feb = annotator.annotate_month(2030, 2).unwrap();
        assert!(feb.full_moon_name.is_none());
        assert_eq!(feb.new_moon_days().count(), 1);
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(matches!(
            annotator(2).annotate_month(2024, 13),
            Err(LunarError::InvalidMonth { month: 13 })
        ));
    }

    #[test]
    fn repeated_month_is_served_from_cache() {
        let annotator = annotator(4);
        let first = annotator.annotate_month(2024, 9).unwrap();
        let second = annotator.annotate_month(2024, 9).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(annotator.metrics().cache_hits(), 1);
        assert_eq!(annotator.metrics().cache_misses(), 1);
    }

    #[test]
    fn least_recently_used_month_is_evicted() {
        let annotator = annotator(2);
        annotator.annotate_month(2024, 1).unwrap();
        annotator.annotate_month(2024, 2).unwrap();
        annotator.annotate_month(2024, 3).unwrap();
        assert_eq!(annotator.cached_months(), 2);

        annotator.annotate_month(2024, 1).unwrap();
        assert_eq!(annotator.metrics().cache_misses(), 4);
    }

    #[test]
    fn range_is_in_calendar_order() {
        let months = annotator(12).annotate_range(2024, 11, 4).unwrap();
        let keys: Vec<_> = months.iter().map(|m| (m.year, m.month)).collect();
        assert_eq!(keys, vec![(2024, 11), (2024, 12), (2025, 1), (2025, 2)]);
    }

    #[test]
    fn preload_fills_neighbours() {
        let annotator = annotator(4);
        annotator.preload_adjacent(2025, 1).unwrap();
        assert_eq!(annotator.cached_months(), 2);
        annotator.annotate_month(2024, 12).unwrap();
        annotator.annotate_month(2025, 2).unwrap();
        assert_eq!(annotator.metrics().cache_hits(), 2);
    }
}
