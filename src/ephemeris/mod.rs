//! Exact full and new moon days.
//!
//! The table holds two disjoint sets of canonical `YYYY-MM-DD` UTC strings.
//! Lookups are exact string matches; a date outside the covered range is
//! simply not a member.
//!
//! A built-in table covering 1990 through 2050 is compiled in. Other tables
//! can be delivered as a text asset, one entry per line:
//!
//! ```text
//! # kind date
//! full 2024-06-22
//! new  2024-07-05
//! ```

mod data;

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use memmap2::MmapOptions;
use tracing::{debug, info};

use crate::date::CalendarDate;
use crate::error::{LunarError, Result};

lazy_static! {
    static ref BUILTIN_EPHEMERIS: Arc<EphemerisTable> = Arc::new(EphemerisTable::from_sets(
        data::FULL_MOON_DATES.iter().map(|d| d.to_string()).collect(),
        data::NEW_MOON_DATES.iter().map(|d| d.to_string()).collect(),
    ));
}

/// The compiled-in table, built on first use.
pub fn builtin() -> &'static EphemerisTable {
    &BUILTIN_EPHEMERIS
}

/// Shared handle to the compiled-in table.
pub fn builtin_shared() -> Arc<EphemerisTable> {
    Arc::clone(&BUILTIN_EPHEMERIS)
}

/// Years the compiled-in table covers, inclusive.
pub fn builtin_years() -> (i32, i32) {
    (data::FIRST_YEAR, data::LAST_YEAR)
}

// ---------- DEFINE `EphemerisTable` STRUCT ----------

#[derive(Debug, Clone, Default)]
pub struct EphemerisTable {
    full_moons: HashSet<String>,
    new_moons: HashSet<String>,
    range: Option<(CalendarDate, CalendarDate)>,
    /// Fewest days between any full moon and any new moon entry.
    closest_gap_days: Option<i64>,
}

impl EphemerisTable {
    /// Builds a table from already-canonical date strings, rejecting any
    /// date listed as both a full and a new moon.
    pub fn new(full_moons: HashSet<String>, new_moons: HashSet<String>) -> Result<Self> {
        if let Some(date) = full_moons.intersection(&new_moons).min() {
            return Err(LunarError::OverlappingEphemeris { date: date.clone() });
        }
        Ok(Self::from_sets(full_moons, new_moons))
    }

    fn from_sets(full_moons: HashSet<String>, new_moons: HashSet<String>) -> Self {
        let range = full_moons
            .iter()
            .chain(new_moons.iter())
            .filter_map(|d| d.parse::<CalendarDate>().ok())
            .fold(None, |acc: Option<(CalendarDate, CalendarDate)>, date| match acc {
                None => Some((date, date)),
                Some((lo, hi)) => Some((lo.min(date), hi.max(date))),
            });
        let closest_gap_days = closest_full_new_gap(&full_moons, &new_moons);
        Self {
            full_moons,
            new_moons,
            range,
            closest_gap_days,
        }
    }

    /// Parses the line-oriented text format.
    pub fn parse(text: &str) -> Result<Self> {
        let mut full_moons = HashSet::new();
        let mut new_moons = HashSet::new();

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let malformed = || LunarError::MalformedEphemeris {
                line: index + 1,
                content: raw.to_string(),
            };

            let mut fields = line.split_whitespace();
            let (kind, date) = match (fields.next(), fields.next(), fields.next()) {
                (Some(kind), Some(date), None) => (kind, date),
                _ => return Err(malformed()),
            };
            let date = date.parse::<CalendarDate>().map_err(|_| malformed())?;

            match kind {
                "full" => full_moons.insert(date.canonical()),
                "new" => new_moons.insert(date.canonical()),
                _ => return Err(malformed()),
            };
        }

        Self::new(full_moons, new_moons)
    }

    /// Loads a text asset through a read-only memory map.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let start = Instant::now();

        let file = File::open(path).map_err(|source| LunarError::FileError {
            path: path.to_path_buf(),
            source,
        })?;
        let len = file
            .metadata()
            .map_err(|source| LunarError::FileError {
                path: path.to_path_buf(),
                source,
            })?
            .len();

        // Zero-length files cannot be mapped on every platform.
        let table = if len == 0 {
            Self::parse("")?
        } else {
            // SAFETY: the map is read-only and dropped before returning; the
            // asset is not expected to change while it is being parsed.
            let mmap = unsafe { MmapOptions::new().map(&file) }.map_err(|source| {
                LunarError::MmapError {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            Self::parse(std::str::from_utf8(&mmap)?)?
        };

        info!(
            target: "ephemeris",
            path = %path.display(),
            full_moons = table.full_moon_count(),
            new_moons = table.new_moon_count(),
            "Loaded ephemeris table in {}µs using mmap",
            start.elapsed().as_micros()
        );

        Ok(table)
    }

    pub fn has_full_moon(&self, key: &str) -> bool {
        self.full_moons.contains(key)
    }

    pub fn has_new_moon(&self, key: &str) -> bool {
        self.new_moons.contains(key)
    }

    pub fn is_full_moon(&self, date: CalendarDate) -> bool {
        self.has_full_moon(&date.canonical())
    }

    pub fn is_new_moon(&self, date: CalendarDate) -> bool {
        self.has_new_moon(&date.canonical())
    }

    pub fn full_moon_count(&self) -> usize {
        self.full_moons.len()
    }

    pub fn new_moon_count(&self) -> usize {
        self.new_moons.len()
    }

    /// Earliest and latest listed dates, or `None` for an empty table.
    pub fn covered_range(&self) -> Option<(CalendarDate, CalendarDate)> {
        self.range
    }

    /// Smallest distance in days between a full moon entry and a new moon
    /// entry, or `None` if either set is empty.
    pub fn closest_full_new_gap_days(&self) -> Option<i64> {
        self.closest_gap_days
    }

    /// Full moon days of a month, in order. Empty for an invalid month.
    pub fn full_moons_in(&self, year: i32, month: u32) -> Vec<CalendarDate> {
        self.days_matching(year, month, |key| self.has_full_moon(key))
    }

    /// New moon days of a month, in order. Empty for an invalid month.
    pub fn new_moons_in(&self, year: i32, month: u32) -> Vec<CalendarDate> {
        self.days_matching(year, month, |key| self.has_new_moon(key))
    }

    fn days_matching<F>(&self, year: i32, month: u32, matches: F) -> Vec<CalendarDate>
    where
        F: Fn(&str) -> bool,
    {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            debug!(target: "ephemeris", year, month, "no such month");
            return Vec::new();
        };
        first
            .iter_days()
            .take_while(|d| d.month() == month)
            .map(CalendarDate::from)
            .filter(|d| matches(&d.canonical()))
            .collect()
    }
}

/// The closest opposite-kind pair is always adjacent once all entries are
/// sorted together, so one pass over neighbours is enough.
fn closest_full_new_gap(full_moons: &HashSet<String>, new_moons: &HashSet<String>) -> Option<i64> {
    let mut marks: Vec<(CalendarDate, bool)> = full_moons
        .iter()
        .map(|d| (d, true))
        .chain(new_moons.iter().map(|d| (d, false)))
        .filter_map(|(d, full)| d.parse::<CalendarDate>().ok().map(|date| (date, full)))
        .collect();
    marks.sort_unstable();
    marks
        .windows(2)
        .filter(|pair| pair[0].1 != pair[1].1)
        .map(|pair| (pair[1].0.naive() - pair[0].0.naive()).num_days())
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sets_are_disjoint() {
        let table = builtin();
        assert!(table.full_moons.is_disjoint(&table.new_moons));
    }

    #[test]
    fn builtin_covers_declared_years() {
        let (lo, hi) = builtin().covered_range().unwrap();
        let (first, last) = builtin_years();
        assert_eq!(lo.year(), first);
        assert_eq!(hi.year(), last);
    }

    #[test]
    fn builtin_has_about_one_of_each_per_month() {
        let table = builtin();
        let (first, last) = builtin_years();
        let months = ((last - first + 1) * 12) as usize;
        // Blue moons and black moons add roughly one extra every 2.7 years.
        assert!(table.full_moon_count() >= months);
        assert!(table.full_moon_count() < months + months / 20);
        assert!(table.new_moon_count() >= months);
        assert!(table.new_moon_count() < months + months / 20);
    }

    #[test]
    fn builtin_entries_are_canonical() {
        for key in builtin().full_moons.iter().chain(builtin().new_moons.iter()) {
            let date: CalendarDate = key.parse().unwrap();
            assert_eq!(&date.canonical(), key);
        }
    }

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let table = EphemerisTable::parse(
            "# generated\n\nfull 2024-06-22\n  new 2024-06-06  \nfull 2024-06-22\n",
        )
        .unwrap();
        assert_eq!(table.full_moon_count(), 1);
        assert_eq!(table.new_moon_count(), 1);
        assert!(table.has_full_moon("2024-06-22"));
        assert!(table.has_new_moon("2024-06-06"));
    }

    #[test]
    fn parse_reports_line_of_bad_entry() {
        let err = EphemerisTable::parse("full 2024-06-22\nhalf 2024-06-29\n").unwrap_err();
        assert!(matches!(err, LunarError::MalformedEphemeris { line: 2, .. }));

        let err = EphemerisTable::parse("new 2024-6-6").unwrap_err();
        assert!(matches!(err, LunarError::MalformedEphemeris { line: 1, .. }));

        let err = EphemerisTable::parse("full 2024-06-22 extra").unwrap_err();
        assert!(matches!(err, LunarError::MalformedEphemeris { line: 1, .. }));
    }

    #[test]
    fn parse_rejects_overlap() {
        let err = EphemerisTable::parse("full 2024-06-22\nnew 2024-06-22\n").unwrap_err();
        match err {
            LunarError::OverlappingEphemeris { date } => assert_eq!(date, "2024-06-22"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn month_listing_is_ordered() {
        // August 2023 had two full moons.
        let full = builtin().full_moons_in(2023, 8);
        let keys: Vec<_> = full.iter().map(|d| d.canonical()).collect();
        assert_eq!(keys, vec!["2023-08-01", "2023-08-31"]);
        assert!(builtin().new_moons_in(2023, 13).is_empty());
    }

    #[test]
    fn closest_gap_between_kinds() {
        let table = EphemerisTable::parse(
            "full 2030-01-01\nnew 2030-01-16\nfull 2030-01-30\nnew 2030-02-03\nfull 2030-03-01\n",
        )
        .unwrap();
        assert_eq!(table.closest_full_new_gap_days(), Some(4));

        let only_full = EphemerisTable::parse("full 2030-01-01\nfull 2030-01-02\n").unwrap();
        assert_eq!(only_full.closest_full_new_gap_days(), None);
    }

    #[test]
    fn builtin_full_and_new_are_about_two_weeks_apart() {
        let gap = builtin().closest_full_new_gap_days().unwrap();
        assert!((13..=15).contains(&gap), "{gap}");
    }

    #[test]
    fn empty_table_has_no_range() {
        let table = EphemerisTable::parse("").unwrap();
        assert!(table.covered_range().is_none());
        assert!(table.closest_full_new_gap_days().is_none());
        assert!(!table.has_full_moon("2024-06-22"));
    }
}
