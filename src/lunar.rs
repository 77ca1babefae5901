//! Public lunar lookups.
//!
//! Two sources of truth sit behind these functions and they are never mixed:
//! the cosine model in [`crate::phase`] describes how the moon looks at an
//! instant, while the ephemeris decides which calendar days are marked as
//! full or new moons.

use std::sync::Arc;

use chrono::{DateTime, TimeZone};
use tracing::{debug, warn};

use crate::config::{Config, MAX_TOLERANCE_DAYS};
use crate::date::CalendarDate;
use crate::ephemeris::{self, EphemerisTable};
use crate::error::{LunarError, Result};
use crate::names::{self, FullMoonName};
use crate::phase::{self, MoonPhaseResult};

pub use crate::names::get_full_moon_name;
pub use crate::phase::{calculate_moon_phase, get_moon_emoji, moon_emoji_for_label};

/// Whether the date is a full moon day in the built-in ephemeris.
///
/// Instants are reduced to their UTC calendar day first. Dates outside the
/// table's range are never full moons.
pub fn is_date_full_moon(date: impl Into<CalendarDate>) -> bool {
    ephemeris::builtin().is_full_moon(date.into())
}

/// Whether the date is a new moon day in the built-in ephemeris.
pub fn is_date_new_moon(date: impl Into<CalendarDate>) -> bool {
    ephemeris::builtin().is_new_moon(date.into())
}

// ---------- DEFINE `LunarEngine` STRUCT ----------

/// The lunar lookups bound to one ephemeris table and a tolerance band.
///
/// With a tolerance of `n` days a date counts as a full (or new) moon when
/// any day within `n` of it is listed. Two bands touch once a full and a new
/// entry are `2n` days or less apart, so the widest usable band depends on
/// the table: three days for real lunar data, less for a hand-made table
/// with closely spaced entries.
#[derive(Debug, Clone)]
pub struct LunarEngine {
    table: Arc<EphemerisTable>,
    tolerance_days: u32,
}

impl LunarEngine {
    pub fn new(table: Arc<EphemerisTable>) -> Self {
        Self {
            table,
            tolerance_days: 0,
        }
    }

    /// An engine over the compiled-in table.
    pub fn builtin() -> Self {
        Self::new(ephemeris::builtin_shared())
    }

    /// Loads the configured ephemeris asset, or falls back to the built-in
    /// table when none is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let engine = match &config.ephemeris_path {
            Some(path) => Self::new(Arc::new(EphemerisTable::load(path)?)),
            None => Self::builtin(),
        };
        engine.try_with_tolerance(config.tolerance_days)
    }

    /// Widest band that keeps full and new moon marks apart for this table,
    /// never more than [`MAX_TOLERANCE_DAYS`].
    pub fn max_tolerance_days(&self) -> u32 {
        match self.table.closest_full_new_gap_days() {
            Some(gap) => u32::try_from((gap - 1) / 2)
                .unwrap_or(0)
                .min(MAX_TOLERANCE_DAYS),
            None => MAX_TOLERANCE_DAYS,
        }
    }

    /// Sets the tolerance band, capped at [`Self::max_tolerance_days`].
    pub fn with_tolerance(mut self, days: u32) -> Self {
        let max = self.max_tolerance_days();
        if days > max {
            warn!(
                target: "lunar_phase",
                requested = days,
                max,
                "tolerance capped"
            );
        }
        self.tolerance_days = days.min(max);
        self
    }

    /// Sets the tolerance band, refusing one that would let a day be marked
    /// as both a full and a new moon.
    pub fn try_with_tolerance(mut self, days: u32) -> Result<Self> {
        let max = self.max_tolerance_days();
        if days > max {
            return Err(LunarError::ToleranceTooWide { requested: days, max });
        }
        self.tolerance_days = days;
        Ok(self)
    }

    pub fn tolerance_days(&self) -> u32 {
        self.tolerance_days
    }

    pub fn table(&self) -> &EphemerisTable {
        &self.table
    }

    pub fn phase_at<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> MoonPhaseResult {
        phase::calculate_moon_phase(instant)
    }

    /// Phase of a whole day, taken at noon UTC.
    pub fn phase_on(&self, date: CalendarDate) -> MoonPhaseResult {
        phase::calculate_moon_phase(&date.noon_utc())
    }

    pub fn is_full_moon(&self, date: impl Into<CalendarDate>) -> bool {
        let date = date.into();
        self.within_tolerance(date, |d| self.table.is_full_moon(d))
    }

    pub fn is_new_moon(&self, date: impl Into<CalendarDate>) -> bool {
        let date = date.into();
        self.within_tolerance(date, |d| self.table.is_new_moon(d))
    }

    pub fn full_moon_name(&self, date: impl Into<CalendarDate>) -> Option<FullMoonName> {
        names::full_moon_name_for_month(date.into().month())
    }

    fn within_tolerance<F>(&self, date: CalendarDate, listed: F) -> bool
    where
        F: Fn(CalendarDate) -> bool,
    {
        if listed(date) {
            return true;
        }
        let band = i64::from(self.tolerance_days);
        let hit = (1..=band)
            .flat_map(|offset| [date.offset_days(-offset), date.offset_days(offset)])
            .flatten()
            .any(listed);
        if hit {
            debug!(
                target: "lunar_phase",
                date = %date,
                tolerance = self.tolerance_days,
                "matched within tolerance band"
            );
        }
        hit
    }
}

impl Default for LunarEngine {
    fn default() -> Self {
        Self::builtin()
    }
}
