//! Approximate moon phase and illumination from the synodic cycle.
//!
//! This model answers "what does the moon look like at this instant". It is
//! never used to mark exact full or new moon days on a calendar; the
//! ephemeris table does that.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone};
use tracing::trace;

use crate::date::CalendarDate;
use crate::error::{LunarError, Result};

/// Mean length of the synodic month, in days.
pub const SYNODIC_PERIOD_DAYS: f64 = 29.530588853;

/// Reference new moon, 2024-06-06T12:38:00Z, in Unix milliseconds.
pub const REFERENCE_NEW_MOON_MS: i64 = 1_717_677_480_000;

const MS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// Upper bound (exclusive, days into the cycle) for each phase.
///
/// These are calibrated constants, not an equal eight-way split of the cycle.
/// Anything at or past the last bound is a waning crescent.
const PHASE_BOUNDARIES: [(f64, PhaseName); 7] = [
    (1.84566, PhaseName::NewMoon),
    (5.53699, PhaseName::WaxingCrescent),
    (9.22831, PhaseName::FirstQuarter),
    (12.91963, PhaseName::WaxingGibbous),
    (16.61096, PhaseName::FullMoon),
    (20.30228, PhaseName::WaningGibbous),
    (23.99361, PhaseName::LastQuarter),
];

/// Glyph returned for labels that name no known phase.
pub const FALLBACK_MOON_EMOJI: &str = "🌙";

// ---------- DEFINE `PhaseName` ENUM ----------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseName {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl PhaseName {
    pub const ALL: [PhaseName; 8] = [
        PhaseName::NewMoon,
        PhaseName::WaxingCrescent,
        PhaseName::FirstQuarter,
        PhaseName::WaxingGibbous,
        PhaseName::FullMoon,
        PhaseName::WaningGibbous,
        PhaseName::LastQuarter,
        PhaseName::WaningCrescent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PhaseName::NewMoon => "New Moon",
            PhaseName::WaxingCrescent => "Waxing Crescent",
            PhaseName::FirstQuarter => "First Quarter",
            PhaseName::WaxingGibbous => "Waxing Gibbous",
            PhaseName::FullMoon => "Full Moon",
            PhaseName::WaningGibbous => "Waning Gibbous",
            PhaseName::LastQuarter => "Last Quarter",
            PhaseName::WaningCrescent => "Waning Crescent",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|phase| phase.label() == label)
    }

    pub fn emoji(self) -> &'static str {
        match self {
            PhaseName::NewMoon => "🌑",
            PhaseName::WaxingCrescent => "🌒",
            PhaseName::FirstQuarter => "🌓",
            PhaseName::WaxingGibbous => "🌔",
            PhaseName::FullMoon => "🌕",
            PhaseName::WaningGibbous => "🌖",
            PhaseName::LastQuarter => "🌗",
            PhaseName::WaningCrescent => "🌘",
        }
    }

    /// Phase for a position in days from the start of the cycle.
    pub fn from_cycle_position(position: f64) -> Self {
        PHASE_BOUNDARIES
            .iter()
            .find(|(bound, _)| position < *bound)
            .map(|(_, phase)| *phase)
            .unwrap_or(PhaseName::WaningCrescent)
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PhaseName {
    type Err = LunarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s).ok_or_else(|| LunarError::UnknownPhase(s.to_string()))
    }
}

// ---------- DEFINE `MoonPhaseResult` STRUCT ----------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoonPhaseResult {
    pub phase: PhaseName,
    /// Percent of the disk lit under the cosine approximation, 0..=100.
    pub illumination: u8,
}

/// Days into the current synodic cycle, always in `[0, SYNODIC_PERIOD_DAYS)`.
///
/// Dates before the reference new moon give a negative offset, so the
/// modulo is floored explicitly.
pub fn cycle_position<Tz: TimeZone>(date: &DateTime<Tz>) -> f64 {
    let ms_since_new_moon = date.timestamp_millis() as f64 - REFERENCE_NEW_MOON_MS as f64;
    let days_since_new_moon = ms_since_new_moon / MS_PER_DAY;
    let position = ((days_since_new_moon % SYNODIC_PERIOD_DAYS) + SYNODIC_PERIOD_DAYS)
        % SYNODIC_PERIOD_DAYS;
    // Adding the period back can round up to exactly the period for tiny
    // negative remainders.
    if position >= SYNODIC_PERIOD_DAYS {
        0.0
    } else {
        position
    }
}

/// Illumination percent for a cycle position.
pub fn illumination_at(position: f64) -> u8 {
    let fraction = (1.0 - (position / SYNODIC_PERIOD_DAYS * 2.0 * PI).cos()) / 2.0;
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Moon phase and illumination at the given instant.
pub fn calculate_moon_phase<Tz: TimeZone>(date: &DateTime<Tz>) -> MoonPhaseResult {
    let position = cycle_position(date);
    let phase = PhaseName::from_cycle_position(position);
    let illumination = illumination_at(position);

    trace!(
        target: "lunar_phase",
        date = %CalendarDate::from_datetime(date),
        cycle_position = position,
        phase = phase.label(),
        illumination,
        "calculated moon phase"
    );

    MoonPhaseResult {
        phase,
        illumination,
    }
}

pub fn is_full_moon_phase(phase: PhaseName) -> bool {
    phase == PhaseName::FullMoon
}

pub fn get_moon_emoji(phase: PhaseName) -> &'static str {
    phase.emoji()
}

/// Emoji for a phase label, with a fallback glyph for unknown labels.
pub fn moon_emoji_for_label(label: &str) -> &'static str {
    PhaseName::from_label(label)
        .map(PhaseName::emoji)
        .unwrap_or(FALLBACK_MOON_EMOJI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 6, 12, 38, 0).unwrap()
    }

    #[test]
    fn reference_constant_matches_reference_instant() {
        assert_eq!(reference().timestamp_millis(), REFERENCE_NEW_MOON_MS);
    }

    #[test]
    fn reference_instant_is_new_moon() {
        let result = calculate_moon_phase(&reference());
        assert!(cycle_position(&reference()).abs() < 1e-9);
        assert_eq!(result.phase, PhaseName::NewMoon);
        assert_eq!(result.illumination, 0);
    }

    #[test]
    fn mid_cycle_is_fully_lit() {
        let half = Duration::milliseconds((SYNODIC_PERIOD_DAYS / 2.0 * MS_PER_DAY) as i64);
        let result = calculate_moon_phase(&(reference() + half));
        assert_eq!(result.phase, PhaseName::FullMoon);
        assert_eq!(result.illumination, 100);
    }

    #[test]
    fn dates_before_reference_stay_in_range() {
        let early = Utc.with_ymd_and_hms(1901, 3, 14, 0, 0, 0).unwrap();
        let position = cycle_position(&early);
        assert!((0.0..SYNODIC_PERIOD_DAYS).contains(&position));
    }

    #[test]
    fn extreme_dates_do_not_panic() {
        for date in [DateTime::<Utc>::MIN_UTC, DateTime::<Utc>::MAX_UTC] {
            let result = calculate_moon_phase(&date);
            assert!(result.illumination <= 100);
        }
    }

    #[test]
    fn boundaries_are_exclusive_upper_bounds() {
        assert_eq!(PhaseName::from_cycle_position(0.0), PhaseName::NewMoon);
        assert_eq!(PhaseName::from_cycle_position(1.84565), PhaseName::NewMoon);
        assert_eq!(PhaseName::from_cycle_position(1.84566), PhaseName::WaxingCrescent);
        assert_eq!(PhaseName::from_cycle_position(9.22831), PhaseName::WaxingGibbous);
        assert_eq!(PhaseName::from_cycle_position(16.61095), PhaseName::FullMoon);
        assert_eq!(PhaseName::from_cycle_position(23.99361), PhaseName::WaningCrescent);
        assert_eq!(PhaseName::from_cycle_position(29.5), PhaseName::WaningCrescent);
    }

    #[test]
    fn boundaries_cover_every_phase_once_in_order() {
        let mut seen = Vec::new();
        let mut position = 0.0;
        while position < SYNODIC_PERIOD_DAYS {
            let phase = PhaseName::from_cycle_position(position);
            if seen.last() != Some(&phase) {
                seen.push(phase);
            }
            position += 0.001;
        }
        assert_eq!(seen, PhaseName::ALL.to_vec());
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for phase in PhaseName::ALL {
            assert_eq!(phase.label().parse::<PhaseName>().unwrap(), phase);
        }
        match "Blue Moon".parse::<PhaseName>() {
            Err(LunarError::UnknownPhase(label)) => assert_eq!(label, "Blue Moon"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn emoji_lookup() {
        assert_eq!(get_moon_emoji(PhaseName::FullMoon), "🌕");
        assert_eq!(moon_emoji_for_label("Full Moon"), "🌕");
        assert_eq!(moon_emoji_for_label("Waning Crescent"), "🌘");
        assert_eq!(moon_emoji_for_label("unrecognized-value"), "🌙");
    }

    #[test]
    fn only_full_moon_counts_as_full() {
        let full: Vec<_> = PhaseName::ALL
            .into_iter()
            .filter(|p| is_full_moon_phase(*p))
            .collect();
        assert_eq!(full, vec![PhaseName::FullMoon]);
    }
}
