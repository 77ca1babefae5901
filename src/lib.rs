//! Moon phase, ephemeris and calendar annotation core for a tide calendar.
//!
//! - [`phase`] approximates the moon's appearance at any instant.
//! - [`ephemeris`] lists the exact full and new moon days.
//! - [`lunar`] puts the two together behind a small public API.
//! - [`calendar`] annotates whole months for display.
//! - [`station`] looks up tide stations through a caller-supplied source,
//!   caching results in a [`cache::TtlCache`].

pub mod cache;
pub mod calendar;
pub mod config;
pub mod date;
pub mod ephemeris;
pub mod error;
pub mod logging;
pub mod lunar;
pub mod metrics;
pub mod names;
pub mod phase;
pub mod solar;
pub mod station;

pub use cache::{Clock, ManualClock, SystemClock, TtlCache};
pub use calendar::{shift_month, DayAnnotation, MonthAnnotation, MonthAnnotator};
pub use config::Config;
pub use date::CalendarDate;
pub use ephemeris::EphemerisTable;
pub use error::{LunarError, Result};
pub use lunar::{
    calculate_moon_phase, get_full_moon_name, get_moon_emoji, is_date_full_moon, is_date_new_moon,
    LunarEngine,
};
pub use metrics::Metrics;
pub use names::FullMoonName;
pub use phase::{MoonPhaseResult, PhaseName};
pub use solar::{next_solar_event, solar_event, SolarEvent, SolarEventKind};
pub use station::{sort_stations_for_default, Station, StationService, StationSource};
