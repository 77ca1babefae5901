//! Fixed-date equinoxes and solstices.
//!
//! These are calendar conventions, not computed instants: the same month and
//! day every year, with no timezone adjustment.

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEventKind {
    SpringEquinox,
    SummerSolstice,
    AutumnEquinox,
    WinterSolstice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarEvent {
    pub kind: SolarEventKind,
    pub emoji: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub month: u32,
    pub day: u32,
}

/// The four events in calendar order.
pub static SOLAR_EVENTS: [SolarEvent; 4] = [
    SolarEvent {
        kind: SolarEventKind::SpringEquinox,
        emoji: "🌸",
        name: "Spring Equinox",
        description: "Day and night of equal length as spring begins",
        month: 3,
        day: 20,
    },
    SolarEvent {
        kind: SolarEventKind::SummerSolstice,
        emoji: "☀️",
        name: "Summer Solstice",
        description: "Longest day of the year",
        month: 6,
        day: 21,
    },
    SolarEvent {
        kind: SolarEventKind::AutumnEquinox,
        emoji: "🍂",
        name: "Autumn Equinox",
        description: "Day and night of equal length as autumn begins",
        month: 9,
        day: 22,
    },
    SolarEvent {
        kind: SolarEventKind::WinterSolstice,
        emoji: "❄️",
        name: "Winter Solstice",
        description: "Shortest day of the year",
        month: 12,
        day: 21,
    },
];

/// The event falling on `date`, if any.
pub fn solar_event<D: Datelike>(date: &D) -> Option<&'static SolarEvent> {
    SOLAR_EVENTS
        .iter()
        .find(|event| event.month == date.month() && event.day == date.day())
}

/// Events within a month, in order.
pub fn solar_events_in_month(month: u32) -> impl Iterator<Item = &'static SolarEvent> {
    SOLAR_EVENTS.iter().filter(move |event| event.month == month)
}

/// The next event on or after `date` and how many days away it is.
///
/// After the winter solstice this rolls over to the following spring equinox.
pub fn next_solar_event(date: NaiveDate) -> (&'static SolarEvent, i64) {
    let year = date.year();
    for event in SOLAR_EVENTS.iter() {
        if let Some(event_date) = NaiveDate::from_ymd_opt(year, event.month, event.day) {
            if event_date >= date {
                return (event, (event_date - date).num_days());
            }
        }
    }

    let spring = &SOLAR_EVENTS[0];
    let days_until = NaiveDate::from_ymd_opt(year + 1, spring.month, spring.day)
        .map(|next| (next - date).num_days())
        .unwrap_or_default();
    (spring, days_until)
}
