//! UTC calendar dates used as ephemeris lookup keys.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::{LunarError, Result};

/// A calendar day with no time of day, always in UTC.
///
/// Two `CalendarDate`s compare equal exactly when their canonical
/// `YYYY-MM-DD` strings do, whatever timezone the source instant came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Reduces an instant to the UTC day it falls on.
    pub fn from_datetime<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self(instant.with_timezone(&Utc).date_naive())
    }

    pub fn naive(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// The `YYYY-MM-DD` form used as the ephemeris key.
    pub fn canonical(self) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }

    /// The day `days` away from this one, or `None` past chrono's range.
    pub fn offset_days(self, days: i64) -> Option<Self> {
        self.0.checked_add_signed(Duration::days(days)).map(Self)
    }

    /// Noon UTC on this day, the instant used when a whole day needs a phase.
    pub fn noon_utc(self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&(self.0.and_time(NaiveTime::MIN) + Duration::hours(12)))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl FromStr for CalendarDate {
    type Err = LunarError;

    /// Accepts only the canonical form; `2024-6-1` is rejected.
    fn from_str(s: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| LunarError::InvalidDate(s.to_string()))?;
        if date.canonical() != s {
            return Err(LunarError::InvalidDate(s.to_string()));
        }
        Ok(date)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CalendarDate {
    fn from(instant: DateTime<Tz>) -> Self {
        Self::from_datetime(&instant)
    }
}

impl<Tz: TimeZone> From<&DateTime<Tz>> for CalendarDate {
    fn from(instant: &DateTime<Tz>) -> Self {
        Self::from_datetime(instant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn canonical_is_zero_padded() {
        let date = CalendarDate::from_ymd(2024, 6, 6).unwrap();
        assert_eq!(date.canonical(), "2024-06-06");
    }

    #[test]
    fn timezone_of_origin_does_not_matter() {
        // 23:30 on June 21st in UTC-5 is already June 22nd in UTC.
        let west = FixedOffset::west_opt(5 * 3600).unwrap();
        let local = west.with_ymd_and_hms(2024, 6, 21, 23, 30, 0).unwrap();
        let utc = Utc.with_ymd_and_hms(2024, 6, 22, 4, 30, 0).unwrap();
        assert_eq!(CalendarDate::from(local), CalendarDate::from(utc));
        assert_eq!(CalendarDate::from(local).canonical(), "2024-06-22");
    }

    #[test]
    fn parse_rejects_non_canonical_forms() {
        assert!("2024-06-01".parse::<CalendarDate>().is_ok());
        assert!("2024-6-1".parse::<CalendarDate>().is_err());
        assert!("2024-02-30".parse::<CalendarDate>().is_err());
        assert!("yesterday".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn offset_crosses_month_boundary() {
        let date = CalendarDate::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(date.offset_days(1).unwrap().canonical(), "2024-03-01");
        assert_eq!(date.offset_days(-29).unwrap().canonical(), "2024-01-31");
    }
}
