// Runtime settings for the lunar engine, month annotator and station service.

use std::env;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{LunarError, Result};

/// Widest tolerance band that keeps full and new moon marks disjoint.
pub const MAX_TOLERANCE_DAYS: u32 = 3;

pub const ENV_EPHEMERIS_PATH: &str = "MOONTIDE_EPHEMERIS_PATH";
pub const ENV_TOLERANCE_DAYS: &str = "MOONTIDE_TOLERANCE_DAYS";
pub const ENV_STATION_TTL_SECS: &str = "MOONTIDE_STATION_TTL_SECS";
pub const ENV_MONTH_CACHE_CAPACITY: &str = "MOONTIDE_MONTH_CACHE_CAPACITY";
pub const ENV_SEARCH_RADIUS_KM: &str = "MOONTIDE_SEARCH_RADIUS_KM";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Text ephemeris asset to use instead of the compiled-in table.
    pub ephemeris_path: Option<PathBuf>,
    /// Days either side of an ephemeris date that still count as a match.
    pub tolerance_days: u32,
    pub station_cache_ttl: Duration,
    /// Months kept in the annotator's LRU cache.
    pub month_cache_capacity: NonZeroUsize,
    pub station_search_radius_km: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ephemeris_path: None,
            tolerance_days: 0,
            station_cache_ttl: Duration::from_secs(24 * 60 * 60),
            month_cache_capacity: NonZeroUsize::new(24).unwrap_or(NonZeroUsize::MIN),
            station_search_radius_km: 100.0,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by any `MOONTIDE_*` variables that are set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reading from an arbitrary source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_EPHEMERIS_PATH).filter(|p| !p.trim().is_empty()) {
            config.ephemeris_path = Some(PathBuf::from(path));
        }
        if let Some(raw) = lookup(ENV_TOLERANCE_DAYS) {
            config.tolerance_days = parse_value(ENV_TOLERANCE_DAYS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_STATION_TTL_SECS) {
            config.station_cache_ttl = Duration::from_secs(parse_value(ENV_STATION_TTL_SECS, &raw)?);
        }
        if let Some(raw) = lookup(ENV_MONTH_CACHE_CAPACITY) {
            config.month_cache_capacity = parse_value(ENV_MONTH_CACHE_CAPACITY, &raw)?;
        }
        if let Some(raw) = lookup(ENV_SEARCH_RADIUS_KM) {
            config.station_search_radius_km = parse_value(ENV_SEARCH_RADIUS_KM, &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tolerance_days > MAX_TOLERANCE_DAYS {
            return Err(LunarError::InvalidConfig {
                key: ENV_TOLERANCE_DAYS,
                value: self.tolerance_days.to_string(),
            });
        }
        if !self.station_search_radius_km.is_finite() || self.station_search_radius_km <= 0.0 {
            return Err(LunarError::InvalidConfig {
                key: ENV_SEARCH_RADIUS_KM,
                value: self.station_search_radius_km.to_string(),
            });
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| LunarError::InvalidConfig {
        key,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.tolerance_days, 0);
        assert_eq!(config.station_cache_ttl, Duration::from_secs(86_400));
        assert_eq!(config.month_cache_capacity.get(), 24);
        assert!(config.ephemeris_path.is_none());
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_EPHEMERIS_PATH, "/srv/moon.txt"),
            (ENV_TOLERANCE_DAYS, "1"),
            (ENV_STATION_TTL_SECS, " 60 "),
            (ENV_MONTH_CACHE_CAPACITY, "6"),
            (ENV_SEARCH_RADIUS_KM, "25.5"),
        ]))
        .unwrap();
        assert_eq!(config.ephemeris_path, Some(PathBuf::from("/srv/moon.txt")));
        assert_eq!(config.tolerance_days, 1);
        assert_eq!(config.station_cache_ttl, Duration::from_secs(60));
        assert_eq!(config.month_cache_capacity.get(), 6);
        assert_eq!(config.station_search_radius_km, 25.5);
    }

    #[test]
    fn bad_values_name_the_variable() {
        let err = Config::from_lookup(lookup_from(&[(ENV_MONTH_CACHE_CAPACITY, "0")])).unwrap_err();
        assert!(matches!(
            err,
            LunarError::InvalidConfig { key: ENV_MONTH_CACHE_CAPACITY, .. }
        ));

        let err = Config::from_lookup(lookup_from(&[(ENV_TOLERANCE_DAYS, "7")])).unwrap_err();
        assert!(matches!(
            err,
            LunarError::InvalidConfig { key: ENV_TOLERANCE_DAYS, .. }
        ));

        let err = Config::from_lookup(lookup_from(&[(ENV_SEARCH_RADIUS_KM, "-3")])).unwrap_err();
        assert!(matches!(
            err,
            LunarError::InvalidConfig { key: ENV_SEARCH_RADIUS_KM, .. }
        ));
    }
}
