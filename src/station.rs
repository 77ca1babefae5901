//! Tide station lookup with validation and caching.
//!
//! The transport that actually talks to a station registry is supplied by
//! the caller through [`StationSource`]. This module owns input validation,
//! cache keys, and ranking of results.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::{Clock, SystemClock, TtlCache};
use crate::config::Config;
use crate::error::{LunarError, Result};
use crate::metrics::Metrics;

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Product a station must publish to be offered as a default.
pub const WATER_LEVEL_PRODUCT: &str = "water_level";

/// Station type code for reference (harmonic) stations.
pub const REFERENCE_STATION_TYPE: &str = "R";

// ---------- DEFINE `Station` STRUCT ----------

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    /// `R` for reference stations, `S` for subordinate ones.
    pub station_type: Option<String>,
    /// Empty when the registry did not say.
    pub products: Vec<String>,
    /// Distance reported by the registry, in km.
    pub distance: Option<f64>,
}

impl Station {
    pub fn new(id: impl Into<String>, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            latitude,
            longitude,
            ..Self::default()
        }
    }

    fn supports_water_level(&self) -> bool {
        self.products.is_empty() || self.products.iter().any(|p| p == WATER_LEVEL_PRODUCT)
    }

    fn is_reference(&self) -> bool {
        self.station_type.as_deref() == Some(REFERENCE_STATION_TYPE)
    }
}

// ---------- DEFINE `StationSource` TRAIT ----------

/// Where station records come from, typically an HTTP registry client.
pub trait StationSource: Send + Sync {
    /// Stations whose name matches a free-text query.
    fn search(&self, query: &str) -> Result<Vec<Station>>;

    /// Stations within `radius_km` of a point.
    fn near(&self, lat: f64, lon: f64, radius_km: f64) -> Result<Vec<Station>>;

    /// A single station, or `None` if the registry has no such id.
    fn by_id(&self, id: &str) -> Result<Option<Station>>;
}

impl<S: StationSource + ?Sized> StationSource for Arc<S> {
    fn search(&self, query: &str) -> Result<Vec<Station>> {
        (**self).search(query)
    }

    fn near(&self, lat: f64, lon: f64, radius_km: f64) -> Result<Vec<Station>> {
        (**self).near(lat, lon, radius_km)
    }

    fn by_id(&self, id: &str) -> Result<Option<Station>> {
        (**self).by_id(id)
    }
}

/// Station ids are purely numeric once surrounding whitespace is removed.
pub fn is_valid_station_id(id: &str) -> bool {
    let id = id.trim();
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}

// ---------- DEFINE `StationService` STRUCT ----------

pub struct StationService<S, C = SystemClock> {
    source: S,
    lists: TtlCache<Vec<Station>, C>,
    stations: TtlCache<Station, C>,
    ttl: Duration,
    default_radius_km: f64,
}

impl<S: StationSource> StationService<S, SystemClock> {
    pub fn new(source: S) -> Self {
        Self::from_config(source, &Config::default())
    }

    pub fn from_config(source: S, config: &Config) -> Self {
        Self::with_caches(source, TtlCache::new(), TtlCache::new(), config)
    }
}

impl<S: StationSource, C: Clock> StationService<S, C> {
    /// Builds a service over caches the caller set up, e.g. with a shared
    /// clock for tests.
    pub fn with_caches(
        source: S,
        lists: TtlCache<Vec<Station>, C>,
        stations: TtlCache<Station, C>,
        config: &Config,
    ) -> Self {
        let metrics = Arc::clone(lists.metrics());
        Self {
            source,
            lists,
            stations: stations.with_metrics(metrics),
            ttl: config.station_cache_ttl,
            default_radius_km: config.station_search_radius_km,
        }
    }

    /// Hit/miss counters shared by both station caches.
    pub fn metrics(&self) -> &Arc<Metrics> {
        self.lists.metrics()
    }

    pub fn default_radius_km(&self) -> f64 {
        self.default_radius_km
    }

    /// Stations matching a place name. A blank query returns nothing without
    /// asking the source.
    pub fn stations_for_location(&self, query: &str) -> Result<Vec<Station>> {
        if query.trim().is_empty() {
            debug!(target: "station_service", query, "Invalid station search term");
            return Ok(Vec::new());
        }

        let key = format!("stations:{}", query.to_lowercase());
        if let Some(cached) = self.lists.get(&key) {
            debug!(target: "station_service", query, count = cached.len(), "Station list cache hit");
            return Ok(cached);
        }

        debug!(target: "station_service", query, "Fetching stations for location");
        let stations = self.source.search(query)?;
        debug!(target: "station_service", query, count = stations.len(), "Stations fetched");
        self.lists.set(key, stations.clone(), self.ttl);
        Ok(stations)
    }

    /// Stations within `radius_km` of a point.
    pub fn stations_near(&self, lat: f64, lon: f64, radius_km: f64) -> Result<Vec<Station>> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(LunarError::InvalidCoordinates { lat, lon });
        }

        let key = format!("stations:{lat:.3},{lon:.3},{radius_km}");
        if let Some(cached) = self.lists.get(&key) {
            debug!(target: "station_service", lat, lon, count = cached.len(), "Nearby station cache hit");
            return Ok(cached);
        }

        debug!(target: "station_service", lat, lon, radius_km, "Fetching stations near coordinates");
        let stations = self.source.near(lat, lon, radius_km)?;
        debug!(target: "station_service", lat, lon, count = stations.len(), "Nearby stations fetched");
        self.lists.set(key, stations.clone(), self.ttl);
        Ok(stations)
    }

    /// [`Self::stations_near`] with the configured search radius.
    pub fn stations_near_default(&self, lat: f64, lon: f64) -> Result<Vec<Station>> {
        self.stations_near(lat, lon, self.default_radius_km)
    }

    /// One station by id. Ids that are not numeric yield `None` without a
    /// lookup; a station the source does not know is not cached.
    pub fn station_by_id(&self, id: &str) -> Result<Option<Station>> {
        if !is_valid_station_id(id) {
            debug!(target: "station_service", id, "Invalid station ID lookup");
            return Ok(None);
        }

        let key = format!("station:{id}");
        if let Some(cached) = self.stations.get(&key) {
            debug!(target: "station_service", id, "Station cache hit");
            return Ok(Some(cached));
        }

        debug!(target: "station_service", id, "Fetching station by ID");
        let station = self.source.by_id(id.trim())?;
        if let Some(station) = &station {
            self.stations.set(key, station.clone(), self.ttl);
        }
        Ok(station)
    }
}

/// Great-circle distance between two points, in km.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Orders candidate stations with the best default first.
///
/// Stations that publish products but not water levels are dropped. The rest
/// are ordered by whether the name contains `city`, then reference stations
/// before subordinate ones, then by distance. Distance comes from the
/// station record if present, otherwise from `lat`/`lon`; stations with
/// neither sort last.
pub fn sort_stations_for_default(
    stations: Vec<Station>,
    lat: Option<f64>,
    lon: Option<f64>,
    city: Option<&str>,
) -> Vec<Station> {
    let city = city.map(str::to_lowercase).filter(|c| !c.is_empty());

    // Unparsable coordinates come through as NaN; rank them with the
    // stations that have no position at all.
    let distance = |s: &Station| -> f64 {
        let d = match (s.distance, lat, lon) {
            (Some(d), _, _) => d,
            (None, Some(lat), Some(lon)) => distance_km(lat, lon, s.latitude, s.longitude),
            _ => f64::INFINITY,
        };
        if d.is_nan() {
            f64::INFINITY
        } else {
            d
        }
    };
    let city_match = |s: &Station| {
        city.as_deref()
            .is_some_and(|c| s.name.to_lowercase().contains(c))
    };

    let mut ranked: Vec<(bool, bool, f64, Station)> = stations
        .into_iter()
        .filter(Station::supports_water_level)
        .map(|s| (city_match(&s), s.is_reference(), distance(&s), s))
        .collect();

    ranked.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| b.1.cmp(&a.1))
            .then_with(|| a.2.total_cmp(&b.2))
    });

    ranked.into_iter().map(|(_, _, _, s)| s).collect()
}
