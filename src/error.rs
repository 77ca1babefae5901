//! Error types for the moontide crate.
//!
//! The lunar lookups themselves never fail. Errors only come from the edges:
//! loading an ephemeris asset, parsing user input, configuration, and the
//! station data source.

use std::path::PathBuf;

/// Error type for all fallible operations in the moontide crate.
#[derive(Debug, thiserror::Error)]
pub enum LunarError {
    #[error("Failed to open ephemeris file {path}: {source}")]
    FileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Memory mapping failed for {path}: {source}")]
    MmapError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Ephemeris file is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("Malformed ephemeris entry on line {line}: {content:?}")]
    MalformedEphemeris { line: usize, content: String },

    #[error("Date {date} is listed as both a full moon and a new moon")]
    OverlappingEphemeris { date: String },

    #[error("Invalid calendar date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: u32 },

    #[error("Shifting {year}-{month:02} by {delta} months leaves the supported year range")]
    MonthOutOfRange { year: i32, month: u32, delta: i32 },

    #[error("Unknown moon phase: {0:?}")]
    UnknownPhase(String),

    #[error("Tolerance of {requested} days would mark a day as both full and new moon (max {max} for this table)")]
    ToleranceTooWide { requested: u32, max: u32 },

    #[error("Invalid coordinates for station search: ({lat}, {lon})")]
    InvalidCoordinates { lat: f64, lon: f64 },

    #[error("Invalid configuration value for {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("Station source failed: {0}")]
    StationSource(String),
}

pub type Result<T> = std::result::Result<T, LunarError>;
