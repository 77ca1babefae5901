use tracing_subscriber::EnvFilter;

/// Every `target:` the crate logs under.
pub const LOG_TARGETS: &[&str] = &[
    "moontide",
    "lunar_phase",
    "ephemeris",
    "calendar_annotation",
    "ttl_cache",
    "station_service",
];

/// Filter directives for a CLI verbosity level.
///
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
pub fn default_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    LOG_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs a compact stderr subscriber. `RUST_LOG` overrides the verbosity
/// flag if set.
///
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_thread_names(true)
        .with_line_number(verbosity >= 3)
        .with_file(verbosity >= 3)
        .compact()
        .try_init();
}
