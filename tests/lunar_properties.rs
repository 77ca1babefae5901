use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use moontide::phase::{cycle_position, SYNODIC_PERIOD_DAYS};
use moontide::{
    calculate_moon_phase, ephemeris, get_full_moon_name, get_moon_emoji, is_date_full_moon,
    is_date_new_moon, CalendarDate, EphemerisTable, LunarEngine, PhaseName,
};

fn day(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

#[test]
fn reference_new_moon() {
    let reference = Utc.with_ymd_and_hms(2024, 6, 6, 12, 38, 0).unwrap();
    let result = calculate_moon_phase(&reference);
    assert_eq!(result.phase, PhaseName::NewMoon);
    assert_eq!(result.illumination, 0);
}

#[test]
fn phase_repeats_every_synodic_period() {
    let period = Duration::milliseconds((SYNODIC_PERIOD_DAYS * 86_400_000.0).round() as i64);
    let start = Utc.with_ymd_and_hms(2019, 3, 2, 7, 0, 0).unwrap();
    for step in 0..60 {
        let d = start + Duration::hours(11 * step);
        let a = calculate_moon_phase(&d);
        let b = calculate_moon_phase(&(d + period));
        // Both instants can straddle a rounding edge; the position itself
        // must agree to well under a second.
        let drift = (cycle_position(&d) - cycle_position(&(d + period))).abs();
        assert!(drift < 1e-5 || (SYNODIC_PERIOD_DAYS - drift) < 1e-5, "drift {drift}");
        assert!(a.illumination.abs_diff(b.illumination) <= 1);
    }
}

#[test]
fn june_2024_full_moon_is_exact() {
    assert!(is_date_full_moon(day("2024-06-22")));
    assert!(!is_date_full_moon(day("2024-06-21")));
    assert!(!is_date_full_moon(day("2024-06-23")));
    assert!(is_date_new_moon(day("2024-06-06")));
}

#[test]
fn no_day_is_both_full_and_new() {
    let (first, last) = ephemeris::builtin().covered_range().unwrap();
    let mut d = first;
    while d <= last {
        assert!(!(is_date_full_moon(d) && is_date_new_moon(d)), "{d}");
        d = d.offset_days(1).unwrap();
    }
}

#[test]
fn harvest_moon() {
    let name = get_full_moon_name(&day("2024-09-18").naive()).unwrap();
    assert_eq!(name.name, "Harvest Moon");
    assert_eq!(name.description, "The full moon nearest autumn equinox");
}

#[test]
fn emoji_for_every_phase() {
    let glyphs: Vec<_> = PhaseName::ALL.into_iter().map(get_moon_emoji).collect();
    assert_eq!(glyphs, vec!["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"]);
    assert_eq!(moontide::phase::moon_emoji_for_label("unrecognized-value"), "🌙");
}

#[test]
fn ephemeris_asset_from_disk() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# test asset").unwrap();
    writeln!(file, "full 2031-01-09").unwrap();
    writeln!(file, "new  2031-01-23").unwrap();
    file.flush().unwrap();

    let table = EphemerisTable::load(file.path()).unwrap();
    assert_eq!(table.full_moon_count(), 1);
    assert_eq!(table.new_moon_count(), 1);

    let engine = LunarEngine::new(Arc::new(table));
    assert!(engine.is_full_moon(day("2031-01-09")));
    assert!(engine.is_new_moon(day("2031-01-23")));
    assert!(!engine.is_full_moon(day("2024-06-22")));
}

#[test]
fn empty_asset_loads_as_empty_table() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let table = EphemerisTable::load(file.path()).unwrap();
    assert!(table.covered_range().is_none());
}

#[test]
fn missing_asset_is_a_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = EphemerisTable::load(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, moontide::LunarError::FileError { .. }));
}

#[test]
fn engine_from_config_uses_asset_path() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "full 2032-02-20").unwrap();
    file.flush().unwrap();

    let config = moontide::Config {
        ephemeris_path: Some(file.path().to_path_buf()),
        tolerance_days: 2,
        ..moontide::Config::default()
    };
    let engine = LunarEngine::from_config(&config).unwrap();
    assert_eq!(engine.tolerance_days(), 2);
    assert!(engine.is_full_moon(day("2032-02-18")));
    assert!(!engine.is_full_moon(day("2032-02-17")));
}

#[test]
fn engine_from_config_refuses_overlapping_band() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "full 2030-01-01").unwrap();
    writeln!(file, "new 2030-01-03").unwrap();
    file.flush().unwrap();

    let config = moontide::Config {
        ephemeris_path: Some(file.path().to_path_buf()),
        tolerance_days: 1,
        ..moontide::Config::default()
    };
    let err = LunarEngine::from_config(&config).unwrap_err();
    assert!(matches!(
        err,
        moontide::LunarError::ToleranceTooWide { requested: 1, max: 0 }
    ));
}

#[test]
fn phase_follows_cycle_position_across_dates() {
    let mut d = Utc.with_ymd_and_hms(1850, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2150, 1, 1, 0, 0, 0).unwrap();
    let mut checked = 0;
    while d < end {
        let result = calculate_moon_phase(&d);
        assert_eq!(
            result.phase,
            PhaseName::from_cycle_position(cycle_position(&d)),
            "{d}"
        );
        assert!(result.illumination <= 100, "{d}");
        // An odd step so successive samples land on different hours.
        d = d + Duration::hours(37 * 24 + 7);
        checked += 1;
    }
    assert!(checked > 2900);
}
