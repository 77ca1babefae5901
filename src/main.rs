use std::process;

use chrono::Utc;
use clap::Parser;

use moontide::{
    logging, next_solar_event, CalendarDate, Config, LunarEngine, MonthAnnotator, Result,
};

/// Moon phase and calendar marks for a day.
#[derive(Parser)]
#[command(name = "moontide", version, about = "Moon phase and calendar marks for a day")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Day to describe, as YYYY-MM-DD. Defaults to today in UTC.
    date: Option<CalendarDate>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;
    let engine = LunarEngine::from_config(&config)?;
    let date = cli.date.unwrap_or_else(|| CalendarDate::from(Utc::now()));

    let annotator = MonthAnnotator::new(engine, config.month_cache_capacity);
    let month = annotator.annotate_month(date.year(), date.month())?;
    let engine = annotator.engine();

    let phase = engine.phase_on(date);
    let (solar, days_until) = next_solar_event(date.naive());

    println!("📆 Date: {date}");
    println!("{} Moon Phase: {} ({}% illuminated)", phase.phase.emoji(), phase.phase, phase.illumination);
    println!("🌕 Full Moon Today: {}", yes_no(engine.is_full_moon(date)));
    println!("🌑 New Moon Today: {}", yes_no(engine.is_new_moon(date)));
    match month.full_moon_name {
        Some(name) => println!("🌝 This Month's Full Moon: {} ({})", name.name, name.description),
        None => println!("🌝 This Month's Full Moon: not listed"),
    }
    let full_days: Vec<String> = month.full_moon_days().map(|d| d.date.canonical()).collect();
    if !full_days.is_empty() {
        println!("📅 Full Moon Days: {}", full_days.join(", "));
    }
    println!("{} Next Solstice/Equinox: {} ({} days away)", solar.emoji, solar.name, days_until);

    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
