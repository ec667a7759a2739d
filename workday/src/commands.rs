//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use tracing::{info, info_span};

use workday::calc::{calculate_working_days, holiday_preview, CalculationMode};
use workday::config::{AppConfig, DEFAULT_CONFIG_PATH};
use workday::report::{self, Report};
use workday::time::RegionHolidayProvider;

use crate::cli::{Cli, Command};

/// Options shared by every subcommand.
struct Globals {
    config: AppConfig,
    region: Option<String>,
    json: bool,
}

/// Load the configuration and dispatch.
pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => AppConfig::load(path, true)?,
        None => AppConfig::load(Path::new(DEFAULT_CONFIG_PATH), false)?,
    };
    let globals = Globals {
        config,
        region: cli.region,
        json: cli.json,
    };

    match cli.command {
        Command::Range(args) => calculate(
            &globals,
            CalculationMode::DateRange,
            &args.start,
            &args.end,
            args.log,
        ),
        Command::Add(args) => calculate(
            &globals,
            CalculationMode::AddDays,
            &args.start,
            &args.days,
            args.log,
        ),
        Command::Subtract(args) => calculate(
            &globals,
            CalculationMode::SubtractDays,
            &args.start,
            &args.days,
            args.log,
        ),
        Command::Holidays(args) => holidays(&globals, args.year),
        Command::Regions => regions(&globals),
    }
}

fn calculate(
    globals: &Globals,
    mode: CalculationMode,
    start: &str,
    target: &str,
    with_log: bool,
) -> Result<()> {
    let _cmd = info_span!("calculate", %mode).entered();
    let region = globals.config.region(globals.region.as_deref())?;
    info!(region = region.id(), start, target, "calculating");

    let result = calculate_working_days(&region, mode, start, target, &globals.config.work)
        .with_context(|| format!("{mode} calculation from {start} failed"))?;
    let report = Report {
        region: region.id(),
        mode,
        start,
        target,
        result: &result,
    };
    if globals.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text(with_log));
    }
    Ok(())
}

fn holidays(globals: &Globals, year: Option<u16>) -> Result<()> {
    let region = globals.config.region(globals.region.as_deref())?;
    let year = match year {
        Some(year) => year,
        None => current_year()?,
    };
    let _cmd = info_span!("holidays", region = region.id(), year).entered();

    let preview = holiday_preview(&region, year, &globals.config.work);
    if globals.json {
        let json = serde_json::to_string_pretty(&preview).context("failed to serialise holidays")?;
        println!("{json}");
    } else {
        print!("{}", report::holidays_text(&region, year, &preview));
    }
    Ok(())
}

fn regions(globals: &Globals) -> Result<()> {
    if globals.json {
        println!("{}", report::regions_json()?);
    } else {
        print!("{}", report::regions_text());
    }
    Ok(())
}

/// The current year in the local time zone.
fn current_year() -> Result<u16> {
    year_of(chrono::Local::now().date_naive())
}

fn year_of(date: NaiveDate) -> Result<u16> {
    let year = date.year();
    u16::try_from(year).with_context(|| format!("local clock reports year {year}"))
}
