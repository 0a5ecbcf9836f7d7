//! `contacts` — opening status and contact cards for a contact-point directory.
//!
//! # Usage
//!
//! ```bash
//! # Status of every contact point, right now, in Europe/Berlin
//! contacts status contact-points.json
//!
//! # One county at a fixed instant, as JSON
//! contacts status contact-points.json --county zwickau --at 2026-03-16T09:00:00Z --json
//!
//! # First two batches of cards for a county
//! contacts cards contact-points.json --county vogtland --loads 2
//! ```
//!
//! # Environment Variables
//!
//! - `CONTACTS_TZ`: Timezone the directory's opening hours are written in (default: Europe/Berlin)
//! - `RUST_LOG`: Log filter (default: warn)

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use contact_directory::{
    card_text, copy_text, status_line, CountyFilter, Directory, Disclosure, ITEMS_PER_LOAD,
};
use opening_status::{DayLabels, StatusResult, WeekMoment};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Opening status and contact cards for a contact-point directory"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the opening status of every contact point
    Status {
        /// Directory JSON file
        file: PathBuf,

        /// Only this county
        #[arg(long)]
        county: Option<String>,

        #[command(flatten)]
        clock: ClockArgs,

        #[command(flatten)]
        labels: LabelArgs,

        /// Print a JSON array instead of text lines
        #[arg(long)]
        json: bool,
    },
    /// Print the contact cards of one county, batch by batch
    Cards {
        /// Directory JSON file
        file: PathBuf,

        /// County to show (default: the first county in the file)
        #[arg(long)]
        county: Option<String>,

        /// How many batches to reveal
        #[arg(long, default_value_t = 1)]
        loads: usize,

        /// Contact points per batch
        #[arg(long, default_value_t = ITEMS_PER_LOAD)]
        per_load: usize,

        /// Print the plain-text copy card instead of the rendered card
        #[arg(long)]
        copy: bool,

        #[command(flatten)]
        clock: ClockArgs,

        #[command(flatten)]
        labels: LabelArgs,
    },
    /// List counties with their contact point counts
    Counties {
        /// Directory JSON file
        file: PathBuf,
    },
}

#[derive(Args)]
struct ClockArgs {
    /// Evaluate at this instant (RFC 3339) instead of now
    #[arg(long)]
    at: Option<String>,

    /// IANA timezone of the opening hours
    #[arg(long, env = "CONTACTS_TZ", default_value = "Europe/Berlin")]
    timezone: String,
}

#[derive(Args)]
struct LabelArgs {
    /// Day labels: short, long, en-short, en-long
    #[arg(long = "labels", default_value = "short")]
    labels: DayLabels,
}

impl ClockArgs {
    /// Read the clock once and express it as a local weekday and time.
    fn moment(&self) -> Result<WeekMoment> {
        let instant = match &self.at {
            Some(at) => DateTime::parse_from_rfc3339(at)
                .with_context(|| format!("invalid --at '{at}'"))?
                .with_timezone(&Utc),
            None => Utc::now(),
        };
        let tz: Tz = self
            .timezone
            .parse()
            .map_err(|_| anyhow!("invalid timezone '{}'", self.timezone))?;

        let local = instant.with_timezone(&tz);
        debug!(%local, "resolving opening status");
        Ok(WeekMoment::from_datetime(&local))
    }
}

#[derive(Serialize)]
struct StatusRecord<'a> {
    county: &'a str,
    name: &'a str,
    status: StatusResult,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Status {
            file,
            county,
            clock,
            labels,
            json,
        } => run_status(&file, county.as_deref(), &clock, labels.labels, json),
        Command::Cards {
            file,
            county,
            loads,
            per_load,
            copy,
            clock,
            labels,
        } => {
            let disclosure = Disclosure::new(per_load);
            let disclosure = match county {
                Some(key) => disclosure.select(CountyFilter::County(key)),
                None => disclosure,
            };
            run_cards(&file, disclosure.with_loads(loads), copy, &clock, labels.labels)
        }
        Command::Counties { file } => run_counties(&file),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn load(file: &Path) -> Result<Directory> {
    let directory = Directory::load(file)
        .with_context(|| format!("failed to load directory '{}'", file.display()))?;
    info!(
        counties = directory.counties().len(),
        contact_points = directory.contact_point_count(),
        "directory loaded"
    );
    Ok(directory)
}

fn run_status(
    file: &Path,
    county: Option<&str>,
    clock: &ClockArgs,
    labels: DayLabels,
    json: bool,
) -> Result<()> {
    let directory = load(file)?;
    let now = clock.moment()?;

    if let Some(key) = county {
        if directory.county(key).is_none() {
            bail!("no county '{key}' in '{}'", file.display());
        }
    }

    let records: Vec<StatusRecord<'_>> = directory
        .counties()
        .iter()
        .filter(|c| county.is_none_or(|key| c.key == key))
        .flat_map(|c| {
            c.contact_points.iter().map(move |point| StatusRecord {
                county: &c.key,
                name: &point.name,
                status: point.status(now),
            })
        })
        .collect();

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &records)?;
        writeln!(out)?;
        return Ok(());
    }

    for record in &records {
        let line = status_line(&record.status, &labels).unwrap_or_else(|| "-".to_string());
        writeln!(out, "{} | {} | {}", record.county, record.name, line)?;
    }
    Ok(())
}

fn run_cards(
    file: &Path,
    disclosure: Disclosure,
    copy: bool,
    clock: &ClockArgs,
    labels: DayLabels,
) -> Result<()> {
    let directory = load(file)?;
    let now = clock.moment()?;
    let disclosure = disclosure.or_first_county(&directory);

    let view = disclosure.view(&directory);
    let Some(county) = view.county else {
        match disclosure.filter() {
            CountyFilter::County(key) => bail!("no county '{key}' in '{}'", file.display()),
            CountyFilter::All => bail!("'{}' has no counties", file.display()),
        }
    };

    let mut out = io::stdout().lock();
    writeln!(out, "# {}", county.full_name)?;
    for point in view.points {
        writeln!(out)?;
        let card = if copy {
            copy_text(point)
        } else {
            card_text(point, &point.status(now), &labels)
        };
        writeln!(out, "{card}")?;
    }
    if view.has_more() {
        writeln!(out)?;
        writeln!(out, "… {} more", view.remaining)?;
    }
    Ok(())
}

fn run_counties(file: &Path) -> Result<()> {
    let directory = load(file)?;
    let mut out = io::stdout().lock();
    for county in directory.counties() {
        writeln!(
            out,
            "{}\t{}\t{}",
            county.key,
            county.full_name,
            county.contact_points.len()
        )?;
    }
    Ok(())
}
