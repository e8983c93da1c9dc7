//! `planner` - inspect calendar results computed from a planner catalog.
//!
//! ```text
//! planner --catalog term.json day 2025-01-08
//! planner --catalog term.json week 2025-01-08 --week-start sunday
//! planner --catalog term.json layout 2025-01-08
//! ```

mod output;

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use planner_engine::{
    layout_day, month_grid_bounds, occurs_on, week_bounds, CalendarEvent, Catalog, DateKey,
    ExclusionRegistry, WeekStartDay,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::output::{colored, DayOutput, LayoutOutput, OccursOutput, RangeOutput};

#[derive(Parser)]
#[command(
    name = "planner",
    version,
    about = "Academic planner calendar: class meetings, tasks, deadlines and day layout"
)]
struct Cli {
    /// Catalog JSON file (courses, items, exclusions, optional palette)
    #[arg(short, long)]
    catalog: PathBuf,

    /// Print single-line JSON instead of pretty output
    #[arg(long, global = true)]
    compact: bool,

    /// Log engine decisions to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Events on one day, in display order
    Day { date: DateKey },
    /// Events for every day in FROM..=TO (days without events are omitted)
    Range { from: DateKey, to: DateKey },
    /// Events for the week containing DATE
    Week {
        date: DateKey,
        /// Overrides the catalog's week start (monday or sunday)
        #[arg(long)]
        week_start: Option<WeekStartDay>,
    },
    /// Events for the month grid containing DATE
    Month {
        date: DateKey,
        #[arg(long)]
        week_start: Option<WeekStartDay>,
    },
    /// All-day strip and column layout for one day
    Layout { date: DateKey },
    /// Whether a course meets on DATE, and what cancelled it if not
    Occurs { course_id: String, date: DateKey },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let raw = fs::read_to_string(&cli.catalog)
        .with_context(|| format!("failed to read catalog {}", cli.catalog.display()))?;
    let catalog = Catalog::from_json(&raw)
        .with_context(|| format!("failed to parse catalog {}", cli.catalog.display()))?;
    debug!(
        courses = catalog.courses.len(),
        items = catalog.items.len(),
        exclusions = catalog.exclusions.len(),
        "loaded catalog"
    );

    match &cli.command {
        Command::Day { date } => {
            let events = catalog.events_for_date(*date);
            print_json(
                &DayOutput {
                    date: *date,
                    events: colored(&catalog.palette, &events),
                },
                cli.compact,
            )
        }
        Command::Range { from, to } => {
            let days = catalog.events_for_range(*from, *to);
            print_range(&catalog, *from, *to, &days, cli.compact)
        }
        Command::Week { date, week_start } => {
            let week_start = week_start.unwrap_or(catalog.week_start);
            let (start, end) =
                week_bounds(*date, week_start).context("week falls outside supported dates")?;
            let days = catalog.events_for_range(start, end);
            print_range(&catalog, start, end, &days, cli.compact)
        }
        Command::Month { date, week_start } => {
            let week_start = week_start.unwrap_or(catalog.week_start);
            let (start, end) = month_grid_bounds(*date, week_start)
                .context("month falls outside supported dates")?;
            let days = catalog.events_for_range(start, end);
            print_range(&catalog, start, end, &days, cli.compact)
        }
        Command::Layout { date } => {
            let events = catalog.events_for_date(*date);
            let day = layout_day(&events);
            print_json(
                &LayoutOutput {
                    date: *date,
                    all_day: colored(&catalog.palette, &day.all_day),
                    timed: colored(&catalog.palette, &day.timed),
                    columns: day.columns,
                    assignments: &day.assignments,
                },
                cli.compact,
            )
        }
        Command::Occurs { course_id, date } => {
            let Some(course) = catalog.course(course_id) else {
                bail!("unknown course '{course_id}'");
            };
            let registry = ExclusionRegistry::new(&catalog.exclusions);
            print_json(
                &OccursOutput {
                    course_id: course_id.as_str(),
                    date: *date,
                    occurs: occurs_on(course, *date, &registry),
                    excluded_by: registry.describe(*date, Some(course_id.as_str())),
                },
                cli.compact,
            )
        }
    }
}

fn print_range(
    catalog: &Catalog,
    start: DateKey,
    end: DateKey,
    days: &BTreeMap<DateKey, Vec<CalendarEvent>>,
    compact: bool,
) -> Result<()> {
    let registry = ExclusionRegistry::new(&catalog.exclusions);
    let output = RangeOutput {
        start,
        end,
        days: days
            .iter()
            .map(|(date, events)| (*date, colored(&catalog.palette, events)))
            .collect(),
        holidays: registry
            .holidays()
            .filter(|h| start <= h.date && h.date <= end)
            .collect(),
    };
    print_json(&output, compact)
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{text}");
    Ok(())
}

fn init_logging(verbose: u8) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(match verbose {
            0 => "warn",
            1 => "planner_engine=debug,planner=debug",
            _ => "planner_engine=trace,planner=trace",
        }),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logging subscriber: {e}"))
}
