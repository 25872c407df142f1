//! Command-line front end.
//!
//! Stands in for the original presentation layer: `add`/`update`/`delete`
//! are the editor dialog, `list` the day list dialog, `filter` the filter
//! input, `move` the drag-release path, `show` the month grid and
//! `export` the export button. Form-level validation happens here, at
//! the editor boundary, before anything reaches the store.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::models::day::DayKey;
use crate::models::drag::MoveRequest;
use crate::models::event::{Event, EventColor};
use crate::services::export;
use crate::services::store::EventStore;
use crate::utils::date::{days_of_month, is_weekend};

#[derive(Parser)]
#[command(name = "event-calendar")]
#[command(about = "Manage calendar events: add, list, reschedule, filter and export")]
pub struct Cli {
    /// Snapshot file to load and persist (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an event to a day
    Add {
        /// Day the event belongs to (yyyy-MM-dd)
        date: DayKey,

        /// Event name
        name: String,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: String,

        /// End time (HH:MM)
        #[arg(short, long)]
        end: String,

        /// Event description
        #[arg(short, long)]
        description: Option<String>,

        /// Marker color (blue, green, red, yellow, purple)
        #[arg(short, long, default_value = "blue")]
        color: EventColor,
    },
    /// List the events of a single day (unfiltered)
    List {
        /// Day to list (yyyy-MM-dd)
        date: DayKey,
    },
    /// Update fields of an existing event
    Update {
        /// Day the event belongs to (yyyy-MM-dd)
        date: DayKey,

        /// Id of the event to update
        id: String,

        /// New event name
        #[arg(short, long)]
        name: Option<String>,

        /// New start time (HH:MM)
        #[arg(short, long)]
        start: Option<String>,

        /// New end time (HH:MM)
        #[arg(short, long)]
        end: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New marker color
        #[arg(short, long)]
        color: Option<EventColor>,
    },
    /// Delete an event from a day
    Delete {
        /// Day the event belongs to (yyyy-MM-dd)
        date: DayKey,

        /// Id of the event to delete
        id: String,
    },
    /// Move an event to another day (drag-to-reschedule)
    Move {
        /// Source day (yyyy-MM-dd)
        from: DayKey,

        /// Destination day (yyyy-MM-dd)
        to: DayKey,

        /// Id of the event to move
        id: String,
    },
    /// Apply a keyword filter and print the filtered view
    Filter {
        /// Keyword matched against names and descriptions; empty shows everything
        keyword: Option<String>,
    },
    /// Print a month overview of the event collection
    Show {
        /// Month to show (yyyy-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Export all events to calendar_events.json
    Export {
        /// Directory to write the export into (defaults to the current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    let snapshot_path = match cli.file {
        Some(path) => path,
        None => EventStore::default_snapshot_path()
            .context("could not determine a data directory for the snapshot")?,
    };
    let mut store = EventStore::open(snapshot_path);

    match cli.command {
        Commands::Add {
            date,
            name,
            start,
            end,
            description,
            color,
        } => {
            let mut builder = Event::builder()
                .id(Uuid::new_v4().to_string())
                .name(name)
                .start_time(start)
                .end_time(end)
                .color(color);
            if let Some(description) = description {
                builder = builder.description(description);
            }
            let event = builder.build().map_err(|e| anyhow!(e))?;

            let id = event.id.clone();
            store.add_event(date, event);
            println!("Added event {} on {}", id, date);
        }
        Commands::List { date } => {
            let day_events = store.day_events(date);
            if day_events.is_empty() {
                println!("No events for {}.", date);
            } else {
                println!("Events for {}:", date);
                for event in day_events {
                    print_event(event);
                }
            }
        }
        Commands::Update {
            date,
            id,
            name,
            start,
            end,
            description,
            color,
        } => {
            let mut event = store
                .day_events(date)
                .iter()
                .find(|e| e.id == id)
                .cloned()
                .ok_or_else(|| anyhow!("No event {} on {}", id, date))?;

            if let Some(name) = name {
                event.name = name;
            }
            if let Some(start) = start {
                event.start_time = start;
            }
            if let Some(end) = end {
                event.end_time = end;
            }
            if let Some(description) = description {
                event.description = Some(description);
            }
            if let Some(color) = color {
                event.color = color;
            }
            event.validate().map_err(|e| anyhow!(e))?;

            store.update_event(date, event)?;
            println!("Updated event {} on {}", id, date);
        }
        Commands::Delete { date, id } => {
            store.delete_event(date, &id);
            println!("Deleted event {} on {}", id, date);
        }
        Commands::Move { from, to, id } => {
            let request = MoveRequest::new(from, to, id);
            request.validate().map_err(|e| anyhow!(e))?;

            if !store
                .day_events(from)
                .iter()
                .any(|e| e.id == request.event_id)
            {
                bail!("No event {} on {}", request.event_id, from);
            }

            store.move_event(&request);
            println!("Moved event {} from {} to {}", request.event_id, from, to);
        }
        Commands::Filter { keyword } => {
            let keyword = keyword.unwrap_or_default();
            store.filter_events(&keyword);

            let filtered = store.filtered_events();
            if filtered.is_empty() {
                println!("No events match '{}'.", keyword);
            } else {
                for (day, day_events) in &filtered {
                    println!("{}:", day);
                    for event in day_events {
                        print_event(event);
                    }
                }
            }
        }
        Commands::Show { month } => {
            let anchor = match month {
                Some(month) => parse_month(&month)?,
                None => Local::now().date_naive(),
            };

            let filtered = store.filtered_events();
            println!("{}", anchor.format("%B %Y"));
            for date in days_of_month(anchor) {
                let day = DayKey::new(date);
                let count = filtered.get(&day).map(Vec::len).unwrap_or(0);
                let marker = if is_weekend(date) { "*" } else { " " };
                if count > 0 {
                    println!("{} {} {}  {} event(s)", marker, day, date.format("%a"), count);
                } else {
                    println!("{} {} {}", marker, day, date.format("%a"));
                }
            }
        }
        Commands::Export { dir } => {
            let dir = match dir {
                Some(dir) => dir,
                None => std::env::current_dir().context("could not resolve current directory")?,
            };
            let path = export::write_export(store.events(), &dir)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

fn print_event(event: &Event) {
    println!(
        "  {}-{}  {}  [{}]  ({})",
        event.start_time, event.end_time, event.name, event.color, event.id
    );
    if let Some(description) = &event.description {
        println!("    {}", description);
    }
}

fn parse_month(value: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d")
        .with_context(|| format!("invalid month '{}' (expected yyyy-MM)", value))?;
    Ok(date.with_day(1).unwrap_or(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(
            parse_month("2024-05").unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_month_rejects_garbage() {
        assert!(parse_month("May 2024").is_err());
        assert!(parse_month("2024-13").is_err());
    }

    #[test]
    fn test_cli_parses_add_command() {
        let cli = Cli::try_parse_from([
            "event-calendar",
            "add",
            "2024-05-01",
            "Team sync",
            "--start",
            "09:00",
            "--end",
            "09:30",
            "--color",
            "green",
        ])
        .unwrap();

        match cli.command {
            Commands::Add {
                date, name, color, ..
            } => {
                assert_eq!(date, "2024-05-01".parse().unwrap());
                assert_eq!(name, "Team sync");
                assert_eq!(color, EventColor::Green);
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_date() {
        let result = Cli::try_parse_from(["event-calendar", "list", "01.05.2024"]);
        assert!(result.is_err());
    }
}
