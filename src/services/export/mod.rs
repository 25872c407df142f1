//! JSON export of the full event collection.
//!
//! Flattens the day-keyed mapping into one array of event records, each
//! carrying an injected `date` field, and writes it pretty-printed to
//! `calendar_events.json`. A pure read; the store is never mutated.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::day::{DayKey, EventsByDay};
use crate::models::event::Event;

/// Fixed name of the export artifact.
pub const EXPORT_FILE_NAME: &str = "calendar_events.json";

/// One exported record: the event's own fields plus the day it was
/// stored under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedEvent {
    #[serde(flatten)]
    pub event: Event,
    pub date: DayKey,
}

/// Flatten the collection in day order, preserving per-day sequence
/// order.
pub fn flatten(events: &EventsByDay) -> Vec<ExportedEvent> {
    events
        .iter()
        .flat_map(|(day, day_events)| {
            day_events.iter().map(|event| ExportedEvent {
                event: event.clone(),
                date: *day,
            })
        })
        .collect()
}

/// Serialize the flattened collection as two-space-indented JSON.
pub fn export_json(events: &EventsByDay) -> Result<String> {
    serde_json::to_string_pretty(&flatten(events)).context("failed to serialize export")
}

/// Write the export artifact into `dir`, returning the path written.
pub fn write_export(events: &EventsByDay, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(EXPORT_FILE_NAME);
    let records = flatten(events);
    let json = serde_json::to_string_pretty(&records).context("failed to serialize export")?;
    fs::write(&path, json)
        .with_context(|| format!("failed to write export to {}", path.display()))?;
    log::info!("Exported {} event(s) to {}", records.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventColor;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn day(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    fn event(id: &str, name: &str) -> Event {
        Event::builder()
            .id(id)
            .name(name)
            .start_time("09:00")
            .end_time("10:00")
            .color(EventColor::Green)
            .build()
            .unwrap()
    }

    fn sample_events() -> EventsByDay {
        let mut events = EventsByDay::new();
        events.insert(day("2024-05-02"), vec![event("3", "Dentist")]);
        events.insert(
            day("2024-05-01"),
            vec![event("1", "Team sync"), event("2", "Retro")],
        );
        events
    }

    #[test]
    fn test_flatten_length_equals_total_event_count() {
        let flat = flatten(&sample_events());
        assert_eq!(flat.len(), 3);
    }

    #[test]
    fn test_flatten_injects_matching_date() {
        let flat = flatten(&sample_events());

        for record in &flat {
            let stored = &sample_events()[&record.date];
            assert!(stored.iter().any(|e| e.id == record.event.id));
        }
    }

    #[test]
    fn test_flatten_walks_days_in_date_order() {
        let flat = flatten(&sample_events());

        let ids: Vec<&str> = flat.iter().map(|r| r.event.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_export_json_shape() {
        let json = export_json(&sample_events()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let first = &parsed[0];
        assert_eq!(first["id"], "1");
        assert_eq!(first["name"], "Team sync");
        assert_eq!(first["startTime"], "09:00");
        assert_eq!(first["color"], "green");
        assert_eq!(first["date"], "2024-05-01");

        // Two-space indentation
        assert!(json.starts_with("[\n  {"));
    }

    #[test]
    fn test_export_empty_store() {
        assert_eq!(export_json(&EventsByDay::new()).unwrap(), "[]");
    }

    #[test]
    fn test_write_export_uses_fixed_file_name() {
        let dir = tempdir().unwrap();

        let path = write_export(&sample_events(), dir.path()).unwrap();

        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
        let written: Vec<ExportedEvent> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.len(), 3);
    }
}
