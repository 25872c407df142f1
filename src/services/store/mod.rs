//! Event store service.
//!
//! Owns the event collection keyed by calendar day, the active keyword
//! filter, and the mutation operations. The filtered view is a derived
//! projection computed on read; only the collection itself persists.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::day::{DayKey, EventsByDay};
use crate::models::drag::MoveRequest;
use crate::models::event::Event;
use crate::services::persistence::{load_snapshot, SnapshotWriter};

/// Errors surfaced by store operations.
///
/// Only [`EventStore::update_event`] fails: referencing a day with no
/// recorded events is a caller bug (the event being updated was obtained
/// from the store). Delete and move tolerate missing data as documented
/// no-ops.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no events recorded for day {0}")]
    UnknownDay(DayKey),
}

/// The calendar's event store.
///
/// Constructed once at the application root and passed by reference to
/// every consumer. Mutations go through the exposed operations only; each
/// successful mutation queues a snapshot write in the background.
pub struct EventStore {
    events: EventsByDay,
    filter: Option<String>,
    writer: Option<SnapshotWriter>,
}

impl EventStore {
    /// Open a store backed by the snapshot file at `path`.
    ///
    /// A missing or unreadable snapshot silently yields an empty store;
    /// the failure is logged, never surfaced.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let events = match load_snapshot(&path) {
            Ok(events) => {
                log::info!(
                    "Loaded {} day(s) of events from {}",
                    events.len(),
                    path.display()
                );
                events
            }
            Err(err) => {
                log::warn!(
                    "Could not load snapshot from {}; starting empty: {err:#}",
                    path.display()
                );
                EventsByDay::new()
            }
        };

        Self {
            events,
            filter: None,
            writer: Some(SnapshotWriter::spawn(path)),
        }
    }

    /// Create a store with no persistence attached.
    pub fn in_memory() -> Self {
        Self {
            events: EventsByDay::new(),
            filter: None,
            writer: None,
        }
    }

    /// The full event collection, unfiltered.
    pub fn events(&self) -> &EventsByDay {
        &self.events
    }

    /// Events recorded for a single day, unfiltered. Absent day reads as
    /// an empty list.
    pub fn day_events(&self, day: DayKey) -> &[Event] {
        self.events.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    /// The currently applied keyword, if any.
    pub fn active_filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// The filtered view: equal to the full collection when no filter is
    /// active, otherwise the per-day subset of events whose name or
    /// description contains the keyword (case-insensitive substring).
    /// Days with no surviving events are omitted entirely.
    pub fn filtered_events(&self) -> EventsByDay {
        match &self.filter {
            None => self.events.clone(),
            Some(keyword) => self
                .events
                .iter()
                .filter_map(|(day, day_events)| {
                    let surviving: Vec<Event> = day_events
                        .iter()
                        .filter(|event| event.matches_keyword(keyword))
                        .cloned()
                        .collect();
                    if surviving.is_empty() {
                        None
                    } else {
                        Some((*day, surviving))
                    }
                })
                .collect(),
        }
    }

    /// Append `event` to the given day, creating the day entry if absent.
    /// No duplicate-id check: ids are caller-generated and trusted to be
    /// unique within their day.
    pub fn add_event(&mut self, day: DayKey, event: Event) {
        self.events.entry(day).or_default().push(event);
        self.persist();
    }

    /// Replace the event of `day` whose id matches `event.id`, in place.
    ///
    /// A day with no recorded events fails with [`StoreError::UnknownDay`];
    /// a recorded day with no matching id is a no-op.
    pub fn update_event(&mut self, day: DayKey, event: Event) -> Result<(), StoreError> {
        let day_events = self
            .events
            .get_mut(&day)
            .ok_or(StoreError::UnknownDay(day))?;

        if let Some(existing) = day_events.iter_mut().find(|e| e.id == event.id) {
            *existing = event;
            self.persist();
        }

        Ok(())
    }

    /// Remove any event of `day` whose id matches `event_id`. Missing day
    /// or id is a silent no-op.
    pub fn delete_event(&mut self, day: DayKey, event_id: &str) {
        let Some(day_events) = self.events.get_mut(&day) else {
            return;
        };

        let before = day_events.len();
        day_events.retain(|event| event.id != event_id);

        if day_events.len() == before {
            return;
        }
        if day_events.is_empty() {
            self.events.remove(&day);
        }
        self.persist();
    }

    /// Move an event between days: removed from the source sequence,
    /// appended to the destination sequence. If the id is absent from the
    /// source day the whole operation is a no-op and nothing is touched.
    pub fn move_event(&mut self, request: &MoveRequest) {
        let Some(day_events) = self.events.get_mut(&request.source_day) else {
            return;
        };
        let Some(position) = day_events
            .iter()
            .position(|event| event.id == request.event_id)
        else {
            return;
        };

        let event = day_events.remove(position);
        if day_events.is_empty() {
            self.events.remove(&request.source_day);
        }
        self.events
            .entry(request.destination_day)
            .or_default()
            .push(event);

        log::debug!(
            "Moved event {} from {} to {}",
            request.event_id,
            request.source_day,
            request.destination_day
        );
        self.persist();
    }

    /// Apply a keyword filter to the derived view. An empty keyword
    /// clears the filter. The filter never persists across restarts.
    pub fn filter_events(&mut self, keyword: &str) {
        self.filter = if keyword.is_empty() {
            None
        } else {
            Some(keyword.to_string())
        };
    }

    fn persist(&self) {
        if let Some(writer) = &self.writer {
            writer.queue(self.events.clone());
        }
    }
}

impl EventStore {
    /// Snapshot file location under the platform data directory.
    pub fn default_snapshot_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "event-calendar")
            .map(|dirs| dirs.data_dir().join("events.json"))
    }

    /// The path the background writer targets, if persistence is attached.
    pub fn snapshot_path(&self) -> Option<&Path> {
        self.writer.as_ref().map(SnapshotWriter::path)
    }
}
