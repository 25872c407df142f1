//! Snapshot persistence for the event collection.
//!
//! The snapshot is the JSON-serialized day-to-events mapping, written in
//! full after every mutation. Writes go through a queued background
//! worker so callers never block on disk; the worker coalesces queued
//! snapshots and only ever writes the most recent one.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};

use crate::models::day::EventsByDay;

/// Read a snapshot from `path`. A missing file is an empty collection;
/// unreadable or malformed content is an error for the caller to degrade
/// on.
pub fn load_snapshot(path: &Path) -> Result<EventsByDay> {
    if !path.exists() {
        return Ok(EventsByDay::new());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    let snapshot = serde_json::from_str(&data)
        .with_context(|| format!("failed to deserialize events from {}", path.display()))?;
    Ok(snapshot)
}

/// Write the full collection to `path`, creating parent directories as
/// needed and overwriting any previous snapshot.
pub fn save_snapshot(path: &Path, events: &EventsByDay) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = serde_json::to_string_pretty(events)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write events to {}", path.display()))?;
    Ok(())
}

/// Fire-and-forget snapshot writer.
///
/// Owns a worker thread that drains queued snapshots and writes the
/// latest one. Write failures are logged, never surfaced. Dropping the
/// writer closes the queue and joins the worker, so the last queued
/// snapshot lands before shutdown.
pub struct SnapshotWriter {
    sender: Option<mpsc::Sender<EventsByDay>>,
    worker: Option<thread::JoinHandle<()>>,
    path: PathBuf,
}

impl SnapshotWriter {
    pub fn spawn(path: PathBuf) -> Self {
        let (sender, receiver) = mpsc::channel::<EventsByDay>();
        let target = path.clone();

        let worker = thread::spawn(move || {
            while let Ok(mut snapshot) = receiver.recv() {
                // Coalesce: a newer queued snapshot supersedes this one
                while let Ok(newer) = receiver.try_recv() {
                    snapshot = newer;
                }

                if let Err(err) = save_snapshot(&target, &snapshot) {
                    log::warn!("Snapshot write to {} failed: {err:#}", target.display());
                }
            }
        });

        Self {
            sender: Some(sender),
            worker: Some(worker),
            path,
        }
    }

    /// Queue the given collection state for writing. Never blocks and
    /// never fails from the caller's perspective.
    pub fn queue(&self, events: EventsByDay) {
        if let Some(sender) = &self.sender {
            if sender.send(events).is_err() {
                log::warn!(
                    "Snapshot writer for {} is gone; dropping queued write",
                    self.path.display()
                );
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SnapshotWriter {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain and exit
        drop(self.sender.take());
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::warn!("Snapshot writer thread panicked during shutdown");
            }
        }
    }
}
