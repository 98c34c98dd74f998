//! Note store persistence
//!
//! The store is a single columnar JSON file with exactly three named column
//! arrays (`path`, `text`, `time`). Load materialises the whole file into an
//! ascending-time snapshot; save is a full-file overwrite. Append is load +
//! extend + save, which bounds write throughput by file size — accepted for
//! single-user personal scale.

use crate::config::Config;
use crate::error::{DotlogError, Result};
use crate::types::Note;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// On-disk layout: three parallel column arrays
#[derive(Debug, Default, Serialize, Deserialize)]
struct Columns {
    path: Vec<String>,
    text: Vec<String>,
    time: Vec<String>,
}

impl Columns {
    fn from_notes(notes: &[Note]) -> Self {
        let mut columns = Columns::default();
        for note in notes {
            columns.path.push(note.path.clone());
            columns.text.push(note.text.clone());
            columns.time.push(note.time.clone());
        }
        columns
    }

    fn into_notes(self) -> Result<Vec<Note>> {
        if self.path.len() != self.text.len() || self.path.len() != self.time.len() {
            return Err(DotlogError::Other(format!(
                "column length mismatch: {} paths, {} texts, {} times",
                self.path.len(),
                self.text.len(),
                self.time.len()
            )));
        }
        let notes = self
            .path
            .into_iter()
            .zip(self.text)
            .zip(self.time)
            .map(|((path, text), time)| Note { path, text, time })
            .collect();
        Ok(notes)
    }
}

/// Load the full store snapshot, sorted ascending by time
pub fn load(config: &Config) -> Result<Vec<Note>> {
    let raw = std::fs::read_to_string(&config.store_path).map_err(|e| {
        DotlogError::StoreUnavailable {
            path: config.store_path.clone(),
            reason: e.to_string(),
        }
    })?;

    let columns: Columns = serde_json::from_str(&raw)?;
    let mut notes = columns.into_notes()?;
    notes.sort_by(|a, b| a.time.cmp(&b.time));
    debug!(count = notes.len(), "loaded store");
    Ok(notes)
}

/// Overwrite the store file with the given rows
pub fn save(config: &Config, notes: &[Note]) -> Result<()> {
    let columns = Columns::from_notes(notes);
    let raw = serde_json::to_string(&columns)?;
    std::fs::write(&config.store_path, raw)?;
    debug!(count = notes.len(), "saved store");
    Ok(())
}

/// Append one note: load the full store, extend, rewrite
pub fn append(config: &Config, note: Note) -> Result<()> {
    let mut notes = load(config)?;
    info!(path = %note.path, time = %note.time, "appending note");
    notes.push(note);
    save(config, &notes)
}
