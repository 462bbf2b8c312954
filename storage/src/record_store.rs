//! Record store: durable mapping from post id to [`Record`].
//!
//! One JSON file (`_data.json` under the data directory), loaded whole,
//! mutated by `merge`, saved atomically. Callers guarantee sequential access
//! (the queue processes one job at a time), so plain read-modify-write is safe.

use crate::atomic::write_atomic;
use crate::error::StorageError;
use crate::models::{Record, RecordDraft};
use gbot_core::Command;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const RECORD_FILE: &str = "_data.json";

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Store over `<data_dir>/_data.json`. Nothing is touched until the first save.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(RECORD_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True once at least one merge has been saved.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads the full mapping. A missing file is an empty mapping; a malformed
    /// file is a [`StorageError::Corrupt`] for the caller to surface.
    pub fn load(&self) -> Result<BTreeMap<i64, Record>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw)
            .map_err(|e| StorageError::Corrupt(format!("{}: {}", self.path.display(), e)))
    }

    /// Atomically persists the full mapping as pretty-printed JSON.
    pub fn save(&self, records: &BTreeMap<i64, Record>) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(records)?;
        write_atomic(&self.path, &bytes)?;
        debug!(path = %self.path.display(), count = records.len(), "Record store saved");
        Ok(())
    }

    /// Applies one post to the store: load, resolve flags against any existing
    /// record, insert, save. Returns the resulting record and whether a write
    /// happened. `applied` is false exactly when `command` is update-family and
    /// the stored caption is byte-identical to the incoming one; the store is
    /// untouched in that case.
    pub fn merge(
        &self,
        id: i64,
        draft: RecordDraft,
        command: Command,
    ) -> Result<(Record, bool), StorageError> {
        let mut records = self.load()?;
        let existing = records.get(&id);

        if command.is_update() {
            if let Some(existing) = existing {
                if existing.caption == draft.caption {
                    debug!(id, "Caption unchanged, merge skipped");
                    return Ok((existing.clone(), false));
                }
            }
        }

        let record = resolve(existing, id, draft, command);
        records.insert(id, record.clone());
        self.save(&records)?;
        info!(id, command = %command, "Record merged");
        Ok((record, true))
    }
}

/// Flag resolution. Remove is an idempotent set; fav/unfav overwrite the
/// highlight flag; month/year toggle the existing value (first merge under the
/// command sets true); every other flag carries over from the existing record.
fn resolve(existing: Option<&Record>, id: i64, draft: RecordDraft, command: Command) -> Record {
    let is_removed = match command {
        Command::Remove => true,
        _ => existing.map(|e| e.is_removed).unwrap_or(false),
    };
    let is_highlighted = match command {
        Command::Fav => true,
        Command::Unfav => false,
        _ => existing.map(|e| e.is_highlighted).unwrap_or(false),
    };
    let is_month = match existing {
        Some(e) => {
            if command == Command::Month {
                !e.is_month
            } else {
                e.is_month
            }
        }
        None => command == Command::Month,
    };
    let is_year = match existing {
        Some(e) => {
            if command == Command::Year {
                !e.is_year
            } else {
                e.is_year
            }
        }
        None => command == Command::Year,
    };

    Record {
        id,
        title: draft.title,
        caption: draft.caption,
        image: draft.image,
        tags: draft.tags,
        url: draft.url,
        date: draft.date,
        edit_date: draft.edit_date,
        is_month,
        is_year,
        is_highlighted,
        is_removed,
    }
}
