//! Command mode persistence: the single global mode applied to the next posts.
//!
//! Two stores behind one trait, selected once at startup: in-memory for the
//! long-polling configuration, file-backed when the transport is webhook-driven
//! (the process may be restarted between updates).

use crate::atomic::write_atomic;
use crate::error::StorageError;
use gbot_core::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;

const MODE_FILE: &str = "lastCommand.local";

/// Holds the active [`Command`]. `get` defaults to `update` when no mode was
/// ever set, including after a failed read of the persisted file. No
/// authorization here; callers gate on the admin list before `set`.
pub trait ModeStore: Send + Sync {
    fn get(&self) -> Command;
    fn set(&self, command: Command) -> Result<(), StorageError>;
}

/// Volatile mode store for the long-polling configuration.
#[derive(Default)]
pub struct InMemoryModeStore {
    current: Mutex<Command>,
}

impl InMemoryModeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ModeStore for InMemoryModeStore {
    fn get(&self) -> Command {
        *self.current.lock().unwrap()
    }

    fn set(&self, command: Command) -> Result<(), StorageError> {
        *self.current.lock().unwrap() = command;
        info!(command = %command, "Mode set");
        Ok(())
    }
}

/// File-backed mode store: one token in `lastCommand.local` under the data
/// directory. Survives process restarts.
pub struct FileModeStore {
    path: PathBuf,
}

impl FileModeStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(MODE_FILE),
        }
    }
}

impl ModeStore for FileModeStore {
    fn get(&self) -> Command {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| Command::parse(raw.trim()))
            .unwrap_or_default()
    }

    fn set(&self, command: Command) -> Result<(), StorageError> {
        write_atomic(&self.path, command.as_str().as_bytes())?;
        info!(command = %command, path = %self.path.display(), "Mode persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_in_memory_defaults_to_update() {
        let store = InMemoryModeStore::new();
        assert_eq!(store.get(), Command::Update);
    }

    #[test]
    fn test_in_memory_set_get() {
        let store = InMemoryModeStore::new();
        store.set(Command::Month).unwrap();
        assert_eq!(store.get(), Command::Month);
        store.set(Command::Update).unwrap();
        assert_eq!(store.get(), Command::Update);
    }

    #[test]
    fn test_file_store_defaults_to_update_when_missing() {
        let dir = TempDir::new().unwrap();
        let store = FileModeStore::new(dir.path());
        assert_eq!(store.get(), Command::Update);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = FileModeStore::new(dir.path());
        store.set(Command::Fav).unwrap();
        assert_eq!(store.get(), Command::Fav);

        // A second store over the same directory sees the persisted mode.
        let reopened = FileModeStore::new(dir.path());
        assert_eq!(reopened.get(), Command::Fav);
    }

    #[test]
    fn test_file_store_garbage_falls_back_to_update() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(MODE_FILE), "not-a-command").unwrap();
        let store = FileModeStore::new(dir.path());
        assert_eq!(store.get(), Command::Update);
    }
}
