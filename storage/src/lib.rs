//! Storage crate: the durable record store and command mode persistence.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – Record, RecordDraft
//! - [`record_store`] – RecordStore (JSON file keyed by post id)
//! - [`mode_store`] – ModeStore trait, in-memory and file-backed stores
//! - [`atomic`] – atomic whole-file replacement

mod atomic;
mod error;
mod mode_store;
mod models;
mod record_store;


pub use atomic::write_atomic;
pub use error::StorageError;
pub use mode_store::{FileModeStore, InMemoryModeStore, ModeStore};
pub use models::{Record, RecordDraft};
pub use record_store::RecordStore;
