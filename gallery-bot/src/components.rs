//! Component assembly: store, mode store, worker, engine, queue.
//!
//! Built from config plus the transport trait objects, so integration tests
//! can assemble the full pipeline with fakes and no Telegram credentials.

use crate::config::BotConfig;
use crate::queue::PostQueue;
use crate::regen::RegenerationEngine;
use crate::worker::IngestionWorker;
use gbot_core::{ImageFetcher, Notifier};
use std::sync::Arc;
use storage::{FileModeStore, InMemoryModeStore, ModeStore, RecordStore};
use tokio::task::JoinHandle;

pub struct AppComponents {
    pub queue: PostQueue,
    pub mode: Arc<dyn ModeStore>,
    pub queue_task: JoinHandle<()>,
}

/// Mode persistence strategy: file-backed in the webhook configuration (the
/// process may restart between updates), in-memory otherwise.
pub fn make_mode_store(config: &BotConfig) -> Arc<dyn ModeStore> {
    if config.webhook_url.is_some() {
        Arc::new(FileModeStore::new(&config.data_dir))
    } else {
        Arc::new(InMemoryModeStore::new())
    }
}

/// Wires the ingestion pipeline and spawns its consumer task.
pub fn build_components(
    config: &BotConfig,
    notifier: Arc<dyn Notifier>,
    fetcher: Arc<dyn ImageFetcher>,
) -> AppComponents {
    let mode = make_mode_store(config);

    let worker = IngestionWorker::new(
        RecordStore::new(&config.data_dir),
        fetcher,
        config.images_dir.clone(),
    );
    let engine = RegenerationEngine::new(
        RecordStore::new(&config.data_dir),
        config.data_dir.clone(),
        config.images_slug.clone(),
        config.page_size,
        config.run_command.clone(),
    );

    let (queue, queue_task) = PostQueue::spawn(worker, engine, mode.clone(), notifier);

    AppComponents {
        queue,
        mode,
        queue_task,
    }
}
