//! Ingestion worker: applies one queued job to the record store.
//!
//! Validates the post carries a photo, downloads the best variant, parses the
//! caption, and merges. Nothing is written to the store until the image file
//! name is known, so a failed download leaves the store untouched.

use anyhow::Result;
use gbot_core::{parse_caption, ChannelPost, ImageFetcher, Job};
use std::path::PathBuf;
use std::sync::Arc;
use storage::{RecordDraft, RecordStore};
use tracing::{debug, info, instrument};

/// Where to send the acknowledgement for a private forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub chat_id: i64,
    pub message_id: i64,
}

/// Per-job result reported back to the queue loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Non-photo post; dropped as a no-op, not an error.
    Skipped,
    /// Post merged. `applied` is false for the unchanged-caption skip, which
    /// still counts toward the cycle's updated ids but triggers no reply.
    Merged {
        id: i64,
        applied: bool,
        reply: Option<Reply>,
    },
}

pub struct IngestionWorker {
    store: RecordStore,
    fetcher: Arc<dyn ImageFetcher>,
    images_dir: PathBuf,
}

impl IngestionWorker {
    pub fn new(store: RecordStore, fetcher: Arc<dyn ImageFetcher>, images_dir: PathBuf) -> Self {
        Self {
            store,
            fetcher,
            images_dir,
        }
    }

    /// Processes one job: download, parse, merge. Download and store I/O are
    /// the only suspension points and run strictly within this job.
    #[instrument(skip(self, job), fields(message_id = job.post.message_id))]
    pub async fn process(&self, job: &Job) -> Result<Outcome> {
        let post = &job.post;
        let Some(photo) = post.largest_photo() else {
            info!("Post has no photo, skipping");
            return Ok(Outcome::Skipped);
        };

        let id = post.record_id();
        let caption = post.caption.clone().unwrap_or_default();

        // An update with an unchanged caption will not merge, so the image
        // download is skipped along with the write.
        if job.command.is_update() {
            if let Some(existing) = self.store.load()?.get(&id) {
                if existing.caption == caption {
                    debug!(id, "Caption unchanged, skipping download");
                    return Ok(Outcome::Merged {
                        id,
                        applied: false,
                        reply: reply_for(post),
                    });
                }
            }
        }

        tokio::fs::create_dir_all(&self.images_dir).await?;
        let image = self
            .fetcher
            .fetch(&photo.file_id, &self.images_dir, &id.to_string())
            .await?;

        let parsed = parse_caption(&caption, &post.caption_entities);
        let draft = RecordDraft {
            title: parsed.title,
            caption,
            image,
            tags: parsed.tags,
            url: parsed.url,
            date: post.record_date(),
            edit_date: post.record_edit_date(),
        };

        let (_, applied) = self.store.merge(id, draft, job.command)?;

        Ok(Outcome::Merged {
            id,
            applied,
            reply: reply_for(post),
        })
    }
}

/// A private forward gets its acknowledgement as a reply to the forwarded copy.
fn reply_for(post: &ChannelPost) -> Option<Reply> {
    match (post.from_id, post.forward_from_message_id) {
        (Some(chat_id), Some(_)) => Some(Reply {
            chat_id,
            message_id: post.message_id,
        }),
        _ => None,
    }
}
