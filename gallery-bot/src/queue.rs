//! Sequential post queue: FIFO, one job in flight, drain triggers regeneration.
//!
//! A single consumer task owns the record store access, so merge + save run as
//! one logical unit per job and regeneration never overlaps a merge. The
//! "updated this cycle" ids live in the loop and are handed to the engine by
//! value on each drain, then start empty for the next cycle.

use crate::messages;
use crate::regen::RegenerationEngine;
use crate::worker::{IngestionWorker, Outcome};
use gbot_core::{Command, Job, Notifier};
use std::sync::Arc;
use storage::ModeStore;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Handle for submitting jobs. Cloneable; the consumer side lives in the task
/// returned by [`PostQueue::spawn`].
#[derive(Clone)]
pub struct PostQueue {
    tx: mpsc::UnboundedSender<Job>,
}

impl PostQueue {
    /// Spawns the consumer loop and returns the submission handle.
    pub fn spawn(
        worker: IngestionWorker,
        engine: RegenerationEngine,
        mode: Arc<dyn ModeStore>,
        notifier: Arc<dyn Notifier>,
    ) -> (Self, JoinHandle<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(consume(rx, worker, engine, mode, notifier));
        (Self { tx }, handle)
    }

    /// Enqueues a job in FIFO order. The command captured in the job is the
    /// mode at enqueue time; later mode changes never affect it.
    pub fn enqueue(&self, job: Job) {
        if self.tx.send(job).is_err() {
            error!("Post queue is gone, job dropped");
        }
    }
}

async fn consume(
    mut rx: mpsc::UnboundedReceiver<Job>,
    worker: IngestionWorker,
    engine: RegenerationEngine,
    mode: Arc<dyn ModeStore>,
    notifier: Arc<dyn Notifier>,
) {
    let mut updated: Vec<i64> = Vec::new();

    while let Some(job) = rx.recv().await {
        match worker.process(&job).await {
            Ok(Outcome::Skipped) => {}
            Ok(Outcome::Merged { id, applied, reply }) => {
                // Idempotent skips still count toward the deploy summary; only
                // an actual write is acknowledged to the forwarding user.
                updated.push(id);
                if applied {
                    if let Some(reply) = reply {
                        if let Err(e) = notifier
                            .reply_to(reply.chat_id, reply.message_id, &messages::post_updated(id))
                            .await
                        {
                            warn!(error = %e, id, "Failed to acknowledge post update");
                        }
                    }
                }
            }
            Err(e) => {
                error!(error = %e, message_id = job.post.message_id, "Job failed");
            }
        }

        // Backlog drained: reset the mode, rebuild the derived files. Running
        // inside the consumer keeps regeneration serialized with merges and
        // with itself.
        if rx.is_empty() {
            if let Err(e) = mode.set(Command::Update) {
                warn!(error = %e, "Failed to reset command mode");
            }
            let batch = std::mem::take(&mut updated);
            info!(updated = batch.len(), "Queue drained, regenerating");
            if let Err(e) = engine.regenerate(&batch).await {
                error!(error = %e, "Regeneration failed");
            }
        }
    }
}
