//! Transport traits for sending notifications and fetching photo bytes.
//!
//! Implementations map to a concrete transport (Telegram in gallery-bot);
//! tests substitute in-memory fakes.

use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Abstraction for the bot's outgoing side: plain sends, replies, deletes.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()>;
    /// Sends a reply to the given message in the given chat.
    async fn reply_to(&self, chat_id: i64, message_id: i64, text: &str) -> Result<()>;
    /// Deletes a message (e.g. the `/getid` utility post).
    async fn delete_message(&self, chat_id: i64, message_id: i64) -> Result<()>;
}

/// Downloads one photo variant into a directory. The stored file name is
/// `stem` plus the extension of the source file, and is returned on success.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, file_id: &str, dir: &Path, stem: &str) -> Result<String>;
}
