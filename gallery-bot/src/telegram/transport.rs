//! Teloxide-backed implementations of the core transport traits.

use async_trait::async_trait;
use gbot_core::{GbotError, ImageFetcher, Notifier, Result};
use std::path::Path;
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{ChatId, FileId, MessageId, ReplyParameters};
use tokio::io::AsyncWriteExt;

/// Sends, replies, and deletes via the Telegram Bot API.
pub struct TelegramNotifier {
    bot: teloxide::Bot,
}

impl TelegramNotifier {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat_id), text)
            .await
            .map_err(|e| GbotError::Transport(e.to_string()))?;
        Ok(())
    }

    async fn reply_to(&self, chat_id: i64, message_id: i64, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat_id), text)
            .reply_parameters(ReplyParameters::new(MessageId(message_id as i32)))
            .await
            .map_err(|e| GbotError::Transport(e.to_string()))?;
        Ok(())
    }

    async fn delete_message(&self, chat_id: i64, message_id: i64) -> Result<()> {
        self.bot
            .delete_message(ChatId(chat_id), MessageId(message_id as i32))
            .await
            .map_err(|e| GbotError::Transport(e.to_string()))?;
        Ok(())
    }
}

/// Downloads photo files through the Bot API file endpoint. The stored name is
/// the record id plus the extension Telegram reports for the file.
pub struct TelegramImageFetcher {
    bot: teloxide::Bot,
}

impl TelegramImageFetcher {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ImageFetcher for TelegramImageFetcher {
    async fn fetch(&self, file_id: &str, dir: &Path, stem: &str) -> Result<String> {
        let file = self
            .bot
            .get_file(FileId(file_id.to_owned()))
            .await
            .map_err(|e| GbotError::Fetch(e.to_string()))?;

        let ext = Path::new(&file.path)
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let name = format!("{stem}{ext}");

        let mut out = tokio::fs::File::create(dir.join(&name)).await?;
        self.bot
            .download_file(&file.path, &mut out)
            .await
            .map_err(|e| GbotError::Fetch(e.to_string()))?;
        out.flush().await?;

        Ok(name)
    }
}
