//! Shared test fakes: in-memory notifier, file-touching fetcher, post builders.

#![allow(dead_code)]

use async_trait::async_trait;
use gbot_core::{
    CaptionEntity, ChannelPost, EntityKind, GbotError, ImageFetcher, Notifier, PhotoVariant,
};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Records every outgoing message instead of talking to Telegram.
#[derive(Default)]
pub struct MockNotifier {
    pub sent: Mutex<Vec<(i64, String)>>,
    pub replies: Mutex<Vec<(i64, i64, String)>>,
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send_message(&self, chat_id: i64, text: &str) -> gbot_core::Result<()> {
        self.sent.lock().unwrap().push((chat_id, text.to_string()));
        Ok(())
    }

    async fn reply_to(&self, chat_id: i64, message_id: i64, text: &str) -> gbot_core::Result<()> {
        self.replies
            .lock()
            .unwrap()
            .push((chat_id, message_id, text.to_string()));
        Ok(())
    }

    async fn delete_message(&self, _chat_id: i64, _message_id: i64) -> gbot_core::Result<()> {
        Ok(())
    }
}

/// Writes a stub file and reports a `.jpg` name, like a successful download.
/// Counts its calls so tests can assert a download did (not) happen.
#[derive(Default)]
pub struct MockFetcher {
    calls: AtomicUsize,
}

impl MockFetcher {
    pub fn fetch_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageFetcher for MockFetcher {
    async fn fetch(&self, _file_id: &str, dir: &Path, stem: &str) -> gbot_core::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let name = format!("{stem}.jpg");
        std::fs::write(dir.join(&name), b"jpeg-bytes")?;
        Ok(name)
    }
}

/// Always fails, standing in for a network error mid-download.
pub struct FailingFetcher;

#[async_trait]
impl ImageFetcher for FailingFetcher {
    async fn fetch(&self, _file_id: &str, _dir: &Path, _stem: &str) -> gbot_core::Result<String> {
        Err(GbotError::Fetch("connection reset".to_string()))
    }
}

/// A photo post forwarded privately from the channel.
pub fn forwarded_post(original_id: i64, caption: &str) -> ChannelPost {
    ChannelPost {
        message_id: 500 + original_id,
        chat_id: 77,
        from_id: Some(77),
        forward_from_message_id: Some(original_id),
        forward_date: Some(1_600_000_000),
        date: 1_600_050_000,
        edit_date: None,
        caption: (!caption.is_empty()).then(|| caption.to_string()),
        caption_entities: entities_for(caption),
        photo: vec![
            PhotoVariant { file_id: "thumb".into(), width: 90, height: 60 },
            PhotoVariant { file_id: "full".into(), width: 1280, height: 853 },
        ],
    }
}

/// Derives hashtag/url entity spans the way Telegram would mark them up.
pub fn entities_for(caption: &str) -> Vec<CaptionEntity> {
    let mut entities = Vec::new();
    let mut offset = 0;
    // Captions in these tests are space-separated; words keep their UTF-16 width.
    for word in caption.split(' ') {
        let length = word.encode_utf16().count();
        if word.starts_with('#') {
            entities.push(CaptionEntity { kind: EntityKind::Hashtag, offset, length });
        } else if word.starts_with("http") {
            entities.push(CaptionEntity { kind: EntityKind::Url, offset, length });
        }
        offset += length + 1;
    }
    entities
}
