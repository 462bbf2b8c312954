//! Core types: channel post, caption entities, photo variants, and the queued job.

use crate::command::Command;
use serde::{Deserialize, Serialize};

/// Entity classification inside a caption. Anything that is neither a hashtag
/// nor a url is carried as [`EntityKind::Other`] and ignored by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Hashtag,
    Url,
    Other,
}

/// One entity span inside a caption. `offset` and `length` are UTF-16 code
/// units, the Telegram wire convention. Overlapping entities are not supported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionEntity {
    pub kind: EntityKind,
    pub offset: usize,
    pub length: usize,
}

/// One resolution variant of a post's photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoVariant {
    pub file_id: String,
    pub width: u32,
    pub height: u32,
}

/// A photo post as delivered by the transport, either a channel post (new or
/// edited) or a private forward of one. Timestamps are unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelPost {
    pub message_id: i64,
    pub chat_id: i64,
    /// Sender of a private forward; `None` for posts seen directly in the channel.
    pub from_id: Option<i64>,
    /// Original channel message id when the post arrived as a forward.
    pub forward_from_message_id: Option<i64>,
    /// Date of the original message when the post arrived as a forward.
    pub forward_date: Option<i64>,
    pub date: i64,
    pub edit_date: Option<i64>,
    pub caption: Option<String>,
    pub caption_entities: Vec<CaptionEntity>,
    pub photo: Vec<PhotoVariant>,
}

impl ChannelPost {
    /// Stable record identity: the forwarded-from message id when the post
    /// originated as a forward, else the message id itself.
    pub fn record_id(&self) -> i64 {
        self.forward_from_message_id.unwrap_or(self.message_id)
    }

    /// Record date: the original message date for forwards, else the post date.
    pub fn record_date(&self) -> i64 {
        self.forward_date.unwrap_or(self.date)
    }

    /// Record edit date: for forwards the forward receipt time, else the edit
    /// timestamp of the channel post (0 when never edited).
    pub fn record_edit_date(&self) -> i64 {
        if self.forward_from_message_id.is_some() {
            self.date
        } else {
            self.edit_date.unwrap_or(0)
        }
    }

    /// Highest-resolution photo variant, or `None` for non-photo posts.
    pub fn largest_photo(&self) -> Option<&PhotoVariant> {
        self.photo
            .iter()
            .max_by_key(|p| u64::from(p.width) * u64::from(p.height))
    }
}

/// One queued unit of work: a post paired with the command mode active at
/// submission time. Immutable once created, consumed exactly once.
#[derive(Debug, Clone)]
pub struct Job {
    pub post: ChannelPost,
    pub command: Command,
}

/// Converts a transport-specific message type to a core [`ChannelPost`].
pub trait ToChannelPost: Send + Sync {
    fn to_post(&self) -> ChannelPost;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> ChannelPost {
        ChannelPost {
            message_id: 42,
            chat_id: -100,
            from_id: None,
            forward_from_message_id: None,
            forward_date: None,
            date: 1_600_000_000,
            edit_date: None,
            caption: None,
            caption_entities: Vec::new(),
            photo: Vec::new(),
        }
    }

    #[test]
    fn test_record_identity_prefers_forward_origin() {
        let mut p = post();
        assert_eq!(p.record_id(), 42);
        p.forward_from_message_id = Some(10);
        assert_eq!(p.record_id(), 10);
    }

    #[test]
    fn test_record_dates_for_forwards() {
        let mut p = post();
        p.forward_from_message_id = Some(10);
        p.forward_date = Some(1_500_000_000);
        assert_eq!(p.record_date(), 1_500_000_000);
        // For forwards the post date is when the forward was received.
        assert_eq!(p.record_edit_date(), 1_600_000_000);
    }

    #[test]
    fn test_record_dates_for_direct_posts() {
        let mut p = post();
        assert_eq!(p.record_date(), 1_600_000_000);
        assert_eq!(p.record_edit_date(), 0);
        p.edit_date = Some(1_600_000_100);
        assert_eq!(p.record_edit_date(), 1_600_000_100);
    }

    #[test]
    fn test_largest_photo_by_area() {
        let mut p = post();
        assert!(p.largest_photo().is_none());
        p.photo = vec![
            PhotoVariant { file_id: "small".into(), width: 90, height: 60 },
            PhotoVariant { file_id: "big".into(), width: 1280, height: 853 },
            PhotoVariant { file_id: "mid".into(), width: 320, height: 213 },
        ];
        assert_eq!(p.largest_photo().unwrap().file_id, "big");
    }
}
