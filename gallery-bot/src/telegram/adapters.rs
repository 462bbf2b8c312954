//! Adapters from Telegram (teloxide) types to gbot_core types.
//! Depends only on teloxide and the core type definitions.

use gbot_core::{CaptionEntity, ChannelPost, EntityKind, PhotoVariant, ToChannelPost};
use teloxide::types::{MessageEntity, MessageEntityKind, MessageOrigin, PhotoSize};

/// Wraps a teloxide Message for conversion to a core [`ChannelPost`].
pub struct TelegramPostWrapper<'a>(pub &'a teloxide::types::Message);

impl ToChannelPost for TelegramPostWrapper<'_> {
    fn to_post(&self) -> ChannelPost {
        let msg = self.0;

        // Only channel origins carry the original message id; other forward
        // kinds keep the forward date but fall back to the local message id.
        let (forward_from_message_id, forward_date) = match msg.forward_origin() {
            Some(MessageOrigin::Channel {
                message_id, date, ..
            }) => (Some(i64::from(message_id.0)), Some(date.timestamp())),
            Some(MessageOrigin::User { date, .. })
            | Some(MessageOrigin::HiddenUser { date, .. })
            | Some(MessageOrigin::Chat { date, .. }) => (None, Some(date.timestamp())),
            None => (None, None),
        };

        ChannelPost {
            message_id: i64::from(msg.id.0),
            chat_id: msg.chat.id.0,
            from_id: msg.from.as_ref().map(|u| u.id.0 as i64),
            forward_from_message_id,
            forward_date,
            date: msg.date.timestamp(),
            edit_date: msg.edit_date().map(|d| d.timestamp()),
            caption: msg.caption().map(str::to_owned),
            caption_entities: msg
                .caption_entities()
                .map(|entities| entities.iter().map(to_entity).collect())
                .unwrap_or_default(),
            photo: msg
                .photo()
                .map(|sizes| sizes.iter().map(to_variant).collect())
                .unwrap_or_default(),
        }
    }
}

fn to_entity(entity: &MessageEntity) -> CaptionEntity {
    let kind = match entity.kind {
        MessageEntityKind::Hashtag => EntityKind::Hashtag,
        MessageEntityKind::Url => EntityKind::Url,
        _ => EntityKind::Other,
    };
    CaptionEntity {
        kind,
        offset: entity.offset,
        length: entity.length,
    }
}

fn to_variant(photo: &PhotoSize) -> PhotoVariant {
    PhotoVariant {
        file_id: photo.file.id.0.clone(),
        width: photo.width,
        height: photo.height,
    }
}
