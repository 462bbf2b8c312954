//! # gbot-core
//!
//! Core types and traits for the channel gallery bot: [`ChannelPost`], [`Command`], the
//! caption parser, tag slugification, the [`Notifier`] / [`ImageFetcher`] transport traits,
//! and tracing initialization. Transport-agnostic; used by storage and gallery-bot.

pub mod caption;
pub mod command;
pub mod error;
pub mod logger;
pub mod slug;
pub mod transport;
pub mod types;

pub use caption::{parse_caption, ParsedCaption};
pub use command::Command;
pub use error::{GbotError, Result};
pub use logger::init_tracing;
pub use slug::slugify;
pub use transport::{ImageFetcher, Notifier};
pub use types::{CaptionEntity, ChannelPost, EntityKind, Job, PhotoVariant, ToChannelPost};
