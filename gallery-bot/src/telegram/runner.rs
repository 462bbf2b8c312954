//! Update dispatcher: admin commands, private forwards, channel posts.
//!
//! Thin teloxide glue; everything observable happens through the core traits
//! and the queue so the pipeline stays testable without Telegram.

use crate::config::BotConfig;
use crate::messages;
use crate::queue::PostQueue;
use anyhow::Result;
use gbot_core::{Command, Job, Notifier, ToChannelPost};
use std::sync::Arc;
use storage::ModeStore;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{debug, info};

use super::adapters::TelegramPostWrapper;

/// Everything an update handler needs, injected through dptree.
pub struct AppContext {
    pub config: BotConfig,
    pub mode: Arc<dyn ModeStore>,
    pub queue: PostQueue,
    pub notifier: Arc<dyn Notifier>,
}

/// Textual commands with the alias families of the original bot.
#[derive(BotCommands, Clone, Copy, Debug)]
#[command(rename_rule = "lowercase")]
pub enum BotCmd {
    Start,
    Help,
    Myid,
    #[command(aliases = ["u", "upd"])]
    Update,
    #[command(aliases = ["d", "rm"])]
    Delete,
    #[command(alias = "f")]
    Fav,
    #[command(alias = "uf")]
    Unfav,
    #[command(alias = "m")]
    Month,
    #[command(alias = "y")]
    Year,
}

impl BotCmd {
    /// The command mode this token selects, if it is a mode command.
    fn mode(self) -> Option<Command> {
        match self {
            BotCmd::Update => Some(Command::Update),
            BotCmd::Delete => Some(Command::Remove),
            BotCmd::Fav => Some(Command::Fav),
            BotCmd::Unfav => Some(Command::Unfav),
            BotCmd::Month => Some(Command::Month),
            BotCmd::Year => Some(Command::Year),
            _ => None,
        }
    }
}

/// Runs the long-polling dispatcher until shutdown.
pub async fn run_dispatcher(bot: teloxide::Bot, ctx: Arc<AppContext>) -> Result<()> {
    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<BotCmd>()
                .endpoint(handle_command),
        )
        .branch(Update::filter_message().endpoint(handle_private_message))
        .branch(Update::filter_channel_post().endpoint(handle_channel_post))
        .branch(Update::filter_edited_channel_post().endpoint(handle_channel_post));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![ctx])
        .default_handler(|update| async move {
            debug!(update_id = update.id.0, "Unhandled update kind");
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn handle_command(msg: Message, cmd: BotCmd, ctx: Arc<AppContext>) -> Result<()> {
    let chat_id = msg.chat.id.0;
    let from_id = msg.from.as_ref().map(|u| u.id.0 as i64);

    match cmd {
        BotCmd::Start => ctx.notifier.send_message(chat_id, messages::welcome()).await?,
        BotCmd::Help => ctx.notifier.send_message(chat_id, messages::help()).await?,
        BotCmd::Myid => {
            if let Some(id) = from_id {
                ctx.notifier.send_message(chat_id, &messages::my_id(id)).await?;
            }
        }
        mode_cmd => {
            let Some(command) = mode_cmd.mode() else {
                return Ok(());
            };
            match from_id {
                Some(id) if ctx.config.is_admin(id) => {
                    ctx.mode.set(command)?;
                    info!(command = %command, admin = id, "Command mode set");
                }
                _ => ctx.notifier.send_message(chat_id, messages::deny()).await?,
            }
        }
    }
    Ok(())
}

/// Private messages: an admin forwarding a post from the configured channel
/// gets it enqueued under the active mode; everything else is denied.
async fn handle_private_message(msg: Message, ctx: Arc<AppContext>) -> Result<()> {
    let from_id = msg.from.as_ref().map(|u| u.id.0 as i64);
    let post = TelegramPostWrapper(&msg).to_post();
    let from_channel = post.forward_from_message_id.is_some()
        && forwarded_chat_id(&msg) == Some(ctx.config.channel_id);

    match from_id {
        Some(id) if ctx.config.is_admin(id) && from_channel => {
            let command = ctx.mode.get();
            info!(
                message_id = post.message_id,
                record_id = post.record_id(),
                command = %command,
                "Forwarded post enqueued"
            );
            ctx.queue.enqueue(Job { post, command });
        }
        _ => {
            ctx.notifier
                .send_message(msg.chat.id.0, messages::deny())
                .await?;
        }
    }
    Ok(())
}

/// Channel posts (new or edited): photo posts from the configured channel are
/// enqueued as plain updates. `/getid` reports the chat id to every admin and
/// removes itself.
async fn handle_channel_post(msg: Message, ctx: Arc<AppContext>) -> Result<()> {
    let chat_id = msg.chat.id.0;

    if chat_id == ctx.config.channel_id && msg.photo().is_some() {
        let post = TelegramPostWrapper(&msg).to_post();
        info!(message_id = post.message_id, "Channel post enqueued");
        // Edits in the channel are always plain updates.
        ctx.queue.enqueue(Job {
            post,
            command: Command::Update,
        });
    }

    if msg.text() == Some("/getid") {
        for admin in &ctx.config.admin_ids {
            ctx.notifier
                .send_message(*admin, &messages::channel_id(chat_id))
                .await?;
        }
        ctx.notifier
            .delete_message(chat_id, i64::from(msg.id.0))
            .await?;
    }
    Ok(())
}

fn forwarded_chat_id(msg: &Message) -> Option<i64> {
    match msg.forward_origin() {
        Some(teloxide::types::MessageOrigin::Channel { chat, .. }) => Some(chat.id.0),
        _ => None,
    }
}
