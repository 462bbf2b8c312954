//! CLI surface for the gallery-bot binary.

use crate::config::BotConfig;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gallery-bot", about = "Telegram channel to static gallery publisher")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Runs the bot.
    Run {
        /// Bot token; overrides the BOT_TOKEN environment variable.
        #[arg(long)]
        token: Option<String>,
    },
}

/// Loads the bot configuration, with an optional token override.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}
