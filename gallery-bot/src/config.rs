use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Bot configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub bot_token: String,
    /// Numeric id of the source channel; only its posts are ingested.
    pub channel_id: i64,
    /// Static allow-list of admin user ids.
    pub admin_ids: Vec<i64>,
    pub page_size: usize,
    /// Directory holding `_data.json` and the derived page/tag files.
    pub data_dir: PathBuf,
    /// Directory photos are downloaded into.
    pub images_dir: PathBuf,
    /// Public base path prepended to image file names at regeneration time.
    pub images_slug: String,
    /// Deploy command template; `%s` is replaced with the commit message.
    pub run_command: String,
    /// Presence switches mode persistence to the file-backed store.
    pub webhook_url: Option<String>,
    pub log_file: String,
}

impl BotConfig {
    /// Loads configuration from environment variables.
    /// If `token` is given it overrides `BOT_TOKEN`.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let channel_id = env::var("CHANNEL_ID")
            .context("CHANNEL_ID not set")?
            .parse()
            .context("CHANNEL_ID is not a number")?;
        let admin_ids = env::var("ADMIN_IDS")
            .context("ADMIN_IDS not set")?
            .split(',')
            .map(|id| id.trim().parse().context("ADMIN_IDS entry is not a number"))
            .collect::<Result<Vec<i64>>>()?;
        let page_size = env::var("PAGE_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(50);
        let data_dir = PathBuf::from(env::var("DATA_FOLDER").unwrap_or_else(|_| "./data".to_string()));
        let images_dir =
            PathBuf::from(env::var("IMAGES_FOLDER").unwrap_or_else(|_| "./images".to_string()));
        let images_slug = env::var("IMAGES_SLUG").unwrap_or_else(|_| "/images/".to_string());
        let run_command = env::var("RUN_COMMAND").context("RUN_COMMAND not set")?;
        let webhook_url = env::var("WEBHOOK_URL").ok().filter(|s| !s.is_empty());
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/gallery-bot.log".to_string());

        Ok(Self {
            bot_token,
            channel_id,
            admin_ids,
            page_size,
            data_dir,
            images_dir,
            images_slug,
            run_command,
            webhook_url,
            log_file,
        })
    }

    /// Rejects configurations the bot cannot run with.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(!self.bot_token.is_empty(), "bot token is empty");
        anyhow::ensure!(!self.admin_ids.is_empty(), "admin id list is empty");
        anyhow::ensure!(self.page_size > 0, "page size must be positive");
        anyhow::ensure!(
            self.run_command.contains("%s"),
            "RUN_COMMAND has no %s placeholder"
        );
        Ok(())
    }

    pub fn is_admin(&self, user_id: i64) -> bool {
        self.admin_ids.contains(&user_id)
    }
}
