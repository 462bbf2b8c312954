//! Main entry: init logging, validate config, build components, run the dispatcher.

use crate::components::build_components;
use crate::config::BotConfig;
use crate::telegram::{run_dispatcher, AppContext, TelegramImageFetcher, TelegramNotifier};
use anyhow::Result;
use gbot_core::{init_tracing, ImageFetcher, Notifier};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    if let Some(dir) = Path::new(&config.log_file).parent() {
        std::fs::create_dir_all(dir)?;
    }
    init_tracing(&config.log_file)?;

    info!(
        channel_id = config.channel_id,
        data_dir = %config.data_dir.display(),
        page_size = config.page_size,
        persisted_mode = config.webhook_url.is_some(),
        "Initializing bot"
    );

    let bot = teloxide::Bot::new(&config.bot_token);
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(bot.clone()));
    let fetcher: Arc<dyn ImageFetcher> = Arc::new(TelegramImageFetcher::new(bot.clone()));

    let components = build_components(&config, notifier.clone(), fetcher);
    let ctx = Arc::new(AppContext {
        config,
        mode: components.mode.clone(),
        queue: components.queue.clone(),
        notifier,
    });

    info!("Bot started successfully");
    run_dispatcher(bot, ctx).await
}
