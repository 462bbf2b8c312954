//! # gallery-bot
//!
//! Ingests photo posts forwarded from a source channel into the record store
//! and rebuilds the paginated, tag-indexed gallery files on queue drain.
//! Wires gbot-core, storage, and the teloxide transport; loads config from env.

pub mod cli;
pub mod components;
pub mod config;
pub mod deploy;
pub mod messages;
pub mod queue;
pub mod regen;
pub mod runner;
pub mod telegram;
pub mod worker;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_components, make_mode_store, AppComponents};
pub use config::BotConfig;
pub use queue::PostQueue;
pub use regen::{RegenOutcome, RegenerationEngine};
pub use runner::run_bot;
pub use worker::{IngestionWorker, Outcome, Reply};
