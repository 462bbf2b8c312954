//! Telegram glue: teloxide adapters, the transport trait implementations, and
//! the update dispatcher.

pub mod adapters;
pub mod runner;
pub mod transport;

pub use adapters::TelegramPostWrapper;
pub use runner::{run_dispatcher, AppContext, BotCmd};
pub use transport::{TelegramImageFetcher, TelegramNotifier};
