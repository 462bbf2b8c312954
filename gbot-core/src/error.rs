use thiserror::Error;

#[derive(Error, Debug)]
pub enum GbotError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GbotError>;
