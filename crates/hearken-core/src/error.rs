use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Message errors
    #[error("Invalid message payload: {0}")]
    InvalidPayload(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    // Bus errors
    #[error("Bus unavailable: {0}")]
    BusUnavailable(String),

    #[error("Not subscribed to topic: {0}")]
    NotSubscribed(String),

    // Adapter errors
    #[error("Adapter already destroyed")]
    AdapterDestroyed,

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
