//! Application error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("client error: {0}")]
    Client(#[from] userlist_lib::error::Error),

    #[error("logging error: {0}")]
    Logging(#[from] log::SetLoggerError),

    #[error("no log file location; pass --log-file")]
    NoLogLocation,
}
