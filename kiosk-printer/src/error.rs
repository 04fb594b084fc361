use std::net::SocketAddr;

use thiserror::Error;

/// Failure handing a document to a print bridge
#[derive(Debug, Error)]
pub enum PrintError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Connect to {0} timed out")]
    Timeout(SocketAddr),

    #[error("Write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid printer address: {0}")]
    InvalidAddress(String),
}

pub type PrintResult<T> = Result<T, PrintError>;
