//! Print bridge adapters
//!
//! A bridge is the host integration point that forwards a finished document
//! to the hardware. Supports:
//! - Network printers (raw TCP, port 9100)

use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{debug, instrument};

use crate::error::{PrintError, PrintResult};
use crate::escpos::Document;

/// Logical channel every document is sent over
pub const USB_CHANNEL: &str = "USB";

/// Host print bridge
///
/// `send_to_printer(channel, secondary, payload)` hands the payload over
/// unchanged. Callers treat it as fire-and-forget: the returned future only
/// reports transport completion, not a printed page.
#[async_trait]
pub trait PrintBridge: Send + Sync {
    async fn send_to_printer(
        &self,
        channel: &str,
        secondary: &str,
        payload: &Document,
    ) -> PrintResult<()>;
}

/// Connect timeout for [`NetworkBridge`]
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Bridge that writes each payload to a raw TCP printer socket, usually
/// port 9100. One connection per send.
#[derive(Debug, Clone)]
pub struct NetworkBridge {
    addr: SocketAddr,
}

impl NetworkBridge {
    /// Parse a socket address such as "192.168.1.100:9100"
    pub fn from_addr(addr: &str) -> PrintResult<Self> {
        let addr = addr
            .parse()
            .map_err(|_| PrintError::InvalidAddress(addr.to_string()))?;
        Ok(Self { addr })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

#[async_trait]
impl PrintBridge for NetworkBridge {
    #[instrument(skip(self, payload), fields(addr = %self.addr, bytes = payload.len()))]
    async fn send_to_printer(
        &self,
        channel: &str,
        secondary: &str,
        payload: &Document,
    ) -> PrintResult<()> {
        let mut stream = tokio::time::timeout(CONNECT_TIMEOUT, TcpStream::connect(self.addr))
            .await
            .map_err(|_| PrintError::Timeout(self.addr))?
            .map_err(|e| PrintError::Connection(format!("{}: {}", self.addr, e)))?;

        stream.write_all(payload.as_bytes()).await?;
        stream.flush().await?;

        debug!("Payload written");
        Ok(())
    }
}
