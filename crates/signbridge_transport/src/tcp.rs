//! Persistent TCP connection to the animation consumer.
//!
//! Frames are newline-delimited JSON. The connection is opened lazily on the
//! first send and kept for later sends. Writes into a socket the consumer has
//! closed still succeed locally, so a kept connection is checked for a hang-up
//! before each frame and replaced if the consumer is gone. When a write on a
//! kept connection fails anyway, the connection is reopened once and the frame
//! is written again.

use std::io::{self, Read};
use std::net;
use std::time::Duration;

use signbridge_foundation::{Error, ErrorKind, Result};
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::net::TcpStream;
use tracing::{debug, warn};

use crate::Transport;
use crate::connect::{self, DEFAULT_CONNECT_TIMEOUT};
use crate::message::PlaySequence;

/// One open connection.
///
/// `peer` is a non-blocking duplicate of the socket, read only to notice
/// when the consumer has hung up.
#[derive(Debug)]
struct Connection {
    writer: BufWriter<TcpStream>,
    peer: net::TcpStream,
}

impl Connection {
    fn new(stream: TcpStream) -> io::Result<Self> {
        let stream = stream.into_std()?;
        let peer = stream.try_clone()?;
        Ok(Self {
            writer: BufWriter::new(TcpStream::from_std(stream)?),
            peer,
        })
    }

    /// Returns true once the consumer has closed or reset the connection.
    ///
    /// Anything the consumer sent is discarded.
    fn peer_closed(&self) -> bool {
        let mut buf = [0u8; 256];
        loop {
            match (&self.peer).read(&mut buf) {
                Ok(0) => return true,
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => return false,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(_) => return true,
            }
        }
    }
}

/// Newline-delimited JSON over a persistent TCP connection.
#[derive(Debug)]
pub struct TcpTransport {
    endpoint: String,
    connect_timeout: Duration,
    connection: Option<Connection>,
}

impl TcpTransport {
    /// Creates a transport for the given `host:port`; nothing is opened yet.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            connection: None,
        }
    }

    /// Sets the bound on a single connection attempt.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Returns the consumer address.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the bound on a single connection attempt.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns true if a connection is currently open.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Drops the current connection, if any.
    pub fn disconnect(&mut self) {
        self.connection = None;
    }

    async fn open(&self) -> Result<Connection> {
        let stream = connect::within(
            &self.endpoint,
            self.connect_timeout,
            TcpStream::connect(&self.endpoint),
        )
        .await?;

        // Frames are small and latency matters more than throughput
        stream
            .set_nodelay(true)
            .map_err(|e| Error::transport(format!("failed to configure socket: {e}")))?;
        let connection = Connection::new(stream)
            .map_err(|e| Error::transport(format!("failed to configure socket: {e}")))?;

        debug!(endpoint = %self.endpoint, "connected to consumer");
        Ok(connection)
    }

    /// Drops a kept connection the consumer has already closed.
    fn discard_if_closed(&mut self) {
        if self.connection.as_ref().is_some_and(Connection::peer_closed) {
            debug!(endpoint = %self.endpoint, "consumer closed the connection");
            self.connection = None;
        }
    }

    async fn write_frame(&mut self, frame: &[u8]) -> Result<()> {
        if self.connection.is_none() {
            self.connection = Some(self.open().await?);
        }
        let Some(connection) = self.connection.as_mut() else {
            return Err(Error::new(ErrorKind::Internal(
                "connection missing after open".to_string(),
            )));
        };

        let writer = &mut connection.writer;
        let written = match writer.write_all(frame).await {
            Ok(()) => writer.flush().await,
            Err(e) => Err(e),
        };

        written.map_err(|e| {
            self.connection = None;
            Error::transport(format!("failed to write to {}: {e}", self.endpoint))
        })
    }
}

impl Transport for TcpTransport {
    async fn send(&mut self, message: &PlaySequence) -> Result<()> {
        let frame = message.to_frame()?;
        self.discard_if_closed();
        let reused = self.is_connected();

        match self.write_frame(&frame).await {
            Ok(()) => Ok(()),
            Err(e) if reused && e.is_transport() => {
                warn!(endpoint = %self.endpoint, error = %e, "connection lost, reconnecting");
                self.write_frame(&frame).await
            }
            Err(e) => Err(e),
        }
    }

    fn describe(&self) -> String {
        format!("tcp://{}", self.endpoint)
    }
}
