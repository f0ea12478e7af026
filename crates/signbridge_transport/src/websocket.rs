//! WebSocket connection to the animation consumer.
//!
//! Each [`PlaySequence`] goes out as one text message holding its JSON. Like
//! the TCP transport, the connection is opened lazily and kept; a close from
//! the consumer is picked up before the next message so that message goes out
//! on a fresh connection.

use std::time::Duration;

use futures_util::{FutureExt, SinkExt, StreamExt};
use signbridge_foundation::{Error, ErrorKind, Result};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::{debug, trace, warn};

use crate::Transport;
use crate::connect::{self, DEFAULT_CONNECT_TIMEOUT};
use crate::message::PlaySequence;

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Text messages over a persistent WebSocket.
#[derive(Debug)]
pub struct WebSocketTransport {
    url: String,
    connect_timeout: Duration,
    socket: Option<Socket>,
}

impl WebSocketTransport {
    /// Creates a transport for a `ws://` URL; nothing is opened yet.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            socket: None,
        }
    }

    /// Sets the bound on a single connection attempt, handshake included.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Returns the consumer URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the bound on a single connection attempt.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns true if a connection is currently open.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.socket.is_some()
    }

    /// Drops the current connection, if any.
    pub fn disconnect(&mut self) {
        self.socket = None;
    }

    async fn open(&self) -> Result<Socket> {
        let handshake =
            tokio_tungstenite::connect_async_with_config(self.url.as_str(), None, true);
        let (socket, _) = connect::within(&self.url, self.connect_timeout, handshake).await?;
        debug!(url = %self.url, "connected to consumer");
        Ok(socket)
    }

    /// Reads whatever the consumer has sent without waiting, and drops the
    /// connection if that includes a close or the end of the stream.
    async fn discard_if_closed(&mut self) {
        let Some(socket) = self.socket.as_mut() else {
            return;
        };

        // Let the reactor observe pending socket events first
        tokio::task::yield_now().await;

        let closed = loop {
            match socket.next().now_or_never() {
                None => break false,
                Some(Some(Ok(Message::Close(frame)))) => {
                    debug!(url = %self.url, ?frame, "consumer closed the connection");
                    break true;
                }
                Some(Some(Ok(message))) => trace!(?message, "ignoring consumer message"),
                Some(Some(Err(e))) => {
                    debug!(url = %self.url, error = %e, "connection dropped");
                    break true;
                }
                Some(None) => break true,
            }
        };
        if closed {
            self.socket = None;
        }
    }

    async fn write_text(&mut self, text: &str) -> Result<()> {
        if self.socket.is_none() {
            self.socket = Some(self.open().await?);
        }
        let Some(socket) = self.socket.as_mut() else {
            return Err(Error::new(ErrorKind::Internal(
                "connection missing after open".to_string(),
            )));
        };

        socket
            .send(Message::Text(text.to_owned().into()))
            .await
            .map_err(|e| {
                self.socket = None;
                Error::transport(format!("failed to write to {}: {e}", self.url))
            })
    }
}

impl Transport for WebSocketTransport {
    async fn send(&mut self, message: &PlaySequence) -> Result<()> {
        let text = message.to_json()?;
        self.discard_if_closed().await;
        let reused = self.is_connected();

        match self.write_text(&text).await {
            Ok(()) => Ok(()),
            Err(e) if reused && e.is_transport() => {
                warn!(url = %self.url, error = %e, "connection lost, reconnecting");
                self.write_text(&text).await
            }
            Err(e) => Err(e),
        }
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
