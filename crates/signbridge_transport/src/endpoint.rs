//! Choosing a transport from a configured endpoint.
//!
//! `ws://host:port[/path]` selects [`WebSocketTransport`]; `tcp://host:port`
//! and a bare `host:port` select [`TcpTransport`].

use std::time::Duration;

use signbridge_foundation::{Error, Result};

use crate::Transport;
use crate::message::PlaySequence;
use crate::tcp::TcpTransport;
use crate::websocket::WebSocketTransport;

/// Default consumer endpoint.
pub const DEFAULT_ENDPOINT: &str = "ws://127.0.0.1:9000";

/// A parsed consumer endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// Full `ws://` URL.
    WebSocket(String),
    /// `host:port` for newline-delimited JSON.
    Tcp(String),
}

impl Endpoint {
    /// Parses and checks an endpoint string.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unsupported scheme, a missing or
    /// empty host, or a bad port.
    pub fn parse(text: &str) -> Result<Self> {
        if let Some(rest) = text.strip_prefix("ws://") {
            let authority = rest.split_once('/').map_or(rest, |(authority, _)| authority);
            check_authority(text, authority, false)?;
            return Ok(Self::WebSocket(text.to_string()));
        }
        if text.starts_with("wss://") {
            return Err(Error::config(format!(
                "endpoint '{text}' needs TLS, which is not supported"
            )));
        }

        let address = text.strip_prefix("tcp://").unwrap_or(text);
        if address.contains("://") {
            return Err(Error::config(format!(
                "endpoint '{text}' has an unsupported scheme"
            )));
        }
        check_authority(text, address, true)?;
        Ok(Self::Tcp(address.to_string()))
    }
}

fn check_authority(endpoint: &str, authority: &str, port_required: bool) -> Result<()> {
    let host = match authority.rsplit_once(':') {
        Some((host, port)) => {
            if port.parse::<u16>().is_err() {
                return Err(Error::config(format!(
                    "endpoint '{endpoint}' has an invalid port"
                )));
            }
            host
        }
        None if port_required => {
            return Err(Error::config(format!(
                "endpoint '{endpoint}' must be host:port"
            )));
        }
        None => authority,
    };
    if host.is_empty() {
        return Err(Error::config(format!(
            "endpoint '{endpoint}' has an empty host"
        )));
    }
    Ok(())
}

/// Transport to a configured consumer, WebSocket or TCP.
#[derive(Debug)]
pub enum ConsumerTransport {
    /// Text messages over a WebSocket.
    WebSocket(WebSocketTransport),
    /// Newline-delimited JSON over TCP.
    Tcp(TcpTransport),
}

impl ConsumerTransport {
    /// Builds the transport an endpoint string selects; nothing is opened yet.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the endpoint does not parse.
    pub fn for_endpoint(endpoint: &str, connect_timeout: Duration) -> Result<Self> {
        Ok(match Endpoint::parse(endpoint)? {
            Endpoint::WebSocket(url) => {
                Self::WebSocket(WebSocketTransport::new(url).with_connect_timeout(connect_timeout))
            }
            Endpoint::Tcp(address) => {
                Self::Tcp(TcpTransport::new(address).with_connect_timeout(connect_timeout))
            }
        })
    }

    /// Returns true if a connection is currently open.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        match self {
            Self::WebSocket(transport) => transport.is_connected(),
            Self::Tcp(transport) => transport.is_connected(),
        }
    }
}

impl Default for ConsumerTransport {
    fn default() -> Self {
        Self::WebSocket(WebSocketTransport::new(DEFAULT_ENDPOINT))
    }
}

impl Transport for ConsumerTransport {
    async fn send(&mut self, message: &PlaySequence) -> Result<()> {
        match self {
            Self::WebSocket(transport) => transport.send(message).await,
            Self::Tcp(transport) => transport.send(message).await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::WebSocket(transport) => transport.describe(),
            Self::Tcp(transport) => transport.describe(),
        }
    }
}
