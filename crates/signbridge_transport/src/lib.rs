//! Delivery of clip sequences to an external animation consumer.
//!
//! This crate provides:
//! - [`PlaySequence`] - The message sent for one translated sentence
//! - [`Transport`] - The async hand-off seam
//! - [`WebSocketTransport`] - One text message per sequence over a WebSocket
//! - [`TcpTransport`] - Persistent newline-delimited JSON connection
//! - [`ChannelTransport`] - In-process delivery over a tokio channel
//! - [`ConsumerTransport`] - Whichever network transport an endpoint selects
//!
//! Transport failures are reported to the caller and never touch the
//! translation that produced the message.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod channel;
mod connect;
pub mod endpoint;
pub mod message;
pub mod tcp;
pub mod websocket;

use std::future::Future;

use signbridge_foundation::Result;

pub use channel::ChannelTransport;
pub use message::{Action, PlaySequence};
pub use connect::DEFAULT_CONNECT_TIMEOUT;
pub use endpoint::{ConsumerTransport, DEFAULT_ENDPOINT, Endpoint};
pub use tcp::TcpTransport;
pub use websocket::WebSocketTransport;

/// Abstraction over the channel a clip sequence is delivered on.
///
/// This trait allows swapping the consumer connection (WebSocket, TCP,
/// in-process channel) without changing the session code.
pub trait Transport {
    /// Delivers one message.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the message could not be delivered.
    fn send(&mut self, message: &PlaySequence) -> impl Future<Output = Result<()>>;

    /// Human-readable description of where messages go.
    fn describe(&self) -> String;
}
