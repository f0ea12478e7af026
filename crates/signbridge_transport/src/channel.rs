//! In-process delivery over a tokio channel.

use signbridge_foundation::{Error, Result};
use tokio::sync::mpsc;

use crate::Transport;
use crate::message::PlaySequence;

/// Delivers messages to an in-process receiver.
///
/// Used by embedders that host the animation consumer themselves, and by
/// tests that want to inspect what would have gone over the wire.
#[derive(Clone, Debug)]
pub struct ChannelTransport {
    sender: mpsc::Sender<PlaySequence>,
}

impl ChannelTransport {
    /// Creates a transport and the receiver its messages arrive on.
    #[must_use]
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<PlaySequence>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (Self { sender }, receiver)
    }
}

impl Transport for ChannelTransport {
    async fn send(&mut self, message: &PlaySequence) -> Result<()> {
        self.sender
            .send(message.clone())
            .await
            .map_err(|_| Error::transport("consumer channel closed"))
    }

    fn describe(&self) -> String {
        "in-process channel".to_string()
    }
}
