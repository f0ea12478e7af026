//! Wire messages.

use serde::{Deserialize, Serialize};
use signbridge_foundation::{ClipId, Error, Result};

/// Action tag carried by every message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Play the clips in order.
    #[default]
    PlaySequence,
}

/// "Play this sequence" request for the animation consumer.
///
/// Encodes as `{"type": "play_sequence", "clips": ["i.bvh", "love.bvh"]}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaySequence {
    /// Fixed action tag.
    #[serde(rename = "type")]
    pub action: Action,
    /// Clips to play, in order.
    pub clips: Vec<ClipId>,
}

impl PlaySequence {
    /// Creates a play request for the given clips.
    #[must_use]
    pub fn new(clips: Vec<ClipId>) -> Self {
        Self {
            action: Action::PlaySequence,
            clips,
        }
    }

    /// Returns true if there is nothing to play.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Encodes the message as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::serialization(e.to_string()))
    }

    /// Decodes a message from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the text is not a valid message.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::serialization(e.to_string()))
    }

    /// Encodes the message as one newline-terminated frame.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails.
    pub fn to_frame(&self) -> Result<Vec<u8>> {
        let mut frame = self.to_json()?.into_bytes();
        frame.push(b'\n');
        Ok(frame)
    }
}
