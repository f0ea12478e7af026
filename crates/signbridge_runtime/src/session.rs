//! Translation session.
//!
//! A session owns one parser, one clip resolver, and one transport. Each
//! submitted sentence is translated, resolved, and (when there is something to
//! play and sending is on) delivered as a single `play_sequence` message.
//! Sentences are handled strictly one at a time, so messages reach the
//! consumer in submission order.

use std::fmt;

use signbridge_clips::{ClipResolver, Resolution};
use signbridge_foundation::{Error, Result};
use signbridge_gloss::{Explanation, GlossParser, Translation};
use signbridge_transport::{ConsumerTransport, PlaySequence, Transport};
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, error};

use crate::config::RuntimeConfig;

/// Why a translated sentence was not sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// No gloss had a clip.
    NothingToPlay,
    /// Sending is switched off for this session.
    SendingDisabled,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingToPlay => write!(f, "nothing to play"),
            Self::SendingDisabled => write!(f, "sending disabled"),
        }
    }
}

/// Outcome of delivering one sentence.
#[derive(Debug)]
pub enum DeliveryStatus {
    /// The clip sequence was written to the consumer.
    Sent,
    /// Nothing was written.
    Skipped(SkipReason),
    /// Writing to the consumer failed; the session stays usable.
    Failed(Error),
}

/// Everything produced for one submitted sentence.
#[derive(Debug)]
pub struct Delivery {
    /// Tokens, buckets, and gloss sequence.
    pub translation: Translation,
    /// Clips and unmapped glosses.
    pub resolution: Resolution,
    /// Whether the clips reached the consumer.
    pub status: DeliveryStatus,
}

impl Delivery {
    /// Returns true if the clip sequence was written to the consumer.
    #[must_use]
    pub fn is_sent(&self) -> bool {
        matches!(self.status, DeliveryStatus::Sent)
    }

    /// Returns true if delivery was attempted and failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self.status, DeliveryStatus::Failed(_))
    }
}

/// Text-to-animation session over a transport.
pub struct Session<T: Transport = ConsumerTransport> {
    parser: GlossParser,
    resolver: ClipResolver,
    transport: T,
    runtime: Runtime,
    sending: bool,
}

impl Session<ConsumerTransport> {
    /// Builds a session from configuration.
    ///
    /// Loads the lexicon and clip map once. The endpoint picks the transport
    /// (`ws://` for WebSocket, otherwise TCP) and the connection is opened on
    /// the first send.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, a data file cannot
    /// be loaded, or the async runtime cannot start.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        config.validate()?;
        let lexicon = config.load_lexicon()?;
        let clip_map = config.load_clip_map(&lexicon)?;
        debug!(
            endpoint = %config.endpoint,
            clips = clip_map.len(),
            send = config.send,
            "starting session"
        );

        let transport =
            ConsumerTransport::for_endpoint(&config.endpoint, config.connect_timeout())?;
        Ok(Self::new(
            GlossParser::new(lexicon),
            ClipResolver::new(clip_map),
            transport,
        )?
        .with_sending(config.send))
    }
}

impl<T: Transport> Session<T> {
    /// Creates a session from its parts, with sending on.
    ///
    /// # Errors
    ///
    /// Returns an error if the async runtime cannot start.
    pub fn new(parser: GlossParser, resolver: ClipResolver, transport: T) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::io(format!("failed to start async runtime: {e}")))?;

        Ok(Self {
            parser,
            resolver,
            transport,
            runtime,
            sending: true,
        })
    }

    /// Turns sending on or off.
    #[must_use]
    pub fn with_sending(mut self, sending: bool) -> Self {
        self.sending = sending;
        self
    }

    /// Turns sending on or off.
    pub fn set_sending(&mut self, sending: bool) {
        self.sending = sending;
    }

    /// Returns true if translated sentences are sent to the consumer.
    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Returns the parser.
    #[must_use]
    pub fn parser(&self) -> &GlossParser {
        &self.parser
    }

    /// Returns the clip resolver.
    #[must_use]
    pub fn resolver(&self) -> &ClipResolver {
        &self.resolver
    }

    /// Returns the transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Translates and resolves without sending anything.
    #[must_use]
    pub fn translate(&self, text: &str) -> (Translation, Resolution) {
        let translation = self.parser.parse(text);
        let resolution = self.resolver.resolve_with_gaps(&translation.gloss);
        (translation, resolution)
    }

    /// Explains how each word of `text` was classified.
    #[must_use]
    pub fn explain(&self, text: &str) -> Explanation {
        self.parser.explain(text)
    }

    /// Translates `text` and delivers its clips to the consumer.
    ///
    /// Never fails: transport errors are logged and reported in the returned
    /// [`Delivery`], and the next submit tries again.
    pub fn submit(&mut self, text: &str) -> Delivery {
        let (translation, resolution) = self.translate(text);

        let status = if resolution.is_empty() {
            DeliveryStatus::Skipped(SkipReason::NothingToPlay)
        } else if !self.sending {
            DeliveryStatus::Skipped(SkipReason::SendingDisabled)
        } else {
            let message = PlaySequence::new(resolution.clips.clone());
            match self.runtime.block_on(self.transport.send(&message)) {
                Ok(()) => {
                    debug!(clips = message.clips.len(), "sent clip sequence");
                    DeliveryStatus::Sent
                }
                Err(e) => {
                    error!(
                        transport = %self.transport.describe(),
                        error = %e,
                        "failed to deliver clip sequence"
                    );
                    DeliveryStatus::Failed(e)
                }
            }
        };

        Delivery {
            translation,
            resolution,
            status,
        }
    }
}
