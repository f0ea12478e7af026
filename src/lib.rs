//! Signbridge - English text to sign-language gloss and motion clips
//!
//! This crate re-exports all layers of the Signbridge system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: signbridge_runtime    - Session, REPL, CLI, configuration, logging
//! Layer 2: signbridge_transport  - play_sequence messages, WebSocket, TCP, and channel delivery
//! Layer 1: signbridge_clips      - Gloss → clip id resolution
//!          signbridge_gloss      - Tokenizer, lexicon, categorizer, reorderer
//! Layer 0: signbridge_foundation - Core types (Token, ClipId, Error)
//! ```

pub use signbridge_clips as clips;
pub use signbridge_foundation as foundation;
pub use signbridge_gloss as gloss;
pub use signbridge_runtime as runtime;
pub use signbridge_transport as transport;
