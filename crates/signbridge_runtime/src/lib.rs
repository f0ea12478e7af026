//! REPL, CLI, configuration, and session for Signbridge.
//!
//! This crate provides:
//! - [`Session`] - Text in, clip sequence out, delivered to the consumer
//! - [`Repl`] - Interactive read-translate-send loop
//! - [`RuntimeConfig`] - Layered configuration (defaults, file, env, flags)
//! - [`logging`] - `tracing` subscriber setup for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod logging;
pub mod repl;
pub mod session;

pub use config::{ConfigOverrides, RuntimeConfig};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use session::{Delivery, DeliveryStatus, Session, SkipReason};
