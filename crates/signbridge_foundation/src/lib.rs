//! Core types and errors for Signbridge.
//!
//! This crate provides:
//! - [`Token`] - An upper-cased word, the unit every later stage works on
//! - [`ClipId`] - A handle naming one prerecorded motion clip
//! - [`Error`] - Rich error types for the effectful edges of the system

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clip;
pub mod error;
pub mod token;

pub use clip::ClipId;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use token::Token;
