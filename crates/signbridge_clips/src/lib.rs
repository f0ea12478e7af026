//! Gloss to motion clip resolution.
//!
//! This crate provides:
//! - [`ClipMap`] - Static gloss → clip identifier table
//! - [`ClipResolver`] - Maps a gloss sequence to the clips to play
//!
//! Missing mappings are never fatal: the resolver logs the gap and skips the
//! gloss, so an empty result simply means there is nothing to play.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod map;
pub mod resolver;

pub use map::ClipMap;
pub use resolver::{ClipResolver, Resolution};
