//! Rule-based text-to-gloss translation.
//!
//! This crate turns a recognized sentence like "you love school today" into a
//! gloss sequence ordered by the target sign-language grammar.
//!
//! # Architecture
//!
//! ```text
//! "YOU LOVE SCHOOL TODAY"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [YOU, LOVE, SCHOOL, TODAY]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  CATEGORIZER    │  → TIME=[TODAY] OBJECT=[SCHOOL] SUBJECT=[YOU] VERB=[LOVE]
//! │  (lexicon)      │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   REORDERER     │  → [TODAY, SCHOOL, YOU, LOVE]
//! └─────────────────┘
//! ```
//!
//! Everything here is pure and synchronous. Unknown words become objects,
//! stop words vanish, and empty input yields an empty gloss; nothing in this
//! crate returns an error.
//!
//! # Modules
//!
//! - [`lexicon`] - Static vocabulary tables and per-token classification
//! - [`stdlib`] - Standard English vocabulary
//! - [`tokenizer`] - Convert raw text to word tokens
//! - [`category`] - Grammatical categories, classification results, buckets
//! - [`categorizer`] - Route a token sequence into buckets
//! - [`reorder`] - Concatenate buckets in gloss order
//! - [`parser`] - Pipeline orchestration
//! - [`explain`] - Per-token trace of which rule fired

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod categorizer;
pub mod category;
pub mod explain;
pub mod lexicon;
pub mod parser;
pub mod reorder;
pub mod stdlib;
pub mod tokenizer;

// Re-export main types for convenience
pub use categorizer::Categorizer;
pub use category::{Buckets, Category, Classification, Decision, Rule};
pub use explain::Explanation;
pub use lexicon::{Lexicon, LexiconSpec};
pub use parser::{GlossParser, Translation};
pub use reorder::Reorderer;
pub use tokenizer::GlossTokenizer;
