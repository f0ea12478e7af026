//! Main gloss pipeline.
//!
//! Orchestrates the full flow from recognized text to gloss sequence.

use std::sync::Arc;

use signbridge_foundation::Token;
use tracing::debug;

use crate::categorizer::Categorizer;
use crate::category::Buckets;
use crate::explain::{ExplainStep, Explanation};
use crate::lexicon::Lexicon;
use crate::reorder::Reorderer;
use crate::tokenizer::GlossTokenizer;

/// Result of translating one sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Translation {
    /// Tokens in input order
    pub tokens: Vec<Token>,
    /// Per-category buckets
    pub buckets: Buckets,
    /// Buckets flattened in gloss order
    pub gloss: Vec<Token>,
}

impl Translation {
    /// Returns true if nothing survived categorization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gloss.is_empty()
    }
}

/// The text-to-gloss parser.
///
/// Holds no per-sentence state: parsing the same text twice always yields the
/// same result.
#[derive(Clone, Debug)]
pub struct GlossParser {
    lexicon: Arc<Lexicon>,
}

impl GlossParser {
    /// Creates a parser over the given lexicon.
    #[must_use]
    pub fn new(lexicon: impl Into<Arc<Lexicon>>) -> Self {
        Self {
            lexicon: lexicon.into(),
        }
    }

    /// Creates a parser over the standard English lexicon.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Lexicon::standard())
    }

    /// Returns the lexicon this parser reads from.
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Translates text into a gloss sequence.
    #[must_use]
    pub fn gloss(&self, input: &str) -> Vec<Token> {
        self.parse(input).gloss
    }

    /// Translates text, keeping the intermediate tokens and buckets.
    #[must_use]
    pub fn parse(&self, input: &str) -> Translation {
        // 1. Tokenize
        let tokens = GlossTokenizer::tokenize(input);

        // 2. Categorize
        let buckets = Categorizer::new(&self.lexicon).categorize(&tokens);

        // 3. Reorder
        let gloss = Reorderer::reorder(buckets.clone());

        debug!(input, %buckets, gloss = ?gloss, "parsed sentence");

        Translation {
            tokens,
            buckets,
            gloss,
        }
    }

    /// Translates text, recording which rule fired for every token.
    #[must_use]
    pub fn explain(&self, input: &str) -> Explanation {
        let tokens = GlossTokenizer::tokenize(input);
        let mut buckets = Buckets::new();
        let mut steps = Vec::with_capacity(tokens.len());

        for token in tokens {
            let decision = self.lexicon.decide(&token);
            buckets.apply(decision.classification.clone());
            steps.push(ExplainStep { token, decision });
        }

        Explanation {
            steps,
            gloss: Reorderer::reorder(buckets),
        }
    }
}

impl Default for GlossParser {
    fn default() -> Self {
        Self::standard()
    }
}
