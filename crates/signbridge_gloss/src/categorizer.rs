//! Routes a token sequence into grammatical buckets.

use signbridge_foundation::Token;

use crate::category::Buckets;
use crate::lexicon::Lexicon;

/// Single linear pass over a token sequence.
#[derive(Clone, Copy, Debug)]
pub struct Categorizer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Categorizer<'a> {
    /// Creates a categorizer reading from the given lexicon.
    #[must_use]
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Classifies every token in order and collects the results.
    ///
    /// Each token lands in exactly one bucket or is discarded as a stop word.
    #[must_use]
    pub fn categorize(&self, tokens: &[Token]) -> Buckets {
        let mut buckets = Buckets::new();
        for token in tokens {
            buckets.apply(self.lexicon.classify(token));
        }
        buckets
    }
}
