//! Gloss reordering.
//!
//! The target grammar topicalizes time, then object, subject, verb, negation,
//! and finally the question word. The order is fixed in
//! [`Category::GLOSS_ORDER`]; nothing about the input can change it.

use signbridge_foundation::Token;

use crate::category::{Buckets, Category};

/// Concatenates buckets in gloss order.
pub struct Reorderer;

impl Reorderer {
    /// Flattens buckets into the final gloss sequence.
    #[must_use]
    pub fn reorder(buckets: Buckets) -> Vec<Token> {
        let mut gloss = Vec::with_capacity(buckets.len());
        for (_, tokens) in buckets.into_ordered() {
            gloss.extend(tokens);
        }
        gloss
    }

    /// The fixed order buckets are emitted in.
    #[must_use]
    pub const fn order() -> [Category; 6] {
        Category::GLOSS_ORDER
    }
}
