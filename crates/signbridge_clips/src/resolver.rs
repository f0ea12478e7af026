//! Gloss sequence to clip sequence resolution.

use std::sync::Arc;

use signbridge_foundation::{ClipId, Token};
use tracing::warn;

use crate::map::ClipMap;

/// Clips for a gloss sequence, plus the glosses that had none.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Clips in gloss order
    pub clips: Vec<ClipId>,
    /// Glosses without a clip, in gloss order
    pub unresolved: Vec<Token>,
}

impl Resolution {
    /// Returns true if there is nothing to play.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Returns true if every gloss had a clip.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Resolves glosses against a shared, read-only [`ClipMap`].
#[derive(Clone, Debug)]
pub struct ClipResolver {
    map: Arc<ClipMap>,
}

impl ClipResolver {
    /// Creates a resolver over the given map.
    #[must_use]
    pub fn new(map: impl Into<Arc<ClipMap>>) -> Self {
        Self { map: map.into() }
    }

    /// Returns the underlying map.
    #[must_use]
    pub fn map(&self) -> &ClipMap {
        &self.map
    }

    /// Maps each gloss to its clip, skipping glosses without one.
    ///
    /// Order is preserved; a missing clip never shifts or drops its neighbors.
    #[must_use]
    pub fn resolve(&self, gloss: &[Token]) -> Vec<ClipId> {
        self.resolve_with_gaps(gloss).clips
    }

    /// Like [`ClipResolver::resolve`], also reporting the skipped glosses.
    #[must_use]
    pub fn resolve_with_gaps(&self, gloss: &[Token]) -> Resolution {
        let mut resolution = Resolution::default();
        for token in gloss {
            match self.map.get(token.as_str()) {
                Some(clip) => resolution.clips.push(clip.clone()),
                None => {
                    warn!(gloss = %token, "no clip for gloss");
                    resolution.unresolved.push(token.clone());
                }
            }
        }
        resolution
    }
}

impl Default for ClipResolver {
    fn default() -> Self {
        Self::new(ClipMap::standard())
    }
}
