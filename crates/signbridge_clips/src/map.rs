//! Gloss to clip identifier table.

use std::collections::BTreeMap;

use signbridge_foundation::{ClipId, Token};
use signbridge_gloss::Lexicon;

/// Static mapping from gloss tokens to clip identifiers.
///
/// Serializes as a flat object, e.g. `{"LOVE": "love.bvh"}`. Keys are
/// upper-cased on load like every other token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ClipMap {
    clips: BTreeMap<Token, ClipId>,
}

impl ClipMap {
    /// Creates an empty clip map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a map naming each clip `<lowercase gloss>.<extension>`.
    ///
    /// `SCHOOL` with extension `bvh` maps to `school.bvh`.
    #[must_use]
    pub fn from_glosses<I, T>(glosses: I, extension: &str) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut map = Self::new();
        for gloss in glosses {
            let gloss = Token::new(gloss);
            let clip = format!("{}.{extension}", gloss.as_str().to_lowercase());
            map.insert(gloss, ClipId::new(clip));
        }
        map
    }

    /// Generates a map for every gloss the lexicon can emit.
    #[must_use]
    pub fn for_lexicon(lexicon: &Lexicon, extension: &str) -> Self {
        Self::from_glosses(lexicon.emitted_glosses(), extension)
    }

    /// Generates the map for the standard lexicon and clip extension.
    #[must_use]
    pub fn standard() -> Self {
        Self::for_lexicon(
            &Lexicon::standard(),
            signbridge_gloss::stdlib::CLIP_EXTENSION,
        )
    }

    /// Adds or replaces a mapping.
    pub fn insert(&mut self, gloss: impl Into<Token>, clip: impl Into<ClipId>) {
        self.clips.insert(gloss.into(), clip.into());
    }

    /// Adds or replaces a mapping, builder style.
    #[must_use]
    pub fn with(mut self, gloss: impl Into<Token>, clip: impl Into<ClipId>) -> Self {
        self.insert(gloss, clip);
        self
    }

    /// Copies every entry of `other` into this map, replacing duplicates.
    pub fn merge(&mut self, other: ClipMap) {
        self.clips.extend(other.clips);
    }

    /// Looks up the clip for a gloss.
    #[must_use]
    pub fn get(&self, gloss: &str) -> Option<&ClipId> {
        self.clips.get(gloss)
    }

    /// Returns true if the gloss has a clip.
    #[must_use]
    pub fn contains(&self, gloss: &str) -> bool {
        self.clips.contains_key(gloss)
    }

    /// Number of mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    /// Returns true if there are no mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Iterates mappings in gloss order.
    pub fn iter(&self) -> impl Iterator<Item = (&Token, &ClipId)> {
        self.clips.iter()
    }
}

impl<K: Into<Token>, V: Into<ClipId>> FromIterator<(K, V)> for ClipMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (gloss, clip) in iter {
            map.insert(gloss, clip);
        }
        map
    }
}
