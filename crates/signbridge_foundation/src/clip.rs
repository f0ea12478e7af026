//! Motion clip identifiers.

use std::fmt;

/// A handle naming one prerecorded motion sequence (e.g. `love.bvh`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ClipId(String);

impl ClipId {
    /// Creates a clip identifier from its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the clip name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClipId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ClipId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<&str> for ClipId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
