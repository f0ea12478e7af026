//! Normalized word tokens.

use std::borrow::Borrow;
use std::fmt;

/// An immutable, upper-cased word.
///
/// Tokens carry no grammatical type of their own; the categorizer assigns one.
/// The only way to build a token is [`Token::new`], so every token in the
/// system is already in canonical case.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub struct Token(String);

impl Token {
    /// Creates a token, folding the word to upper case.
    #[must_use]
    pub fn new(word: impl AsRef<str>) -> Self {
        Self(word.as_ref().to_uppercase())
    }

    /// Returns the token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the token, returning the owned text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(word: &str) -> Self {
        Self::new(word)
    }
}

impl From<String> for Token {
    fn from(word: String) -> Self {
        Self::new(word)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
