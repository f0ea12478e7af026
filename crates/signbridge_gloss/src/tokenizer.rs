//! Input tokenization.
//!
//! Converts recognized text into a stream of word tokens.

use signbridge_foundation::Token;

/// Tokenizes recognized text.
pub struct GlossTokenizer;

impl GlossTokenizer {
    /// Tokenizes a raw input string into upper-cased word tokens.
    ///
    /// - Word characters are Unicode alphanumerics and `_`
    /// - Everything else (whitespace, punctuation, apostrophes) separates words
    /// - Empty or punctuation-only input yields no tokens
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current_word = String::new();

        for ch in input.chars() {
            if Self::is_word_char(ch) {
                current_word.push(ch);
            } else if !current_word.is_empty() {
                tokens.push(Token::new(&current_word));
                current_word.clear();
            }
        }

        // Flush final word
        if !current_word.is_empty() {
            tokens.push(Token::new(&current_word));
        }

        tokens
    }

    /// Returns true for characters that belong to a word.
    #[must_use]
    pub fn is_word_char(ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_'
    }
}
