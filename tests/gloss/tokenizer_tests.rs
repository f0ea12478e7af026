//! Tokenizer tests.
//!
//! Tests for converting raw text to upper-cased word tokens.

use signbridge_gloss::GlossTokenizer;

fn words(input: &str) -> Vec<String> {
    GlossTokenizer::tokenize(input)
        .into_iter()
        .map(|t| t.into_string())
        .collect()
}

#[test]
fn tokenize_simple_sentence() {
    assert_eq!(words("I love school"), vec!["I", "LOVE", "SCHOOL"]);
}

#[test]
fn tokenize_strips_punctuation() {
    assert_eq!(words("Hello, world! Where?"), vec!["HELLO", "WORLD", "WHERE"]);
}

#[test]
fn tokenize_splits_contractions() {
    assert_eq!(words("I don't know"), vec!["I", "DON", "T", "KNOW"]);
}

#[test]
fn tokenize_collapses_whitespace() {
    assert_eq!(words("  you\t\tsleep \n now "), vec!["YOU", "SLEEP", "NOW"]);
}

#[test]
fn tokenize_keeps_digits() {
    assert_eq!(words("room 42b"), vec!["ROOM", "42B"]);
}

#[test]
fn tokenize_empty_input() {
    assert!(GlossTokenizer::tokenize("").is_empty());
    assert!(GlossTokenizer::tokenize("?!... ,").is_empty());
}
