//! Integration tests for Token and ClipId.

use std::collections::HashSet;

use proptest::prelude::*;
use signbridge_foundation::{ClipId, Token};

#[test]
fn token_upper_cases() {
    assert_eq!(Token::new("School"), "SCHOOL");
    assert_eq!(Token::from("went").as_str(), "WENT");
}

#[test]
fn token_keeps_digits_and_underscores() {
    assert_eq!(Token::new("room_42"), "ROOM_42");
}

#[test]
fn token_borrows_as_str_for_lookup() {
    let set: HashSet<Token> = ["today", "school"].into_iter().map(Token::new).collect();
    assert!(set.contains("TODAY"));
    assert!(!set.contains("today"));
}

#[test]
fn token_display_matches_contents() {
    assert_eq!(Token::new("love").to_string(), "LOVE");
    assert_eq!(String::from(Token::new("love")), "LOVE");
}

#[test]
fn clip_id_keeps_case() {
    let clip = ClipId::new("school.bvh");
    assert_eq!(clip.as_str(), "school.bvh");
    assert_eq!(clip.to_string(), "school.bvh");
    assert_eq!(ClipId::from(String::from("Wave.fbx")), "Wave.fbx");
}

proptest! {
    #[test]
    fn token_has_no_lower_case_ascii(word in "[a-zA-Z0-9_]{0,16}") {
        let token = Token::new(&word);
        prop_assert!(!token.as_str().chars().any(|c| c.is_ascii_lowercase()));
        prop_assert_eq!(token.as_str().len(), word.len());
    }
}
