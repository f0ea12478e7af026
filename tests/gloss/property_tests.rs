//! Property tests for the gloss pipeline.

use proptest::prelude::*;
use signbridge_foundation::Token;
use signbridge_gloss::{Categorizer, Category, GlossParser, GlossTokenizer, Lexicon};

/// Words drawn from every table of the standard lexicon plus unknowns.
const VOCABULARY: &[&str] = &[
    "the", "is", "do", "today", "yesterday", "not", "never", "don't", "where", "what", "i",
    "you", "she", "eat", "went", "going", "love", "school", "coffee", "zebra", "42",
];

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..12).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn every_kept_token_lands_in_exactly_one_bucket(text in sentence()) {
        let lexicon = Lexicon::standard();
        let tokens = GlossTokenizer::tokenize(&text);
        let buckets = Categorizer::new(&lexicon).categorize(&tokens);

        let kept = tokens.iter().filter(|t| !lexicon.is_stop_word(t.as_str())).count();
        prop_assert_eq!(buckets.len(), kept);
    }

    #[test]
    fn gloss_follows_category_order(text in sentence()) {
        let lexicon = Lexicon::standard();
        let gloss = GlossParser::new(lexicon.clone()).gloss(&text);

        let ranks: Vec<usize> = gloss
            .iter()
            .filter_map(|t| lexicon.classify(t).category())
            .map(Category::index)
            .collect();
        prop_assert_eq!(ranks.len(), gloss.len());
        prop_assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn gloss_never_contains_stop_words(text in sentence()) {
        let lexicon = Lexicon::standard();
        let gloss = GlossParser::new(lexicon.clone()).gloss(&text);
        prop_assert!(gloss.iter().all(|t| !lexicon.is_stop_word(t.as_str())));
    }

    #[test]
    fn parse_is_deterministic(text in "\\PC{0,40}") {
        let parser = GlossParser::standard();
        prop_assert_eq!(parser.parse(&text), parser.parse(&text));
    }

    #[test]
    fn case_does_not_matter(text in sentence()) {
        let parser = GlossParser::standard();
        prop_assert_eq!(parser.gloss(&text), parser.gloss(&text.to_uppercase()));
    }
}

#[test]
fn gloss_tokens_are_upper_case() {
    let gloss = GlossParser::standard().gloss("i went to school today");
    assert!(gloss.iter().all(|t: &Token| t.as_str() == t.as_str().to_uppercase()));
}
