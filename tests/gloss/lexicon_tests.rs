//! Lexicon tests.
//!
//! Tests for word classification and custom lexicons.

use signbridge_foundation::Token;
use signbridge_gloss::{Category, Classification, Lexicon, LexiconSpec, Rule};

fn category(lexicon: &Lexicon, word: &str) -> Option<Category> {
    lexicon.classify(&Token::new(word)).category()
}

#[test]
fn standard_lexicon_routes_each_table() {
    let lexicon = Lexicon::standard();

    assert_eq!(category(&lexicon, "THE"), None);
    assert_eq!(category(&lexicon, "TOMORROW"), Some(Category::Time));
    assert_eq!(category(&lexicon, "NEVER"), Some(Category::Negation));
    assert_eq!(category(&lexicon, "WHY"), Some(Category::Wh));
    assert_eq!(category(&lexicon, "THEY"), Some(Category::Subject));
    assert_eq!(category(&lexicon, "DRINK"), Some(Category::Verb));
    assert_eq!(category(&lexicon, "COFFEE"), Some(Category::Object));
}

#[test]
fn negations_normalize_to_marker() {
    let lexicon = Lexicon::standard();
    for word in ["NOT", "NEVER", "NO", "DON", "CANT"] {
        assert_eq!(
            lexicon.classify(&Token::new(word)),
            Classification::Route {
                category: Category::Negation,
                token: Token::new("NO"),
            },
            "{word}"
        );
    }
}

#[test]
fn irregular_forms_normalize_to_canonical_verb() {
    let lexicon = Lexicon::standard();
    let decision = lexicon.decide(&Token::new("WENT"));

    assert_eq!(decision.rule, Rule::Verb);
    assert_eq!(decision.normalized_from, Some(Token::new("WENT")));
    assert_eq!(decision.classification.category(), Some(Category::Verb));
}

#[test]
fn irregular_mapping_makes_its_base_form_a_verb() {
    let spec: LexiconSpec =
        serde_json::from_str(r#"{"irregular_verbs": {"swam": "swim"}}"#).unwrap();
    let lexicon = Lexicon::from(spec);

    assert!(lexicon.is_verb("SWIM"));
    assert_eq!(
        lexicon.classify(&Token::new("SWAM")),
        Classification::Route {
            category: Category::Verb,
            token: Token::new("SWIM"),
        }
    );
    assert_eq!(category(&lexicon, "SWIM"), Some(Category::Verb));
}

#[test]
fn unknown_word_falls_through_to_object() {
    let decision = Lexicon::standard().decide(&Token::new("ZEBRA"));
    assert_eq!(decision.rule, Rule::UnknownWord);
    assert_eq!(decision.classification.category(), Some(Category::Object));
}

#[test]
fn stop_word_wins_over_every_other_table() {
    let mut lexicon = Lexicon::new();
    lexicon.register_verb("DO");
    lexicon.register_stop_word("DO");

    assert_eq!(lexicon.classify(&Token::new("DO")), Classification::Discard);
}

#[test]
fn custom_negation_marker() {
    let mut lexicon = Lexicon::new().with_negation_marker("not");
    lexicon.register_negation_word("never");

    assert_eq!(lexicon.negation_marker(), &Token::new("NOT"));
    assert_eq!(
        lexicon.classify(&Token::new("NEVER")),
        Classification::Route {
            category: Category::Negation,
            token: Token::new("NOT"),
        }
    );
}

#[test]
fn spec_converts_to_lexicon_with_upper_case_words() {
    let spec = LexiconSpec {
        stop_words: vec!["the".to_string()],
        subject_pronouns: vec!["yo".to_string()],
        verbs: vec!["comer".to_string()],
        ..LexiconSpec::default()
    };
    let lexicon = Lexicon::from(spec);

    assert!(lexicon.is_stop_word("THE"));
    assert!(lexicon.is_subject_pronoun("YO"));
    assert!(lexicon.is_verb("COMER"));
    assert_eq!(lexicon.negation_marker().as_str(), "NO");
}

#[test]
fn lexicon_survives_spec_round_trip() {
    let lexicon = Lexicon::standard();
    let rebuilt = Lexicon::from(lexicon.to_spec());

    assert_eq!(rebuilt.emitted_glosses(), lexicon.emitted_glosses());
    assert_eq!(rebuilt.canonical_verb("WENT"), Some(&Token::new("GO")));
}

#[test]
fn spec_parses_from_json() {
    let spec: LexiconSpec = serde_json::from_str(
        r#"{
            "subject_pronouns": ["ich"],
            "verbs": ["gehen"],
            "irregular_verbs": {"ging": "gehen"},
            "negation_words": ["nicht"],
            "negation_marker": "NEIN"
        }"#,
    )
    .unwrap();
    let lexicon = Lexicon::from(spec);

    assert_eq!(lexicon.canonical_verb("GING"), Some(&Token::new("GEHEN")));
    assert_eq!(lexicon.negation_marker().as_str(), "NEIN");
}

#[test]
fn spec_rejects_unknown_fields() {
    let result: Result<LexiconSpec, _> = serde_json::from_str(r#"{"adjectives": []}"#);
    assert!(result.is_err());
}
