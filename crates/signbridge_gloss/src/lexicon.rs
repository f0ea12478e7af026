//! Vocabulary tables for gloss classification.
//!
//! Stores stop words, time words, negation words, question words, subject
//! pronouns, canonical verbs, irregular verb forms, and known glosses. A
//! lexicon is built once and then only read; classification never mutates it.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use signbridge_foundation::Token;
use tracing::debug;

use crate::category::{Category, Classification, Decision, Rule};

/// Default marker every negation synonym is normalized to.
pub const DEFAULT_NEGATION_MARKER: &str = "NO";

/// Runtime storage for all vocabulary tables.
#[derive(Clone, Debug)]
pub struct Lexicon {
    /// Words dropped entirely
    stop_words: HashSet<Token>,
    /// Temporal references
    time_words: HashSet<Token>,
    /// Negation synonyms
    negation_words: HashSet<Token>,
    /// Single marker emitted for every negation synonym
    negation_marker: Token,
    /// Question words
    question_words: HashSet<Token>,
    /// Subject pronouns
    subject_pronouns: HashSet<Token>,
    /// Canonical verb forms
    verbs: HashSet<Token>,
    /// Inflected/irregular form -> canonical verb
    irregular_verbs: HashMap<Token, Token>,
    /// Known non-verb vocabulary
    glosses: HashSet<Token>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            stop_words: HashSet::new(),
            time_words: HashSet::new(),
            negation_words: HashSet::new(),
            negation_marker: Token::new(DEFAULT_NEGATION_MARKER),
            question_words: HashSet::new(),
            subject_pronouns: HashSet::new(),
            verbs: HashSet::new(),
            irregular_verbs: HashMap::new(),
            glosses: HashSet::new(),
        }
    }
}

impl Lexicon {
    /// Creates a new empty lexicon with the default negation marker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the standard English lexicon.
    #[must_use]
    pub fn standard() -> Self {
        crate::stdlib::standard_lexicon()
    }

    /// Sets the marker emitted for every negation word.
    #[must_use]
    pub fn with_negation_marker(mut self, marker: impl AsRef<str>) -> Self {
        self.negation_marker = Token::new(marker);
        self
    }

    /// Registers a stop word.
    pub fn register_stop_word(&mut self, word: impl AsRef<str>) {
        self.stop_words.insert(Token::new(word));
    }

    /// Registers a time word.
    pub fn register_time_word(&mut self, word: impl AsRef<str>) {
        self.time_words.insert(Token::new(word));
    }

    /// Registers a negation synonym.
    pub fn register_negation_word(&mut self, word: impl AsRef<str>) {
        self.negation_words.insert(Token::new(word));
    }

    /// Registers a question word.
    pub fn register_question_word(&mut self, word: impl AsRef<str>) {
        self.question_words.insert(Token::new(word));
    }

    /// Registers a subject pronoun.
    pub fn register_subject_pronoun(&mut self, word: impl AsRef<str>) {
        self.subject_pronouns.insert(Token::new(word));
    }

    /// Registers a canonical verb.
    pub fn register_verb(&mut self, word: impl AsRef<str>) {
        self.verbs.insert(Token::new(word));
    }

    /// Registers an inflected or irregular verb form.
    ///
    /// The canonical form is registered as a verb as well, so a variant always
    /// lands in the verb bucket after normalization.
    pub fn register_irregular_verb(&mut self, variant: impl AsRef<str>, canonical: impl AsRef<str>) {
        let canonical = Token::new(canonical);
        self.verbs.insert(canonical.clone());
        self.irregular_verbs.insert(Token::new(variant), canonical);
    }

    /// Registers a known non-verb gloss.
    pub fn register_gloss(&mut self, word: impl AsRef<str>) {
        self.glosses.insert(Token::new(word));
    }

    /// Returns the negation marker.
    #[must_use]
    pub fn negation_marker(&self) -> &Token {
        &self.negation_marker
    }

    /// Checks if a word is a stop word.
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Checks if a word is a time word.
    #[must_use]
    pub fn is_time_word(&self, word: &str) -> bool {
        self.time_words.contains(word)
    }

    /// Checks if a word is a negation synonym.
    #[must_use]
    pub fn is_negation_word(&self, word: &str) -> bool {
        self.negation_words.contains(word)
    }

    /// Checks if a word is a question word.
    #[must_use]
    pub fn is_question_word(&self, word: &str) -> bool {
        self.question_words.contains(word)
    }

    /// Checks if a word is a subject pronoun.
    #[must_use]
    pub fn is_subject_pronoun(&self, word: &str) -> bool {
        self.subject_pronouns.contains(word)
    }

    /// Checks if a word is a canonical verb.
    #[must_use]
    pub fn is_verb(&self, word: &str) -> bool {
        self.verbs.contains(word)
    }

    /// Checks if a word is known non-verb vocabulary.
    #[must_use]
    pub fn is_gloss(&self, word: &str) -> bool {
        self.glosses.contains(word)
    }

    /// Looks up the canonical form of an irregular verb.
    #[must_use]
    pub fn canonical_verb(&self, word: &str) -> Option<&Token> {
        self.irregular_verbs.get(word)
    }

    /// Classifies a single token.
    #[must_use]
    pub fn classify(&self, token: &Token) -> Classification {
        self.decide(token).classification
    }

    /// Classifies a single token, recording which rule matched.
    ///
    /// Rules are tried in a fixed order and the first match wins: stop word,
    /// time word, negation, question word, then (after irregular verb
    /// normalization) subject pronoun, verb, and finally object.
    #[must_use]
    pub fn decide(&self, token: &Token) -> Decision {
        let word = token.as_str();

        if self.is_stop_word(word) {
            return Decision {
                rule: Rule::StopWord,
                normalized_from: None,
                classification: Classification::Discard,
            };
        }

        if self.is_time_word(word) {
            return Self::routed(Rule::TimeWord, None, Category::Time, token.clone());
        }

        if self.is_negation_word(word) {
            return Self::routed(
                Rule::NegationWord,
                None,
                Category::Negation,
                self.negation_marker.clone(),
            );
        }

        if self.is_question_word(word) {
            return Self::routed(Rule::QuestionWord, None, Category::Wh, token.clone());
        }

        let (resolved, normalized_from) = match self.canonical_verb(word) {
            Some(canonical) => (canonical.clone(), Some(token.clone())),
            None => (token.clone(), None),
        };

        if self.is_subject_pronoun(resolved.as_str()) {
            return Self::routed(Rule::SubjectPronoun, normalized_from, Category::Subject, resolved);
        }

        if self.is_verb(resolved.as_str()) {
            return Self::routed(Rule::Verb, normalized_from, Category::Verb, resolved);
        }

        let rule = if self.is_gloss(resolved.as_str()) {
            Rule::KnownGloss
        } else {
            debug!(word = %resolved, "vocabulary gap, treating as object");
            Rule::UnknownWord
        };
        Self::routed(rule, normalized_from, Category::Object, resolved)
    }

    fn routed(
        rule: Rule,
        normalized_from: Option<Token>,
        category: Category,
        token: Token,
    ) -> Decision {
        Decision {
            rule,
            normalized_from,
            classification: Classification::Route { category, token },
        }
    }

    /// Every gloss this lexicon can emit, sorted.
    ///
    /// Stop words and negation synonyms are excluded; the negation marker and
    /// canonical verbs are included. Useful for generating a clip table.
    #[must_use]
    pub fn emitted_glosses(&self) -> BTreeSet<Token> {
        self.time_words
            .iter()
            .chain(&self.question_words)
            .chain(&self.subject_pronouns)
            .chain(&self.verbs)
            .chain(&self.glosses)
            .chain(std::iter::once(&self.negation_marker))
            .cloned()
            .collect()
    }

    /// Converts the lexicon back into its plain data form.
    #[must_use]
    pub fn to_spec(&self) -> LexiconSpec {
        fn sorted(set: &HashSet<Token>) -> Vec<String> {
            let mut words: Vec<String> = set.iter().map(|t| t.as_str().to_string()).collect();
            words.sort();
            words
        }

        LexiconSpec {
            stop_words: sorted(&self.stop_words),
            time_words: sorted(&self.time_words),
            negation_words: sorted(&self.negation_words),
            negation_marker: self.negation_marker.as_str().to_string(),
            question_words: sorted(&self.question_words),
            subject_pronouns: sorted(&self.subject_pronouns),
            verbs: sorted(&self.verbs),
            irregular_verbs: self
                .irregular_verbs
                .iter()
                .map(|(k, v)| (k.as_str().to_string(), v.as_str().to_string()))
                .collect(),
            glosses: sorted(&self.glosses),
        }
    }
}

/// Plain data form of a [`Lexicon`], suitable for configuration files.
///
/// Words are upper-cased when converted into a lexicon.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct LexiconSpec {
    /// Words dropped entirely.
    pub stop_words: Vec<String>,
    /// Temporal references.
    pub time_words: Vec<String>,
    /// Negation synonyms.
    pub negation_words: Vec<String>,
    /// Marker emitted for every negation synonym.
    pub negation_marker: String,
    /// Question words.
    pub question_words: Vec<String>,
    /// Subject pronouns.
    pub subject_pronouns: Vec<String>,
    /// Canonical verbs.
    pub verbs: Vec<String>,
    /// Inflected form -> canonical verb.
    pub irregular_verbs: BTreeMap<String, String>,
    /// Known non-verb vocabulary.
    pub glosses: Vec<String>,
}

impl Default for LexiconSpec {
    fn default() -> Self {
        Self {
            stop_words: Vec::new(),
            time_words: Vec::new(),
            negation_words: Vec::new(),
            negation_marker: DEFAULT_NEGATION_MARKER.to_string(),
            question_words: Vec::new(),
            subject_pronouns: Vec::new(),
            verbs: Vec::new(),
            irregular_verbs: BTreeMap::new(),
            glosses: Vec::new(),
        }
    }
}

impl From<LexiconSpec> for Lexicon {
    fn from(spec: LexiconSpec) -> Self {
        let mut lexicon = Lexicon::new().with_negation_marker(&spec.negation_marker);
        for word in &spec.stop_words {
            lexicon.register_stop_word(word);
        }
        for word in &spec.time_words {
            lexicon.register_time_word(word);
        }
        for word in &spec.negation_words {
            lexicon.register_negation_word(word);
        }
        for word in &spec.question_words {
            lexicon.register_question_word(word);
        }
        for word in &spec.subject_pronouns {
            lexicon.register_subject_pronoun(word);
        }
        for word in &spec.verbs {
            lexicon.register_verb(word);
        }
        for (variant, canonical) in &spec.irregular_verbs {
            lexicon.register_irregular_verb(variant, canonical);
        }
        for word in &spec.glosses {
            lexicon.register_gloss(word);
        }
        lexicon
    }
}
