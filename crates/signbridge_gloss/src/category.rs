//! Grammatical categories and per-sentence buckets.

use std::fmt;

use signbridge_foundation::Token;

/// The grammatical role a token plays in the target gloss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Temporal reference ("TODAY", "YESTERDAY").
    Time,
    /// Objects, other content words, and anything unknown.
    Object,
    /// Subject pronoun.
    Subject,
    /// Canonical verb.
    Verb,
    /// Normalized negation marker.
    Negation,
    /// Question word.
    Wh,
}

impl Category {
    /// The fixed gloss order: time, object, subject, verb, negation, question.
    pub const GLOSS_ORDER: [Category; 6] = [
        Category::Time,
        Category::Object,
        Category::Subject,
        Category::Verb,
        Category::Negation,
        Category::Wh,
    ];

    /// Position of this category in [`Category::GLOSS_ORDER`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Time => 0,
            Self::Object => 1,
            Self::Subject => 2,
            Self::Verb => 3,
            Self::Negation => 4,
            Self::Wh => 5,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Time => write!(f, "TIME"),
            Self::Object => write!(f, "OBJECT"),
            Self::Subject => write!(f, "SUBJECT"),
            Self::Verb => write!(f, "VERB"),
            Self::Negation => write!(f, "NEGATION"),
            Self::Wh => write!(f, "WH"),
        }
    }
}

/// Outcome of classifying one token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    /// Stop word; dropped from the gloss.
    Discard,
    /// Append `token` to the bucket for `category`.
    ///
    /// `token` is what gets emitted, which may differ from the input word
    /// (negation synonyms become the marker, verb variants their base form).
    Route {
        /// Target bucket.
        category: Category,
        /// Token to emit.
        token: Token,
    },
}

impl Classification {
    /// Returns the target category, or `None` for discarded tokens.
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::Discard => None,
            Self::Route { category, .. } => Some(*category),
        }
    }
}

/// Which classification rule matched a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Listed stop word.
    StopWord,
    /// Listed time word.
    TimeWord,
    /// Listed negation word.
    NegationWord,
    /// Listed question word.
    QuestionWord,
    /// Listed subject pronoun.
    SubjectPronoun,
    /// Known canonical verb.
    Verb,
    /// Known non-verb gloss.
    KnownGloss,
    /// Not in any table; defaulted to object.
    UnknownWord,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StopWord => write!(f, "stop word"),
            Self::TimeWord => write!(f, "time word"),
            Self::NegationWord => write!(f, "negation"),
            Self::QuestionWord => write!(f, "question word"),
            Self::SubjectPronoun => write!(f, "subject pronoun"),
            Self::Verb => write!(f, "verb"),
            Self::KnownGloss => write!(f, "known gloss"),
            Self::UnknownWord => write!(f, "unknown word"),
        }
    }
}

/// Full record of how one token was classified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    /// The rule that matched.
    pub rule: Rule,
    /// Set when an irregular verb form was replaced by its canonical form.
    pub normalized_from: Option<Token>,
    /// The resulting classification.
    pub classification: Classification,
}

/// Six per-category token lists for one sentence.
///
/// Each bucket keeps tokens in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Buckets {
    slots: [Vec<Token>; 6],
}

impl Buckets {
    /// Creates an empty bucket set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a token to a bucket.
    pub fn push(&mut self, category: Category, token: Token) {
        self.slots[category.index()].push(token);
    }

    /// Applies a classification; discarded tokens are dropped.
    pub fn apply(&mut self, classification: Classification) {
        if let Classification::Route { category, token } = classification {
            self.push(category, token);
        }
    }

    /// Returns the tokens in one bucket.
    #[must_use]
    pub fn get(&self, category: Category) -> &[Token] {
        &self.slots[category.index()]
    }

    /// Total number of tokens across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    /// Returns true if every bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }

    /// Iterates buckets in gloss order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Token])> {
        Category::GLOSS_ORDER
            .into_iter()
            .map(|category| (category, self.get(category)))
    }

    /// Consumes the set, yielding buckets in gloss order.
    pub fn into_ordered(self) -> impl Iterator<Item = (Category, Vec<Token>)> {
        Category::GLOSS_ORDER.into_iter().zip(self.slots)
    }
}

impl fmt::Display for Buckets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (category, tokens) in self.iter().filter(|(_, t)| !t.is_empty()) {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{category}=[")?;
            for (i, token) in tokens.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{token}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
