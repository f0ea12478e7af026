//! Per-token classification traces.
//!
//! Answers "why did this word end up there?" for one sentence.
//!
//! # Example
//!
//! ```text
//! :explain I went home
//! ;; I      subject pronoun        → SUBJECT I
//! ;; WENT   verb (from WENT)       → VERB GO
//! ;; HOME   known gloss            → OBJECT HOME
//! ;; gloss: HOME I GO
//! ```

use std::fmt;

use signbridge_foundation::Token;

use crate::category::{Classification, Decision, Rule};

/// One classified token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplainStep {
    /// The input token.
    pub token: Token,
    /// How it was classified.
    pub decision: Decision,
}

/// Classification trace for a whole sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Explanation {
    /// One step per input token, in input order.
    pub steps: Vec<ExplainStep>,
    /// The resulting gloss sequence.
    pub gloss: Vec<Token>,
}

impl Explanation {
    /// Returns input tokens that no table knew about.
    #[must_use]
    pub fn unknown_words(&self) -> Vec<&Token> {
        self.steps
            .iter()
            .filter(|step| step.decision.rule == Rule::UnknownWord)
            .map(|step| &step.token)
            .collect()
    }
}

impl fmt::Display for ExplainStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = match &self.decision.normalized_from {
            Some(from) => format!("{} (from {from})", self.decision.rule),
            None => self.decision.rule.to_string(),
        };
        write!(f, "{:<14} {rule:<24} ", self.token.as_str())?;
        match &self.decision.classification {
            Classification::Discard => write!(f, "→ dropped"),
            Classification::Route { category, token } => write!(f, "→ {category} {token}"),
        }
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{step}")?;
        }
        write!(f, "gloss:")?;
        for token in &self.gloss {
            write!(f, " {token}")?;
        }
        Ok(())
    }
}
