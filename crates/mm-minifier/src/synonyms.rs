//! Synonym stage: swap long words for shorter synonyms.

use crate::lexicon::{LexicalRelationLookup, RelationTable};
use crate::tokenize;
use crate::TextStage;
use mm_core::Strategy;
use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::Arc;

/// Technical terms never replaced, whatever their length.
pub const DEFAULT_PRESERVE_TERMS: &[&str] = &[
    "api", "cli", "json", "xml", "html", "css", "sql", "http", "https", "git", "github", "docker",
    "kubernetes", "python", "javascript", "markdown", "minimark", "function", "class", "method",
    "variable",
];

/// Words shorter than this are passed through.
pub const DEFAULT_MIN_WORD_LEN: usize = 5;

#[derive(Clone)]
pub struct SynonymCompactor {
    lookup: Arc<dyn LexicalRelationLookup>,
    preserve: HashSet<String>,
    min_word_len: usize,
}

impl SynonymCompactor {
    /// Built-in relation table and preserve terms.
    pub fn new() -> Self {
        Self::with_lookup(Arc::new(RelationTable::builtin()))
    }

    pub fn with_lookup(lookup: Arc<dyn LexicalRelationLookup>) -> Self {
        Self {
            lookup,
            preserve: DEFAULT_PRESERVE_TERMS.iter().map(|t| t.to_string()).collect(),
            min_word_len: DEFAULT_MIN_WORD_LEN,
        }
    }

    /// Add terms to the preserve set.
    pub fn preserve<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.preserve.extend(terms.into_iter().map(|t| t.as_ref().to_lowercase()));
        self
    }

    pub fn min_word_len(mut self, len: usize) -> Self {
        self.min_word_len = len;
        self
    }

    pub fn is_preserved(&self, word: &str) -> bool {
        self.preserve.contains(&word.to_lowercase())
    }

    /// Shortest strictly-shorter synonym from the first relation group, if any.
    pub fn shorter_synonym(&self, word: &str) -> Option<String> {
        let groups = self.lookup.lookup(word);
        let first = groups.into_iter().next()?;

        let lowered = word.to_lowercase();
        let best = first
            .iter()
            .map(|c| c.replace('_', " "))
            .filter(|c| c.to_lowercase() != lowered)
            .min_by_key(|c| c.chars().count())?;

        (best.chars().count() < word.chars().count()).then_some(best)
    }

    fn replace_token<'a>(&self, token: &tokenize::Token<'a>) -> Cow<'a, str> {
        if !token.has_letter() || token.char_len() < self.min_word_len || self.is_preserved(token.text) {
            return Cow::Borrowed(token.text);
        }
        match self.shorter_synonym(token.text) {
            Some(synonym) => Cow::Owned(synonym),
            None => Cow::Borrowed(token.text),
        }
    }

    pub fn compact(&self, text: &str) -> String {
        let tokens = tokenize::words(text);
        tokenize::join(tokens.iter().map(|t| (self.replace_token(t), t.spaced)))
    }
}

impl Default for SynonymCompactor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SynonymCompactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynonymCompactor")
            .field("preserve", &self.preserve.len())
            .field("min_word_len", &self.min_word_len)
            .finish()
    }
}

impl TextStage for SynonymCompactor {
    fn strategy(&self) -> Strategy {
        Strategy::Synonyms
    }

    fn apply(&self, text: &str) -> String {
        self.compact(text)
    }
}
