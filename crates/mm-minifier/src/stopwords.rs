//! Stopword stage: drop low-information words, keep sentence anchors.

use crate::tokenize;
use crate::TextStage;
use mm_core::Strategy;
use std::collections::HashSet;

/// Standard English stopword list.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Politeness and hedging words common in LLM prompts.
pub const LLM_FILLER_WORDS: &[&str] = &[
    "please", "thank", "thanks", "kindly", "could", "would", "maybe", "perhaps", "possibly",
    "probably",
];

/// Case-insensitive stopword filter.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    vocabulary: HashSet<String>,
}

impl StopwordFilter {
    /// English stopwords plus the LLM filler words.
    pub fn new() -> Self {
        Self::with_words(ENGLISH_STOPWORDS.iter().chain(LLM_FILLER_WORDS))
    }

    /// Build from an explicit vocabulary.
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            vocabulary: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Add words to the vocabulary.
    pub fn extend<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.vocabulary.extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.vocabulary.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    /// Filter one sentence. The first token always survives; later tokens are
    /// dropped only when they are alphanumeric stopwords.
    pub fn filter_sentence(&self, sentence: &str) -> String {
        let tokens = tokenize::words(sentence);
        let Some((first, rest)) = tokens.split_first() else {
            return String::new();
        };

        let mut kept = vec![(first.text, false)];
        // Spacing of a dropped run folds into the next kept token, so removing
        // "on" from "sat on." yields "sat." rather than "sat .".
        let mut carried: Option<bool> = None;
        for token in rest {
            if token.is_alphanumeric() && self.is_stopword(token.text) {
                carried = Some(carried.unwrap_or(true) && token.spaced);
                continue;
            }
            let carry = carried.take().unwrap_or(true);
            let spaced = token.spaced && carry;
            kept.push((token.text, spaced));
        }
        tokenize::join(kept)
    }

    pub fn filter(&self, text: &str) -> String {
        tokenize::sentences(text)
            .into_iter()
            .map(|s| self.filter_sentence(s))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextStage for StopwordFilter {
    fn strategy(&self) -> Strategy {
        Strategy::Stopwords
    }

    fn apply(&self, text: &str) -> String {
        self.filter(text)
    }
}
