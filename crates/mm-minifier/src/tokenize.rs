//! Sentence and word tokenization shared by the word-level stages.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static RE_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}_]+(?:['’-][\p{L}\p{N}_]+)*|[^\s\p{L}\p{N}_]+").unwrap()
});

/// A terminal punctuation run (plus closing quotes/brackets) followed by
/// whitespace, or a blank line.
static RE_SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[.!?]+["'”’)\]]*\s+|\n[ \t]*\n\s*"#).unwrap()
});

static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "e.g", "i.e", "etc", "vs", "cf", "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st",
        "approx", "fig", "inc", "ltd",
    ]
    .into_iter()
    .collect()
});

/// A word or punctuation token borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Whether whitespace separated this token from the previous one.
    pub spaced: bool,
}

impl Token<'_> {
    /// Letters and digits only.
    pub fn is_alphanumeric(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_alphanumeric)
    }

    pub fn has_letter(&self) -> bool {
        self.text.chars().any(char::is_alphabetic)
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Split text into word and punctuation tokens. Runs of punctuation form one
/// token; whitespace is dropped but remembered in [`Token::spaced`].
pub fn words(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last_end = 0;
    for m in RE_WORD.find_iter(text) {
        tokens.push(Token {
            text: m.as_str(),
            spaced: m.start() > last_end,
        });
        last_end = m.end();
    }
    tokens
}

/// Split text into trimmed, non-empty sentences.
///
/// Breaks after `.`, `!` or `?` followed by whitespace (unless the preceding
/// word is a known abbreviation) and at blank lines.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;

    for m in RE_SENTENCE_BREAK.find_iter(text) {
        let matched = m.as_str();
        let end = if matched.starts_with('\n') {
            m.start()
        } else {
            let punct_len = matched.trim_end().len();
            if ends_with_abbreviation(&text[start..m.start()]) && matched.starts_with('.') {
                continue;
            }
            m.start() + punct_len
        };
        push_trimmed(&mut out, &text[start..end]);
        start = m.end();
    }
    push_trimmed(&mut out, &text[start..]);
    out
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, s: &'a str) {
    let s = s.trim();
    if !s.is_empty() {
        out.push(s);
    }
}

fn ends_with_abbreviation(before: &str) -> bool {
    let last = before
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    ABBREVIATIONS.contains(last.as_str())
}

/// Rejoin tokens: a single space where the source had whitespace, nothing
/// where the tokens were adjacent.
pub fn join<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = (S, bool)>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (text, spaced) in tokens {
        if spaced && !out.is_empty() {
            out.push(' ');
        }
        out.push_str(text.as_ref());
    }
    out
}
