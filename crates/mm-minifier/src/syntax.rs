//! Syntax stage: drop markdown decoration, keep the readable text.

use crate::TextStage;
use mm_core::Strategy;
use regex::Regex;
use std::sync::LazyLock;

// Double-marker emphasis must run before the single-marker forms.
static RE_BOLD_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static RE_ITALIC_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static RE_BOLD_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__([^_]+)__").unwrap());
static RE_ITALIC_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_([^_]+)_").unwrap());

static RE_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s+").unwrap());

// Also matches a closing fence followed by a newline, so the line break after
// a closing fence is removed with it.
static RE_FENCE_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```\w*\n").unwrap());
static RE_INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

static RE_LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());

// `^\s*` spans newlines: a blank line directly before a list item is removed
// along with the marker.
static RE_BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*[-*+]\s+").unwrap());
static RE_ORDERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*\d+\.\s+").unwrap());

static RE_RULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[-*_]{3,}$").unwrap());

static RE_MULTI_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Remove emphasis markers, keeping the emphasized text.
pub fn strip_emphasis(text: &str) -> String {
    let result = RE_BOLD_STAR.replace_all(text, "${1}");
    let result = RE_ITALIC_STAR.replace_all(&result, "${1}");
    let result = RE_BOLD_UNDERSCORE.replace_all(&result, "${1}");
    RE_ITALIC_UNDERSCORE.replace_all(&result, "${1}").into_owned()
}

/// Remove ATX heading markers.
pub fn strip_headings(text: &str) -> String {
    RE_HEADING.replace_all(text, "").into_owned()
}

/// Remove code fences and inline code backticks. Code bodies stay verbatim.
pub fn strip_code_markers(text: &str) -> String {
    let result = RE_FENCE_OPEN.replace_all(text, "");
    let result = result.replace("```", "");
    RE_INLINE_CODE.replace_all(&result, "${1}").into_owned()
}

/// Collapse `[label](url)` to `label`.
pub fn strip_links(text: &str) -> String {
    RE_LINK.replace_all(text, "${1}").into_owned()
}

/// Remove bullet and numbered list markers.
pub fn strip_list_markers(text: &str) -> String {
    let result = RE_BULLET.replace_all(text, "");
    RE_ORDERED.replace_all(&result, "").into_owned()
}

/// Remove horizontal-rule lines.
pub fn strip_rules(text: &str) -> String {
    RE_RULE.replace_all(text, "").into_owned()
}

/// Collapse 3+ newlines to a blank line and trim the document.
pub fn normalize_whitespace(text: &str) -> String {
    RE_MULTI_NEWLINE.replace_all(text, "\n\n").trim().to_string()
}

/// Apply every syntax pass in order.
pub fn strip(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut result = strip_emphasis(text);
    result = strip_headings(&result);
    result = strip_code_markers(&result);
    result = strip_links(&result);
    result = strip_list_markers(&result);
    result = strip_rules(&result);
    normalize_whitespace(&result)
}

/// Stage wrapper around [`strip`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxStripper;

impl SyntaxStripper {
    pub fn new() -> Self {
        Self
    }

    pub fn strip(&self, text: &str) -> String {
        strip(text)
    }
}

impl TextStage for SyntaxStripper {
    fn strategy(&self) -> Strategy {
        Strategy::Syntax
    }

    fn apply(&self, text: &str) -> String {
        self.strip(text)
    }
}
