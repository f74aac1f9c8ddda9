use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One of the four rewrite stages.
///
/// The variant order is the canonical execution order; `StrategySet` relies on
/// the derived `Ord` to iterate in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Syntax,
    Stopwords,
    Simplify,
    Synonyms,
}

impl Strategy {
    /// All strategies in canonical order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Syntax,
        Strategy::Stopwords,
        Strategy::Simplify,
        Strategy::Synonyms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Stopwords => "stopwords",
            Self::Simplify => "simplify",
            Self::Synonyms => "synonyms",
        }
    }

    /// Exact, case-sensitive tag match.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "syntax" => Some(Self::Syntax),
            "stopwords" => Some(Self::Stopwords),
            "simplify" => Some(Self::Simplify),
            "synonyms" => Some(Self::Synonyms),
            _ => None,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unordered selection of strategies. Duplicates collapse; iteration is always
/// canonical regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategySet {
    inner: BTreeSet<Strategy>,
}

impl StrategySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Strategy::ALL.into_iter().collect()
    }

    /// Build from raw tags. Unknown tags are ignored.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter()
            .filter_map(|t| Strategy::from_tag(t.as_ref()))
            .collect()
    }

    /// Like [`StrategySet::from_tags`], but also understands the `all` and
    /// `none` aliases. `all` takes precedence over `none`.
    pub fn from_tags_with_aliases<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags: Vec<S> = tags.into_iter().collect();
        if tags.iter().any(|t| t.as_ref() == "all") {
            return Self::all();
        }
        if tags.iter().any(|t| t.as_ref() == "none") {
            return Self::new();
        }
        Self::from_tags(tags)
    }

    pub fn insert(&mut self, strategy: Strategy) -> bool {
        self.inner.insert(strategy)
    }

    pub fn with(mut self, strategy: Strategy) -> Self {
        self.inner.insert(strategy);
        self
    }

    pub fn contains(&self, strategy: Strategy) -> bool {
        self.inner.contains(&strategy)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Iterate in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Strategy> + '_ {
        self.inner.iter().copied()
    }

    pub fn tags(&self) -> Vec<&'static str> {
        self.iter().map(|s| s.as_str()).collect()
    }
}

impl FromIterator<Strategy> for StrategySet {
    fn from_iter<T: IntoIterator<Item = Strategy>>(iter: T) -> Self {
        Self { inner: iter.into_iter().collect() }
    }
}

impl fmt::Display for StrategySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        f.write_str(&self.tags().join(", "))
    }
}
