//! Lexical relation lookup: word -> ordered groups of interchangeable words.

use mm_core::{MmError, Result};
use moka::sync::Cache;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Read-only synonym source. Groups are ordered most-common sense first; an
/// empty result means the word is unknown. Multi-word entries use `_` between
/// words.
pub trait LexicalRelationLookup: Send + Sync {
    fn lookup(&self, word: &str) -> Vec<Vec<String>>;
}

impl<T: LexicalRelationLookup + ?Sized> LexicalRelationLookup for Arc<T> {
    fn lookup(&self, word: &str) -> Vec<Vec<String>> {
        (**self).lookup(word)
    }
}

/// Built-in relation groups. Each entry lists the first sense only.
const BUILTIN_RELATIONS: &[(&str, &[&str])] = &[
    ("additional", &["extra", "additional", "further"]),
    ("approximately", &["approximately", "about", "close_to", "just_about", "roughly", "more_or_less", "around", "or_so"]),
    ("assistance", &["aid", "assistance", "help"]),
    ("attempt", &["attempt", "effort", "endeavor", "endeavour", "try"]),
    ("automobile", &["car", "auto", "automobile", "machine", "motorcar"]),
    ("begin", &["begin", "get", "start_out", "start", "set_about", "set_out", "commence"]),
    ("commence", &["begin", "get", "start_out", "start", "set_about", "set_out", "commence"]),
    ("complete", &["complete", "finish"]),
    ("consider", &["see", "consider", "reckon", "view", "regard"]),
    ("construct", &["construct", "build", "make"]),
    ("create", &["make", "create"]),
    ("demonstrate", &["demonstrate", "show", "establish", "prove", "shew"]),
    ("difficult", &["difficult", "hard"]),
    ("document", &["document", "written_document", "papers"]),
    ("enormous", &["enormous", "tremendous"]),
    ("ensure", &["guarantee", "ensure", "insure", "assure", "secure"]),
    ("frequently", &["frequently", "often", "oftentimes", "oft", "oftimes"]),
    ("function", &["function", "mathematical_function", "single-valued_function", "map", "mapping"]),
    ("however", &["however", "nevertheless", "withal", "still", "yet", "all_the_same", "even_so", "nonetheless", "notwithstanding"]),
    ("immediately", &["immediately", "instantly", "straightaway", "straight_off", "directly", "now", "right_away", "at_once", "forthwith"]),
    ("information", &["information", "info"]),
    ("initial", &["initial", "first"]),
    ("instruction", &["direction", "instruction"]),
    ("large", &["large", "big"]),
    ("maintain", &["keep", "maintain", "hold"]),
    ("method", &["method"]),
    ("modify", &["modify", "change", "alter"]),
    ("necessary", &["necessary", "essential", "needed", "required", "requisite"]),
    ("numerous", &["numerous", "legion"]),
    ("objective", &["aim", "object", "objective", "target"]),
    ("obtain", &["get", "acquire", "obtain"]),
    ("occurrence", &["happening", "occurrence", "occurrent", "natural_event"]),
    ("previous", &["previous", "old"]),
    ("provide", &["supply", "provide", "render", "furnish"]),
    ("purchase", &["purchase", "buy"]),
    ("question", &["question", "inquiry", "enquiry", "query", "interrogation"]),
    ("quickly", &["quickly", "rapidly", "speedily", "chop-chop", "apace"]),
    ("receive", &["receive", "have"]),
    ("remainder", &["balance", "remainder", "residual", "residue", "residuum", "rest"]),
    ("request", &["request", "petition", "postulation"]),
    ("require", &["necessitate", "ask", "postulate", "need", "require", "take", "involve", "call_for", "demand"]),
    ("significant", &["significant", "important"]),
    ("sufficient", &["sufficient"]),
    ("therefore", &["therefore", "hence", "thence", "thus"]),
    ("understand", &["understand"]),
    ("utilize", &["use", "utilize", "utilise", "apply", "employ"]),
    ("various", &["assorted", "various"]),
];

/// In-memory relation table keyed by lower-cased word.
#[derive(Debug, Clone, Default)]
pub struct RelationTable {
    entries: HashMap<String, Vec<Vec<String>>>,
}

impl RelationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the crate.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (word, group) in BUILTIN_RELATIONS {
            table.insert(*word, vec![group.iter().map(|s| s.to_string()).collect()]);
        }
        table
    }

    /// Parse `{"word": [["syn", "other_syn"], ...], ...}`.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<Vec<String>>> = serde_json::from_str(s)?;
        let mut table = Self::new();
        for (word, groups) in raw {
            table.insert(word, groups);
        }
        Ok(table)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MmError::NotFound { path: path.to_path_buf() });
        }
        let raw = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&raw)
            .map_err(|e| MmError::Lexicon(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), entries = table.len(), "loaded relation table");
        Ok(table)
    }

    /// Append groups for a word. Earlier groups keep precedence.
    pub fn insert(&mut self, word: impl AsRef<str>, groups: Vec<Vec<String>>) {
        self.entries
            .entry(word.as_ref().to_lowercase())
            .or_default()
            .extend(groups);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LexicalRelationLookup for RelationTable {
    fn lookup(&self, word: &str) -> Vec<Vec<String>> {
        self.entries.get(&word.to_lowercase()).cloned().unwrap_or_default()
    }
}

/// Memoizing front for a slow lookup (disk- or service-backed).
pub struct CachedLookup<L> {
    inner: L,
    cache: Cache<String, Arc<Vec<Vec<String>>>>,
}

impl<L: LexicalRelationLookup> CachedLookup<L> {
    pub fn new(inner: L, capacity: u64) -> Self {
        Self {
            inner,
            cache: Cache::new(capacity),
        }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }
}

impl<L: LexicalRelationLookup> LexicalRelationLookup for CachedLookup<L> {
    fn lookup(&self, word: &str) -> Vec<Vec<String>> {
        let key = word.to_lowercase();
        let groups = self
            .cache
            .get_with(key, || Arc::new(self.inner.lookup(word)));
        groups.as_ref().clone()
    }
}
