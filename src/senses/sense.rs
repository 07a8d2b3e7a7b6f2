// Sense identifiers and the sense -> word association map.
//
// A sense is whatever the lexical resource hands back for one meaning of a
// word (e.g. "chair.n.01"). The engine never looks inside the identifier; it
// only compares senses for equality and hashes them.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// One discrete meaning of a word, as identified by the lexical resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sense(String);

impl Sense {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Sense {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Maps each sense to the set of words that can denote it.
///
/// Filled while senses are collected from a word list, then only read.
#[derive(Debug, Clone, Default)]
pub struct SenseWordMap {
    words: HashMap<Sense, BTreeSet<String>>,
}

impl SenseWordMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `word` can denote `sense`. Duplicate words are ignored.
    pub fn insert(&mut self, sense: Sense, word: impl Into<String>) {
        self.words.entry(sense).or_default().insert(word.into());
    }

    /// Words associated with a sense. Unknown senses have no words.
    pub fn words_for(&self, sense: &Sense) -> Option<&BTreeSet<String>> {
        self.words.get(sense)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
