// A document as the frequency filters see it: the words it contains and the
// senses those words can take.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::grouping::assemble::SemanticGroup;
use crate::senses::sense::Sense;
use crate::senses::traits::LexicalResource;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub words: BTreeSet<String>,
    #[serde(default)]
    pub senses: HashSet<Sense>,
}

impl Document {
    /// A document with the given words and no senses yet.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            senses: HashSet::new(),
        }
    }

    /// Replace the sense set with the union of the senses of every word.
    pub fn resolve_senses(&mut self, resource: &dyn LexicalResource) {
        self.senses = self
            .words
            .iter()
            .flat_map(|word| resource.senses_of(word))
            .collect();
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// True if the document shares at least one sense with the group.
    pub fn mentions_group(&self, group: &SemanticGroup) -> bool {
        group.senses.iter().any(|sense| self.senses.contains(sense))
    }
}

/// Load a JSON array of documents and resolve each one's senses.
pub fn load_documents(path: &Path, resource: &dyn LexicalResource) -> Result<Vec<Document>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read documents file {}", path.display()))?;
    let mut documents: Vec<Document> = serde_json::from_str(&json)
        .with_context(|| format!("Invalid documents file {}", path.display()))?;
    for doc in &mut documents {
        doc.resolve_senses(resource);
    }
    Ok(documents)
}
