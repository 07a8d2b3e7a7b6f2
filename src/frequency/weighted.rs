// Weighted document frequency of words and groups.
//
// The share of documents that mention a word (or any sense of a group). Used
// to tell topical groups from noise. An empty collection has no meaningful
// share, so both functions refuse it instead of returning NaN.

use anyhow::Result;

use super::document::Document;
use crate::grouping::assemble::SemanticGroup;

/// Fraction of `documents` whose word set contains `word`.
pub fn word_weighted_frequency(word: &str, documents: &[Document]) -> Result<f64> {
    let hits = documents.iter().filter(|doc| doc.contains_word(word)).count();
    share(hits, documents.len(), "word")
}

/// Fraction of `documents` whose sense set intersects the group's senses.
pub fn group_weighted_frequency(group: &SemanticGroup, documents: &[Document]) -> Result<f64> {
    let hits = documents
        .iter()
        .filter(|doc| doc.mentions_group(group))
        .count();
    share(hits, documents.len(), "group")
}

fn share(hits: usize, total: usize, what: &str) -> Result<f64> {
    if total == 0 {
        anyhow::bail!(
            "Cannot compute {what} weighted frequency over an empty document collection (division by zero)"
        );
    }
    Ok(hits as f64 / total as f64)
}
