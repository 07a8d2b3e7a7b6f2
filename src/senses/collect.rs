// Sense collection: turning a word list into the sense set the grouping
// engine works on.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use super::sense::{Sense, SenseWordMap};
use super::traits::LexicalResource;
use crate::frequency::document::Document;

/// Look up every sense of every word.
///
/// Returns the distinct senses in first-seen order alongside the map from
/// each sense back to the words that produced it. Words the resource doesn't
/// know contribute nothing.
pub fn collect_senses<S: AsRef<str>>(
    words: &[S],
    resource: &dyn LexicalResource,
) -> (Vec<Sense>, SenseWordMap) {
    let mut senses = Vec::new();
    let mut seen = HashSet::new();
    let mut word_map = SenseWordMap::new();

    for word in words {
        let word = word.as_ref();
        for sense in resource.senses_of(word) {
            if seen.insert(sense.clone()) {
                senses.push(sense.clone());
            }
            word_map.insert(sense, word);
        }
    }

    debug!(
        words = words.len(),
        senses = senses.len(),
        "Collected senses"
    );

    (senses, word_map)
}

/// Union of the words of every document.
pub fn all_words(documents: &[Document]) -> BTreeSet<String> {
    documents
        .iter()
        .flat_map(|doc| doc.words.iter().cloned())
        .collect()
}

/// Strip the given words from every document's word set.
///
/// Sense sets are left alone; call `Document::resolve_senses` again if they
/// should follow.
pub fn remove_words(documents: &mut [Document], words: &BTreeSet<String>) {
    for doc in documents.iter_mut() {
        doc.words.retain(|w| !words.contains(w));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::senses::lexicon::StaticLexicon;

    fn lexicon() -> StaticLexicon {
        let mut lexicon = StaticLexicon::new();
        lexicon
            .add_word("chair", &["chair.n.01", "seat.n.03"])
            .add_word("seat", &["seat.n.03", "seat.n.04"])
            .add_word("room", &["room.n.01"]);
        lexicon
    }

    #[test]
    fn test_collect_senses_first_seen_order() {
        let (senses, _) = collect_senses(&["chair", "seat", "room"], &lexicon());
        let ids: Vec<&str> = senses.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["chair.n.01", "seat.n.03", "seat.n.04", "room.n.01"]);
    }

    #[test]
    fn test_shared_sense_collects_both_words() {
        let (_, map) = collect_senses(&["chair", "seat"], &lexicon());
        let words = map.words_for(&Sense::from("seat.n.03")).unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.contains("chair") && words.contains("seat"));
    }

    #[test]
    fn test_unknown_word_contributes_nothing() {
        let (senses, map) = collect_senses(&["xyzzy"], &lexicon());
        assert!(senses.is_empty());
        assert!(map.is_empty());
    }

    #[test]
    fn test_remove_words() {
        let mut docs = vec![
            Document::from_words(["chair", "room"]),
            Document::from_words(["seat"]),
        ];
        let stop: BTreeSet<String> = ["room".to_string()].into();
        remove_words(&mut docs, &stop);

        assert_eq!(all_words(&docs).len(), 2);
        assert!(!docs[0].words.contains("room"));
    }
}
