// Unit tests for weighted frequencies and context ranking.

use std::collections::BTreeSet;

use sensegroup::frequency::context::ContextFilter;
use sensegroup::frequency::document::Document;
use sensegroup::frequency::weighted::{group_weighted_frequency, word_weighted_frequency};
use sensegroup::grouping::assemble::SemanticGroup;
use sensegroup::senses::lexicon::StaticLexicon;
use sensegroup::senses::sense::Sense;

fn lexicon() -> StaticLexicon {
    let mut lexicon = StaticLexicon::new();
    lexicon
        .add_word("chair", &["chair.n.01"])
        .add_word("seat", &["seat.n.03"])
        .add_word("pool", &["pool.n.01"])
        .add_word("room", &["room.n.01"]);
    lexicon
}

fn docs(word_lists: &[&[&str]]) -> Vec<Document> {
    let lexicon = lexicon();
    word_lists
        .iter()
        .map(|words| {
            let mut doc = Document::from_words(words.iter().copied());
            doc.resolve_senses(&lexicon);
            doc
        })
        .collect()
}

fn group(senses: &[&str]) -> SemanticGroup {
    SemanticGroup {
        senses: senses.iter().map(|s| Sense::from(*s)).collect(),
        words: BTreeSet::new(),
    }
}

// ============================================================
// word_weighted_frequency
// ============================================================

#[test]
fn word_frequency_two_of_five() {
    let documents = docs(&[
        &["chair", "room"],
        &["pool"],
        &["chair"],
        &["room"],
        &["seat"],
    ]);
    let freq = word_weighted_frequency("chair", &documents).unwrap();
    assert!((freq - 0.4).abs() < 1e-9, "expected 0.4, got {freq}");
}

#[test]
fn word_frequency_absent_word_is_zero() {
    let documents = docs(&[&["chair"], &["room"]]);
    assert_eq!(word_weighted_frequency("sofa", &documents).unwrap(), 0.0);
}

#[test]
fn word_frequency_empty_collection_is_error_not_nan() {
    let result = word_weighted_frequency("chair", &[]);
    assert!(result.is_err());
}

// ============================================================
// group_weighted_frequency
// ============================================================

#[test]
fn group_frequency_counts_any_shared_sense() {
    let documents = docs(&[&["chair"], &["seat"], &["pool"], &["room", "chair"]]);
    let g = group(&["chair.n.01", "seat.n.03"]);
    let freq = group_weighted_frequency(&g, &documents).unwrap();
    assert!((freq - 0.75).abs() < 1e-9);
}

#[test]
fn group_frequency_empty_collection_is_error_not_nan() {
    let err = group_weighted_frequency(&group(&["chair.n.01"]), &[]).unwrap_err();
    assert!(
        err.to_string().contains("empty document collection"),
        "unexpected error: {err}"
    );
}

#[test]
fn group_frequency_uses_senses_not_words() {
    // Document names the word but its senses were never resolved
    let documents = vec![Document::from_words(["chair"])];
    let freq = group_weighted_frequency(&group(&["chair.n.01"]), &documents).unwrap();
    assert_eq!(freq, 0.0);
}

// ============================================================
// ContextFilter
// ============================================================

#[test]
fn context_ranking_prefers_specific_groups() {
    let specific = docs(&[&["pool"], &["pool", "room"], &["pool"], &["room"]]);
    let generic = docs(&[&["room"], &["room"], &["pool"], &["room", "chair"]]);
    let groups = vec![group(&["room.n.01"]), group(&["pool.n.01"]), group(&["chair.n.01"])];

    let ranked = ContextFilter { alpha: 0.1 }
        .rank(&groups, &specific, &generic)
        .unwrap();

    // chair never appears in the specific documents -> dropped
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].group.senses[0].id(), "pool.n.01");
    assert!(ranked[0].ratio > 1.0);
    assert!(ranked[1].ratio < 1.0);
}

#[test]
fn context_ranking_with_zero_alpha_skips_unseen_generic() {
    let specific = docs(&[&["pool"]]);
    let generic = docs(&[&["room"]]);
    let ranked = ContextFilter { alpha: 0.0 }
        .rank(&[group(&["pool.n.01"])], &specific, &generic)
        .unwrap();
    assert!(ranked.is_empty());
}

#[test]
fn context_ranking_empty_generic_fails() {
    let specific = docs(&[&["pool"]]);
    assert!(ContextFilter::default()
        .rank(&[group(&["pool.n.01"])], &specific, &[])
        .is_err());
}
