// Unit tests for similarity matrix construction and neighbour queries.

use std::sync::atomic::{AtomicUsize, Ordering};

use sensegroup::grouping::matrix::{SimilarityMatrix, DEFAULT_THRESHOLD};
use sensegroup::senses::lexicon::StaticLexicon;
use sensegroup::senses::sense::Sense;
use sensegroup::senses::traits::LexicalResource;

/// Resource that scores by id distance and counts how often it is asked.
struct CountingResource {
    calls: AtomicUsize,
}

impl LexicalResource for CountingResource {
    fn senses_of(&self, _word: &str) -> Vec<Sense> {
        Vec::new()
    }

    fn relatedness(&self, a: &Sense, b: &Sense) -> Option<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let x: f64 = a.id().parse().ok()?;
        let y: f64 = b.id().parse().ok()?;
        Some(1.0 / (1.0 + (x - y).abs()))
    }
}

fn numbered(n: usize) -> Vec<Sense> {
    (0..n).map(|i| Sense::new(i.to_string())).collect()
}

// ============================================================
// Construction
// ============================================================

#[test]
fn each_pair_scored_exactly_once() {
    let resource = CountingResource {
        calls: AtomicUsize::new(0),
    };
    let matrix = SimilarityMatrix::build(&numbered(6), &resource);

    assert_eq!(resource.calls.load(Ordering::SeqCst), 15);
    assert_eq!(matrix.pair_count(), 15);
}

#[test]
fn matrix_is_symmetric() {
    let resource = CountingResource {
        calls: AtomicUsize::new(0),
    };
    let senses = numbered(5);
    let matrix = SimilarityMatrix::build(&senses, &resource);

    for a in &senses {
        for b in &senses {
            assert_eq!(matrix.get(a, b), matrix.get(b, a));
        }
    }
}

#[test]
fn parallel_build_matches_sequential() {
    let resource = CountingResource {
        calls: AtomicUsize::new(0),
    };
    let senses = numbered(12);
    let sequential = SimilarityMatrix::build(&senses, &resource);
    let parallel = SimilarityMatrix::build_parallel(&senses, &resource);

    assert_eq!(sequential.senses(), parallel.senses());
    for a in &senses {
        for b in &senses {
            assert_eq!(sequential.get(a, b), parallel.get(a, b));
        }
    }
}

#[test]
fn empty_input_builds_empty_matrix() {
    let matrix = SimilarityMatrix::build(&[], &StaticLexicon::new());
    assert!(matrix.is_empty());
    assert_eq!(matrix.pair_count(), 0);
}

#[test]
fn unscored_pair_is_zero_not_missing() {
    let mut lexicon = StaticLexicon::new();
    lexicon.add_similarity("a", "b", 0.9);
    let senses = vec![Sense::from("a"), Sense::from("b"), Sense::from("c")];
    let matrix = SimilarityMatrix::build(&senses, &lexicon);

    assert_eq!(matrix.get(&senses[0], &senses[2]), Some(0.0));
    assert_eq!(matrix.get(&senses[0], &Sense::from("zzz")), None);
}

// ============================================================
// Neighbour queries
// ============================================================

#[test]
fn neighbours_exclude_self_and_weak_pairs() {
    let mut lexicon = StaticLexicon::new();
    lexicon
        .add_similarity("chair.n.01", "seat.n.03", 0.9)
        .add_similarity("chair.n.01", "bench.n.01", 0.7)
        .add_similarity("chair.n.01", "room.n.01", 0.3);
    let senses: Vec<Sense> = ["chair.n.01", "seat.n.03", "bench.n.01", "room.n.01"]
        .iter()
        .map(|s| Sense::from(*s))
        .collect();
    let matrix = SimilarityMatrix::build(&senses, &lexicon);

    let neighbours = matrix.neighbours(&senses[0], DEFAULT_THRESHOLD);
    assert_eq!(neighbours.len(), 2);
    assert!(neighbours.contains(&senses[1]));
    assert!(neighbours.contains(&senses[2]));
    assert!(!neighbours.contains(&senses[0]));
}

#[test]
fn neighbours_follow_custom_threshold() {
    let resource = CountingResource {
        calls: AtomicUsize::new(0),
    };
    let senses = numbered(4);
    let matrix = SimilarityMatrix::build(&senses, &resource);

    // 0 vs 1 scores 0.5, 0 vs 2 scores 0.333, 0 vs 3 scores 0.25
    assert_eq!(matrix.neighbours(&senses[0], 0.3).len(), 2);
    assert_eq!(matrix.neighbours(&senses[0], 0.6).len(), 0);
    assert_eq!(matrix.neighbours(&senses[0], 0.0).len(), 3);
}
