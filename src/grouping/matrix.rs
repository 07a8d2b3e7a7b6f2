// Pairwise sense similarity matrix and neighbour queries.
//
// Every unordered pair of distinct senses is scored once through the lexical
// resource and written to both (a, b) and (b, a), so lookups never need to
// care about order. Scoring is O(n^2) resource calls and dominates the cost
// of grouping, which is why a rayon-backed build is offered next to the
// sequential one.
//
// The similarity graph is implicit: two senses are adjacent when their score
// meets the threshold.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use rayon::prelude::*;
use tracing::info;

use crate::senses::sense::Sense;
use crate::senses::traits::LexicalResource;

/// Default similarity a pair needs to count as an edge of the graph.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Symmetric table of similarity scores over a fixed set of senses.
#[derive(Debug, Clone, Default)]
pub struct SimilarityMatrix {
    senses: Vec<Sense>,
    index: HashMap<Sense, usize>,
    /// Row-major n x n scores. The diagonal is never read.
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Score every pair of `senses` sequentially.
    pub fn build(senses: &[Sense], resource: &dyn LexicalResource) -> Self {
        let started = Instant::now();
        let mut matrix = Self::with_senses(senses);
        let n = matrix.senses.len();

        for i in 0..n {
            for j in (i + 1)..n {
                let score = score_pair(resource, &matrix.senses[i], &matrix.senses[j]);
                matrix.store(i, j, score);
            }
        }

        info!(
            senses = n,
            pairs = matrix.pair_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Built sense similarity matrix"
        );
        matrix
    }

    /// Same result as `build`, with pairs scored on the rayon pool.
    pub fn build_parallel(senses: &[Sense], resource: &dyn LexicalResource) -> Self {
        let started = Instant::now();
        let mut matrix = Self::with_senses(senses);
        let n = matrix.senses.len();

        let scored: Vec<(usize, usize, f64)> = {
            let senses = &matrix.senses;
            (0..n)
                .into_par_iter()
                .flat_map_iter(|i| {
                    ((i + 1)..n).map(move |j| (i, j, score_pair(resource, &senses[i], &senses[j])))
                })
                .collect()
        };

        for (i, j, score) in scored {
            matrix.store(i, j, score);
        }

        info!(
            senses = n,
            pairs = matrix.pair_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Built sense similarity matrix (parallel)"
        );
        matrix
    }

    /// Build from explicit scores, e.g. a cached matrix. Pairs not listed
    /// score 0.0; pairs naming a sense outside `senses` are ignored.
    pub fn from_scores(senses: &[Sense], pairs: &[(Sense, Sense, f64)]) -> Self {
        let mut matrix = Self::with_senses(senses);
        for (a, b, score) in pairs {
            if let (Some(&i), Some(&j)) = (matrix.index.get(a), matrix.index.get(b)) {
                if i != j {
                    matrix.store(i, j, sanitize(Some(*score)));
                }
            }
        }
        matrix
    }

    fn with_senses(senses: &[Sense]) -> Self {
        let mut unique = Vec::with_capacity(senses.len());
        let mut index = HashMap::with_capacity(senses.len());
        for sense in senses {
            if !index.contains_key(sense) {
                index.insert(sense.clone(), unique.len());
                unique.push(sense.clone());
            }
        }
        let n = unique.len();
        Self {
            senses: unique,
            index,
            scores: vec![0.0; n * n],
        }
    }

    fn store(&mut self, i: usize, j: usize, score: f64) {
        let n = self.senses.len();
        self.scores[i * n + j] = score;
        self.scores[j * n + i] = score;
    }

    /// Similarity of two distinct senses. `None` for self-pairs and for
    /// senses the matrix wasn't built over.
    pub fn get(&self, a: &Sense, b: &Sense) -> Option<f64> {
        let i = *self.index.get(a)?;
        let j = *self.index.get(b)?;
        self.get_by_index(i, j)
    }

    pub(crate) fn get_by_index(&self, i: usize, j: usize) -> Option<f64> {
        let n = self.senses.len();
        if i == j || i >= n || j >= n {
            return None;
        }
        Some(self.scores[i * n + j])
    }

    /// Every other sense whose similarity to `sense` meets `threshold`.
    ///
    /// A sense the matrix doesn't know has no neighbours.
    pub fn neighbours(&self, sense: &Sense, threshold: f64) -> HashSet<Sense> {
        match self.index.get(sense) {
            Some(&i) => self
                .neighbour_indices(i, threshold)
                .map(|j| self.senses[j].clone())
                .collect(),
            None => HashSet::new(),
        }
    }

    pub(crate) fn neighbour_indices(
        &self,
        i: usize,
        threshold: f64,
    ) -> impl Iterator<Item = usize> + '_ {
        (0..self.senses.len())
            .filter(move |&j| self.get_by_index(i, j).is_some_and(|s| s >= threshold))
    }

    pub(crate) fn index_of(&self, sense: &Sense) -> Option<usize> {
        self.index.get(sense).copied()
    }

    pub fn senses(&self) -> &[Sense] {
        &self.senses
    }

    pub fn len(&self) -> usize {
        self.senses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }

    /// Number of unordered pairs held.
    pub fn pair_count(&self) -> usize {
        let n = self.senses.len();
        n * n.saturating_sub(1) / 2
    }
}

fn score_pair(resource: &dyn LexicalResource, a: &Sense, b: &Sense) -> f64 {
    sanitize(resource.relatedness(a, b))
}

// Missing scores count as unrelated; anything outside [0, 1] is clamped.
fn sanitize(score: Option<f64>) -> f64 {
    match score {
        Some(s) if s.is_finite() => s.clamp(0.0, 1.0),
        _ => 0.0,
    }
}
