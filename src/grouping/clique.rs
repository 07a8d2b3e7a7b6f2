// Maximal clique enumeration: Bron-Kerbosch with pivoting.
//
// Vertices are matrix indices. Each call works on a candidate list P and an
// excluded list X. The caller's loop mutates its own P and X in place: after
// a branch on `v` returns, `v` moves from P to X, and every later sibling at
// the same level sees that move. Children get freshly built lists (P ∩ N(v),
// X ∩ N(v)) and the clique is extended by copy, so nothing leaks between
// levels. Breaking either rule loses cliques or reports non-maximal ones.
//
// The search is exponential on dense graphs. A `SearchBudget` caps the number
// of recorded cliques and/or recursive calls; when it trips the search
// unwinds and returns what it found so far, flagged as incomplete.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::matrix::SimilarityMatrix;
use super::pivot::PivotRule;
use crate::senses::sense::Sense;

/// Limits on how much work one enumeration may do. `None` means unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchBudget {
    /// Record at most this many maximal cliques. Finding one more stops the
    /// search and marks it incomplete.
    pub max_cliques: Option<usize>,
    /// Stop after this many calls to the recursive search.
    pub max_calls: Option<usize>,
}

impl SearchBudget {
    pub fn unlimited() -> Self {
        Self::default()
    }
}

/// Result of one enumeration.
#[derive(Debug, Clone, Default)]
pub struct CliqueSearch {
    /// Maximal cliques in discovery order; members in the order they were added.
    pub cliques: Vec<Vec<Sense>>,
    /// True when the budget stopped the search before it finished.
    pub budget_exceeded: bool,
    /// Number of recursive calls made.
    pub calls: usize,
}

/// Enumerates every maximal clique of the graph induced by `threshold`.
pub struct CliqueEnumerator<'a> {
    matrix: &'a SimilarityMatrix,
    threshold: f64,
    pivot: Box<dyn PivotRule + 'a>,
    budget: SearchBudget,
}

impl<'a> CliqueEnumerator<'a> {
    pub fn new(
        matrix: &'a SimilarityMatrix,
        threshold: f64,
        pivot: Box<dyn PivotRule + 'a>,
    ) -> Self {
        Self {
            matrix,
            threshold,
            pivot,
            budget: SearchBudget::default(),
        }
    }

    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Enumerate the maximal cliques among all senses of the matrix.
    pub fn enumerate(&mut self) -> CliqueSearch {
        let all: Vec<usize> = (0..self.matrix.len()).collect();
        self.run(all)
    }

    /// Enumerate the maximal cliques of the subgraph spanned by `senses`.
    ///
    /// Senses missing from the matrix still take part, as isolated vertices.
    pub fn enumerate_over(&mut self, senses: &[Sense]) -> CliqueSearch {
        let mut vertices = Vec::with_capacity(senses.len());
        let mut extra = Vec::new();
        for sense in senses {
            match self.matrix.index_of(sense) {
                Some(i) if !vertices.contains(&i) => vertices.push(i),
                Some(_) => {}
                None if !extra.contains(sense) => extra.push(sense.clone()),
                None => {}
            }
        }

        let mut search = self.run(vertices);

        // Unknown senses have no neighbours, so each one is its own maximal clique.
        for sense in extra {
            if search.budget_exceeded || self.clique_limit_reached(search.cliques.len()) {
                search.budget_exceeded = true;
                break;
            }
            search.cliques.push(vec![sense]);
        }
        search
    }

    fn run(&mut self, vertices: Vec<usize>) -> CliqueSearch {
        if vertices.is_empty() {
            return CliqueSearch::default();
        }

        let adjacency = self.adjacency(&vertices);
        let mut state = SearchState {
            adjacency: &adjacency,
            pivot: self.pivot.as_mut(),
            budget: self.budget,
            cliques: Vec::new(),
            calls: 0,
            exceeded: false,
        };

        let mut candidates = vertices;
        let mut excluded = Vec::new();
        state.search(Vec::new(), &mut candidates, &mut excluded);

        let SearchState {
            cliques,
            calls,
            exceeded,
            ..
        } = state;

        if exceeded {
            warn!(
                cliques = cliques.len(),
                calls,
                max_cliques = ?self.budget.max_cliques,
                max_calls = ?self.budget.max_calls,
                "Clique search budget exceeded, returning partial results"
            );
        } else {
            debug!(cliques = cliques.len(), calls, "Clique search finished");
        }

        CliqueSearch {
            cliques: cliques
                .into_iter()
                .map(|clique| {
                    clique
                        .into_iter()
                        .map(|i| self.matrix.senses()[i].clone())
                        .collect()
                })
                .collect(),
            budget_exceeded: exceeded,
            calls,
        }
    }

    /// Neighbour sets for every vertex, restricted to the searched vertices.
    fn adjacency(&self, vertices: &[usize]) -> Vec<HashSet<usize>> {
        let in_scope: HashSet<usize> = vertices.iter().copied().collect();
        let mut adjacency = vec![HashSet::new(); self.matrix.len()];
        for &v in vertices {
            adjacency[v] = self
                .matrix
                .neighbour_indices(v, self.threshold)
                .filter(|u| in_scope.contains(u))
                .collect();
        }
        adjacency
    }

    fn clique_limit_reached(&self, found: usize) -> bool {
        self.budget.max_cliques.is_some_and(|max| found >= max)
    }
}

struct SearchState<'s> {
    adjacency: &'s [HashSet<usize>],
    pivot: &'s mut dyn PivotRule,
    budget: SearchBudget,
    cliques: Vec<Vec<usize>>,
    calls: usize,
    exceeded: bool,
}

impl SearchState<'_> {
    fn search(
        &mut self,
        clique: Vec<usize>,
        candidates: &mut Vec<usize>,
        excluded: &mut Vec<usize>,
    ) {
        if self.exceeded {
            return;
        }
        self.calls += 1;
        if self.budget.max_calls.is_some_and(|max| self.calls > max) {
            self.exceeded = true;
            return;
        }

        if candidates.is_empty() && excluded.is_empty() {
            // A maximal clique past the cap means the list is truly partial.
            if self.budget.max_cliques.is_some_and(|max| self.cliques.len() >= max) {
                self.exceeded = true;
                return;
            }
            self.cliques.push(clique);
            return;
        }

        let Some(pivot) = self.pivot.choose(candidates, excluded) else {
            return;
        };
        let adjacency = self.adjacency;
        let pivot_neighbours = &adjacency[pivot];

        // Snapshot: `candidates` shrinks inside the loop.
        let branch_set: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|v| !pivot_neighbours.contains(v))
            .collect();

        for vertex in branch_set {
            let vertex_neighbours = &adjacency[vertex];
            let mut new_candidates: Vec<usize> = candidates
                .iter()
                .copied()
                .filter(|v| vertex_neighbours.contains(v))
                .collect();
            let mut new_excluded: Vec<usize> = excluded
                .iter()
                .copied()
                .filter(|v| vertex_neighbours.contains(v))
                .collect();

            let mut extended = clique.clone();
            extended.push(vertex);
            self.search(extended, &mut new_candidates, &mut new_excluded);

            if self.exceeded {
                return;
            }

            if let Some(pos) = candidates.iter().position(|&v| v == vertex) {
                candidates.remove(pos);
            }
            excluded.push(vertex);
        }
    }
}
