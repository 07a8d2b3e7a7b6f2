// Pivot selection for the clique search.
//
// Any vertex of P ∪ X is a valid pivot; the choice only changes which
// branches get pruned first, never which cliques are found. Random choice is
// the default. Tests and reproducible runs use a fixed seed or `First`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks the pivot vertex for one level of the search.
pub trait PivotRule {
    /// Choose a vertex from the concatenation `candidates ++ excluded`.
    ///
    /// Returns `None` only when both are empty.
    fn choose(&mut self, candidates: &[usize], excluded: &[usize]) -> Option<usize>;
}

/// Always the first vertex of `candidates ++ excluded`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPivot;

impl PivotRule for FirstPivot {
    fn choose(&mut self, candidates: &[usize], excluded: &[usize]) -> Option<usize> {
        candidates.first().or_else(|| excluded.first()).copied()
    }
}

/// Uniformly random vertex over `candidates ++ excluded`.
#[derive(Debug, Clone)]
pub struct RandomPivot {
    rng: StdRng,
}

impl RandomPivot {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl PivotRule for RandomPivot {
    fn choose(&mut self, candidates: &[usize], excluded: &[usize]) -> Option<usize> {
        let total = candidates.len() + excluded.len();
        if total == 0 {
            return None;
        }
        let index = self.rng.random_range(0..total);
        if index < candidates.len() {
            Some(candidates[index])
        } else {
            Some(excluded[index - candidates.len()])
        }
    }
}

/// Configurable choice of pivot rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotStrategy {
    First,
    Random { seed: Option<u64> },
}

impl Default for PivotStrategy {
    fn default() -> Self {
        PivotStrategy::Random { seed: None }
    }
}

impl PivotStrategy {
    pub fn rule(&self) -> Box<dyn PivotRule> {
        match *self {
            PivotStrategy::First => Box::new(FirstPivot),
            PivotStrategy::Random { seed: Some(seed) } => Box::new(RandomPivot::seeded(seed)),
            PivotStrategy::Random { seed: None } => Box::new(RandomPivot::from_entropy()),
        }
    }
}
