// Semantic groups: maximal cliques annotated with the words behind them.
//
// `build_groups` is the whole pipeline: words -> senses -> similarity matrix
// -> maximal cliques -> groups. Each clique becomes exactly one group; groups
// from different cliques may overlap but are never merged.

use std::collections::BTreeSet;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::clique::{CliqueEnumerator, SearchBudget};
use super::matrix::{SimilarityMatrix, DEFAULT_THRESHOLD};
use super::pivot::PivotStrategy;
use crate::senses::collect::collect_senses;
use crate::senses::sense::{Sense, SenseWordMap};
use crate::senses::traits::LexicalResource;

/// A maximal clique of senses plus every word that can denote one of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticGroup {
    /// Clique members, in the order the search added them
    pub senses: Vec<Sense>,
    /// Union of the words of all member senses
    pub words: BTreeSet<String>,
}

impl SemanticGroup {
    pub fn contains_sense(&self, sense: &Sense) -> bool {
        self.senses.contains(sense)
    }

    /// True if any sense of `word` belongs to this group.
    pub fn matches_word(&self, word: &str, resource: &dyn LexicalResource) -> bool {
        resource
            .senses_of(word)
            .iter()
            .any(|sense| self.contains_sense(sense))
    }

    /// Short label built from the first few words.
    pub fn label(&self) -> String {
        let label_words: Vec<&str> = self.words.iter().take(3).map(|s| s.as_str()).collect();
        label_words.join(" / ")
    }
}

/// Turn each clique into a group, keeping discovery order.
pub fn assemble(cliques: &[Vec<Sense>], word_map: &SenseWordMap) -> Vec<SemanticGroup> {
    cliques
        .iter()
        .map(|clique| {
            let words = clique
                .iter()
                .filter_map(|sense| word_map.words_for(sense))
                .flat_map(|words| words.iter().cloned())
                .collect();
            SemanticGroup {
                senses: clique.clone(),
                words,
            }
        })
        .collect()
}

/// Tunables for one grouping run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupingParams {
    /// Minimum similarity for two senses to be connected
    pub threshold: f64,
    pub pivot: PivotStrategy,
    pub budget: SearchBudget,
    /// Score the similarity matrix on the rayon pool
    pub parallel: bool,
}

impl Default for GroupingParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            pivot: PivotStrategy::default(),
            budget: SearchBudget::default(),
            parallel: false,
        }
    }
}

/// Output of `build_groups`.
#[derive(Debug, Clone, Default)]
pub struct GroupingOutcome {
    pub groups: Vec<SemanticGroup>,
    /// True when the clique search hit its budget and `groups` is partial
    pub budget_exceeded: bool,
    pub sense_count: usize,
}

/// Group the senses of `words` into semantic groups.
pub fn build_groups<S: AsRef<str>>(
    words: &[S],
    resource: &dyn LexicalResource,
    params: &GroupingParams,
) -> GroupingOutcome {
    let started = Instant::now();
    let (senses, word_map) = collect_senses(words, resource);
    info!(senses = senses.len(), "Building sense groups");

    let matrix = if params.parallel {
        SimilarityMatrix::build_parallel(&senses, resource)
    } else {
        SimilarityMatrix::build(&senses, resource)
    };

    let search = CliqueEnumerator::new(&matrix, params.threshold, params.pivot.rule())
        .with_budget(params.budget)
        .enumerate();

    let groups = assemble(&search.cliques, &word_map);

    info!(
        groups = groups.len(),
        budget_exceeded = search.budget_exceeded,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Finished sense groups"
    );

    GroupingOutcome {
        groups,
        budget_exceeded: search.budget_exceeded,
        sense_count: senses.len(),
    }
}
