// Table-backed lexical resource.
//
// Holds a word -> senses index and a precomputed relatedness table. The CLI
// loads one from a JSON file exported from a real lexical database; tests
// build them by hand. File layout:
//
//   {
//     "senses": { "chair": ["chair.n.01", "seat.n.03"] },
//     "similarities": [ { "a": "chair.n.01", "b": "seat.n.03", "score": 0.82 } ]
//   }

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use super::sense::Sense;
use super::traits::LexicalResource;

#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    senses: HashMap<String, Vec<Sense>>,
    #[serde(default)]
    similarities: Vec<SimilarityEntry>,
}

#[derive(Debug, Deserialize)]
struct SimilarityEntry {
    a: Sense,
    b: Sense,
    score: f64,
}

/// In-memory lexical resource backed by explicit tables.
#[derive(Debug, Clone, Default)]
pub struct StaticLexicon {
    word_senses: HashMap<String, Vec<Sense>>,
    scores: HashMap<(Sense, Sense), f64>,
}

impl StaticLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the senses of a word, appending to any already known.
    pub fn add_word(&mut self, word: &str, senses: &[&str]) -> &mut Self {
        let entry = self.word_senses.entry(word.to_string()).or_default();
        for id in senses {
            let sense = Sense::from(*id);
            if !entry.contains(&sense) {
                entry.push(sense);
            }
        }
        self
    }

    /// Record the relatedness of two senses. Order of the pair doesn't matter.
    pub fn add_similarity(&mut self, a: &str, b: &str, score: f64) -> &mut Self {
        self.scores
            .insert(pair_key(&Sense::from(a), &Sense::from(b)), score);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: LexiconFile =
            serde_json::from_str(json).context("Failed to parse lexicon JSON")?;

        let mut lexicon = Self::new();
        for (word, senses) in file.senses {
            let entry = lexicon.word_senses.entry(word).or_default();
            for sense in senses {
                if !entry.contains(&sense) {
                    entry.push(sense);
                }
            }
        }
        for entry in file.similarities {
            if !(0.0..=1.0).contains(&entry.score) {
                anyhow::bail!(
                    "Similarity between {} and {} is {}; scores must be within [0, 1]",
                    entry.a,
                    entry.b,
                    entry.score
                );
            }
            lexicon.scores.insert(pair_key(&entry.a, &entry.b), entry.score);
        }

        debug!(
            words = lexicon.word_senses.len(),
            pairs = lexicon.scores.len(),
            "Loaded lexicon"
        );

        Ok(lexicon)
    }

    /// Load a lexicon from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid lexicon file {}", path.display()))
    }

    pub fn word_count(&self) -> usize {
        self.word_senses.len()
    }
}

impl LexicalResource for StaticLexicon {
    fn senses_of(&self, word: &str) -> Vec<Sense> {
        self.word_senses.get(word).cloned().unwrap_or_default()
    }

    fn relatedness(&self, a: &Sense, b: &Sense) -> Option<f64> {
        if a == b {
            return Some(1.0);
        }
        self.scores.get(&pair_key(a, b)).copied()
    }
}

fn pair_key(a: &Sense, b: &Sense) -> (Sense, Sense) {
    if a.id() <= b.id() {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}
