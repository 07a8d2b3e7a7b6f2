// Lexical resource trait: the seam to whatever knows about word senses.
//
// The grouping engine never talks to a dictionary directly. Anything that can
// list the senses of a word and score two senses against each other can drive
// it: a WordNet binding, a precomputed table, or a test fixture.

use super::sense::Sense;

/// Source of senses and pairwise sense relatedness.
///
/// `Send + Sync` so the similarity matrix can be scored from worker threads.
pub trait LexicalResource: Send + Sync {
    /// All senses the given word can take. Unknown words have none.
    fn senses_of(&self, word: &str) -> Vec<Sense>;

    /// Semantic relatedness of two senses, in [0, 1].
    ///
    /// `None` means the resource has no path between the two senses; the
    /// matrix stores that as 0.0.
    fn relatedness(&self, a: &Sense, b: &Sense) -> Option<f64>;
}
