// Senses: identifiers and the lexical resource they come from.

pub mod collect;
pub mod lexicon;
pub mod sense;
pub mod traits;
