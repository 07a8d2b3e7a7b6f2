// sensegroup: semantic grouping of word senses.
//
// This is the library root. Words are expanded into senses through a lexical
// resource, senses are connected by pairwise similarity, and every maximal
// clique of that graph becomes a semantic group. Frequency helpers then rank
// groups by how characteristic they are of a document collection.

pub mod config;
pub mod frequency;
pub mod grouping;
pub mod output;
pub mod senses;
