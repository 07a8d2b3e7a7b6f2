// Sense grouping over the similarity graph.

pub mod assemble;
pub mod clique;
pub mod matrix;
pub mod pivot;
