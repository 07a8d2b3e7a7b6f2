// Document frequency of words and groups.

pub mod context;
pub mod document;
pub mod weighted;
