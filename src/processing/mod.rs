/*! Content processing

Contains structures and functions to aggregate data from an already cleaned corpus.
!*/
pub mod matrix;
pub mod vocabulary;

pub use matrix::{build_matrix, Cooccurrence};
pub use vocabulary::{build_vocabulary, Vocabulary, WordStats};
