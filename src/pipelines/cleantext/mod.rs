/*! Dump cleaning pipeline.

Cleans every document of a dump tree and gathers them in a single text file, one document per line.
!*/
mod pipeline;
mod types;

pub use pipeline::{CleanOptions, CleanText};
pub use types::{FileStats, RunStats};
