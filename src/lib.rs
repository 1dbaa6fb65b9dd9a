//! # dumpclean
//!
//! Cleans line-delimited JSON text dumps into a flat text corpus,
//! one lowercase ASCII document per line.
//!
//! This project can be used both as a tool or as a lib to integrate
//! text cleaning into other projects.
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipelines;
pub mod processing;
pub mod sources;
pub mod transformers;
