//! Data sources.
//!
//! Only dump trees (`root/folder/file`) are supported for now.
mod dump;

pub use dump::{DumpTree, DEFAULT_PATTERN};
