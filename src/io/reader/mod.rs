/*! Dump reading utilities

Input files hold one JSON document per line.
!*/
mod docreader;

pub use docreader::{DocReader, Reader};
