/*!
# IO utilities

Document loading (line-delimited JSON), stopword list loading and cleaned text saving.

The user-facing objects are [reader::DocReader], which iterates over the `text` field of documents,
and [writer::TextSink], which is shared between workers and appends batches of cleaned lines to a single file.
!*/
pub mod reader;
mod stopwords;
pub mod writer;

pub use stopwords::load_stopwords;
