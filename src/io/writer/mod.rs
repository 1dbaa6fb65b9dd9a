/*!
# Shared text writing

Workers produce batches of cleaned lines that all end up in a single text file.

The user-facing object is [TextSink], which holds the output file behind a [std::sync::Mutex]:
a batch is written in a single critical section, so that lines from different batches never mix.

[BatchWriter] abstracts over the destination.
!*/
mod sink;
mod writertrait;

pub use sink::TextSink;
pub use writertrait::BatchWriter;
