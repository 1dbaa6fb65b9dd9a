/*! Filtering utilities

Filters operate on single tokens of an already normalized text.

Filters implement [filter::Filter]: they do not hold mutable state, so that a single
instance can be shared between every worker of a run.

- [token::WordLength] keeps tokens that are strictly longer than a threshold,
- [token::Stopwords] keeps tokens that are not part of a stopword list.
! */
mod filter;
mod token;

pub use filter::Filter;
pub use token::{Stopwords, WordLength};
