/*! Text transformers.

Transforms raw document text into its cleaned, single-line form, or rejects it.

!*/

mod normalizer;
mod transform;

pub use normalizer::Normalizer;
pub use transform::Transform;
