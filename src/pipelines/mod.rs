//! Pipelines.
//!
//! Pipelines are implemented here, and the module
//! provides a light [pipeline::Pipeline] trait that enables easy and flexible pipeline creation.
pub mod cleantext;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use cleantext::CleanText;
pub use pipeline::Pipeline;
