//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait,
//! implemented by the [Bitext] corpus builder.
pub mod bitext;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use bitext::Bitext;
pub use pipeline::Pipeline;
