/*! Language identification

Holds an [Identifier] trait for implementing other ones.

The current identifier used is [fasttext](https://fasttext.cc) !*/
mod identifier;
pub mod model;

pub use identifier::Identifier;
pub use identifier::UNKNOWN;
pub use model::{FastText, FastTextBuilder};
