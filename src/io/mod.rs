/*!
# IO utilities

Identifier list loading and corpus file saving.
!*/
pub mod reader;
pub mod writer;

pub use reader::IdReader;
pub use writer::{CorpusWriter, TextWriter};
