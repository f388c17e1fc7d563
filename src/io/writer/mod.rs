/*!
# Language and batch based writing
This module deals with appending abstracts to text files, one file per language and per batch.

The user-facing object is [CorpusWriter], which checks the language of each entry again before
handing it to its [TextWriter].
!*/
mod corpus;
mod textwriter;

pub use corpus::CorpusWriter;
pub use textwriter::TextWriter;
