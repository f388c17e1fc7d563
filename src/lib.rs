pub mod error;
pub mod extract;
pub mod filtering;
pub mod identifiers;
pub mod io;
pub mod lang;
pub mod pipelines;
pub mod sources;
