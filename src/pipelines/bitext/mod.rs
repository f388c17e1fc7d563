//! Parallel corpus from bilingual abstracts.
mod batch;
mod pipeline;
mod report;

pub use batch::{Batch, Batches, BATCH_SIZE};
pub use pipeline::Bitext;
pub use report::RunReport;
