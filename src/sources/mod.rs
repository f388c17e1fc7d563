/*! Record sources

A [Fetcher] turns a batch of identifiers into [RawRecord]s.
The production one is [EntrezFetcher], that queries the NCBI E-utilities and
decodes the returned XML with [pubmed::parse_article_set].
!*/
mod entrez;
pub mod pubmed;
mod record;

pub use entrez::{EntrezFetcher, EntrezFetcherBuilder};
pub use record::{OtherAbstract, RawRecord, Segment};

use crate::error::Error;

/// Retrieves records from an external service.
pub trait Fetcher {
    /// Fetch the records of `ids`.
    ///
    /// Records come in the service's order, and ids that do not exist are simply missing.
    fn fetch(&self, ids: &[String]) -> Result<Vec<RawRecord>, Error>;
}
