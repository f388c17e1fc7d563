//! Record-level language pair filtering.
use std::collections::HashSet;

use log::debug;

use crate::extract::AbstractEntry;
use crate::lang::LangPair;

use super::Filter;

/// Keeps records that hold an abstract in both languages of a pair.
///
/// The decision is taken on the whole record: either all of its entries go on,
/// or none of them.
pub struct PairFilter {
    pair: LangPair,
}

impl PairFilter {
    pub fn new(pair: LangPair) -> Self {
        Self { pair }
    }
}

impl Filter<&[AbstractEntry]> for PairFilter {
    fn detect(&self, entries: &[AbstractEntry]) -> bool {
        if entries.len() < 2 {
            return false;
        }

        let langs: HashSet<&str> = entries.iter().map(|e| e.lang.as_str()).collect();
        let keep = langs.contains(self.pair.first()) && langs.contains(self.pair.second());
        if !keep {
            debug!(
                "{}: {:?} does not cover {}",
                entries[0].pmid, langs, self.pair
            );
        }
        keep
    }
}
