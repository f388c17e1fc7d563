//! Run statistics.
use std::collections::BTreeMap;

use itertools::Itertools;
use log::info;
use serde::Serialize;

/// What happened during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// number of dispatched batches
    pub batches: usize,
    /// indices of batches whose retrieval failed
    pub failed_batches: Vec<usize>,
    /// records returned by the fetcher
    pub records: usize,
    /// records without a usable abstract
    pub malformed: usize,
    /// records covering both languages
    pub qualifying: usize,
    /// written lines per language
    pub lines: BTreeMap<String, usize>,
}

impl RunReport {
    pub fn add_lines(&mut self, langs: &[String]) {
        for lang in langs {
            *self.lines.entry(lang.clone()).or_insert(0) += 1;
        }
    }

    pub fn log(&self, name: &str) {
        info!(
            "{}: {} batches ({} failed), {} records, {} malformed, {} qualifying",
            name,
            self.batches,
            self.failed_batches.len(),
            self.records,
            self.malformed,
            self.qualifying
        );
        info!(
            "{}: lines [{}]",
            name,
            self.lines
                .iter()
                .map(|(lang, count)| format!("{lang}: {count}"))
                .join(", ")
        );
    }
}
