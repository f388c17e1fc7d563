//! Bilingual abstract corpus pipeline.
//!
//! An input file holds identifiers of records that may have abstracts in two languages.
//! Its name starts with the language pair (`eng_fre.txt`).
//!
//! # Processing
//! 1. Identifiers are read in order and grouped in batches of 100.
//! 1. Each batch is fetched, a failing batch is reported and skipped.
//! 1. Each record yields its abstracts (primary and translated ones), identified by language.
//! 1. Records that do not hold an abstract in both languages are dropped.
//! 1. The remaining abstracts are appended to `<lang>_<batch index>.txt` files.
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::error::Error;
use crate::extract;
use crate::filtering::{Filter, PairFilter};
use crate::identifiers::Identifier;
use crate::io::{CorpusWriter, IdReader, TextWriter};
use crate::lang::{LangPair, LangTable};
use crate::pipelines::pipeline::Pipeline;
use crate::sources::{Fetcher, RawRecord};

use super::batch::{Batch, Batches, BATCH_SIZE};
use super::report::RunReport;

/// Builds a parallel corpus from one input file.
pub struct Bitext<'a> {
    src: PathBuf,
    dst: PathBuf,
    table: LangTable,
    fetcher: &'a dyn Fetcher,
    identifier: &'a dyn Identifier,
    batch_size: usize,
}

impl<'a> Bitext<'a> {
    pub fn new(
        src: PathBuf,
        dst: PathBuf,
        table: LangTable,
        fetcher: &'a dyn Fetcher,
        identifier: &'a dyn Identifier,
    ) -> Self {
        Self {
            src,
            dst,
            table,
            fetcher,
            identifier,
            batch_size: BATCH_SIZE,
        }
    }

    /// Change the number of identifiers per batch (100 by default).
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Get the language pair from the source file name.
    pub fn pair(&self) -> Result<LangPair, Error> {
        let filename = self
            .src
            .file_name()
            .and_then(|f| f.to_str())
            .ok_or_else(|| Error::Custom(format!("Couldn't get file name of {:?}", self.src)))?;
        self.table.pair_from_filename(filename)
    }

    /// Process the records of a batch.
    ///
    /// Malformed records are logged and skipped, write errors are fatal.
    fn process_records(
        &self,
        records: Vec<RawRecord>,
        batch: &Batch,
        filter: &PairFilter,
        writer: &CorpusWriter,
        report: &mut RunReport,
    ) -> Result<(), Error> {
        for record in records {
            report.records += 1;

            let entries = match extract::extract(&record, self.identifier) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("{}", e);
                    report.malformed += 1;
                    continue;
                }
            };

            if !filter.detect(entries.as_slice()) {
                continue;
            }

            report.qualifying += 1;
            let written = writer.write_record(&entries, batch.index(), self.identifier)?;
            report.add_lines(&written);
        }

        Ok(())
    }

    fn check_dst(dst: &Path) -> Result<(), Error> {
        if !dst.exists() {
            warn!("Destination does not exist. Creating {:?}", dst);
            std::fs::create_dir_all(dst)?;
        }

        if !dst.is_dir() {
            return Err(Error::Custom(format!(
                "Destination has to be a directory: {:?}",
                dst
            )));
        }

        Ok(())
    }
}

impl<'a> Pipeline<RunReport> for Bitext<'a> {
    fn run(&self) -> Result<RunReport, Error> {
        let pair = self.pair()?;
        info!("building {} corpus from {:?}", pair, self.src);

        Self::check_dst(&self.dst)?;

        let ids = IdReader::from_path(&self.src)?;
        let filter = PairFilter::new(pair.clone());
        let writer = CorpusWriter::new(TextWriter::new(&self.dst), pair);
        let mut report = RunReport::default();

        for batch in Batches::new(ids, self.batch_size) {
            let batch = batch?;
            report.batches += 1;
            info!("batch {}: {} identifiers", batch.index(), batch.len());
            debug!("{:?}", batch.ids());

            match self.fetcher.fetch(batch.ids()) {
                Ok(records) => {
                    self.process_records(records, &batch, &filter, &writer, &mut report)?
                }
                Err(e) => {
                    error!("Error with batch {}: {}", batch.index(), e);
                    report.failed_batches.push(batch.index());
                }
            }
        }

        Ok(report)
    }
}
