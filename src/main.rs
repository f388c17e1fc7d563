//! # medline-bitext
//!
//! Builds parallel corpora from MEDLINE records that carry abstracts in several languages.
//!
//! Each identifier list (`eng_fre.txt`, one PMID per line) is processed in batches of 100 PMIDs:
//! records are fetched from E-utilities, their abstracts are identified by language,
//! and records holding both languages of the pair end up in `<dst>/eng_fre/{en,fr}_<batch>.txt`.
//!
//! ## Getting started
//!
//! ```sh
//! medline-bitext --email me@example.com data/ corpus/ eng_fre eng_ger
//! ```
//!
use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, error, info};
use structopt::StructOpt;

use medline_bitext::error::Error;
use medline_bitext::identifiers::FastTextBuilder;
use medline_bitext::lang::LangTable;
use medline_bitext::pipelines::{bitext::RunReport, Bitext, Pipeline};
use medline_bitext::sources::EntrezFetcherBuilder;

mod cli;

/// Get list names from `src`, matching `???_???*.txt`.
fn list_names(src: &Path) -> Result<Vec<String>, Error> {
    let pattern = src.join("???_???*.txt");
    let pattern = pattern
        .to_str()
        .ok_or_else(|| Error::Custom(format!("Couldn't parse path {:?}", src)))?;

    let mut names = Vec::new();
    for path in glob::glob(pattern)? {
        let path = path?;
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.push(stem.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Remove and recreate the output folder of a list.
fn reset_dir(dst: &Path) -> Result<(), Error> {
    match std::fs::remove_dir_all(dst) {
        Ok(()) => debug!("cleared {:?}", dst),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => (),
        Err(e) => return Err(e.into()),
    }
    std::fs::create_dir_all(dst)?;
    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::MedlineBitext::from_args();
    debug!("cli args\n{:#?}", opt);

    let table = match &opt.lang_table {
        Some(path) => LangTable::from_path(path)?,
        None => LangTable::default(),
    };

    let names = if opt.names.is_empty() {
        list_names(&opt.src)?
    } else {
        opt.names.clone()
    };
    if names.is_empty() {
        error!("No identifier list found in {:?}", opt.src);
        return Ok(());
    }

    let fetcher = EntrezFetcherBuilder::default()
        .base_url(&opt.eutils_url)
        .tool(&opt.tool)
        .email(opt.email.clone())
        .api_key(opt.api_key.clone())
        .timeout(Duration::from_secs(opt.timeout))
        .build()?;

    let identifier = FastTextBuilder::default()
        .path(&opt.lid_path)
        .threshold(opt.threshold)
        .build()?;

    let mut reports = BTreeMap::new();
    for name in names {
        let src: PathBuf = opt.src.join(format!("{}.txt", name));
        let dst: PathBuf = opt.dst.join(&name);
        reset_dir(&dst)?;

        info!("processing {:?} into {:?}", src, dst);
        let report: RunReport = Bitext::new(src, dst, table.clone(), &fetcher, &identifier)
            .with_batch_size(opt.batch_size)
            .run()?;
        report.log(&name);
        reports.insert(name, report);
    }

    if let Some(path) = &opt.report {
        let f = File::create(path)?;
        serde_json::to_writer_pretty(f, &reports)?;
    }

    Ok(())
}
