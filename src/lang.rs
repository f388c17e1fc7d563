//! Language code table.
//!
//! Input files are named after the language pair they hold, using 3-letter tags
//! (`eng_fre.txt`). Those tags are mapped to the codes emitted by the language identifier,
//! which are also the codes used to name the output files.
use std::{
    collections::HashMap,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use lazy_static::lazy_static;
use log::debug;
use oxilangtag::LanguageTag;

use crate::error::Error;

lazy_static! {
    /// Built-in 3-letter tag to identifier code mapping.
    static ref DEFAULT_CODES: HashMap<&'static str, &'static str> = [
        ("eng", "en"),
        ("ita", "it"),
        ("chi", "zh"),
        ("fre", "fr"),
        ("ger", "de"),
        ("por", "pt"),
        ("spa", "es"),
        ("rus", "ru"),
    ]
    .into_iter()
    .collect();
}

/// Immutable mapping from input file language tags to identifier codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangTable {
    codes: HashMap<String, String>,
}

impl Default for LangTable {
    fn default() -> Self {
        Self {
            codes: DEFAULT_CODES
                .iter()
                .map(|(tag, code)| (tag.to_string(), code.to_string()))
                .collect(),
        }
    }
}

impl LangTable {
    /// Build a table from a JSON object mapping tags to codes.
    ///
    /// Every code has to be a valid BCP47 tag.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let codes: HashMap<String, String> = serde_json::from_reader(reader)?;
        for (tag, code) in &codes {
            if LanguageTag::parse(code.as_str()).is_err() {
                return Err(Error::UnknownLang(format!("{tag} -> {code}")));
            }
        }

        Ok(Self { codes })
    }

    pub fn from_path(path: &Path) -> Result<Self, Error> {
        debug!("loading language table from {:?}", path);
        let f = File::open(path)?;
        Self::from_reader(BufReader::new(f))
    }

    /// Get the identifier code for a 3-letter tag.
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.codes.get(tag).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Derive the language pair from an input file name.
    ///
    /// The first 7 characters hold `<lang1>_<lang2>`, anything after is ignored.
    pub fn pair_from_filename(&self, filename: &str) -> Result<LangPair, Error> {
        let prefix = filename
            .get(0..7)
            .ok_or_else(|| Error::Custom(format!("file name too short: {filename:?}")))?;

        let (first, second) = prefix
            .split_once('_')
            .filter(|(first, _)| first.len() == 3)
            .ok_or_else(|| Error::Custom(format!("no language pair in {filename:?}")))?;

        let resolve = |tag: &str| {
            self.get(tag)
                .map(str::to_string)
                .ok_or_else(|| Error::UnknownLang(tag.to_string()))
        };

        Ok(LangPair::new(resolve(first)?, resolve(second)?))
    }
}

/// The two languages a corpus run is aligning.
///
/// Order has no meaning beyond display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangPair {
    first: String,
    second: String,
}

impl LangPair {
    pub fn new(first: String, second: String) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    /// true if `code` is one of the pair members.
    pub fn contains(&self, code: &str) -> bool {
        self.first == code || self.second == code
    }
}

impl std::fmt::Display for LangPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}
