//! Corpus writer.
use log::{debug, info};

use crate::error::Error;
use crate::extract::AbstractEntry;
use crate::identifiers::Identifier;
use crate::lang::LangPair;

use super::TextWriter;

/// Writes the entries of qualifying records into language files.
///
/// Each entry language is identified again before writing, and the entry is
/// dropped if it is not a pair member. The file is named after that second identification,
/// not after the language found at extraction, so that a file only holds texts identified as its language.
pub struct CorpusWriter {
    text: TextWriter,
    pair: LangPair,
}

impl CorpusWriter {
    pub fn new(text: TextWriter, pair: LangPair) -> Self {
        Self { text, pair }
    }

    /// Write the entries of a record for batch `batch`.
    ///
    /// Returns the language of each written line.
    pub fn write_record(
        &self,
        entries: &[AbstractEntry],
        batch: usize,
        identifier: &dyn Identifier,
    ) -> Result<Vec<String>, Error> {
        let mut written = Vec::with_capacity(entries.len());
        for entry in entries {
            let lang = identifier.lang(&entry.text);
            if !self.pair.contains(&lang) {
                debug!("{}: skipping {} entry", entry.pmid, lang);
                continue;
            }

            info!("{}_{}", entry.pmid, lang);
            self.text.append(&lang, batch, &entry.text)?;
            written.push(lang);
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Identifies languages by a `xx:` prefix.
    struct Prefix;
    impl Identifier for Prefix {
        fn identify(&self, text: &str) -> Result<Option<String>, Error> {
            Ok(text.split_once(':').map(|(lang, _)| lang.to_string()))
        }
    }

    #[test]
    fn write_record() {
        let dir = tempfile::tempdir().unwrap();
        let pair = LangPair::new("en".to_string(), "fr".to_string());
        let cw = CorpusWriter::new(TextWriter::new(dir.path()), pair);

        let entries = vec![
            AbstractEntry::new("1", "en:hello", "en"),
            AbstractEntry::new("1", "de:hallo", "de"),
            AbstractEntry::new("1", "fr:bonjour\ntout le monde", "fr"),
        ];

        let written = cw.write_record(&entries, 3, &Prefix).unwrap();
        assert_eq!(written, vec!["en", "fr"]);

        let en = std::fs::read_to_string(dir.path().join("en_3.txt")).unwrap();
        assert_eq!(en, "en:hello\n");
        let fr = std::fs::read_to_string(dir.path().join("fr_3.txt")).unwrap();
        assert_eq!(fr, "fr:bonjour tout le monde\n");
        assert!(!dir.path().join("de_3.txt").exists());
    }

    #[test]
    fn redetected_language_wins() {
        let dir = tempfile::tempdir().unwrap();
        let pair = LangPair::new("en".to_string(), "fr".to_string());
        let cw = CorpusWriter::new(TextWriter::new(dir.path()), pair);

        // first identification said fr, the second one says it
        let entries = vec![AbstractEntry::new("1", "it:ciao", "fr")];
        let written = cw.write_record(&entries, 1, &Prefix).unwrap();
        assert!(written.is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
