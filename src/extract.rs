//! Abstract extraction.
//!
//! A record holds a primary abstract and, sometimes, secondary abstracts
//! in other languages. Each of them becomes an [AbstractEntry].
//!
//! Abstracts are either made of a single text, or of several labelled segments
//! (`BACKGROUND`, `METHODS`...) that are joined back together.
use std::fmt;

use log::debug;

use crate::identifiers::Identifier;
use crate::sources::{RawRecord, Segment};

/// One language variant of a record's abstract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbstractEntry {
    pub pmid: String,
    pub text: String,
    pub lang: String,
}

impl AbstractEntry {
    pub fn new(pmid: &str, text: &str, lang: &str) -> Self {
        Self {
            pmid: pmid.to_string(),
            text: text.to_string(),
            lang: lang.to_string(),
        }
    }
}

/// Reasons for a record to yield no entry at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
    MissingIdentifier,
    MissingAbstract(String),
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Malformed::MissingIdentifier => write!(f, "record without identifier"),
            Malformed::MissingAbstract(pmid) => write!(f, "PMID {pmid} - abstract not found!"),
        }
    }
}

/// Replace double quotes by single ones.
fn sanitize(text: &str) -> String {
    text.replace('"', "'")
}

/// Join the segments of one abstract into a single text.
///
/// Returns [None] for abstracts without segments.
fn join_segments(segments: &[Segment]) -> Option<String> {
    let text = match segments {
        [] => return None,
        [single] => sanitize(&single.text),
        segments => {
            let mut text = String::new();
            for segment in segments {
                // labels are not part of the corpus (yet)
                let _label = segment.label.as_deref().unwrap_or("None");
                text.push_str(&sanitize(&segment.text));
                text.push(' ');
            }
            text
        }
    };

    Some(text.trim().replace('\n', " "))
}

/// Extract the identifier and the texts of every abstract of a record,
/// primary one first.
///
/// Empty texts are skipped.
pub fn extract_texts(record: &RawRecord) -> Result<(String, Vec<String>), Malformed> {
    let pmid = record.pmid().ok_or(Malformed::MissingIdentifier)?;
    let primary = record
        .primary
        .as_ref()
        .ok_or_else(|| Malformed::MissingAbstract(pmid.to_string()))?;

    let sources = std::iter::once(primary.as_slice()).chain(
        record
            .other_abstracts
            .iter()
            .map(|other| other.segments.as_slice()),
    );

    let texts = sources
        .enumerate()
        .filter_map(|(idx, segments)| match join_segments(segments) {
            Some(text) if !text.is_empty() => Some(text),
            _ => {
                debug!("{pmid}: skipping empty abstract {idx}");
                None
            }
        })
        .collect();

    Ok((pmid.to_string(), texts))
}

/// Extract the entries of a record, identifying the language of each one.
pub fn extract(
    record: &RawRecord,
    identifier: &dyn Identifier,
) -> Result<Vec<AbstractEntry>, Malformed> {
    let (pmid, texts) = extract_texts(record)?;
    Ok(texts
        .into_iter()
        .map(|text| {
            let lang = identifier.lang(&text);
            AbstractEntry { pmid: pmid.clone(), text, lang }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::sources::OtherAbstract;

    use super::*;

    /// Identifies languages by a `xx:` prefix.
    struct Prefix;
    impl Identifier for Prefix {
        fn identify(&self, text: &str) -> Result<Option<String>, Error> {
            Ok(text.split_once(':').map(|(lang, _)| lang.to_string()))
        }
    }

    #[test]
    fn single_segment() {
        let record = RawRecord::new("1").with_primary(vec![Segment::new(
            "An \"important\" result.",
        )]);
        let (pmid, texts) = extract_texts(&record).unwrap();
        assert_eq!(pmid, "1");
        assert_eq!(texts, vec!["An 'important' result.".to_string()]);
    }

    #[test]
    fn multiple_segments() {
        let record = RawRecord::new("1").with_primary(vec![
            Segment::labelled("BACKGROUND", "A longer intro."),
            Segment::labelled("METHODS", "Second part."),
        ]);
        let (_, texts) = extract_texts(&record).unwrap();
        assert_eq!(texts, vec!["A longer intro. Second part.".to_string()]);
    }

    #[test]
    fn multiple_segments_no_labels_quotes() {
        let record = RawRecord::new("1").with_primary(vec![
            Segment::new(" \"a\" "),
            Segment::new("b\nc"),
            Segment::new("d"),
        ]);
        let (_, texts) = extract_texts(&record).unwrap();
        assert_eq!(texts, vec!["'a'  b c d".to_string()]);
    }

    #[test]
    fn other_abstracts() {
        let record = RawRecord::new("42")
            .with_primary(vec![Segment::new("en:primary")])
            .with_other(OtherAbstract::new(
                Some("fre"),
                vec![Segment::new("fr:premier"), Segment::new("second")],
            ))
            .with_other(OtherAbstract::new(Some("ger"), vec![Segment::new("de:erste")]));

        let entries = extract(&record, &Prefix).unwrap();
        assert_eq!(
            entries,
            vec![
                AbstractEntry::new("42", "en:primary", "en"),
                AbstractEntry::new("42", "fr:premier second", "fr"),
                AbstractEntry::new("42", "de:erste", "de"),
            ]
        );
    }

    #[test]
    fn empty_abstracts_skipped() {
        let record = RawRecord::new("7")
            .with_primary(vec![Segment::new("  ")])
            .with_other(OtherAbstract::new(Some("fre"), vec![]))
            .with_other(OtherAbstract::new(Some("ger"), vec![Segment::new("de:text")]));
        let (_, texts) = extract_texts(&record).unwrap();
        assert_eq!(texts, vec!["de:text".to_string()]);
    }

    #[test]
    fn empty_primary_keeps_others() {
        let record = RawRecord::new("9")
            .with_primary(vec![])
            .with_other(OtherAbstract::new(Some("fre"), vec![Segment::new("fr:résumé")]))
            .with_other(OtherAbstract::new(Some("ger"), vec![Segment::new("de:text")]));

        let entries = extract(&record, &Prefix).unwrap();
        assert_eq!(
            entries,
            vec![
                AbstractEntry::new("9", "fr:résumé", "fr"),
                AbstractEntry::new("9", "de:text", "de"),
            ]
        );
    }

    #[test]
    fn unknown_language() {
        let record = RawRecord::new("1").with_primary(vec![Segment::new("no prefix")]);
        let entries = extract(&record, &Prefix).unwrap();
        assert_eq!(entries[0].lang, crate::identifiers::UNKNOWN);
    }

    #[test]
    fn malformed() {
        let record = RawRecord::new("3");
        assert_eq!(
            extract_texts(&record),
            Err(Malformed::MissingAbstract("3".to_string()))
        );
        assert_eq!(
            Malformed::MissingAbstract("3".to_string()).to_string(),
            "PMID 3 - abstract not found!"
        );

        let record = RawRecord::default().with_primary(vec![Segment::new("text")]);
        assert_eq!(extract_texts(&record), Err(Malformed::MissingIdentifier));
    }
}
