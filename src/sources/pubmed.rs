//! `PubmedArticleSet` decoding.
//!
//! Only the parts of the document that hold abstracts are kept:
//! ```xml
//! <PubmedArticleSet>
//!   <PubmedArticle>
//!     <MedlineCitation>
//!       <PMID Version="1">12345</PMID>
//!       <Article>
//!         <Abstract>
//!           <AbstractText Label="BACKGROUND">...</AbstractText>
//!           <AbstractText Label="METHODS">...</AbstractText>
//!         </Abstract>
//!       </Article>
//!       <OtherAbstract Type="Publisher" Language="fre">
//!         <AbstractText>...</AbstractText>
//!       </OtherAbstract>
//!     </MedlineCitation>
//!   </PubmedArticle>
//! </PubmedArticleSet>
//! ```
//! `PubmedBookArticle` elements are ignored.
use std::io::BufRead;

use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::Error;

use super::{OtherAbstract, RawRecord, Segment};

const ARTICLE: &[u8] = b"PubmedArticle";
const CITATION: &[u8] = b"MedlineCitation";
const PMID: &[u8] = b"PMID";
const ARTICLE_BODY: &[u8] = b"Article";
const ABSTRACT: &[u8] = b"Abstract";
const OTHER_ABSTRACT: &[u8] = b"OtherAbstract";
const ABSTRACT_TEXT: &[u8] = b"AbstractText";

/// Where incoming text goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    Nothing,
    Pmid(usize),
    Primary(usize),
    Other(usize),
}

impl Capture {
    /// depth of the element that opened the capture
    fn depth(&self) -> Option<usize> {
        match self {
            Capture::Nothing => None,
            Capture::Pmid(d) | Capture::Primary(d) | Capture::Other(d) => Some(*d),
        }
    }
}

struct ArticleSetParser {
    path: Vec<Vec<u8>>,
    current: Option<RawRecord>,
    capture: Capture,
    records: Vec<RawRecord>,
}

impl ArticleSetParser {
    fn new() -> Self {
        Self {
            path: Vec::new(),
            current: None,
            capture: Capture::Nothing,
            records: Vec::new(),
        }
    }

    fn start(&mut self, e: &BytesStart) {
        self.path.push(e.name().as_ref().to_vec());
        let depth = self.path.len();

        if ends_with(&self.path, &[ARTICLE]) {
            self.current = Some(RawRecord::default());
            return;
        }

        let record = match self.current.as_mut() {
            Some(r) => r,
            None => return,
        };

        if ends_with(&self.path, &[CITATION, PMID]) {
            if record.pmid.is_none() {
                record.pmid = Some(String::new());
                self.capture = Capture::Pmid(depth);
            }
        } else if ends_with(&self.path, &[CITATION, ARTICLE_BODY, ABSTRACT]) {
            record.primary = Some(Vec::new());
        } else if ends_with(&self.path, &[CITATION, OTHER_ABSTRACT]) {
            record.other_abstracts.push(OtherAbstract {
                language: attribute(e, b"Language"),
                kind: attribute(e, b"Type"),
                segments: Vec::new(),
            });
        } else if ends_with(&self.path, &[CITATION, ARTICLE_BODY, ABSTRACT, ABSTRACT_TEXT]) {
            if let Some(segments) = record.primary.as_mut() {
                segments.push(Segment {
                    label: attribute(e, b"Label"),
                    text: String::new(),
                });
                self.capture = Capture::Primary(depth);
            }
        } else if ends_with(&self.path, &[CITATION, OTHER_ABSTRACT, ABSTRACT_TEXT]) {
            if let Some(other) = record.other_abstracts.last_mut() {
                other.segments.push(Segment {
                    label: attribute(e, b"Label"),
                    text: String::new(),
                });
                self.capture = Capture::Other(depth);
            }
        }
    }

    fn end(&mut self) {
        if self.capture.depth() == Some(self.path.len()) {
            self.capture = Capture::Nothing;
        }

        if ends_with(&self.path, &[ARTICLE]) {
            if let Some(mut record) = self.current.take() {
                record.pmid = record
                    .pmid
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty());
                debug!("decoded record {:?}", record.pmid);
                self.records.push(record);
            }
        }

        self.path.pop();
    }

    fn text(&mut self, text: &str) {
        let record = match self.current.as_mut() {
            Some(r) => r,
            None => return,
        };

        let target = match self.capture {
            Capture::Nothing => None,
            Capture::Pmid(_) => record.pmid.as_mut(),
            Capture::Primary(_) => record
                .primary
                .as_mut()
                .and_then(|segments| segments.last_mut())
                .map(|segment| &mut segment.text),
            Capture::Other(_) => record
                .other_abstracts
                .last_mut()
                .and_then(|other| other.segments.last_mut())
                .map(|segment| &mut segment.text),
        };

        if let Some(target) = target {
            target.push_str(text);
        }
    }
}

/// true if the innermost elements of `path` are `suffix`.
fn ends_with(path: &[Vec<u8>], suffix: &[&[u8]]) -> bool {
    path.len() >= suffix.len()
        && path[path.len() - suffix.len()..]
            .iter()
            .zip(suffix)
            .all(|(a, b)| a.as_slice() == *b)
}

/// Get an attribute value, unescaped when possible.
fn attribute(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| match attr.unescape_value() {
            Ok(v) => v.into_owned(),
            Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
        })
}

/// Decode a `PubmedArticleSet` document into one [RawRecord] per `PubmedArticle`.
///
/// Inline markup (`<i>`, `<sup>`...) inside abstracts is flattened into its text.
pub fn parse_article_set<R: BufRead>(reader: R) -> Result<Vec<RawRecord>, Error> {
    let mut xml_reader = Reader::from_reader(reader);
    let mut parser = ArticleSetParser::new();
    let mut buf = Vec::new();

    loop {
        match xml_reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => parser.start(e),
            Event::Empty(ref e) => {
                parser.start(e);
                parser.end();
            }
            Event::End(_) => parser.end(),
            Event::Text(ref e) => match e.unescape() {
                Ok(text) => parser.text(&text),
                Err(_) => parser.text(&String::from_utf8_lossy(e)),
            },
            Event::CData(ref e) => parser.text(&String::from_utf8_lossy(e)),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(parser.records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SET: &str = r#"<?xml version="1.0" ?>
<!DOCTYPE PubmedArticleSet PUBLIC "-//NLM//DTD PubMedArticle, 1st January 2023//EN" "https://dtd.nlm.nih.gov/ncbi/pubmed/out/pubmed_230101.dtd">
<PubmedArticleSet>
<PubmedArticle>
  <MedlineCitation Status="MEDLINE" Owner="NLM">
    <PMID Version="1">11111</PMID>
    <Article PubModel="Print">
      <ArticleTitle>A title</ArticleTitle>
      <Abstract>
        <AbstractText>Single segment &quot;quoted&quot; abstract.</AbstractText>
        <CopyrightInformation>Some publisher</CopyrightInformation>
      </Abstract>
    </Article>
    <OtherAbstract Type="Publisher" Language="fre">
      <AbstractText>Un résumé en <i>français</i>.</AbstractText>
    </OtherAbstract>
    <CommentsCorrectionsList>
      <CommentsCorrections RefType="CommentIn">
        <RefSource>Some ref</RefSource>
        <PMID Version="1">99999</PMID>
      </CommentsCorrections>
    </CommentsCorrectionsList>
  </MedlineCitation>
  <PubmedData>
    <ArticleIdList>
      <ArticleId IdType="pubmed">11111</ArticleId>
    </ArticleIdList>
  </PubmedData>
</PubmedArticle>
<PubmedArticle>
  <MedlineCitation Status="MEDLINE" Owner="NLM">
    <PMID Version="1">22222</PMID>
    <Article PubModel="Print">
      <Abstract>
        <AbstractText Label="BACKGROUND" NlmCategory="BACKGROUND">A longer intro.</AbstractText>
        <AbstractText Label="METHODS" NlmCategory="METHODS">Second part.</AbstractText>
      </Abstract>
    </Article>
  </MedlineCitation>
</PubmedArticle>
<PubmedArticle>
  <MedlineCitation Status="MEDLINE" Owner="NLM">
    <PMID Version="1">33333</PMID>
    <Article PubModel="Print">
      <ArticleTitle>No abstract here</ArticleTitle>
    </Article>
  </MedlineCitation>
</PubmedArticle>
<PubmedBookArticle>
  <BookDocument>
    <PMID Version="1">44444</PMID>
    <Abstract><AbstractText>Book abstract.</AbstractText></Abstract>
  </BookDocument>
</PubmedBookArticle>
</PubmedArticleSet>"#;

    #[test]
    fn parse_set() {
        let records = parse_article_set(SET.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);

        let first = &records[0];
        assert_eq!(first.pmid(), Some("11111"));
        assert_eq!(
            first.primary,
            Some(vec![Segment::new("Single segment \"quoted\" abstract.")])
        );
        assert_eq!(first.other_abstracts.len(), 1);
        let other = &first.other_abstracts[0];
        assert_eq!(other.language.as_deref(), Some("fre"));
        assert_eq!(other.kind.as_deref(), Some("Publisher"));
        assert_eq!(
            other.segments,
            vec![Segment::new("Un résumé en français.")]
        );

        let second = &records[1];
        assert_eq!(second.pmid(), Some("22222"));
        assert_eq!(
            second.primary,
            Some(vec![
                Segment::labelled("BACKGROUND", "A longer intro."),
                Segment::labelled("METHODS", "Second part."),
            ])
        );
        assert!(second.other_abstracts.is_empty());

        let third = &records[2];
        assert_eq!(third.pmid(), Some("33333"));
        assert_eq!(third.primary, None);
    }

    #[test]
    fn empty_set() {
        let records = parse_article_set("<PubmedArticleSet></PubmedArticleSet>".as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn empty_abstract_text() {
        let xml = r#"<PubmedArticleSet><PubmedArticle><MedlineCitation>
            <PMID>1</PMID>
            <Article><Abstract><AbstractText/></Abstract></Article>
            </MedlineCitation></PubmedArticle></PubmedArticleSet>"#;
        let records = parse_article_set(xml.as_bytes()).unwrap();
        assert_eq!(records[0].primary, Some(vec![Segment::default()]));
    }

    #[test]
    fn malformed_xml() {
        let xml = "<PubmedArticleSet><PubmedArticle></MedlineCitation></PubmedArticleSet>";
        assert!(matches!(
            parse_article_set(xml.as_bytes()),
            Err(Error::Xml(_))
        ));
    }
}
