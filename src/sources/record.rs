//! Citation records, reduced to what the corpus needs.

/// One `AbstractText` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    pub label: Option<String>,
    pub text: String,
}

impl Segment {
    pub fn new(text: &str) -> Self {
        Self {
            label: None,
            text: text.to_string(),
        }
    }

    pub fn labelled(label: &str, text: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            text: text.to_string(),
        }
    }
}

/// Secondary abstract, usually a translation provided by the publisher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtherAbstract {
    /// `Language` attribute, a 3-letter tag.
    pub language: Option<String>,
    /// `Type` attribute (`Publisher`, `AAMC`...).
    pub kind: Option<String>,
    pub segments: Vec<Segment>,
}

impl OtherAbstract {
    pub fn new(language: Option<&str>, segments: Vec<Segment>) -> Self {
        Self {
            language: language.map(str::to_string),
            kind: None,
            segments,
        }
    }
}

/// A citation as returned by a [super::Fetcher].
///
/// Every field can be missing, extraction decides what is usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub pmid: Option<String>,
    pub primary: Option<Vec<Segment>>,
    pub other_abstracts: Vec<OtherAbstract>,
}

impl RawRecord {
    pub fn new(pmid: &str) -> Self {
        Self {
            pmid: Some(pmid.to_string()),
            ..Default::default()
        }
    }

    pub fn with_primary(mut self, segments: Vec<Segment>) -> Self {
        self.primary = Some(segments);
        self
    }

    pub fn with_other(mut self, other: OtherAbstract) -> Self {
        self.other_abstracts.push(other);
        self
    }

    /// Get the record identifier, if any.
    pub fn pmid(&self) -> Option<&str> {
        self.pmid.as_deref()
    }
}
