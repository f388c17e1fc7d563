//! Error enum
use std::fmt;

use oxilangtag::LanguageTagParseError;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Reqwest(reqwest::Error),
    Url(url::ParseError),
    Xml(quick_xml::Error),
    UnknownLang(String),
    LangTag(LanguageTagParseError),
    Custom(String),
    Serde(serde_json::Error),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    FastText(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Reqwest(e) => write!(f, "request error: {e}"),
            Error::Url(e) => write!(f, "invalid url: {e}"),
            Error::Xml(e) => write!(f, "malformed xml: {e}"),
            Error::UnknownLang(l) => write!(f, "unknown language: {l}"),
            Error::LangTag(e) => write!(f, "invalid language tag: {e}"),
            Error::Custom(s) => write!(f, "{s}"),
            Error::Serde(e) => write!(f, "serde error: {e}"),
            Error::Glob(e) => write!(f, "glob error: {e}"),
            Error::GlobPattern(e) => write!(f, "glob pattern error: {e}"),
            Error::FastText(s) => write!(f, "fasttext error: {s}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Reqwest(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::Url(e)
    }
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Error {
        Error::Xml(e)
    }
}

impl From<LanguageTagParseError> for Error {
    fn from(e: LanguageTagParseError) -> Error {
        Error::LangTag(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

/// fasttext reports its errors as plain strings.
impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::FastText(s)
    }
}
