/*! Identifier trait

All identifiers should implement [Identifier] to be useable in extraction and writing.
!*/
use log::warn;

use crate::error::Error;

/// Code used when no language could be identified.
///
/// It never matches a requested language.
pub const UNKNOWN: &str = "und";

pub trait Identifier {
    /// Identify the language of `text`.
    ///
    /// `Ok(None)` means that the identifier has no answer for this text.
    fn identify(&self, text: &str) -> Result<Option<String>, Error>;

    /// Identify the language of `text`, resorting to [UNKNOWN] on failure.
    fn lang(&self, text: &str) -> String {
        match self.identify(text) {
            Ok(Some(lang)) => lang,
            Ok(None) => UNKNOWN.to_string(),
            Err(e) => {
                warn!("could not identify language: {}", e);
                UNKNOWN.to_string()
            }
        }
    }
}
