/*! FastText model.
* !*/
use std::path::Path;

use fasttext::FastText as FastTextLib;
use log::debug;

use crate::error::Error;

use super::Identifier;

/// FastText model.
///
/// Only the top-1 prediction is used, predictions under `threshold` are discarded.
pub struct FastText {
    inner: FastTextLib,
    pub threshold: f32,
}

impl FastText {
    /// removes `__label__` from identification start and converts to a BCP47-like form.
    fn clean_label(label: &str) -> String {
        label
            .strip_prefix("__label__")
            .unwrap_or(label)
            .replace('_', "-")
    }
}

impl Identifier for FastText {
    fn identify(&self, text: &str) -> Result<Option<String>, Error> {
        // fasttext predicts on the first line only.
        let text = text.replace('\n', " ");
        let pred = self.inner.predict(&text, 1, self.threshold)?;
        match pred.into_iter().next() {
            Some(pred) => {
                debug!("{} ({})", pred.label, pred.prob);
                Ok(Some(Self::clean_label(&pred.label)))
            }
            None => Ok(None),
        }
    }
}

/// Fasttext builder.
pub struct FastTextBuilder<'a> {
    path: Option<&'a Path>,
    threshold: Option<f32>,
}

impl<'a> FastTextBuilder<'a> {
    fn init_fasttextlib(path: &str) -> Result<FastTextLib, Error> {
        let mut ft = FastTextLib::new();
        ft.load_model(path)?;
        Ok(ft)
    }

    pub fn build(&self) -> Result<FastText, Error> {
        let path = self
            .path
            .ok_or(Error::Custom("No path provided".to_string()))?
            .to_str()
            .ok_or(Error::Custom("Couldn't parse path".to_string()))?;
        let threshold = self
            .threshold
            .ok_or(Error::Custom("No threshold provided".to_string()))?;

        Ok(FastText {
            inner: Self::init_fasttextlib(path)?,
            threshold,
        })
    }

    pub fn path<'b>(&'b mut self, path: &'a Path) -> &'b mut FastTextBuilder<'a> {
        self.path = Some(path);
        self
    }

    pub fn threshold<'b>(&'b mut self, threshold: f32) -> &'b mut FastTextBuilder<'a> {
        self.threshold = Some(threshold);
        self
    }
}

impl<'a> Default for FastTextBuilder<'a> {
    fn default() -> Self {
        Self {
            path: Some(Path::new("lid.176.bin")),
            threshold: Some(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::error::Error;

    use super::{FastText, FastTextBuilder};

    #[test]
    fn clean_label() {
        assert_eq!(FastText::clean_label("__label__en"), "en");
        assert_eq!(FastText::clean_label("__label__zh"), "zh");
        assert_eq!(FastText::clean_label("__label__zho_Hans"), "zho-Hans");
        assert_eq!(FastText::clean_label("fr"), "fr");
    }

    #[test]
    fn builder_threshold() {
        let mut builder = FastTextBuilder::default();
        builder.path(Path::new("lid.176.bin")).threshold(0.5);
        assert_eq!(builder.threshold, Some(0.5));
        assert_eq!(builder.path, Some(Path::new("lid.176.bin")));
    }

    #[test]
    fn build_without_path() {
        let builder = FastTextBuilder {
            path: None,
            threshold: Some(0.0),
        };
        assert!(matches!(builder.build(), Err(Error::Custom(_))));
    }
}
