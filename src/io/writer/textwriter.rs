//! Per language, per batch text files.
use log::debug;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends lines to `<dst>/<lang>_<batch>.txt` files.
///
/// Files are opened for each write and closed right after,
/// so that no handle stays open between batches.
#[derive(Debug, Clone)]
pub struct TextWriter {
    dst: PathBuf,
}

impl TextWriter {
    /// Create a new [TextWriter].
    /// Note that nothing is created/written unless a write is performed.
    pub fn new(dst: &Path) -> Self {
        Self {
            dst: dst.to_path_buf(),
        }
    }

    /// Get the path of the file holding `lang` texts of batch `batch`.
    pub fn path(&self, lang: &str, batch: usize) -> PathBuf {
        let mut path = self.dst.clone();
        path.push(format!("{}_{}.txt", lang, batch));
        path
    }

    /// Append `text` and a newline. Newlines inside `text` are replaced by spaces.
    pub fn append(&self, lang: &str, batch: usize, text: &str) -> std::io::Result<()> {
        let path = self.path(lang, batch);
        let mut options = OpenOptions::new();
        options.append(true).create(true);

        debug!("appending to {:?}", path);
        let mut f = options.open(path)?;
        let mut line = text.replace('\n', " ");
        line.push('\n');
        f.write_all(line.as_bytes())
    }
}
