//! Identifier list reading.
use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
};

use crate::error::Error;

/// Reader that yields one identifier per line.
///
/// Lines are trimmed, blank lines are skipped.
#[derive(Debug)]
pub struct IdReader<T> {
    lines: Lines<T>,
}

impl IdReader<BufReader<File>> {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let f = File::open(src)?;
        Ok(Self::new(BufReader::new(f)))
    }
}

impl<T: BufRead> IdReader<T> {
    pub fn new(reader: T) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<T: BufRead> Iterator for IdReader<T> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            match line {
                Ok(line) => {
                    let id = line.trim();
                    if !id.is_empty() {
                        return Some(Ok(id.to_string()));
                    }
                }
                Err(e) => return Some(Err(Error::Io(e))),
            }
        }
        None
    }
}
