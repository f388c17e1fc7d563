//! Identifier batching.
use crate::error::Error;

/// Default number of identifiers per request.
pub const BATCH_SIZE: usize = 100;

/// A group of identifiers fetched together.
///
/// `index` starts at 1 and is only used to name output files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    index: usize,
    ids: Vec<String>,
}

impl Batch {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Groups identifiers into [Batch]es of `size`, keeping input order.
///
/// A batch index is the number of identifiers dispatched so far divided by `size`,
/// plus one for the last, incomplete batch.
/// Reading errors are forwarded and end the batching.
pub struct Batches<I> {
    ids: I,
    size: usize,
    total: usize,
    done: bool,
}

impl<I> Batches<I>
where
    I: Iterator<Item = Result<String, Error>>,
{
    pub fn new(ids: I, size: usize) -> Self {
        Self {
            ids,
            size: size.max(1),
            total: 0,
            done: false,
        }
    }
}

impl<I> Iterator for Batches<I>
where
    I: Iterator<Item = Result<String, Error>>,
{
    type Item = Result<Batch, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buf = Vec::with_capacity(self.size);
        for id in self.ids.by_ref() {
            match id {
                Ok(id) => buf.push(id),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }

            if buf.len() == self.size {
                self.total += buf.len();
                return Some(Ok(Batch {
                    index: self.total / self.size,
                    ids: buf,
                }));
            }
        }

        self.done = true;
        if buf.is_empty() {
            None
        } else {
            self.total += buf.len();
            Some(Ok(Batch {
                index: self.total / self.size + 1,
                ids: buf,
            }))
        }
    }
}
