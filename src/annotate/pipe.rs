//! Batched annotation of a stream of texts.
use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::Error;

use super::{Annotate, Doc, PipeConfig};

/// Lazy iterator over annotated documents.
///
/// Reads `batch_size` texts from the source, annotates them on its own thread pool,
/// then yields the resulting documents in source order.
/// Errors from the source are yielded at their position.
pub struct Pipe<'a, A, I> {
    annotator: &'a A,
    texts: I,
    pool: ThreadPool,
    batch_size: usize,
    batch: std::vec::IntoIter<Result<Doc, Error>>,
    exhausted: bool,
}

/// Annotate `texts` with `annotator`, by batches.
pub fn pipe<'a, A, I>(
    annotator: &'a A,
    texts: I,
    config: &PipeConfig,
) -> Result<Pipe<'a, A, I::IntoIter>, Error>
where
    A: Annotate,
    I: IntoIterator<Item = Result<String, Error>>,
{
    let pool = ThreadPoolBuilder::new()
        .num_threads(config.n_threads)
        .build()
        .map_err(|e| Error::Custom(format!("could not build annotation thread pool: {}", e)))?;

    Ok(Pipe {
        annotator,
        texts: texts.into_iter(),
        pool,
        batch_size: config.batch_size.max(1),
        batch: Vec::new().into_iter(),
        exhausted: false,
    })
}

impl<'a, A, I> Pipe<'a, A, I>
where
    A: Annotate,
    I: Iterator<Item = Result<String, Error>>,
{
    /// Read and annotate the next batch.
    /// Returns false if the source is exhausted.
    fn fill(&mut self) -> bool {
        if self.exhausted {
            return false;
        }

        let texts: Vec<Result<String, Error>> =
            self.texts.by_ref().take(self.batch_size).collect();
        if texts.len() < self.batch_size {
            self.exhausted = true;
        }
        if texts.is_empty() {
            return false;
        }

        debug!("annotating batch of {} documents", texts.len());
        let annotator = self.annotator;
        let docs: Vec<Result<Doc, Error>> = self.pool.install(|| {
            texts
                .into_par_iter()
                .map(|text| text.and_then(|text| annotator.annotate(&text)))
                .collect()
        });

        self.batch = docs.into_iter();
        true
    }
}

impl<'a, A, I> Iterator for Pipe<'a, A, I>
where
    A: Annotate,
    I: Iterator<Item = Result<String, Error>>,
{
    type Item = Result<Doc, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(doc) = self.batch.next() {
            return Some(doc);
        }
        if self.fill() {
            self.batch.next()
        } else {
            None
        }
    }
}
