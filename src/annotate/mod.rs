/*! Annotation engine interface

An annotation engine turns a raw text into a [Doc]: a sequence of sentences, each being a sequence of [Token]s
carrying a lemma and punctuation/whitespace flags.

Engines implement [Annotate]. Batched, multi-threaded invocation over a stream of texts is done by [pipe],
which always yields documents in input order.

[RuleAnnotator] is a lightweight engine based on Unicode segmentation rules.
!*/
mod doc;
mod pipe;
mod rules;

pub use doc::{lemmas, punct_space, Doc, Token};
pub use pipe::{pipe, Pipe};
pub use rules::RuleAnnotator;

use crate::error::Error;

/// Annotation engine.
///
/// Implementors must be [Sync] since documents of a batch are annotated concurrently.
pub trait Annotate: Sync {
    fn annotate(&self, text: &str) -> Result<Doc, Error>;
}

impl<T: Annotate + ?Sized> Annotate for &T {
    fn annotate(&self, text: &str) -> Result<Doc, Error> {
        (**self).annotate(text)
    }
}

/// Batching parameters of [pipe].
///
/// These only affect throughput, never output content or order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipeConfig {
    /// Number of documents read ahead and annotated together.
    pub batch_size: usize,
    /// Number of worker threads. `0` lets rayon pick.
    pub n_threads: usize,
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            batch_size: 10_000,
            n_threads: 8,
        }
    }
}
