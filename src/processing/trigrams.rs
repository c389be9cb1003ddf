//! Phrase-joined review corpus.
use std::path::Path;

use log::info;

use crate::annotate::{lemmas, pipe, Annotate, PipeConfig};
use crate::error::Error;
use crate::io::{LineWriter, ReviewLines};
use crate::phrases::PhraseModel;
use crate::stopwords::StopWords;

/// Rewrite every review of an escaped corpus as phrase-joined lemmas.
///
/// Per review: lemmas (punctuation and whitespace excluded), then `first` and `second` phrase models,
/// then removal of English stopwords. One line is written per review, even if empty.
/// Returns the number of reviews.
pub fn write_trigram_review<M1, M2, A>(
    dst: &Path,
    src: &Path,
    first: &M1,
    second: &M2,
    annotator: &A,
) -> Result<usize, Error>
where
    M1: PhraseModel,
    M2: PhraseModel,
    A: Annotate,
{
    write_trigram_review_with(
        dst,
        src,
        first,
        second,
        annotator,
        StopWords::english(),
        &PipeConfig::default(),
    )
}

/// [write_trigram_review] with explicit stopwords and batching parameters.
pub fn write_trigram_review_with<M1, M2, A>(
    dst: &Path,
    src: &Path,
    first: &M1,
    second: &M2,
    annotator: &A,
    stopwords: &StopWords,
    config: &PipeConfig,
) -> Result<usize, Error>
where
    M1: PhraseModel,
    M2: PhraseModel,
    A: Annotate,
{
    info!("writing phrase-joined reviews of {:?} into {:?}", src, dst);
    let mut writer = LineWriter::create(dst)?;

    for doc in pipe(annotator, ReviewLines::from_path(src)?, config)? {
        let doc = doc?;
        let unigrams = lemmas(doc.tokens());
        let bigrams = first.apply(unigrams);
        let trigrams = second.apply(bigrams);

        let review: Vec<String> = trigrams
            .into_iter()
            .filter(|term| !stopwords.contains(term))
            .collect();
        writer.write_line(&review.join(" "))?;
    }

    let count = writer.finish()?;
    info!("wrote {} reviews", count);
    Ok(count)
}
