//! Lemmatized sentence corpus.
use std::path::Path;

use log::info;

use crate::annotate::{lemmas, pipe, Annotate, PipeConfig};
use crate::error::Error;
use crate::io::{LineWriter, ReviewLines};

/// Lazy iterator over the lemmatized sentences of an escaped review corpus.
///
/// Reviews are unescaped and annotated by batches, then each sentence is
/// turned into its space-joined lemmas, punctuation and whitespace excluded.
/// Sentences with no remaining lemma are skipped.
/// Sentences come in review order, then in sentence order.
pub fn lemmatized_sentence_corpus<'a, A: Annotate>(
    src: &Path,
    annotator: &'a A,
    config: &PipeConfig,
) -> Result<impl Iterator<Item = Result<String, Error>> + 'a, Error> {
    let reviews = ReviewLines::from_path(src)?;
    let docs = pipe(annotator, reviews, config)?;

    let sentences = docs
        .flat_map(|doc| match doc {
            Ok(doc) => {
                let sentences: Vec<Result<String, Error>> = doc
                    .sents()
                    .map(|sent| Ok(lemmas(sent).join(" ")))
                    .collect();
                sentences
            }
            Err(e) => vec![Err(e)],
        })
        .filter(|sentence| !matches!(sentence, Ok(s) if s.is_empty()));

    Ok(sentences)
}

/// Write one lemmatized sentence per line, returns the number of sentences.
pub fn write_unigram_sents<A: Annotate>(
    dst: &Path,
    src: &Path,
    annotator: &A,
) -> Result<usize, Error> {
    write_unigram_sents_with(dst, src, annotator, &PipeConfig::default())
}

/// [write_unigram_sents] with explicit batching parameters.
pub fn write_unigram_sents_with<A: Annotate>(
    dst: &Path,
    src: &Path,
    annotator: &A,
    config: &PipeConfig,
) -> Result<usize, Error> {
    info!("writing unigram sentences of {:?} into {:?}", src, dst);
    let mut writer = LineWriter::create(dst)?;

    for sentence in lemmatized_sentence_corpus(src, annotator, config)? {
        writer.write_line(&sentence?)?;
    }

    let count = writer.finish()?;
    info!("wrote {} sentences", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use crate::annotate::RuleAnnotator;

    use super::*;

    #[test]
    fn sentences_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("review.txt");
        let dst = dir.path().join("unigram.txt");
        std::fs::write(&src, "Great food!\\nWould return.\n\n...\nBad store.\n").unwrap();

        let count = write_unigram_sents(&dst, &src, &RuleAnnotator).unwrap();
        assert_eq!(count, 3);
        assert_eq!(
            std::fs::read_to_string(&dst).unwrap(),
            "great food\nwould return\nbad store\n"
        );
    }

    #[test]
    fn lazy_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("review.txt");
        std::fs::write(&src, "One. Two.\nThree.\n").unwrap();

        let mut corpus =
            lemmatized_sentence_corpus(&src, &RuleAnnotator, &PipeConfig::default()).unwrap();
        assert_eq!(corpus.next().unwrap().unwrap(), "one");
        assert_eq!(corpus.next().unwrap().unwrap(), "two");
        assert_eq!(corpus.next().unwrap().unwrap(), "three");
        assert!(corpus.next().is_none());
    }
}
