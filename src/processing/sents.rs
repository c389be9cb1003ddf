//! Phrase model application on a sentence corpus.
use std::path::Path;

use log::info;

use crate::error::Error;
use crate::io::{LineWriter, SentenceLines};
use crate::phrases::PhraseModel;

/// Apply `model` to every sentence of `src` (one whitespace-tokenized sentence per line).
///
/// Writes one line per input line, returns the number of sentences.
pub fn write_sents<M: PhraseModel>(dst: &Path, src: &Path, model: &M) -> Result<usize, Error> {
    info!("applying phrase model on {:?} into {:?}", src, dst);
    let mut writer = LineWriter::create(dst)?;

    for sentence in SentenceLines::from_path(src)? {
        let sentence = model.apply(sentence?);
        writer.write_line(&sentence.join(" "))?;
    }

    let count = writer.finish()?;
    info!("wrote {} sentences", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use crate::phrases::Phraser;

    use super::*;

    #[test]
    fn bigram_sentences() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("unigram.txt");
        let dst = dir.path().join("bigram.txt");
        std::fs::write(&src, "best ice cream\n\nice is cold\n").unwrap();

        let model = Phraser::new(vec![("ice".to_string(), "cream".to_string())], "_");
        assert_eq!(write_sents(&dst, &src, &model).unwrap(), 3);
        assert_eq!(
            std::fs::read_to_string(&dst).unwrap(),
            "best ice_cream\n\nice is cold\n"
        );
    }
}
