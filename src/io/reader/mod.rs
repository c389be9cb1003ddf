/*! Line-oriented readers

- [JsonlReader] deserializes one JSON object per line,
- [ReviewLines] yields unescaped reviews from an escaped corpus,
- [SentenceLines] yields whitespace-tokenized sentences from a sentence corpus.
!*/
mod jsonl;
mod lines;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::debug;

use crate::error::Error;

pub use jsonl::{JsonlReader, OnMalformed};
pub use lines::{ReviewLines, SentenceLines};

/// Open a file for buffered reading.
///
/// Files ending in `.gz` are transparently decompressed.
pub fn open(src: &Path) -> Result<Box<dyn BufRead>, Error> {
    let f = File::open(src)?;
    let gzipped = src.extension().map_or(false, |ext| ext == "gz");

    debug!("opening {:?} (gzip: {})", src, gzipped);
    if gzipped {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(f))))
    } else {
        Ok(Box::new(BufReader::new(f)))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::{write::GzEncoder, Compression};

    use super::*;

    #[test]
    fn open_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("business.json.gz");
        let mut enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        enc.write_all(b"first\nsecond\n").unwrap();
        enc.finish().unwrap();

        let lines: Vec<String> = open(&path).unwrap().lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn open_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            open(&dir.path().join("missing.json")),
            Err(Error::Io(_))
        ));
    }
}
