//! Plain text corpus readers.
use std::io::{BufRead, Lines};
use std::path::Path;

use crate::error::Error;
use crate::escape::unescape;

/// Reads an escaped review corpus and yields the original review texts.
///
/// Every physical line is one review, including empty ones.
/// Lines are split on `\n` only: a carriage return belongs to the review text.
pub struct ReviewLines {
    reader: Box<dyn BufRead>,
}

impl ReviewLines {
    pub fn new(reader: Box<dyn BufRead>) -> Self {
        Self { reader }
    }

    pub fn from_path(src: &Path) -> Result<Self, Error> {
        Ok(Self::new(super::open(src)?))
    }
}

impl Iterator for ReviewLines {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                }
                Some(Ok(unescape(&line)))
            }
            Err(e) => Some(Err(Error::Io(e))),
        }
    }
}

/// Reads a sentence corpus (one sentence per line, tokens separated by whitespace).
pub struct SentenceLines {
    lines: Lines<Box<dyn BufRead>>,
}

impl SentenceLines {
    pub fn new(reader: Box<dyn BufRead>) -> Self {
        Self {
            lines: reader.lines(),
        }
    }

    pub fn from_path(src: &Path) -> Result<Self, Error> {
        Ok(Self::new(super::open(src)?))
    }
}

impl Iterator for SentenceLines {
    type Item = Result<Vec<String>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| {
            line.map(|l| l.split_whitespace().map(String::from).collect())
                .map_err(Error::Io)
        })
    }
}
