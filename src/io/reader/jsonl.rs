//! JSON-lines reader.
use std::io::{BufRead, Lines};
use std::marker::PhantomData;
use std::path::Path;

use log::warn;
use serde::de::DeserializeOwned;

use crate::error::Error;

/// What to do with a line that is not a valid record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnMalformed {
    /// Yield an [Error::Parse] (callers abort on it).
    #[default]
    Abort,
    /// Log the line number and go on with the next line.
    Skip,
}

/// Deserializes one `T` per line.
///
/// Blank lines are malformed lines. Line numbers in errors are 1-based.
pub struct JsonlReader<T> {
    lines: Lines<Box<dyn BufRead>>,
    line: usize,
    policy: OnMalformed,
    record: PhantomData<T>,
}

impl<T> JsonlReader<T>
where
    T: DeserializeOwned,
{
    pub fn new(reader: Box<dyn BufRead>, policy: OnMalformed) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            policy,
            record: PhantomData,
        }
    }

    pub fn from_path(src: &Path, policy: OnMalformed) -> Result<Self, Error> {
        Ok(Self::new(super::open(src)?, policy))
    }
}

impl<T> Iterator for JsonlReader<T>
where
    T: DeserializeOwned,
{
    type Item = Result<T, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::Io(e))),
            };
            self.line += 1;

            match serde_json::from_str::<T>(&line) {
                Ok(record) => return Some(Ok(record)),
                Err(e) => match self.policy {
                    OnMalformed::Abort => return Some(Err(Error::parse(self.line, e))),
                    OnMalformed::Skip => {
                        warn!("skipping malformed line {}: {}", self.line, e);
                    }
                },
            }
        }
    }
}
