//! Frozen phrase table.
use std::collections::HashSet;
use std::path::Path;

use log::info;
use serde::Deserialize;
#[cfg(test)]
use serde::Serialize;

use crate::error::Error;

use super::PhraseModel;

fn default_delimiter() -> String {
    "_".to_string()
}

/// Serialized form of a [Phraser].
///
/// ```json
/// {"delimiter": "_", "phrases": [["ice", "cream"], ["new_york", "city"]]}
/// ```
#[derive(Debug, Deserialize)]
#[cfg_attr(test, derive(Serialize))]
struct PhraseTable {
    #[serde(default = "default_delimiter")]
    delimiter: String,
    phrases: Vec<(String, String)>,
}

/// Merges adjacent token pairs found in a phrase table.
///
/// Tokens are scanned left to right: when a token and its successor form a known phrase,
/// they are replaced by a single token joined with the delimiter, and scanning resumes after the pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phraser {
    delimiter: String,
    phrases: HashSet<(String, String)>,
}

impl Phraser {
    pub fn new<I>(phrases: I, delimiter: &str) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            delimiter: delimiter.to_string(),
            phrases: phrases.into_iter().collect(),
        }
    }

    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let table: PhraseTable = serde_json::from_reader(crate::io::open(src)?)?;
        let phraser = Self::new(table.phrases, &table.delimiter);
        info!("loaded {} phrases from {:?}", phraser.len(), src);
        Ok(phraser)
    }

    #[cfg(test)]
    fn to_path(&self, dst: &Path) -> Result<(), Error> {
        let mut phrases: Vec<(String, String)> = self.phrases.iter().cloned().collect();
        phrases.sort();
        let table = PhraseTable {
            delimiter: self.delimiter.clone(),
            phrases,
        };
        let f = std::fs::File::create(dst)?;
        serde_json::to_writer(f, &table)?;
        Ok(())
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    fn is_phrase(&self, left: &str, right: &str) -> bool {
        self.phrases
            .contains(&(left.to_string(), right.to_string()))
    }
}

impl PhraseModel for Phraser {
    fn apply(&self, tokens: Vec<String>) -> Vec<String> {
        let mut out = Vec::with_capacity(tokens.len());
        let mut tokens = tokens.into_iter().peekable();

        while let Some(token) = tokens.next() {
            match tokens.peek() {
                Some(next) if self.is_phrase(&token, next) => {
                    // checked by peek
                    if let Some(next) = tokens.next() {
                        out.push(format!("{}{}{}", token, self.delimiter, next));
                    }
                }
                _ => out.push(token),
            }
        }

        out
    }
}
