//! Stopword sets.
use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use lazy_static::lazy_static;
use log::info;

use crate::error::Error;

const ENGLISH: &str = "a about above across after afterwards again against all almost alone along already also although always am among amongst amount an and another any anyhow anyone anything anyway anywhere are around as at back be became because become becomes becoming been before beforehand behind being below beside besides between beyond both bottom but by ca call can cannot could did do does doing done down due during each eight either eleven else elsewhere empty enough even ever every everyone everything everywhere except few fifteen fifty first five for former formerly forty four from front full further get give go had has have he hence her here hereafter hereby herein hereupon hers herself him himself his how however hundred i if in indeed into is it its itself just keep last latter latterly least less made make many may me meanwhile might mine more moreover most mostly move much must my myself name namely neither never nevertheless next nine no nobody none noone nor not nothing now nowhere of off often on once one only onto or other others otherwise our ours ourselves out over own part per perhaps please put quite rather re really regarding same say see seem seemed seeming seems serious several she should show side since six sixty so some somehow someone something sometime sometimes somewhere still such take ten than that the their them themselves then thence there thereafter thereby therefore therein thereupon these they third this those though three through throughout thru thus to together too top toward towards twelve twenty two under unless until up upon us used using various very via was we well were what whatever when whence whenever where whereafter whereas whereby wherein whereupon wherever whether which while whither who whoever whole whom whose why will with within without would yet you your yours yourself yourselves 's 'd 'll 'm 're 've n't";

lazy_static! {
    static ref ENGLISH_STOPWORDS: StopWords = StopWords::new(ENGLISH.split_whitespace());
}

/// A fixed set of words excluded from phrase-joined output.
///
/// Membership is exact: words are compared as lemmatized, without case folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Built-in English stopwords.
    pub fn english() -> &'static StopWords {
        &ENGLISH_STOPWORDS
    }

    /// Load one word per line. Blank lines and lines starting with `#` are ignored.
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let mut words = HashSet::new();
        for line in crate::io::open(src)?.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            words.insert(word.to_string());
        }
        info!("loaded {} stopwords from {:?}", words.len(), src);
        Ok(Self { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english() {
        let sw = StopWords::english();
        assert!(sw.contains("the"));
        assert!(sw.contains("would"));
        assert!(!sw.contains("food"));
        assert!(!sw.contains("The"));
        assert!(!sw.contains("-pron-"));
    }

    #[test]
    fn from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stopwords.txt");
        std::fs::write(&path, "# custom list\nfood\n\n  great \n").unwrap();
        let sw = StopWords::from_path(&path).unwrap();
        assert_eq!(sw.len(), 2);
        assert!(sw.contains("great"));
    }
}
