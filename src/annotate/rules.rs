//! Rule-based annotation engine.
//!
//! Sentences and words are split following Unicode text segmentation (UAX #29).
//! Lemmas are lowercased surface forms: there is no morphological analysis.
use unicode_segmentation::UnicodeSegmentation;

use crate::error::Error;

use super::{Annotate, Doc, Token};

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleAnnotator;

impl RuleAnnotator {
    fn token(word: &str) -> Token {
        let is_space = word.chars().all(char::is_whitespace);
        let is_punct = !is_space && word.chars().all(|c| !c.is_alphanumeric());

        Token {
            text: word.to_string(),
            lemma: word.to_lowercase(),
            is_punct,
            is_space,
        }
    }
}

impl Annotate for RuleAnnotator {
    fn annotate(&self, text: &str) -> Result<Doc, Error> {
        let sents = text
            .split_sentence_bounds()
            .map(|sentence| sentence.split_word_bounds().map(Self::token).collect())
            .collect();
        Ok(Doc::new(sents))
    }
}

#[cfg(test)]
mod tests {
    use crate::annotate::lemmas;

    use super::*;

    #[test]
    fn sentences() {
        let doc = RuleAnnotator.annotate("Great food!\nWould return.").unwrap();
        let sents: Vec<String> = doc.sents().map(|s| lemmas(s).join(" ")).collect();
        assert_eq!(sents, vec!["great food", "would return"]);
    }

    #[test]
    fn flags() {
        let doc = RuleAnnotator.annotate("Hi, you.").unwrap();
        let tokens: Vec<&Token> = doc.tokens().collect();
        assert_eq!(tokens[0].lemma, "hi");
        assert!(tokens[1].is_punct);
        assert!(tokens[2].is_space);
        assert!(!tokens[2].is_punct);
    }

    #[test]
    fn empty() {
        let doc = RuleAnnotator.annotate("").unwrap();
        assert_eq!(doc.tokens().count(), 0);
    }
}
