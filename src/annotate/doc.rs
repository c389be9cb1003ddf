//! Annotated documents.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub is_punct: bool,
    pub is_space: bool,
}

impl Token {
    pub fn new(text: &str, lemma: &str, is_punct: bool, is_space: bool) -> Self {
        Self {
            text: text.to_string(),
            lemma: lemma.to_string(),
            is_punct,
            is_space,
        }
    }
}

/// An annotated text, split into sentences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Doc {
    sents: Vec<Vec<Token>>,
}

impl Doc {
    pub fn new(sents: Vec<Vec<Token>>) -> Self {
        Self { sents }
    }

    /// Sentences, in text order.
    pub fn sents(&self) -> impl Iterator<Item = &[Token]> {
        self.sents.iter().map(Vec::as_slice)
    }

    /// All tokens of the document, in text order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.sents.iter().flatten()
    }
}

/// true if the token is pure punctuation or whitespace.
pub fn punct_space(token: &Token) -> bool {
    token.is_punct || token.is_space
}

/// Lemmas of tokens that are neither punctuation nor whitespace.
pub fn lemmas<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|token| !punct_space(token))
        .map(|token| token.lemma.clone())
        .collect()
}
