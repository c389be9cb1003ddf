/*! Phrase models

A phrase model merges runs of adjacent tokens that form a known phrase into a single token.
Models are applied in sequence: applying a bigram model then a second model on its output yields up to 4-token phrases.

Phrase model training is not done here. [Phraser] applies a frozen phrase table exported by a trainer.
!*/
mod phraser;

pub use phraser::Phraser;

/// Phrase model.
pub trait PhraseModel {
    /// Merge known phrases of `tokens`, preserving token order.
    fn apply(&self, tokens: Vec<String>) -> Vec<String>;
}

impl<T: PhraseModel + ?Sized> PhraseModel for &T {
    fn apply(&self, tokens: Vec<String>) -> Vec<String> {
        (**self).apply(tokens)
    }
}
