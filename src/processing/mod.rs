/*! Corpus processing stages

Each stage is a full streaming pass over one input file, producing one output file:

1. [get_restaurant_ids]: business file -> identifier set,
1. [write_review_file]: review file + identifier set -> escaped review corpus,
1. [write_unigram_sents]: escaped review corpus -> lemmatized sentence corpus,
1. [write_sents]: sentence corpus -> phrase-joined sentence corpus,
1. [write_trigram_review]: escaped review corpus -> phrase-joined review corpus.

Stages do not check that their input has been produced by a previous one.
!*/
mod extract;
mod restaurants;
mod sents;
mod trigrams;
mod unigrams;

pub use extract::{write_review_file, write_review_file_with};
pub use restaurants::{get_ids_by_category, get_restaurant_ids, IdSet};
pub use sents::write_sents;
pub use trigrams::{write_trigram_review, write_trigram_review_with};
pub use unigrams::{lemmatized_sentence_corpus, write_unigram_sents, write_unigram_sents_with};
