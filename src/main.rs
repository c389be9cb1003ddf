//! # phrasecorpus
//!
//! Prepares review corpora for phrase model training.
//!
//! ```sh
//! phrasecorpus restaurants business.json -o restaurant_ids.txt
//! phrasecorpus extract business.json review.json review_text_all.txt
//! phrasecorpus unigrams review_text_all.txt unigram_sentences_all.txt
//! phrasecorpus sents unigram_sentences_all.txt bigram_sentences_all.txt --phrases bigram_model.json
//! phrasecorpus trigrams review_text_all.txt trigram_transformed_reviews_all.txt \
//!     --bigram bigram_model.json --trigram trigram_model.json
//! ```
//!
//! Logging is controlled by `RUST_LOG` (e.g. `RUST_LOG=info`).
use itertools::Itertools;
use phrasecorpus::annotate::{PipeConfig, RuleAnnotator};
use phrasecorpus::error::Error;
use phrasecorpus::filtering::CategoryFilter;
use phrasecorpus::io::LineWriter;
use phrasecorpus::phrases::Phraser;
use phrasecorpus::processing;
use phrasecorpus::stopwords::StopWords;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::PhraseCorpus::from_args();
    debug!("cli args\n{:#?}", opt);
    let policy = opt.policy();

    match opt.cmd {
        cli::Command::Restaurants(r) => {
            let filter = CategoryFilter::new(&r.category);
            let ids = processing::get_ids_by_category(&r.business, &filter, policy)?;
            if let Some(out) = r.out {
                let mut writer = LineWriter::create(&out)?;
                for id in ids.iter().sorted() {
                    writer.write_line(id)?;
                }
                writer.finish()?;
            }
            println!("{}", ids.len());
        }
        cli::Command::Extract(e) => {
            let filter = CategoryFilter::new(&e.category);
            let ids = processing::get_ids_by_category(&e.business, &filter, policy)?;
            let count = processing::write_review_file_with(&e.dst, &e.review, &ids, policy)?;
            println!("{}", count);
        }
        cli::Command::Unigrams(u) => {
            let config = PipeConfig::from(&u.pipe);
            let count =
                processing::write_unigram_sents_with(&u.dst, &u.src, &RuleAnnotator, &config)?;
            println!("{}", count);
        }
        cli::Command::Sents(s) => {
            let model = Phraser::from_path(&s.phrases)?;
            let count = processing::write_sents(&s.dst, &s.src, &model)?;
            println!("{}", count);
        }
        cli::Command::Trigrams(t) => {
            let bigram = Phraser::from_path(&t.bigram)?;
            let trigram = Phraser::from_path(&t.trigram)?;
            let stopwords = match &t.stopwords {
                Some(path) => StopWords::from_path(path)?,
                None => StopWords::default(),
            };
            let config = PipeConfig::from(&t.pipe);
            let count = processing::write_trigram_review_with(
                &t.dst,
                &t.src,
                &bigram,
                &trigram,
                &RuleAnnotator,
                &stopwords,
                &config,
            )?;
            println!("{}", count);
        }
    };
    Ok(())
}
