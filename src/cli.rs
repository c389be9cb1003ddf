//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use phrasecorpus::annotate::PipeConfig;
use phrasecorpus::io::OnMalformed;

#[derive(Debug, StructOpt)]
#[structopt(name = "phrasecorpus", about = "review corpus preparation tool.")]
pub struct PhraseCorpus {
    #[structopt(
        long = "skip-malformed",
        help = "skip (and log) malformed JSON lines instead of aborting"
    )]
    pub skip_malformed: bool,
    #[structopt(subcommand)]
    pub cmd: Command,
}

impl PhraseCorpus {
    pub fn policy(&self) -> OnMalformed {
        if self.skip_malformed {
            OnMalformed::Skip
        } else {
            OnMalformed::Abort
        }
    }
}

/// Holds every command that is callable by the `phrasecorpus` command.
#[derive(Debug, StructOpt)]
pub enum Command {
    #[structopt(about = "Collect ids of businesses of a category")]
    Restaurants(Restaurants),
    #[structopt(about = "Extract (escaped) reviews of businesses of a category")]
    Extract(Extract),
    #[structopt(about = "Write lemmatized sentences of a review corpus")]
    Unigrams(Unigrams),
    #[structopt(about = "Apply a phrase model on a sentence corpus")]
    Sents(Sents),
    #[structopt(about = "Write phrase-joined reviews of a review corpus")]
    Trigrams(Trigrams),
}

#[derive(Debug, StructOpt)]
pub struct Restaurants {
    #[structopt(parse(from_os_str), help = "business JSON-lines file")]
    pub business: PathBuf,
    #[structopt(long = "category", default_value = "Restaurants")]
    pub category: String,
    #[structopt(
        parse(from_os_str),
        long = "out",
        short = "o",
        help = "write sorted ids there, one per line"
    )]
    pub out: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct Extract {
    #[structopt(parse(from_os_str), help = "business JSON-lines file")]
    pub business: PathBuf,
    #[structopt(parse(from_os_str), help = "review JSON-lines file")]
    pub review: PathBuf,
    #[structopt(parse(from_os_str), help = "escaped review corpus destination")]
    pub dst: PathBuf,
    #[structopt(long = "category", default_value = "Restaurants")]
    pub category: String,
}

/// Annotation batching options.
#[derive(Debug, StructOpt)]
pub struct PipeOpts {
    #[structopt(
        long = "batch-size",
        default_value = "10000",
        help = "number of reviews annotated together"
    )]
    pub batch_size: usize,
    #[structopt(
        long = "threads",
        short = "t",
        default_value = "8",
        help = "number of annotation threads (0: one per core)"
    )]
    pub n_threads: usize,
}

impl From<&PipeOpts> for PipeConfig {
    fn from(opts: &PipeOpts) -> Self {
        PipeConfig {
            batch_size: opts.batch_size,
            n_threads: opts.n_threads,
        }
    }
}

#[derive(Debug, StructOpt)]
pub struct Unigrams {
    #[structopt(parse(from_os_str), help = "escaped review corpus")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "sentence corpus destination")]
    pub dst: PathBuf,
    #[structopt(flatten)]
    pub pipe: PipeOpts,
}

#[derive(Debug, StructOpt)]
pub struct Sents {
    #[structopt(parse(from_os_str), help = "sentence corpus")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "phrase-joined sentence corpus destination")]
    pub dst: PathBuf,
    #[structopt(parse(from_os_str), long = "phrases", help = "phrase model (JSON)")]
    pub phrases: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Trigrams {
    #[structopt(parse(from_os_str), help = "escaped review corpus")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "phrase-joined review corpus destination")]
    pub dst: PathBuf,
    #[structopt(parse(from_os_str), long = "bigram", help = "first-order phrase model (JSON)")]
    pub bigram: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "trigram",
        help = "second-order phrase model (JSON)"
    )]
    pub trigram: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "stopwords",
        help = "stopword file, one per line. Default is a built-in English list."
    )]
    pub stopwords: Option<PathBuf>,
    #[structopt(flatten)]
    pub pipe: PipeOpts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trigrams() {
        let opt = PhraseCorpus::from_iter(&[
            "phrasecorpus",
            "--skip-malformed",
            "trigrams",
            "review.txt",
            "trigram.txt",
            "--bigram",
            "b.json",
            "--trigram",
            "t.json",
            "--batch-size",
            "10",
        ]);
        assert_eq!(opt.policy(), OnMalformed::Skip);
        match opt.cmd {
            Command::Trigrams(t) => {
                assert_eq!(t.pipe.batch_size, 10);
                assert_eq!(t.pipe.n_threads, 8);
                assert!(t.stopwords.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn default_category() {
        let opt = PhraseCorpus::from_iter(&["phrasecorpus", "restaurants", "business.json"]);
        assert_eq!(opt.policy(), OnMalformed::Abort);
        match opt.cmd {
            Command::Restaurants(r) => assert_eq!(r.category, "Restaurants"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
