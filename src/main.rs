//! # sentprep
//!
//! sentprep turns raw sentiment-analysis corpora (SST bracketed trees, Yelp
//! review dumps) into the normalized tab- and blank-line-delimited formats
//! used for model training.
//!
//! Every subcommand is a one-shot batch transform: it reads its input
//! file(s) to the end, writes its output and exits. Chaining subcommands
//! builds the full preprocessing pipeline:
//!
//! ```sh
//! sentprep flatten-trees train.txt sst.flat
//! sentprep remap -b sst.flat sst.binary
//! sentprep vocab -t 4 vocab.txt sst.binary
//! sentprep unk --flat vocab.txt sst.binary sst.unked
//! ```
//!
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use sentprep::error::Error;
use sentprep::filtering::VocabularyFilter;
use sentprep::labels::{self, Scheme};
use sentprep::processing::{merge, split, strip, substitute, tang15};
use sentprep::segment;
use sentprep::transformers::{DualVocabSubstituter, Transform, TypedUnkSubstituter, UnkSubstituter};
use sentprep::tree;
use sentprep::vocab::{builder, embeddings, CorpusFormat};

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::SentPrep::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::SentPrep::FlattenTrees(f) => {
            tree::flatten_file(&f.src, &f.dst)?;
        }

        cli::SentPrep::Segment(s) => {
            segment::segment_file(&s.src, &s.dst_prefix)?;
        }

        cli::SentPrep::Merge(m) => {
            merge::merge_file(&m.labels, &m.documents, &m.dst, m.keep_case)?;
        }

        cli::SentPrep::Remap(r) => {
            let scheme = if r.binary { Scheme::Binary } else { Scheme::Three };
            labels::remap_file(&r.src, &r.dst, scheme)?;
        }

        cli::SentPrep::Vocab(v) => {
            let format = corpus_format(v.blocks);
            builder::build_file(&v.inputs, &v.dst, format, v.threshold, v.lowercase, v.stable)?;
        }

        cli::SentPrep::FilterEmbeddings(f) => {
            let format = corpus_format(f.blocks);
            embeddings::prune_file(&f.embeddings, &f.corpora, &f.dst, format)?;
        }

        cli::SentPrep::Unk(u) => {
            let vocab = VocabularyFilter::from_path(&u.vocab)?;
            match (&u.replaceable, u.typed) {
                (Some(_), true) => {
                    return Err(Error::Custom(
                        "--typed and --replaceable are mutually exclusive".to_string(),
                    ));
                }
                (Some(replaceable), false) => {
                    let replaceable = VocabularyFilter::from_path(replaceable)?;
                    let t = DualVocabSubstituter::new(vocab, replaceable);
                    rewrite(&t, &u)?;
                }
                (None, true) => {
                    let t = TypedUnkSubstituter::new(vocab);
                    rewrite(&t, &u)?;
                }
                (None, false) => {
                    let t = UnkSubstituter::new(vocab);
                    rewrite(&t, &u)?;
                }
            }
        }

        cli::SentPrep::Split(s) => {
            split::split_file(&s.src, &s.train, &s.dev, s.seed)?;
        }

        cli::SentPrep::Sample(s) => {
            split::sample_file(&s.src, &s.dst, s.seed)?;
        }

        cli::SentPrep::ImportTang15(i) => {
            tang15::convert_file(&i.src, &i.dst)?;
        }

        cli::SentPrep::Strip(s) => {
            strip::strip_file(&s.src, &s.dst)?;
        }
    };
    Ok(())
}

fn corpus_format(blocks: bool) -> CorpusFormat {
    if blocks {
        CorpusFormat::Blocks
    } else {
        CorpusFormat::Flat
    }
}

fn rewrite<T: Transform>(t: &T, u: &cli::Unk) -> Result<(), Error> {
    if u.flat {
        substitute::rewrite_flat(t, &u.src, &u.dst)?;
    } else {
        substitute::rewrite_blocks(t, &u.src, &u.dst)?;
    }
    Ok(())
}
