//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "sentprep", about = "sentiment corpus preprocessing tool.")]
/// Holds every command callable by the `sentprep` command.
pub enum SentPrep {
    #[structopt(about = "Flatten bracketed constituency trees into label<TAB>sentence records")]
    FlattenTrees(FlattenTrees),
    #[structopt(about = "Segment a raw review dump into aligned .doc/.lab files")]
    Segment(Segment),
    #[structopt(about = "Merge a .lab file with its .doc file into a block corpus")]
    Merge(Merge),
    #[structopt(about = "Remap 5-class labels to 3-class or binary, dropping neutral")]
    Remap(Remap),
    #[structopt(about = "Build a frequency-thresholded vocabulary")]
    Vocab(Vocab),
    #[structopt(about = "Prune an embedding table down to a corpus vocabulary")]
    FilterEmbeddings(FilterEmbeddings),
    #[structopt(about = "Replace out-of-vocabulary tokens with placeholders")]
    Unk(Unk),
    #[structopt(about = "Split a block corpus into train and dev parts")]
    Split(Split),
    #[structopt(about = "Emit a 10% sample of a block corpus")]
    Sample(Sample),
    #[structopt(about = "Import a tang15-format release as a block corpus")]
    ImportTang15(ImportTang15),
    #[structopt(about = "Strip labels and separators from a block corpus")]
    Strip(Strip),
}

#[derive(Debug, StructOpt)]
pub struct FlattenTrees {
    #[structopt(parse(from_os_str), help = "tree file, one bracketed tree per line")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "flat corpus destination")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Segment {
    #[structopt(parse(from_os_str), help = "review dump (one quoted CSV record per line)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "output prefix (.doc and .lab are appended)")]
    pub dst_prefix: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Merge {
    #[structopt(parse(from_os_str), help = "label file (one label per line)")]
    pub labels: PathBuf,
    #[structopt(parse(from_os_str), help = "document file (blank-line-delimited)")]
    pub documents: PathBuf,
    #[structopt(parse(from_os_str), help = "block corpus destination")]
    pub dst: PathBuf,
    #[structopt(long = "keep-case", help = "do not lowercase sentences")]
    pub keep_case: bool,
}

#[derive(Debug, StructOpt)]
pub struct Remap {
    #[structopt(parse(from_os_str), help = "flat 5-class corpus")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "remapped corpus destination")]
    pub dst: PathBuf,
    #[structopt(short = "b", long = "binary", help = "map to binary instead of 3-class")]
    pub binary: bool,
}

#[derive(Debug, StructOpt)]
pub struct Vocab {
    #[structopt(parse(from_os_str), help = "vocabulary destination (one word per line)")]
    pub dst: PathBuf,
    #[structopt(parse(from_os_str), help = "corpus file(s)", required = true)]
    pub inputs: Vec<PathBuf>,
    #[structopt(
        short = "t",
        long = "threshold",
        help = "keep words counted strictly more than this"
    )]
    pub threshold: u64,
    #[structopt(long = "lowercase", help = "case-fold tokens before counting")]
    pub lowercase: bool,
    #[structopt(long = "blocks", help = "inputs are block corpora, not flat")]
    pub blocks: bool,
    #[structopt(long = "stable", help = "sort output lexicographically")]
    pub stable: bool,
}

#[derive(Debug, StructOpt)]
pub struct FilterEmbeddings {
    #[structopt(parse(from_os_str), help = "embedding table (word v1 ... v100 per line)")]
    pub embeddings: PathBuf,
    #[structopt(parse(from_os_str), help = "pruned table destination")]
    pub dst: PathBuf,
    #[structopt(parse(from_os_str), help = "corpus file(s) the vocabulary is scanned from", required = true)]
    pub corpora: Vec<PathBuf>,
    #[structopt(long = "blocks", help = "corpora are block corpora, not flat")]
    pub blocks: bool,
}

#[derive(Debug, StructOpt)]
pub struct Unk {
    #[structopt(parse(from_os_str), help = "vocabulary file (one word per line)")]
    pub vocab: PathBuf,
    #[structopt(parse(from_os_str), help = "source corpus")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "rewritten corpus destination")]
    pub dst: PathBuf,
    #[structopt(long = "typed", help = "use _NUM_/_TIME_/_DATE_ placeholders")]
    pub typed: bool,
    #[structopt(
        parse(from_os_str),
        long = "replaceable",
        help = "second vocabulary; its tokens become UNK, others are dropped"
    )]
    pub replaceable: Option<PathBuf>,
    #[structopt(long = "flat", help = "source is a flat corpus, not blocks")]
    pub flat: bool,
}

#[derive(Debug, StructOpt)]
/// Split command and parameters.
pub struct Split {
    #[structopt(parse(from_os_str), help = "block corpus to split")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "train set destination")]
    pub train: PathBuf,
    #[structopt(parse(from_os_str), help = "dev set destination")]
    pub dev: PathBuf,
    #[structopt(short = "s", long = "seed", default_value = "1234", help = "sampling seed")]
    pub seed: u64,
}

#[derive(Debug, StructOpt)]
pub struct Sample {
    #[structopt(parse(from_os_str), help = "block corpus to sample from")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "sample destination")]
    pub dst: PathBuf,
    #[structopt(short = "s", long = "seed", default_value = "1234", help = "sampling seed")]
    pub seed: u64,
}

#[derive(Debug, StructOpt)]
pub struct ImportTang15 {
    #[structopt(parse(from_os_str), help = "tang15 release file")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "block corpus destination")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Strip {
    #[structopt(parse(from_os_str), help = "block corpus")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "sentence file destination")]
    pub dst: PathBuf,
}
