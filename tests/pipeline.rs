// End-to-end runs of the preprocessing stages, chained the way the real
// corpora go through them.
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

use sentprep::labels::{self, Scheme};
use sentprep::filtering::VocabularyFilter;
use sentprep::processing::{merge, split, substitute};
use sentprep::segment;
use sentprep::transformers::TypedUnkSubstituter;
use sentprep::tree;
use sentprep::vocab::{builder, embeddings, CorpusFormat};

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut f = fs::File::create(&path).unwrap();
    write!(f, "{}", content).unwrap();
    path
}

#[test]
fn sst_flatten_then_remap() {
    let dir = TempDir::new().unwrap();
    let trees = write_file(
        &dir,
        "trees.txt",
        "(1 (2 good) (2 movie))\n(2 (2 meh) (2 stuff))\n(4 (2 -LRB-) (2 wow) (2 -RRB-))\n",
    );
    let flat = dir.path().join("flat.txt");
    let binary = dir.path().join("binary.txt");

    assert_eq!(tree::flatten_file(&trees, &flat).unwrap(), 3);
    assert_eq!(
        fs::read_to_string(&flat).unwrap(),
        "1\tgood movie\n2\tmeh stuff\n4\t( wow )\n"
    );

    // neutral record dropped, others collapse to the binary space
    assert_eq!(labels::remap_file(&flat, &binary, Scheme::Binary).unwrap(), 2);
    assert_eq!(
        fs::read_to_string(&binary).unwrap(),
        "0\tgood movie\n1\t( wow )\n"
    );
}

#[test]
fn segment_then_merge_keeps_alignment() {
    let dir = TempDir::new().unwrap();
    // the first review has no text at all and segments to zero sentences
    let dump = write_file(
        &dir,
        "reviews.csv",
        "\"5\",\"\"\n\"1\",\"Terrible.\"\n\"4\",\"Loved it.\"\n",
    );
    let prefix = dir.path().join("reviews");
    assert_eq!(segment::segment_file(&dump, &prefix).unwrap(), 3);

    let labels = dir.path().join("reviews.lab");
    let docs = dir.path().join("reviews.doc");
    assert_eq!(fs::read_to_string(&labels).unwrap(), "4\n0\n3\n");
    assert_eq!(
        fs::read_to_string(&docs).unwrap(),
        "\nTerrible.\n\nLoved it.\n\n"
    );

    // the empty slot must consume label 4 so the others stay on their documents
    let merged = dir.path().join("merged.txt");
    assert_eq!(merge::merge_file(&labels, &docs, &merged, false).unwrap(), 3);
    assert_eq!(
        fs::read_to_string(&merged).unwrap(),
        "4\n\n0\nterrible.\n\n3\nloved it.\n\n"
    );
}

#[test]
fn vocab_then_embedding_pruning() {
    let dir = TempDir::new().unwrap();
    let corpus = write_file(
        &dir,
        "corpus.txt",
        "0\tthe food the service\n1\tthe the the\n",
    );
    let vocab_path = dir.path().join("vocab.txt");

    // "the" appears 5 times: kept at threshold 4, cut at threshold 5
    builder::build_file(
        &[corpus.clone()],
        &vocab_path,
        CorpusFormat::Flat,
        4,
        false,
        true,
    )
    .unwrap();
    assert_eq!(fs::read_to_string(&vocab_path).unwrap(), "the\n");

    builder::build_file(&[corpus.clone()], &vocab_path, CorpusFormat::Flat, 5, false, true)
        .unwrap();
    assert_eq!(fs::read_to_string(&vocab_path).unwrap(), "");

    let table = write_file(
        &dir,
        "vectors.txt",
        "food 0.1 0.2\nunrelated 0.3 0.4\nthe 0.5 0.6\n",
    );
    let pruned = dir.path().join("pruned.txt");
    embeddings::prune_file(&table, &[corpus], &pruned, CorpusFormat::Flat).unwrap();
    assert_eq!(
        fs::read_to_string(&pruned).unwrap(),
        "0 100\nfood 0.1 0.2\nthe 0.5 0.6\n"
    );
}

#[test]
fn typed_unk_then_split() {
    let dir = TempDir::new().unwrap();

    let mut corpus_content = String::new();
    for i in 0..20 {
        corpus_content.push_str(&format!(
            "{}\topen until 9:30 on 12/25 , about 42.5 dollars\nreview number {}\n\n",
            i % 5,
            i
        ));
    }
    // block format: label line then sentences
    let corpus_content = corpus_content.replace('\t', "\n");
    let corpus = write_file(&dir, "corpus.txt", &corpus_content);

    let vocab = VocabularyFilter::from_words([
        "open", "until", "on", ",", "about", "dollars", "review",
    ]);
    let rewritten = dir.path().join("rewritten.txt");
    let t = TypedUnkSubstituter::new(vocab);
    assert_eq!(
        substitute::rewrite_blocks(&t, &corpus, &rewritten).unwrap(),
        20
    );

    let content = fs::read_to_string(&rewritten).unwrap();
    assert!(content.contains("open until _TIME_ on _DATE_ , about _NUM_ dollars"));
    assert!(content.contains("review _UNK_ _NUM_"));

    // deterministic exact-count split of the rewritten corpus
    let train = dir.path().join("train.txt");
    let dev = dir.path().join("dev.txt");
    let (n_train, n_dev) =
        split::split_file(&rewritten, &train, &dev, split::DEFAULT_SEED).unwrap();
    assert_eq!((n_train, n_dev), (18, 2));

    let first = (fs::read(&train).unwrap(), fs::read(&dev).unwrap());
    split::split_file(&rewritten, &train, &dev, split::DEFAULT_SEED).unwrap();
    let second = (fs::read(&train).unwrap(), fs::read(&dev).unwrap());
    assert_eq!(first, second);
}
