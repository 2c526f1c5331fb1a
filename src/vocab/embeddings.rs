//! Embedding table pruning.
//!
//! Restricts an external `word v1 ... v100` table to the words appearing in
//! a corpus, preserving row order. Output starts with the `0 100` header
//! line expected by downstream loaders.
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Error;
use crate::vocab::builder::{CorpusFormat, VocabBuilder};

/// Fixed word-vector dimension convention.
pub const EMBEDDING_DIM: usize = 100;

/// Copy the embedding rows whose word is in `vocab`, in input order.
pub fn prune<R: Read, W: Write>(
    embeddings: R,
    vocab: &HashSet<String>,
    out: &mut W,
) -> Result<usize, Error> {
    writeln!(out, "0 {}", EMBEDDING_DIM)?;

    let mut kept = 0;
    for line in BufReader::new(embeddings).lines() {
        let line = line?;
        let row = line.trim_end();
        let word = match row.split_whitespace().next() {
            Some(word) => word,
            None => continue,
        };
        if vocab.contains(word) {
            writeln!(out, "{}", row)?;
            kept += 1;
        }
    }
    Ok(kept)
}

/// Prune an embedding file against the vocabulary of one or more corpora.
pub fn prune_file(
    embeddings: &Path,
    corpora: &[PathBuf],
    dst: &Path,
    format: CorpusFormat,
) -> Result<usize, Error> {
    let mut builder = VocabBuilder::new(false);
    for src in corpora {
        info!("scanning {:?}", src);
        builder.add_path(src, format)?;
    }
    let vocab = builder.into_set();

    info!("pruning {:?} against {} words", embeddings, vocab.len());
    let input = File::open(embeddings)?;
    let mut writer = BufWriter::new(File::create(dst)?);
    let kept = prune(input, &vocab, &mut writer)?;
    writer.flush()?;

    info!("pruning done, {} rows kept", kept);
    Ok(kept)
}
