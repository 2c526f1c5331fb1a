/*! splitting

Offline train/dev corpus splitting and sampling.

The sampled subset always holds exactly `floor(0.1 × N)` documents, decided
up front by a seeded draw over document indices so that a rerun with the
same seed and input reproduces the partition byte for byte.
!*/
use std::collections::HashSet;
use std::path::Path;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Error;
use crate::io::reader::BlockReader;
use crate::io::writer::BlockWriter;

/// Seed used by the historical preprocessing runs.
pub const DEFAULT_SEED: u64 = 1234;

const SAMPLE_FRACTION: f64 = 0.1;

/// Draw `floor(0.1 × n_docs)` distinct document indices.
pub fn sample_indices(n_docs: usize, seed: u64) -> HashSet<usize> {
    let n_sampled = (n_docs as f64 * SAMPLE_FRACTION).floor() as usize;
    let mut rng = StdRng::seed_from_u64(seed);
    rand::seq::index::sample(&mut rng, n_docs, n_sampled)
        .into_iter()
        .collect()
}

fn count_documents(src: &Path) -> Result<usize, Error> {
    let mut n_docs = 0;
    for document in BlockReader::from_path(src)? {
        document?;
        n_docs += 1;
    }
    Ok(n_docs)
}

/// Partition a block corpus into train and dev files.
pub fn split_file(src: &Path, train: &Path, dev: &Path, seed: u64) -> Result<(usize, usize), Error> {
    info!("splitting {:?} (seed {})", src, seed);

    let n_docs = count_documents(src)?;
    let sampled = sample_indices(n_docs, seed);

    let mut train_writer = BlockWriter::from_path(train)?;
    let mut dev_writer = BlockWriter::from_path(dev)?;

    let mut n_dev = 0;
    for (idx, document) in BlockReader::from_path(src)?.enumerate() {
        let document = document?;
        if sampled.contains(&idx) {
            dev_writer.write_document(&document)?;
            n_dev += 1;
        } else {
            train_writer.write_document(&document)?;
        }
    }
    train_writer.flush()?;
    dev_writer.flush()?;

    info!("splitting done, {} train / {} dev", n_docs - n_dev, n_dev);
    Ok((n_docs - n_dev, n_dev))
}

/// Emit only the sampled 10% of a block corpus, discarding the rest.
pub fn sample_file(src: &Path, dst: &Path, seed: u64) -> Result<usize, Error> {
    info!("sampling {:?} (seed {})", src, seed);

    let n_docs = count_documents(src)?;
    let sampled = sample_indices(n_docs, seed);

    let mut writer = BlockWriter::from_path(dst)?;
    let mut n_sampled = 0;
    for (idx, document) in BlockReader::from_path(src)?.enumerate() {
        let document = document?;
        if sampled.contains(&idx) {
            writer.write_document(&document)?;
            n_sampled += 1;
        }
    }
    writer.flush()?;

    info!("sampling done, {} documents", n_sampled);
    Ok(n_sampled)
}
