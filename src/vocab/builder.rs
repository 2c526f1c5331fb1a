//! Token frequency counting.
//!
//! Counts every token across one or more corpus files, skipping labels (the
//! first column of flat records, the first line of document blocks). The
//! kept vocabulary is the set of words whose count strictly exceeds a
//! caller-supplied threshold.
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Error;
use crate::io::{BlockReader, FlatReader};

/// Corpus layout fed to the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    /// `label<TAB>sentence` per line
    Flat,
    /// blank-line-delimited labeled blocks
    Blocks,
}

/// Aggregating token counter.
#[derive(Debug, Default)]
pub struct VocabBuilder {
    counts: HashMap<String, u64>,
    lowercase: bool,
}

impl VocabBuilder {
    pub fn new(lowercase: bool) -> Self {
        Self {
            counts: HashMap::new(),
            lowercase,
        }
    }

    fn add_token(&mut self, token: &str) {
        let token = if self.lowercase {
            token.to_lowercase()
        } else {
            token.to_string()
        };
        *self.counts.entry(token).or_insert(0) += 1;
    }

    fn add_sentence(&mut self, sentence: &str) {
        for token in sentence.split_whitespace() {
            self.add_token(token);
        }
    }

    /// Count tokens of a flat corpus, skipping the label column.
    pub fn add_flat<T: Read>(&mut self, src: T) -> Result<(), Error> {
        for record in FlatReader::new(src) {
            let (_, sentence) = record?;
            self.add_sentence(&sentence);
        }
        Ok(())
    }

    /// Count tokens of a block corpus, skipping label lines.
    pub fn add_blocks<T: Read>(&mut self, src: T) -> Result<(), Error> {
        for document in BlockReader::new(src) {
            for sentence in document?.sentences() {
                self.add_sentence(sentence);
            }
        }
        Ok(())
    }

    pub fn add_path(&mut self, src: &Path, format: CorpusFormat) -> Result<(), Error> {
        let handler = File::open(src)?;
        match format {
            CorpusFormat::Flat => self.add_flat(handler),
            CorpusFormat::Blocks => self.add_blocks(handler),
        }
    }

    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Words counted strictly more than `threshold` times.
    ///
    /// Lexicographically sorted when `stable` is set, hash order otherwise.
    pub fn over_threshold(&self, threshold: u64, stable: bool) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .counts
            .iter()
            .filter(|(_, &count)| count > threshold)
            .map(|(word, _)| word.as_str())
            .collect();
        if stable {
            words.sort_unstable();
        }
        words
    }

    /// Consume the builder into a plain word set, counts discarded.
    pub fn into_set(self) -> HashSet<String> {
        self.counts.into_keys().collect()
    }
}

/// Build a vocabulary over one or more corpus files and write it out, one
/// word per line.
pub fn build_file(
    inputs: &[PathBuf],
    dst: &Path,
    format: CorpusFormat,
    threshold: u64,
    lowercase: bool,
    stable: bool,
) -> Result<usize, Error> {
    let mut builder = VocabBuilder::new(lowercase);
    for src in inputs {
        info!("counting tokens of {:?}", src);
        builder.add_path(src, format)?;
    }

    let words = builder.over_threshold(threshold, stable);
    let mut writer = BufWriter::new(File::create(dst)?);
    for word in &words {
        writeln!(writer, "{}", word)?;
    }
    writer.flush()?;

    info!("vocabulary done, {} words over threshold {}", words.len(), threshold);
    Ok(words.len())
}
