//! Vocabulary membership filter.
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use super::Filter;
use crate::error::Error;

/// Word set loaded from a vocabulary file (one word per line).
///
/// Detection is plain membership: `detect` returns `true` for in-vocabulary
/// tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyFilter {
    words: HashSet<String>,
}

impl VocabularyFilter {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        Self::from_reader(File::open(src)?)
    }

    pub fn from_reader<T: Read>(src: T) -> Result<Self, Error> {
        let mut words = HashSet::new();
        for line in BufReader::new(src).lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_string());
            }
        }
        Ok(Self { words })
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Filter<&str> for VocabularyFilter {
    fn detect(&self, token: &str) -> bool {
        self.words.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership() {
        let v = VocabularyFilter::from_words(["apple", "banana"]);
        assert!(v.detect("apple"));
        assert!(!v.detect("cherry"));
    }

    #[test]
    fn reads_one_word_per_line() {
        let v = VocabularyFilter::from_reader("the\n\nfood \n".as_bytes()).unwrap();
        assert_eq!(v.len(), 2);
        assert!(v.detect("the"));
        assert!(v.detect("food"));
    }
}
