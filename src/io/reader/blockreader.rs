//! Block corpus reader.
//!
//! A block is a label line, one sentence per line, then a blank line. The
//! trailing blank line may be missing on the last block of a file.
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;

use crate::corpus::{Document, Label};
use crate::error::Error;

/// Iterates over [Document]s of a blank-line-delimited corpus.
///
/// Consecutive blank lines are treated as a single separator, so an empty
/// block never yields a document.
#[derive(Debug)]
pub struct BlockReader<T>
where
    T: Read,
{
    lines: Lines<BufReader<T>>,
}

impl BlockReader<File> {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let handler = File::open(src)?;
        Ok(Self::new(handler))
    }
}

impl<T> BlockReader<T>
where
    T: Read,
{
    pub fn new(src: T) -> Self {
        Self {
            lines: BufReader::new(src).lines(),
        }
    }
}

impl<T> Iterator for BlockReader<T>
where
    T: Read,
{
    type Item = Result<Document, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut block: Vec<String> = Vec::new();

        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    if line.trim().is_empty() {
                        if block.is_empty() {
                            // separator run, keep scanning
                            continue;
                        }
                        break;
                    }
                    block.push(line);
                }
                Some(Err(e)) => return Some(Err(Error::Io(e))),
                // end of file: emit the trailing block if there is one
                None if block.is_empty() => return None,
                None => break,
            }
        }

        let mut block = block.into_iter();
        // a non-empty block always has a label line
        let label = match block.next().unwrap().parse::<Label>() {
            Ok(label) => label,
            Err(e) => return Some(Err(e)),
        };

        Some(Ok(Document::new(label, block.collect())))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_blocks() {
        let data = "4\nfirst sentence\nsecond sentence\n\n0\nonly one\n\n";
        let docs: Vec<_> = BlockReader::new(Cursor::new(data))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].label().value(), 4);
        assert_eq!(docs[0].sentences().len(), 2);
        assert_eq!(docs[1].sentences(), ["only one".to_string()]);
    }

    #[test]
    fn trailing_block_without_separator() {
        let data = "2\nlast doc\nno trailing blank";
        let docs: Vec<_> = BlockReader::new(Cursor::new(data))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].sentences().len(), 2);
    }

    #[test]
    fn separator_runs_are_collapsed() {
        let data = "1\na\n\n\n\n3\nb\n\n";
        let docs: Vec<_> = BlockReader::new(Cursor::new(data))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(docs.len(), 2);
    }

    #[test]
    fn bad_label_line() {
        let mut r = BlockReader::new(Cursor::new("not-a-label\nsentence\n\n"));
        assert!(matches!(r.next(), Some(Err(Error::Parse(_)))));
    }
}
