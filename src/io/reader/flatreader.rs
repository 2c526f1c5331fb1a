//! Flat corpus reader (`label<TAB>sentence` per line).
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;

use crate::corpus::Label;
use crate::error::Error;

/// Iterates over `(label, sentence)` records of a flat corpus file.
///
/// The sentence part is kept as a single string; token-level work downstream
/// splits on whitespace.
#[derive(Debug)]
pub struct FlatReader<T>
where
    T: Read,
{
    lines: Lines<BufReader<T>>,
}

impl FlatReader<File> {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let handler = File::open(src)?;
        Ok(Self::new(handler))
    }
}

impl<T> FlatReader<T>
where
    T: Read,
{
    pub fn new(src: T) -> Self {
        Self {
            lines: BufReader::new(src).lines(),
        }
    }
}

impl<T> Iterator for FlatReader<T>
where
    T: Read,
{
    type Item = Result<(Label, String), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(Error::Io(e))),
        };

        let parsed = match line.split_once('\t') {
            Some((label, sentence)) => label
                .parse::<Label>()
                .map(|label| (label, sentence.to_string())),
            None => Err(Error::Parse(format!("record without tab: {:?}", line))),
        };

        Some(parsed)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_records() {
        let data = "3\tgreat movie\n0\tawful .\n";
        let records: Vec<_> = FlatReader::new(Cursor::new(data))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].0.value(), 3);
        assert_eq!(records[0].1, "great movie");
        assert_eq!(records[1].0.value(), 0);
    }

    #[test]
    fn missing_tab() {
        let mut r = FlatReader::new(Cursor::new("no tab here\n"));
        assert!(matches!(r.next(), Some(Err(Error::Parse(_)))));
    }

    #[test]
    fn label_out_of_domain() {
        let mut r = FlatReader::new(Cursor::new("7\tsome text\n"));
        assert!(matches!(r.next(), Some(Err(Error::LabelDomain(7)))));
    }
}
