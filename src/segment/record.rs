//! Raw review records.
//!
//! Review dumps carry one quoted CSV record per line: a 1-indexed star
//! rating and the review text, backslash-escaped, with `\n` escapes or raw
//! carriage returns as paragraph separators.
use std::io::Read;

use crate::corpus::Label;
use crate::error::Error;

/// One parsed review: its 0-indexed label and unescaped document text.
///
/// Paragraph separators are normalized to `\n` at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    label: Label,
    document: String,
}

impl RawRecord {
    pub fn new(star: &str, raw_document: &str) -> Result<Self, Error> {
        let star: i64 = star
            .trim()
            .parse()
            .map_err(|_| Error::Parse(format!("invalid star rating: {:?}", star)))?;
        let label = Label::from_star(star)?;

        let document = unescape(raw_document).replace("\r\n", "\n").replace('\r', "\n");

        Ok(Self { label, document })
    }

    pub fn label(&self) -> Label {
        self.label
    }

    /// Get a reference to the record's document text.
    pub fn document(&self) -> &str {
        &self.document
    }
}

/// Resolve backslash escape sequences. Unknown sequences are kept verbatim.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Iterates over [RawRecord]s of a review dump.
pub struct RecordReader<T>
where
    T: Read,
{
    records: csv::StringRecordsIntoIter<T>,
}

impl<T> RecordReader<T>
where
    T: Read,
{
    pub fn new(src: T) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(src);
        Self {
            records: reader.into_records(),
        }
    }
}

impl<T> Iterator for RecordReader<T>
where
    T: Read,
{
    type Item = Result<RawRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(Error::Csv(e))),
        };

        let parsed = match (record.get(0), record.get(1)) {
            (Some(star), Some(document)) => RawRecord::new(star, document),
            _ => Err(Error::Parse(format!(
                "record with {} field(s), expected 2",
                record.len()
            ))),
        };

        Some(parsed)
    }
}
