//! Import of the Tang et al. (2015) document-level release.
//!
//! Records are tab-separated, the 1-indexed star rating in field 4 and the
//! review text in field 6, with a `<sssss>` marker between sentences.
//! Sentences of 2 characters or less are discarded, and documents with no
//! surviving sentence are omitted.
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

use log::info;

use crate::corpus::{Document, Label};
use crate::error::Error;
use crate::io::writer::BlockWriter;

const SENTENCE_MARKER: &str = "<sssss>";
const LABEL_FIELD: usize = 4;
const TEXT_FIELD: usize = 6;

fn parse_line(line: &str) -> Result<Option<Document>, Error> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() <= TEXT_FIELD {
        return Err(Error::Parse(format!(
            "tang15 record with {} field(s), expected at least {}",
            fields.len(),
            TEXT_FIELD + 1
        )));
    }

    let star: i64 = fields[LABEL_FIELD]
        .trim()
        .parse()
        .map_err(|_| Error::Parse(format!("invalid star rating: {:?}", fields[LABEL_FIELD])))?;
    let label = Label::from_star(star)?;

    let sentences: Vec<String> = fields[TEXT_FIELD]
        .split(SENTENCE_MARKER)
        .map(str::trim)
        .filter(|sentence| sentence.chars().count() > 2)
        .map(str::to_string)
        .collect();

    if sentences.is_empty() {
        Ok(None)
    } else {
        Ok(Some(Document::new(label, sentences)))
    }
}

/// Convert a tang15 release into a block corpus.
pub fn convert<R: Read, W: Write>(src: R, out: W) -> Result<usize, Error> {
    let mut writer = BlockWriter::new(out);
    let mut n_docs = 0;
    for line in BufReader::new(src).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Some(document) = parse_line(&line)? {
            writer.write_document(&document)?;
            n_docs += 1;
        }
    }
    writer.flush()?;
    Ok(n_docs)
}

/// Convert a tang15 release file into a block corpus file.
pub fn convert_file(src: &Path, dst: &Path) -> Result<usize, Error> {
    info!("importing tang15 release {:?}", src);
    let n_docs = convert(File::open(src)?, File::create(dst)?)?;
    info!("import done, {} documents", n_docs);
    Ok(n_docs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(star: &str, text: &str) -> String {
        format!("u1\tp1\tx\ty\t{}\tz\t{}\n", star, text)
    }

    #[test]
    fn fields_and_marker() {
        let input = record("5", "great place <sssss> will return !");
        let mut out = Vec::new();
        let n = convert(input.as_bytes(), &mut out).unwrap();
        assert_eq!(n, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "4\ngreat place\nwill return !\n\n"
        );
    }

    #[test]
    fn short_sentences_discarded() {
        let input = record("3", "ok <sssss> a genuinely long sentence");
        let mut out = Vec::new();
        convert(input.as_bytes(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2\na genuinely long sentence\n\n"
        );
    }

    #[test]
    fn empty_documents_omitted() {
        let input = record("3", "ok <sssss> no");
        let mut out = Vec::new();
        let n = convert(input.as_bytes(), &mut out).unwrap();
        assert_eq!(n, 0);
        assert_eq!(out, b"");
    }

    #[test]
    fn too_few_fields() {
        let res = convert("a\tb\tc\n".as_bytes(), &mut Vec::new());
        assert!(matches!(res, Err(Error::Parse(_))));
    }
}
