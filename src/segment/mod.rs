/*! Review segmentation.

Turns a raw review dump (one `"label","document"` CSV record per line, the
document quoted and backslash-escaped) into two positionally aligned files:
a `.doc` file holding one sentence per line with a blank line after each
document, and a `.lab` file holding one 0-indexed label per document.
!*/
mod record;

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use log::info;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::Error;

pub use record::RawRecord;

/// Split an unescaped document into sentences.
///
/// Paragraphs are newline-separated; each non-empty paragraph goes through
/// the UAX #29 sentence boundary detector. Zero-length sentences are dropped.
pub fn segment_document(document: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    for paragraph in document.split('\n') {
        if paragraph.trim().is_empty() {
            continue;
        }
        for sentence in paragraph.unicode_sentences() {
            let sentence = sentence.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
        }
    }
    sentences
}

// one-sentence-per-line output contract
fn check_no_newline(sentences: &[String]) -> Result<(), Error> {
    for sentence in sentences {
        if sentence.contains('\n') {
            return Err(Error::Custom(format!(
                "sentence with embedded newline: {:?}",
                sentence
            )));
        }
    }
    Ok(())
}

/// Segment a review dump into `<prefix>.doc` and `<prefix>.lab`.
pub fn segment_file(src: &Path, dst_prefix: &Path) -> Result<usize, Error> {
    info!("segmenting {:?}", src);

    let input = File::open(src)?;
    let mut doc_writer = BufWriter::new(File::create(with_extension(dst_prefix, "doc"))?);
    let mut lab_writer = BufWriter::new(File::create(with_extension(dst_prefix, "lab"))?);

    let n_docs = segment_stream(input, &mut doc_writer, &mut lab_writer)?;

    doc_writer.flush()?;
    lab_writer.flush()?;

    info!("segmenting done, {} documents", n_docs);
    Ok(n_docs)
}

fn with_extension(prefix: &Path, ext: &str) -> std::path::PathBuf {
    let mut path = prefix.as_os_str().to_owned();
    path.push(".");
    path.push(ext);
    path.into()
}

fn segment_stream<R: Read, W: Write>(
    input: R,
    doc_writer: &mut W,
    lab_writer: &mut W,
) -> Result<usize, Error> {
    let mut n_docs = 0;
    for record in record::RecordReader::new(input) {
        let record = record?;
        let sentences = segment_document(record.document());
        check_no_newline(&sentences)?;

        writeln!(lab_writer, "{}", record.label())?;
        for sentence in &sentences {
            writeln!(doc_writer, "{}", sentence)?;
        }
        writeln!(doc_writer)?;
        n_docs += 1;
    }
    Ok(n_docs)
}
