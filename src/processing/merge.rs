//! Label/document merging.
//!
//! Zips a `.lab` file (one label per line) with its `.doc` file (sentence
//! groups separated by blank lines) into labeled document blocks, folding
//! case unless asked otherwise and restoring bracket placeholders. The two
//! files come out of the segmenter positionally aligned; any desync (a group
//! with no remaining label, or labels left over at the end) is an alignment
//! error.
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read, Write};
use std::path::Path;

use log::info;

use crate::corpus::{Document, Label};
use crate::error::Error;
use crate::io::writer::BlockWriter;
use crate::transformers::{CaseFold, RestoreBrackets, Transform};

/// Every blank line closes one document slot, so a review that segmented to
/// zero sentences still comes back as an empty group and consumes its label.
fn next_group<T: Read>(lines: &mut Lines<BufReader<T>>) -> Result<Option<Vec<String>>, Error> {
    let mut group: Vec<String> = Vec::new();
    loop {
        match lines.next() {
            Some(Ok(line)) => {
                if line.trim().is_empty() {
                    return Ok(Some(group));
                }
                group.push(line);
            }
            Some(Err(e)) => return Err(Error::Io(e)),
            None if group.is_empty() => return Ok(None),
            None => return Ok(Some(group)),
        }
    }
}

/// Merge label and document streams into a block corpus.
pub fn merge<L: Read, D: Read, W: Write>(
    labels: L,
    documents: D,
    out: W,
    keep_case: bool,
) -> Result<usize, Error> {
    let mut labels = BufReader::new(labels).lines();
    let mut documents = BufReader::new(documents).lines();
    let mut writer = BlockWriter::new(out);

    let mut n_docs = 0;
    while let Some(sentences) = next_group(&mut documents)? {
        let label = match labels.next() {
            Some(Ok(line)) => line.parse::<Label>()?,
            Some(Err(e)) => return Err(Error::Io(e)),
            None => {
                return Err(Error::Alignment(format!(
                    "document {} has no label line",
                    n_docs
                )))
            }
        };

        let mut doc = Document::new(label, sentences);
        if !keep_case {
            doc = CaseFold.transform_own(doc);
        }
        doc = RestoreBrackets.transform_own(doc);

        writer.write_document(&doc)?;
        n_docs += 1;
    }

    // leftover labels mean the inputs were not produced together
    let leftover = labels.filter(|l| l.is_ok()).count();
    if leftover > 0 {
        return Err(Error::Alignment(format!(
            "{} unused label line(s) after {} document(s)",
            leftover, n_docs
        )));
    }

    writer.flush()?;
    Ok(n_docs)
}

/// Merge `.lab`/`.doc` files into a block corpus file.
pub fn merge_file(labels: &Path, documents: &Path, dst: &Path, keep_case: bool) -> Result<usize, Error> {
    info!("merging {:?} with {:?}", labels, documents);
    let n_docs = merge(
        File::open(labels)?,
        File::open(documents)?,
        File::create(dst)?,
        keep_case,
    )?;
    info!("merging done, {} documents", n_docs);
    Ok(n_docs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_and_folds() {
        let labels = "4\n0\n";
        let docs = "Great -LRB- really -RRB-\nLoved it\n\nAwful\n\n";
        let mut out = Vec::new();
        let n = merge(labels.as_bytes(), docs.as_bytes(), &mut out, false).unwrap();
        assert_eq!(n, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "4\ngreat ( really )\nloved it\n\n0\nawful\n\n"
        );
    }

    #[test]
    fn keep_case_still_restores_brackets() {
        let labels = "2\n";
        let docs = "Great -LRB- really -RRB-\n\n";
        let mut out = Vec::new();
        merge(labels.as_bytes(), docs.as_bytes(), &mut out, true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2\nGreat ( really )\n\n");
    }

    #[test]
    fn empty_slot_consumes_its_label() {
        // a review that segmented to zero sentences leaves a bare blank line
        let labels = "4\n0\n";
        let docs = "\nAwful service\n\n";
        let mut out = Vec::new();
        let n = merge(labels.as_bytes(), docs.as_bytes(), &mut out, false).unwrap();
        assert_eq!(n, 2);
        // label 0 stays with its own document, not shifted onto label 4's slot
        assert_eq!(String::from_utf8(out).unwrap(), "4\n\n0\nawful service\n\n");
    }

    #[test]
    fn leftover_labels_are_an_alignment_error() {
        let labels = "4\n0\n";
        let docs = "one doc\n\n";
        let res = merge(labels.as_bytes(), docs.as_bytes(), &mut Vec::new(), false);
        assert!(matches!(res, Err(Error::Alignment(_))));
    }

    #[test]
    fn missing_label_is_an_alignment_error() {
        let labels = "4\n";
        let docs = "first doc\n\nsecond doc\n\n";
        let res = merge(labels.as_bytes(), docs.as_bytes(), &mut Vec::new(), false);
        assert!(matches!(res, Err(Error::Alignment(_))));
    }

    #[test]
    fn trailing_group_without_separator() {
        let labels = "1\n";
        let docs = "only doc";
        let mut out = Vec::new();
        let n = merge(labels.as_bytes(), docs.as_bytes(), &mut out, false).unwrap();
        assert_eq!(n, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "1\nonly doc\n\n");
    }
}
