//! Unknown-word rewriting over corpus files.
//!
//! Drives a [Transform] across a whole corpus, preserving framing: block
//! corpora keep their label line and blank-line separator, flat corpora keep
//! their `label<TAB>sentence` shape.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::corpus::Document;
use crate::error::Error;
use crate::io::reader::{BlockReader, FlatReader};
use crate::io::writer::BlockWriter;
use crate::transformers::Transform;

/// Rewrite a block corpus document by document.
pub fn rewrite_blocks<T: Transform>(t: &T, src: &Path, dst: &Path) -> Result<usize, Error> {
    info!("rewriting blocks of {:?}", src);

    let mut writer = BlockWriter::from_path(dst)?;
    let mut n_docs = 0;
    for document in BlockReader::from_path(src)? {
        let document = t.transform_own(document?);
        writer.write_document(&document)?;
        n_docs += 1;
    }
    writer.flush()?;

    info!("rewriting done, {} documents", n_docs);
    Ok(n_docs)
}

/// Rewrite a flat corpus record by record.
///
/// Each record is lifted into a single-sentence [Document] so the same
/// transforms apply to both corpus layouts. A record whose sentence gets
/// dropped entirely by the transform is omitted from the output, matching
/// how the block path omits emptied sentences.
pub fn rewrite_flat<T: Transform>(t: &T, src: &Path, dst: &Path) -> Result<usize, Error> {
    info!("rewriting records of {:?}", src);

    let mut writer = BufWriter::new(File::create(dst)?);
    let mut n_records = 0;
    for record in FlatReader::from_path(src)? {
        let (label, sentence) = record?;
        let document = t.transform_own(Document::new(label, vec![sentence]));
        if let Some(sentence) = document.sentences().first() {
            writeln!(writer, "{}\t{}", label, sentence)?;
            n_records += 1;
        }
    }
    writer.flush()?;

    info!("rewriting done, {} records kept", n_records);
    Ok(n_records)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Write as _;

    use crate::filtering::VocabularyFilter;
    use crate::transformers::{DualVocabSubstituter, UnkSubstituter};

    use super::*;

    #[test]
    fn block_framing_preserved() {
        let mut src = tempfile::NamedTempFile::new().unwrap();
        write!(src, "3\ngood stuff\nodd stuff\n\n1\nbad stuff\n\n").unwrap();
        let dst = tempfile::NamedTempFile::new().unwrap();

        let t = UnkSubstituter::new(VocabularyFilter::from_words(["good", "bad", "stuff"]));
        let n = rewrite_blocks(&t, src.path(), dst.path()).unwrap();
        assert_eq!(n, 2);
        assert_eq!(
            fs::read_to_string(dst.path()).unwrap(),
            "3\ngood stuff\n_UNK_ stuff\n\n1\nbad stuff\n\n"
        );
    }

    #[test]
    fn flat_records_rewritten() {
        let mut src = tempfile::NamedTempFile::new().unwrap();
        write!(src, "0\tawful banana\n").unwrap();
        let dst = tempfile::NamedTempFile::new().unwrap();

        let t = UnkSubstituter::new(VocabularyFilter::from_words(["awful"]));
        rewrite_flat(&t, src.path(), dst.path()).unwrap();
        assert_eq!(
            fs::read_to_string(dst.path()).unwrap(),
            "0\tawful _UNK_\n"
        );
    }

    #[test]
    fn fully_dropped_flat_records_are_omitted() {
        let mut src = tempfile::NamedTempFile::new().unwrap();
        write!(src, "0\tentirely unknown words\n1\tgood food\n").unwrap();
        let dst = tempfile::NamedTempFile::new().unwrap();

        let t = DualVocabSubstituter::new(
            VocabularyFilter::from_words(["good", "food"]),
            VocabularyFilter::default(),
        );
        let n = rewrite_flat(&t, src.path(), dst.path()).unwrap();
        assert_eq!(n, 1);
        assert_eq!(fs::read_to_string(dst.path()).unwrap(), "1\tgood food\n");
    }
}
