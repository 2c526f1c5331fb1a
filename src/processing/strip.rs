//! Block stripping.
//!
//! Drops label lines and blank-line separators from a block corpus, leaving
//! one sentence per line. Documents without sentences contribute nothing,
//! so the output holds no blank lines at all.
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use log::info;

use crate::error::Error;
use crate::io::reader::BlockReader;

pub fn strip<R: Read, W: Write>(src: R, out: &mut W) -> Result<usize, Error> {
    let mut n_sentences = 0;
    for document in BlockReader::new(src) {
        for sentence in document?.sentences() {
            writeln!(out, "{}", sentence)?;
            n_sentences += 1;
        }
    }
    Ok(n_sentences)
}

pub fn strip_file(src: &Path, dst: &Path) -> Result<usize, Error> {
    info!("stripping {:?}", src);
    let mut writer = BufWriter::new(File::create(dst)?);
    let n_sentences = strip(File::open(src)?, &mut writer)?;
    writer.flush()?;
    info!("stripping done, {} sentences", n_sentences);
    Ok(n_sentences)
}
