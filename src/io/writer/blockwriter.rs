//! Block corpus writer.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::corpus::Document;
use crate::error::Error;

/// Writes [Document]s in block format: label line, one sentence per line,
/// then a blank line. The blank line is emitted even for sentence-less
/// documents so that positional alignment with sibling files survives.
pub struct BlockWriter<W>
where
    W: Write,
{
    w: BufWriter<W>,
}

impl BlockWriter<File> {
    pub fn from_path(dst: &Path) -> Result<Self, Error> {
        let handler = File::create(dst)?;
        Ok(Self::new(handler))
    }
}

impl<W> BlockWriter<W>
where
    W: Write,
{
    pub fn new(dst: W) -> Self {
        Self {
            w: BufWriter::new(dst),
        }
    }

    pub fn write_document(&mut self, doc: &Document) -> Result<(), Error> {
        writeln!(self.w, "{}", doc.label())?;
        for sentence in doc.sentences() {
            writeln!(self.w, "{}", sentence)?;
        }
        writeln!(self.w)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.w.flush()?;
        Ok(())
    }
}
