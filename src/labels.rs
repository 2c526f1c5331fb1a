/*! Label space remapping.

Remaps the fine-grained 5-class SST space down to 3-class or binary. The
neutral midpoint (label 2) has no place in either target space and its
records are dropped outright, not emitted with a placeholder.
!*/
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use log::info;

use crate::corpus::Label;
use crate::error::Error;
use crate::io::FlatReader;

/// Target label scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// negative 0, neutral dropped, positive 2
    Three,
    /// negative 0, neutral dropped, positive 1
    Binary,
}

/// Remap one 5-class label. `None` means the record is to be dropped.
///
/// Total over the label domain; out-of-domain values cannot occur since
/// [Label] construction already rejects them.
pub fn remap(label: Label, scheme: Scheme) -> Option<Label> {
    let value = match (label.value(), scheme) {
        (0 | 1, _) => 0,
        (2, _) => return None,
        (3 | 4, Scheme::Three) => 2,
        (3 | 4, Scheme::Binary) => 1,
        // Label guarantees 0..=4
        _ => unreachable!(),
    };
    // remapped values stay inside the label domain
    Some(Label::from_raw(value).unwrap())
}

/// Remap a flat corpus file, dropping neutral records.
pub fn remap_file(src: &Path, dst: &Path, scheme: Scheme) -> Result<usize, Error> {
    info!("remapping labels of {:?} ({:?})", src, scheme);
    let reader = FlatReader::from_path(src)?;
    let mut writer = BufWriter::new(File::create(dst)?);

    let written = remap_stream(reader, &mut writer, scheme)?;
    writer.flush()?;

    info!("remapping done, {} records kept", written);
    Ok(written)
}

fn remap_stream<R: Read, W: Write>(
    reader: FlatReader<R>,
    writer: &mut W,
    scheme: Scheme,
) -> Result<usize, Error> {
    let mut written = 0;
    for record in reader {
        let (label, sentence) = record?;
        if let Some(label) = remap(label, scheme) {
            writeln!(writer, "{}\t{}", label, sentence)?;
            written += 1;
        }
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn label(v: i64) -> Label {
        Label::from_raw(v).unwrap()
    }

    #[test]
    fn three_class_mapping() {
        assert_eq!(remap(label(0), Scheme::Three), Some(label(0)));
        assert_eq!(remap(label(1), Scheme::Three), Some(label(0)));
        assert_eq!(remap(label(2), Scheme::Three), None);
        assert_eq!(remap(label(3), Scheme::Three), Some(label(2)));
        assert_eq!(remap(label(4), Scheme::Three), Some(label(2)));
    }

    #[test]
    fn binary_mapping() {
        assert_eq!(remap(label(0), Scheme::Binary), Some(label(0)));
        assert_eq!(remap(label(1), Scheme::Binary), Some(label(0)));
        assert_eq!(remap(label(2), Scheme::Binary), None);
        assert_eq!(remap(label(3), Scheme::Binary), Some(label(1)));
        assert_eq!(remap(label(4), Scheme::Binary), Some(label(1)));
    }

    #[test]
    fn neutral_records_are_dropped() {
        let data = "0\tbad\n2\tmeh\n4\tgood\n2\talso meh\n";
        let mut out = Vec::new();
        let n = remap_stream(
            FlatReader::new(Cursor::new(data)),
            &mut out,
            Scheme::Binary,
        )
        .unwrap();
        assert_eq!(n, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "0\tbad\n1\tgood\n");
    }

    #[test]
    fn out_of_domain_label_fails() {
        let data = "5\ttext\n";
        let res = remap_stream(
            FlatReader::new(Cursor::new(data)),
            &mut Vec::new(),
            Scheme::Three,
        );
        assert!(matches!(res, Err(Error::LabelDomain(5))));
    }
}
