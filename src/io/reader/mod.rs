/*! Reading facilities

Readers implement [Iterator] in order to properly iterate on corpus records.

There are two kinds of readers:

- [FlatReader] : one `label<TAB>sentence` record per line.
- [BlockReader] : blank-line-delimited document blocks (label line first).

!*/
mod blockreader;
mod flatreader;

pub use blockreader::BlockReader;
pub use flatreader::FlatReader;
