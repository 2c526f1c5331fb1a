/*!
# IO utilities

Readers and writers for the corpus file formats: flat `label<TAB>sentence`
lines and blank-line-delimited document blocks.
!*/
pub mod reader;
pub mod writer;

pub use reader::{BlockReader, FlatReader};
pub use writer::BlockWriter;
