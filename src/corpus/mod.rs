/*! Corpus data model.

A corpus is a sequence of [Document]s: one [Label] plus the document's
sentences. In files, a document is a label line followed by one sentence per
line, terminated by a blank line.
!*/
mod document;

pub use document::Document;
pub use document::Label;
