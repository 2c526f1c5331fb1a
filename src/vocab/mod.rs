/*! Vocabulary derivation.

Frequency counting over corpora ([builder]) and pruning of external
embedding tables down to a corpus vocabulary ([embeddings]).
!*/
pub mod builder;
pub mod embeddings;

pub use builder::{CorpusFormat, VocabBuilder};
