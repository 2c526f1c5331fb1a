/*! Filtering utilities

Filters decide whether a token passes a membership test. The one filter in
use is [VocabularyFilter], backing both embedding pruning and unknown-word
substitution.
! */
mod filter;
mod vocabulary;

pub use filter::Filter;
pub use vocabulary::VocabularyFilter;
