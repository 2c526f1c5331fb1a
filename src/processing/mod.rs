/*! Corpus-level processing

Whole-corpus batch transforms: train/dev splitting and sampling, label and
document file merging, unknown-word rewriting, foreign format import and
block stripping.
!*/
pub mod merge;
pub mod split;
pub mod strip;
pub mod substitute;
pub mod tang15;
