//! Writing facilities.
mod blockwriter;

pub use blockwriter::BlockWriter;
