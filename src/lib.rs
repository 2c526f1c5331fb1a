pub mod corpus;
pub mod error;
pub mod filtering;
pub mod io;
pub mod labels;
pub mod processing;
pub mod segment;
pub mod transformers;
pub mod tree;
pub mod vocab;
