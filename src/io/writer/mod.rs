/*! Corpus writers !*/
mod linewriter;

pub use linewriter::LineWriter;
