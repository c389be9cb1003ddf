pub mod annotate;
pub mod error;
pub mod escape;
pub mod filtering;
pub mod io;
pub mod phrases;
pub mod processing;
pub mod records;
pub mod stopwords;
