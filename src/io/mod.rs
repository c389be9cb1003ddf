/*! Corpus reading and writing utilities

Readers are lazy, forward-only iterators over the lines of a file.
Writers are scoped line writers that count what they write.
!*/
pub mod reader;
pub mod writer;

pub use reader::{open, JsonlReader, OnMalformed, ReviewLines, SentenceLines};
pub use writer::LineWriter;
