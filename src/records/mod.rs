/*! Input records

JSON-lines records read by the pipeline. Only the fields used by the pipeline are deserialized,
unknown fields are ignored.
!*/
mod business;
mod review;

pub use business::{Business, Categories};
pub use review::Review;
