/*! Filtering utilities

Record-level filters implement [Filter]. Filters are pure: the same record always yields the same decision.
! */
mod category;
mod filter;

pub use category::CategoryFilter;
pub use filter::Filter;
