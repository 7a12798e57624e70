//! Data transfer objects.

pub mod page_query;

pub use page_query::*;
