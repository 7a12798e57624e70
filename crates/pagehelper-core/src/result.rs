//! Result type aliases for PageHelper.

use crate::PageHelperError;

/// A specialized `Result` type for PageHelper operations.
pub type PageHelperResult<T> = Result<T, PageHelperError>;

/// Boxed error type accepted from caller-supplied mappers and factories.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
