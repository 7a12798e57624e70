//! # PageHelper Service
//!
//! Adapts paginated query results into view types and configures the
//! pagination engine before a data-access call.

pub mod configurer;
pub mod di;
pub mod dto;
pub mod engine;
pub mod transform;

pub use configurer::*;
pub use di::*;
pub use dto::*;
pub use engine::*;
pub use transform::*;
