//! # PageHelper Core
//!
//! Page types, mapping traits, and error definitions shared by the
//! PageHelper crates. A [`Page`] is what a paginated query hands back; a
//! [`PageRequest`] is what a caller asks for before issuing one.

pub mod error;
pub mod pagination;
pub mod result;
pub mod telemetry;
pub mod traits;
pub mod validation;

pub use error::*;
pub use pagination::*;
pub use result::*;
pub use telemetry::*;
pub use traits::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
