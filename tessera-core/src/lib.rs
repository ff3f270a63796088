//! Tessera Core - Fundamental types
//!
//! This crate provides the building blocks used throughout Tessera:
//! - `ConstrainedList`: ordered sequence of one declared element type
//! - `ConstrainedMap`: unique-key mapping with declared key and value types
//! - `CoreError`: structured errors with machine-readable codes

mod error;
mod list;
mod map;

pub use error::{codes, CoreError, CoreResult, Slot};
pub use list::ConstrainedList;
pub use map::ConstrainedMap;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ConstrainedList, ConstrainedMap, CoreError, CoreResult};
    pub use crate::error::codes;
}
