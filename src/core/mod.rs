//! Core types and traits (errors, value tree, FixedLength front-end)

pub mod errors;
pub mod traits;
pub mod types;
pub mod value;

// Re-exports
pub use errors::{Result, ZkFixedError};
pub use traits::FixedLength;
pub use types::{FixedList, FixedString};
pub use value::Value;
