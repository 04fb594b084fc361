//! Data models
//!
//! Field names follow the order service's camelCase JSON.

pub mod order;
pub mod store_info;

// Re-exports
pub use order::*;
pub use store_info::*;
