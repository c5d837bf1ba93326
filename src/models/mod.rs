//! Data models for AAC boards.
//!
//! This module contains the generic ordered store and the two board levels
//! built on it. Models are independent of file formats and navigation.

pub mod category;
pub mod index;
pub mod store;

// Re-export all model types
pub use category::Category;
pub use index::CategoryIndex;
pub use store::{Entry, KeyValueStore, StoreKey, DEFAULT_CAPACITY};
