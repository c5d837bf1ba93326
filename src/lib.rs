//! AAC Board Library
//!
//! This library provides the core of a two-level augmentative and alternative
//! communication board: an ordered key-value store, categories of image to
//! spoken-text items, a plain-text board file format, and board navigation.

// Module declarations
pub mod board;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;

pub use board::{Board, BoardState};
pub use error::{BoardError, CodecError, CodecErrorKind, StoreError};
pub use models::{Category, CategoryIndex, KeyValueStore};
pub use parser::LoadPolicy;
