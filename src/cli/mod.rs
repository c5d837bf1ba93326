//! CLI command handlers for the board.
//!
//! This module provides headless, scriptable access to board files: listing
//! and editing categories and items, walking the board, and validating files.

pub mod category;
pub mod common;
pub mod config;
pub mod item;
pub mod select;
pub mod validate;

// Re-export types used by main.rs and tests
pub use category::CategoryArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use item::ItemArgs;
pub use select::SelectArgs;
pub use validate::ValidateArgs;
