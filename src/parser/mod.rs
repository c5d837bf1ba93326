//! Parsing and serialization of board files.
//!
//! This module reads the line-oriented board format into a
//! [`CategoryIndex`](crate::models::CategoryIndex) and writes it back.

pub mod board;
pub mod board_gen;

// Re-export commonly used functions
pub use board::{load_board, parse_board_str, LoadPolicy};
pub use board_gen::{generate_board, save_board};
