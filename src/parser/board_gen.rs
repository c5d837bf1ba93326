//! Board file generation (serialization).
//!
//! This module writes a [`CategoryIndex`] back to the line format read by
//! [`parse_board_str`](super::board::parse_board_str), with atomic file
//! writes for safety.

use crate::error::CodecError;
use crate::models::CategoryIndex;
use crate::parser::board::ITEM_PREFIX;
use std::path::Path;
use tracing::info;

/// Writes a board file.
///
/// This performs an atomic write using a temp file + rename pattern so an
/// interrupted save never leaves a truncated board behind.
///
/// # Errors
///
/// Returns [`CodecError::Write`] (kind `SaveFailure`) if the temp file cannot
/// be written or renamed into place.
pub fn save_board(index: &CategoryIndex, path: &Path) -> Result<(), CodecError> {
    let content = generate_board(index);
    atomic_write(path, &content)?;
    info!(
        path = %path.display(),
        categories = index.size(),
        items = index.item_count(),
        "Saved board"
    );
    Ok(())
}

/// Generates board text from a [`CategoryIndex`].
///
/// Every line, including the last, ends with `\n`.
pub fn generate_board(index: &CategoryIndex) -> String {
    let mut output = String::new();

    for (image, category) in index.categories() {
        output.push_str(&format!("{} {}\n", image, category.name()));
        for (item_image, text) in category.items() {
            output.push_str(&format!("{ITEM_PREFIX}{item_image} {text}\n"));
        }
    }

    output
}

/// Writes content to a file atomically using temp file + rename.
fn atomic_write(path: &Path, content: &str) -> Result<(), CodecError> {
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    std::fs::write(&temp_path, content).map_err(|source| CodecError::Write {
        path: temp_path.clone(),
        source,
    })?;

    std::fs::rename(&temp_path, path).map_err(|source| {
        // Best effort: the temp file is useless once the rename failed
        let _ = std::fs::remove_file(&temp_path);
        CodecError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}
