//! Board file parsing.
//!
//! A board file is plain text with one record per line:
//!
//! ```text
//! img/food/plate.png food
//! >img/food/fries.png french fries
//! >img/food/watermelon.png watermelon
//! img/clothing/hanger.png clothing
//! >img/clothing/collaredshirt.png collared shirt
//! ```
//!
//! A line without a leading `>` starts a category (image, then display name).
//! A line with a leading `>` adds an item (image, then spoken text) to the
//! most recent category.

use crate::error::CodecError;
use crate::models::{Category, CategoryIndex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Prefix marking an item line.
pub const ITEM_PREFIX: char = '>';

/// What [`load_board`] does when the file cannot be read or parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Log the failure and return an empty board
    #[default]
    Tolerant,
    /// Return the failure to the caller
    Strict,
}

/// Loads a board file.
///
/// Loading is all-or-nothing: a missing file, an unreadable file, or a single
/// malformed line fails the whole load. Under [`LoadPolicy::Tolerant`] that
/// failure is logged and an empty index is returned instead.
///
/// # Errors
///
/// Under [`LoadPolicy::Strict`], returns a [`CodecError`] whose kind is
/// `LoadFailure`.
pub fn load_board(path: &Path, policy: LoadPolicy) -> Result<CategoryIndex, CodecError> {
    match read_board(path) {
        Ok(index) => {
            debug!(
                path = %path.display(),
                categories = index.size(),
                items = index.item_count(),
                "Loaded board"
            );
            Ok(index)
        }
        Err(e) if policy == LoadPolicy::Tolerant => {
            warn!(path = %path.display(), error = %e, "Failed to load board, starting empty");
            Ok(CategoryIndex::new())
        }
        Err(e) => Err(e),
    }
}

fn read_board(path: &Path) -> Result<CategoryIndex, CodecError> {
    let content = std::fs::read_to_string(path).map_err(|source| CodecError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_board_str(&content)
}

/// Parses board text into a [`CategoryIndex`].
///
/// Item lines that appear before any category line are dropped. A category
/// line reusing an earlier image replaces that category.
///
/// # Errors
///
/// Returns [`CodecError::Malformed`] for a line that does not split into an
/// image and at least one word of text (blank lines included). A line
/// starting with a space has an empty image, which is a valid identifier.
pub fn parse_board_str(content: &str) -> Result<CategoryIndex, CodecError> {
    let mut index = CategoryIndex::new();
    // Image of the category that item lines attach to
    let mut active: Option<String> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line_num = idx + 1;

        if let Some(rest) = raw.strip_prefix(ITEM_PREFIX) {
            let (image, text) = split_record(rest).ok_or_else(|| malformed(line_num, raw))?;
            match active.as_deref() {
                Some(category_image) => {
                    if let Ok(category) = index.select_mut(category_image) {
                        category.add_item(image, text);
                    }
                }
                None => debug!(line = line_num, image, "Dropping item before any category"),
            }
        } else {
            let (image, name) = split_record(raw).ok_or_else(|| malformed(line_num, raw))?;
            if let Err(e) = index.add_category(image, Category::new(name)) {
                warn!(line = line_num, error = %e, "Skipping category");
                continue;
            }
            active = Some(image.to_string());
        }
    }

    Ok(index)
}

/// Splits a record into its image (field 0) and text (fields 1.., rejoined
/// with single spaces).
///
/// Fields are separated by single spaces and trailing empty fields are
/// discarded, so `"a  b"` yields text `" b"` while `"a "` has no text at all.
fn split_record(line: &str) -> Option<(&str, &str)> {
    let (image, rest) = line.split_once(' ')?;
    let text = rest.trim_end_matches(' ');
    if text.is_empty() {
        return None;
    }
    Some((image, text))
}

fn malformed(line: usize, content: &str) -> CodecError {
    CodecError::Malformed {
        line,
        content: content.to_string(),
    }
}
