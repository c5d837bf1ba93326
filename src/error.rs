//! Error types for the board, its stores, and the board file codec.
//!
//! Errors are layered: [`StoreError`] belongs to the generic container and is
//! translated into [`BoardError`] at the category/index boundary. Codec
//! failures are reported as [`CodecError`] and classified by [`CodecErrorKind`].

use std::path::PathBuf;
use thiserror::Error;

/// Container-level failures raised by [`KeyValueStore`](crate::models::KeyValueStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The key is the absent sentinel for its type (`None` for `Option` keys).
    #[error("key must not be absent")]
    InvalidKey,

    /// No entry with the requested key exists.
    #[error("key not found")]
    KeyNotFound,
}

/// Navigation-level failures raised by categories, the index, and the board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The image is not selectable in the current view.
    #[error("image not found: {image}")]
    ImageNotFound {
        /// Image identifier that was requested
        image: String,
    },

    /// The image identifier was rejected by the underlying store.
    #[error("invalid image identifier: {image:?}")]
    InvalidImage {
        /// Image identifier that was rejected
        image: String,
    },
}

impl BoardError {
    pub(crate) fn not_found(image: impl Into<String>) -> Self {
        Self::ImageNotFound {
            image: image.into(),
        }
    }

    pub(crate) fn invalid(image: impl Into<String>) -> Self {
        Self::InvalidImage {
            image: image.into(),
        }
    }
}

/// Classification of codec errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecErrorKind {
    /// Reading or parsing a board file failed
    LoadFailure,
    /// Writing a board file failed
    SaveFailure,
}

impl CodecErrorKind {
    /// Machine-readable code for logs and JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoadFailure => "LOAD_FAILURE",
            Self::SaveFailure => "SAVE_FAILURE",
        }
    }
}

/// Failures while loading or saving a board file.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The board file could not be opened or read.
    #[error("failed to read board file {path}: {source}")]
    Read {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A line could not be split into an image and its text.
    #[error("malformed line {line}: {content:?} (expected `<image> <text>`)")]
    Malformed {
        /// 1-based line number
        line: usize,
        /// Raw line content
        content: String,
    },

    /// The board file could not be written.
    #[error("failed to write board file {path}: {source}")]
    Write {
        /// File that was being written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl CodecError {
    /// Returns whether this error happened while loading or saving.
    pub fn kind(&self) -> CodecErrorKind {
        match self {
            Self::Read { .. } | Self::Malformed { .. } => CodecErrorKind::LoadFailure,
            Self::Write { .. } => CodecErrorKind::SaveFailure,
        }
    }

    /// Shorthand for `kind() == LoadFailure`.
    pub fn is_load_failure(&self) -> bool {
        self.kind() == CodecErrorKind::LoadFailure
    }

    /// Shorthand for `kind() == SaveFailure`.
    pub fn is_save_failure(&self) -> bool {
        self.kind() == CodecErrorKind::SaveFailure
    }
}
