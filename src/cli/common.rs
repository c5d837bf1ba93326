//! Shared types for CLI command handlers.

use crate::board::Board;
use crate::config::Config;
use crate::error::{BoardError, CodecError, CodecErrorKind};
use crate::parser::LoadPolicy;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Process exit codes used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Invalid input, or an image that does not exist
    ValidationError = 1,
    /// File could not be read, parsed, or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid input or missing image.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// File I/O or board format failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<BoardError> for CliError {
    fn from(err: BoardError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<CodecError> for CliError {
    fn from(err: CodecError) -> Self {
        match err.kind() {
            CodecErrorKind::LoadFailure => Self::io(format!("Failed to load board: {err}")),
            CodecErrorKind::SaveFailure => Self::io(format!("Failed to save board: {err}")),
        }
    }
}

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Board file selection shared by board commands.
#[derive(Debug, Clone, clap::Args)]
pub struct BoardFileArgs {
    /// Path to board file (defaults to `board.path` from the config file)
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,
}

impl BoardFileArgs {
    /// Resolves the board file from the argument or the config file.
    pub fn resolve(&self) -> CliResult<PathBuf> {
        let config = load_config()?;
        config
            .resolve_board_path(self.board.as_deref())
            .map_err(|e| CliError::validation(e.to_string()))
    }

    /// Loads the board for a read-only command, using the configured policy.
    pub fn load_for_reading(&self) -> CliResult<(Board, PathBuf)> {
        let config = load_config()?;
        let path = config
            .resolve_board_path(self.board.as_deref())
            .map_err(|e| CliError::validation(e.to_string()))?;
        let board = Board::load(&path, config.board.load_policy)?;
        Ok((board, path))
    }

    /// Loads the board for a command that writes it back.
    ///
    /// Always strict: a board that fails to load must not be replaced by an
    /// empty one. A missing file starts a new, empty board.
    pub fn load_for_writing(&self) -> CliResult<(Board, PathBuf)> {
        let path = self.resolve()?;
        let board = load_existing_or_empty(&path)?;
        Ok((board, path))
    }
}

fn load_existing_or_empty(path: &Path) -> CliResult<Board> {
    if path.exists() {
        Ok(Board::load(path, LoadPolicy::Strict)?)
    } else {
        Ok(Board::default())
    }
}

/// Loads the config file, mapping failures to a validation error.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Prints a value as a single line of JSON.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
