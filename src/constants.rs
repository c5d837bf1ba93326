//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and config directory name.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "AAC Board";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "aacboard";

/// Directory under the platform config dir holding `config.toml`.
pub const CONFIG_DIR_NAME: &str = "AacBoard";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "AACBOARD_CONFIG_DIR";

/// Command-line token that returns to the root during `select`.
pub const RESET_TOKEN: &str = "-";
