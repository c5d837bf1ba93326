//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use aacboard::models::{Category, CategoryIndex};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Board text with two categories and three items, in canonical form.
pub const SAMPLE_BOARD: &str = "\
img/food/plate.png food
>img/food/icons8-french-fries-96.png french fries
>img/food/icons8-watermelon-96.png watermelon
img/clothing/hanger.png clothing
>img/clothing/collaredshirt.png collared shirt
";

/// Builds the index described by [`SAMPLE_BOARD`].
pub fn sample_index() -> CategoryIndex {
    let mut food = Category::new("food");
    food.add_item("img/food/icons8-french-fries-96.png", "french fries");
    food.add_item("img/food/icons8-watermelon-96.png", "watermelon");

    let mut clothing = Category::new("clothing");
    clothing.add_item("img/clothing/collaredshirt.png", "collared shirt");

    let mut index = CategoryIndex::new();
    index.add_category("img/food/plate.png", food).unwrap();
    index
        .add_category("img/clothing/hanger.png", clothing)
        .unwrap();
    index
}

/// Writes `content` to `board.txt` in a fresh temp directory.
///
/// # Returns
/// The board path and the temp directory guard (keep it alive for the test).
pub fn create_temp_board_file(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let board_path = temp_dir.path().join("board.txt");
    fs::write(&board_path, content).expect("Failed to write board file");
    (board_path, temp_dir)
}

/// Reads a board file back as text.
pub fn read_board_file(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read board file")
}

/// Path to the aacboard binary (set by cargo at compile time)
pub fn aacboard_bin() -> &'static str {
    env!("CARGO_BIN_EXE_aacboard")
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to several commands to share configuration.
pub fn isolated_command(config_dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(aacboard_bin());
    cmd.env("AACBOARD_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a board command against `board_path` with an isolated config.
///
/// `args` are the subcommand words; `--board <path>` is appended.
pub fn run_on_board(board_path: &Path, args: &[&str]) -> std::process::Output {
    let config_dir = board_path
        .parent()
        .expect("board file has a parent")
        .join("config");
    let mut cmd = isolated_command(&config_dir, args);
    cmd.arg("--board").arg(board_path);
    cmd.output().expect("Failed to execute command")
}

/// Parses stdout of a `--json` command.
pub fn parse_json_stdout(output: &std::process::Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Should parse JSON output")
}
