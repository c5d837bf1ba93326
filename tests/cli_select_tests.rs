//! End-to-end tests for `aacboard select`.

mod fixtures;
use fixtures::*;

use std::path::Path;
use std::process::Output;

/// Runs `select` with `--board` ahead of the image list.
fn run_select(board_path: &Path, images: &[&str], json: bool) -> Output {
    let config_dir = board_path.parent().unwrap().join("config");
    let board = board_path.to_str().unwrap();
    let mut args = vec!["select", "--board", board];
    if json {
        args.push("--json");
    }
    args.extend_from_slice(images);
    isolated_command(&config_dir, &args)
        .output()
        .expect("Failed to execute command")
}

// ============================================================================
// Select Command Tests
// ============================================================================

#[test]
fn test_select_speaks_item_text() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = run_select(
        &board_path,
        &["img/food/plate.png", "img/food/icons8-french-fries-96.png"],
        false,
    );

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), "french fries\n");
}

#[test]
fn test_select_reset_token_returns_to_root() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = run_select(
        &board_path,
        &[
            "img/food/plate.png",
            "img/food/icons8-watermelon-96.png",
            "-",
            "img/clothing/hanger.png",
            "img/clothing/collaredshirt.png",
        ],
        false,
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "watermelon\ncollared shirt\n"
    );
}

#[test]
fn test_select_json_reports_each_step() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = run_select(
        &board_path,
        &["img/food/plate.png", "img/food/icons8-french-fries-96.png"],
        true,
    );

    assert_eq!(output.status.code(), Some(0));
    let result = parse_json_stdout(&output);
    let steps = result["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0]["category"], "food");
    assert_eq!(steps[0]["spoken"], "");
    assert_eq!(steps[1]["spoken"], "french fries");
    assert_eq!(result["showing"].as_array().unwrap().len(), 2);
}

#[test]
fn test_select_unknown_image_fails() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = run_select(&board_path, &["img/food/plate.png", "nope.png"], false);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope.png"));
}

#[test]
fn test_select_item_at_root_fails() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = run_select(&board_path, &["img/clothing/collaredshirt.png"], false);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_select_does_not_modify_board() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = run_select(&board_path, &["img/food/plate.png"], false);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(read_board_file(&board_path), SAMPLE_BOARD);
}

#[test]
fn test_select_flags_after_images() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);
    let config_dir = board_path.parent().unwrap().join("config");
    let board = board_path.to_str().unwrap();

    let output = isolated_command(
        &config_dir,
        &[
            "select",
            "img/food/plate.png",
            "-",
            "img/clothing/hanger.png",
            "img/clothing/collaredshirt.png",
            "--board",
            board,
            "--json",
            "-v",
        ],
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let result = parse_json_stdout(&output);
    let steps = result["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[1]["image"], "-");
    assert_eq!(steps[1]["category"], "");
    assert_eq!(steps[3]["spoken"], "collared shirt");
}
