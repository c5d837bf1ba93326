//! End-to-end tests for `aacboard category` commands.

use serde::Deserialize;

mod fixtures;
use fixtures::*;

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    image: String,
    name: String,
    items: usize,
}

#[derive(Debug, Deserialize)]
struct ListCategoriesResponse {
    categories: Vec<CategoryEntry>,
    count: usize,
}

fn list_json(board_path: &std::path::Path) -> ListCategoriesResponse {
    let output = run_on_board(board_path, &["category", "list", "--json"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "List should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_category_list_empty_board() {
    let (board_path, _temp_dir) = create_temp_board_file("");

    let output = run_on_board(&board_path, &["category", "list"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Empty board should list successfully. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("No categories"),
        "Output should indicate no categories"
    );
}

#[test]
fn test_category_list_with_categories() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = run_on_board(&board_path, &["category", "list"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("img/food/plate.png"));
    assert!(stdout.contains("clothing"));
}

#[test]
fn test_category_list_json_format() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let response = list_json(&board_path);

    assert_eq!(response.count, 2);
    assert_eq!(response.categories[0].image, "img/food/plate.png");
    assert_eq!(response.categories[0].name, "food");
    assert_eq!(response.categories[0].items, 2);
    assert_eq!(response.categories[1].name, "clothing");
    assert_eq!(response.categories[1].items, 1);
}

#[test]
fn test_category_list_alias() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);
    let output = run_on_board(&board_path, &["categories", "list", "--json"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(parse_json_stdout(&output)["count"].as_u64().unwrap(), 2);
}

#[test]
fn test_category_list_corrupt_board_is_tolerated() {
    let (board_path, _temp_dir) = create_temp_board_file("corrupt\n");

    let output = run_on_board(&board_path, &["category", "list", "--json"]);

    // Read-only commands use the default tolerant policy
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(parse_json_stdout(&output)["count"].as_u64().unwrap(), 0);
}

// ============================================================================
// Add Command Tests
// ============================================================================

#[test]
fn test_category_add_valid() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = run_on_board(
        &board_path,
        &[
            "category",
            "add",
            "--image",
            "img/toys/ball.png",
            "--name",
            "toys and games",
        ],
    );

    assert_eq!(
        output.status.code(),
        Some(0),
        "Adding valid category should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let response = list_json(&board_path);
    assert_eq!(response.count, 3, "Should have 3 categories after add");
    assert_eq!(response.categories[2].name, "toys and games");
    assert!(read_board_file(&board_path).ends_with("img/toys/ball.png toys and games\n"));
}

#[test]
fn test_category_add_creates_missing_board() {
    let (_board_path, temp_dir) = create_temp_board_file("");
    let new_path = temp_dir.path().join("new-board.txt");

    let output = run_on_board(
        &new_path,
        &["category", "add", "--image", "plate.png", "--name", "food"],
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(read_board_file(&new_path), "plate.png food\n");
}

#[test]
fn test_category_add_image_with_space_fails() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = run_on_board(
        &board_path,
        &["category", "add", "--image", "my plate.png", "--name", "food"],
    );

    assert_eq!(
        output.status.code(),
        Some(1),
        "Image with a space should fail with exit code 1"
    );
    assert_eq!(read_board_file(&board_path), SAMPLE_BOARD);
}

#[test]
fn test_category_add_to_corrupt_board_fails() {
    let (board_path, _temp_dir) = create_temp_board_file("corrupt\n");

    let output = run_on_board(
        &board_path,
        &["category", "add", "--image", "plate.png", "--name", "food"],
    );

    assert_eq!(output.status.code(), Some(2));
    // The corrupt file is left alone
    assert_eq!(read_board_file(&board_path), "corrupt\n");
}

// ============================================================================
// Remove Command Tests
// ============================================================================

#[test]
fn test_category_remove_existing() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = run_on_board(
        &board_path,
        &["category", "remove", "--image", "img/food/plate.png"],
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        read_board_file(&board_path),
        "img/clothing/hanger.png clothing\n>img/clothing/collaredshirt.png collared shirt\n"
    );
}

#[test]
fn test_category_remove_missing_fails() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = run_on_board(&board_path, &["category", "remove", "--image", "nope.png"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"));
    assert_eq!(read_board_file(&board_path), SAMPLE_BOARD);
}
