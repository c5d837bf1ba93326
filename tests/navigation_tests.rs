//! Integration tests for walking a board.

use aacboard::{Board, BoardError, BoardState};

mod fixtures;
use fixtures::*;

const PLATE: &str = "img/food/plate.png";
const FRIES: &str = "img/food/icons8-french-fries-96.png";
const HANGER: &str = "img/clothing/hanger.png";
const SHIRT: &str = "img/clothing/collaredshirt.png";

#[test]
fn test_full_navigation_flow() {
    let mut board = Board::new(sample_index());

    // Root shows the category images
    assert!(board.is_at_root());
    assert_eq!(board.image_locs(), vec![PLATE, HANGER]);

    // Opening a category speaks nothing
    assert_eq!(board.select(PLATE).unwrap(), "");
    assert_eq!(board.category_name(), "food");
    assert_eq!(
        board.image_locs(),
        vec![FRIES, "img/food/icons8-watermelon-96.png"]
    );

    // Items speak their text and keep the category open
    assert_eq!(board.select(FRIES).unwrap(), "french fries");
    assert_eq!(board.select(FRIES).unwrap(), "french fries");
    assert_eq!(board.category_name(), "food");

    // Reset and open the other category
    board.reset();
    assert_eq!(board.state(), &BoardState::Root);
    board.select(HANGER).unwrap();
    assert_eq!(board.select(SHIRT).unwrap(), "collared shirt");
}

#[test]
fn test_unknown_image_fails_without_state_change() {
    let mut board = Board::new(sample_index());

    let err = board.select("nope.png").unwrap_err();
    assert!(matches!(err, BoardError::ImageNotFound { ref image } if image == "nope.png"));
    assert!(board.is_at_root());

    board.select(PLATE).unwrap();
    let before = board.state().clone();
    assert!(board.select("nope.png").is_err());
    // An item from another category is not shown here either
    assert!(board.select(SHIRT).is_err());
    assert_eq!(board.state(), &before);
}

#[test]
fn test_item_image_is_not_selectable_at_root() {
    let mut board = Board::new(sample_index());
    assert!(board.select(FRIES).is_err());
    assert!(!board.has_image(FRIES));
}

#[test]
fn test_empty_category_view() {
    let mut board = Board::default();
    board.add_item("img/empty.png", "nothing here").unwrap();
    board.select("img/empty.png").unwrap();

    assert_eq!(board.category_name(), "nothing here");
    assert!(board.image_locs().is_empty());
}

#[test]
fn test_navigation_state_is_not_saved() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);
    let mut board = Board::load(&board_path, aacboard::LoadPolicy::Strict).unwrap();
    board.select(PLATE).unwrap();
    board.save(&board_path).unwrap();

    let reloaded = Board::load(&board_path, aacboard::LoadPolicy::Strict).unwrap();
    assert!(reloaded.is_at_root());
    assert_eq!(read_board_file(&board_path), SAMPLE_BOARD);
}
