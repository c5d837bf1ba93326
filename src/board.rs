//! Board navigation.
//!
//! A [`Board`] owns a [`CategoryIndex`] and tracks which level is shown:
//! the root (one image per category) or the inside of one category (one
//! image per item). Selecting a category image opens it; selecting an item
//! image yields its spoken text; [`Board::reset`] goes back to the root.

use crate::error::{BoardError, CodecError};
use crate::models::{Category, CategoryIndex};
use crate::parser::{self, LoadPolicy};
use std::path::Path;
use tracing::debug;

/// Which level of the board is shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BoardState {
    /// Top level: category images are shown
    #[default]
    Root,
    /// Inside a category: its item images are shown
    InCategory {
        /// Top-level image of the open category
        image: String,
    },
}

/// An AAC board with navigation state.
#[derive(Debug, Clone, Default)]
pub struct Board {
    index: CategoryIndex,
    state: BoardState,
}

impl Board {
    /// Creates a board at the root of `index`.
    pub fn new(index: CategoryIndex) -> Self {
        Self {
            index,
            state: BoardState::Root,
        }
    }

    /// Loads a board file. See [`parser::load_board`] for the policy semantics.
    pub fn load(path: &Path, policy: LoadPolicy) -> Result<Self, CodecError> {
        parser::load_board(path, policy).map(Self::new)
    }

    /// Writes all categories and items to `path`. Navigation state is not saved.
    pub fn save(&self, path: &Path) -> Result<(), CodecError> {
        parser::save_board(&self.index, path)
    }

    /// Current navigation state.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Returns true when no category is open.
    pub fn is_at_root(&self) -> bool {
        self.state == BoardState::Root
    }

    /// The underlying index.
    pub fn index(&self) -> &CategoryIndex {
        &self.index
    }

    /// Consumes the board, returning its index.
    pub fn into_index(self) -> CategoryIndex {
        self.index
    }

    /// The open category, if any.
    pub fn current_category(&self) -> Option<&Category> {
        match &self.state {
            BoardState::Root => None,
            BoardState::InCategory { image } => self.index.select(image).ok(),
        }
    }

    /// Name of the open category, or `""` at the root.
    pub fn category_name(&self) -> &str {
        self.current_category().map_or("", Category::name)
    }

    /// Selects an image in the current view.
    ///
    /// At the root, a category image opens that category and returns `""`.
    /// Inside a category, an item image returns its spoken text and the
    /// category stays open.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ImageNotFound`] if `image` is not shown in the
    /// current view. The state is unchanged.
    pub fn select(&mut self, image: &str) -> Result<String, BoardError> {
        match &self.state {
            BoardState::Root => {
                let category = self.index.select(image)?;
                debug!(image, category = category.name(), "Opening category");
                self.state = BoardState::InCategory {
                    image: image.to_string(),
                };
                Ok(String::new())
            }
            BoardState::InCategory { image: current } => {
                self.index.select(current)?.select(image)
            }
        }
    }

    /// Returns to the root from any state.
    pub fn reset(&mut self) {
        self.state = BoardState::Root;
    }

    /// Images shown in the current view, in order.
    pub fn image_locs(&self) -> Vec<String> {
        match self.current_category() {
            Some(category) => category.image_locs(),
            None => self.index.image_locs(),
        }
    }

    /// Returns true if `image` is shown in the current view.
    pub fn has_image(&self, image: &str) -> bool {
        match self.current_category() {
            Some(category) => category.has_image(image),
            None => self.index.has_image(image),
        }
    }

    /// Adds an image to the current view.
    ///
    /// At the root this registers a new, empty category named `text` under
    /// `image`. Inside a category it adds an item speaking `text`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidImage`] if the index rejects a category
    /// image, and [`BoardError::ImageNotFound`] if the open category is gone.
    pub fn add_item(&mut self, image: &str, text: &str) -> Result<(), BoardError> {
        match &self.state {
            BoardState::Root => self.index.add_category(image, Category::new(text)),
            BoardState::InCategory { image: current } => {
                self.index.select_mut(current)?.add_item(image, text);
                Ok(())
            }
        }
    }

    /// Removes an image from the current view: a whole category at the root,
    /// a single item inside a category.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ImageNotFound`] if `image` is not shown.
    pub fn remove_image(&mut self, image: &str) -> Result<(), BoardError> {
        let removed = match &self.state {
            BoardState::Root => self.index.remove_category(image).is_some(),
            BoardState::InCategory { image: current } => self
                .index
                .select_mut(current)?
                .remove_item(image)
                .is_some(),
        };

        if removed {
            Ok(())
        } else {
            Err(BoardError::not_found(image))
        }
    }
}

impl From<CategoryIndex> for Board {
    fn from(index: CategoryIndex) -> Self {
        Self::new(index)
    }
}
