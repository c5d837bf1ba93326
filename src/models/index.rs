//! The top-level index mapping category images to categories.

use crate::error::{BoardError, StoreError};
use crate::models::{Category, KeyValueStore};
use std::fmt;

/// Root of a board: each top-level image reveals one [`Category`].
///
/// Categories keep the order in which their images were first registered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryIndex {
    categories: KeyValueStore<String, Category>,
}

impl CategoryIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `category` under `image`.
    ///
    /// Registering an image twice replaces the earlier category but keeps
    /// its position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidImage`] if the store rejects `image`.
    pub fn add_category(
        &mut self,
        image: impl Into<String>,
        category: Category,
    ) -> Result<(), BoardError> {
        let image = image.into();
        self.categories
            .set(image.clone(), category)
            .map_err(|_: StoreError| BoardError::invalid(image))
    }

    /// Removes the category registered under `image`.
    pub fn remove_category(&mut self, image: &str) -> Option<Category> {
        self.categories.remove(image)
    }

    /// Top-level image identifiers, in order.
    pub fn image_locs(&self) -> Vec<String> {
        self.categories.keys().cloned().collect()
    }

    /// Returns the category registered under `image`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ImageNotFound`] if no category uses `image`.
    pub fn select(&self, image: &str) -> Result<&Category, BoardError> {
        self.categories
            .get(image)
            .map_err(|_| BoardError::not_found(image))
    }

    /// Mutable variant of [`select`](Self::select).
    pub fn select_mut(&mut self, image: &str) -> Result<&mut Category, BoardError> {
        self.categories
            .get_mut(image)
            .map_err(|_| BoardError::not_found(image))
    }

    /// Returns true if a category is registered under `image`.
    pub fn has_image(&self, image: &str) -> bool {
        self.categories.has_key(image)
    }

    /// Number of categories.
    pub fn size(&self) -> usize {
        self.categories.size()
    }

    /// Returns true if no categories are registered.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterates over `(image, category)` pairs in order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Total number of items across all categories.
    pub fn item_count(&self) -> usize {
        self.categories.values().map(Category::len).sum()
    }
}

impl fmt::Display for CategoryIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.categories, f)
    }
}
