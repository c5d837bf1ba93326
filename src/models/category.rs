//! Categories: named groups of image to spoken-text items.

use crate::error::BoardError;
use crate::models::KeyValueStore;
use std::fmt;
use tracing::warn;

/// A named set of selectable items.
///
/// Each item maps an image identifier (usually a relative path such as
/// `img/food/fries.png`) to the text spoken when the image is selected.
/// Items keep the order in which they were first added.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    name: String,
    items: KeyValueStore<String, String>,
}

impl Category {
    /// Creates an empty category with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: KeyValueStore::new(),
        }
    }

    /// Display name, fixed at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds an item, replacing the text of an existing item with the same image.
    ///
    /// An image the store rejects is logged and ignored.
    pub fn add_item(&mut self, image: impl Into<String>, text: impl Into<String>) {
        if let Err(e) = self.items.set(image.into(), text.into()) {
            warn!(category = %self.name, error = %e, "Ignoring item");
        }
    }

    /// Removes an item, returning its spoken text if it existed.
    pub fn remove_item(&mut self, image: &str) -> Option<String> {
        self.items.remove(image)
    }

    /// Image identifiers of all items, in order. Empty when there are none.
    pub fn image_locs(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }

    /// Returns the text spoken for `image`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ImageNotFound`] if the category has no such item.
    pub fn select(&self, image: &str) -> Result<String, BoardError> {
        self.items
            .get(image)
            .cloned()
            .map_err(|_| BoardError::not_found(image))
    }

    /// Returns true if the category contains `image`.
    pub fn has_image(&self, image: &str) -> bool {
        self.items.has_key(image)
    }

    /// Iterates over `(image, text)` pairs in order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.size()
    }

    /// Returns true if the category has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.items)
    }
}
