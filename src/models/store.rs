//! Insertion-ordered key-value store with linear lookup.
//!
//! [`KeyValueStore`] backs every category and the top-level category index.
//! Entry counts are small (tens of images), so lookups scan the entries in
//! order instead of hashing.

use crate::error::StoreError;
use std::borrow::Borrow;
use std::fmt;

/// Capacity of a store created with [`KeyValueStore::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Key types usable in a [`KeyValueStore`].
///
/// A key type may name one value as its absent sentinel. The store refuses
/// to hold that value, so it never matches a lookup. Every string, the empty
/// one included, is a real key.
pub trait StoreKey: PartialEq {
    /// Returns true when this value stands for "no key".
    fn is_absent(&self) -> bool {
        false
    }
}

impl StoreKey for String {}

impl StoreKey for &str {}

impl<T: PartialEq> StoreKey for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

/// A single key/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    /// Entry key, unique within its store
    pub key: K,
    /// Entry value
    pub value: V,
}

/// Ordered mapping from unique keys to values.
///
/// # Invariants
///
/// - No two entries share a key
/// - Entries keep insertion order; [`remove`](Self::remove) shifts later
///   entries left by one
/// - [`capacity`](Self::capacity) doubles when `set` appends to a full store
///   and never shrinks
#[derive(Debug, Clone)]
pub struct KeyValueStore<K, V> {
    entries: Vec<Entry<K, V>>,
    capacity: usize,
}

impl<K: StoreKey, V> KeyValueStore<K, V> {
    /// Creates an empty store with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty store with room for `capacity` entries.
    ///
    /// A zero capacity is raised to one so that doubling makes progress.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Associates `value` with `key`.
    ///
    /// An existing entry is overwritten in place; otherwise the pair is
    /// appended, doubling the capacity first if the store is full.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] if `key` is the absent sentinel.
    pub fn set(&mut self, key: K, value: V) -> Result<(), StoreError> {
        if key.is_absent() {
            return Err(StoreError::InvalidKey);
        }

        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.value = value;
            return Ok(());
        }

        if self.entries.len() == self.capacity {
            self.expand();
        }
        self.entries.push(Entry { key, value });
        Ok(())
    }

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::KeyNotFound`] if no entry has that key.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, StoreError>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.find(key)
            .map(|idx| &self.entries[idx].value)
            .ok_or(StoreError::KeyNotFound)
    }

    /// Mutable variant of [`get`](Self::get).
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, StoreError>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        match self.find(key) {
            Some(idx) => Ok(&mut self.entries[idx].value),
            None => Err(StoreError::KeyNotFound),
        }
    }

    /// Returns true if an entry has `key`. Never fails.
    pub fn has_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Removes the entry for `key`, returning its value.
    ///
    /// Later entries move left by one. Removing a missing key does nothing.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.find(key).map(|idx| self.entries.remove(idx).value)
    }

    /// Index of the first entry whose key equals `key`.
    fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries.iter().position(|e| e.key.borrow() == key)
    }

    /// Doubles the logical capacity and reserves room for it.
    fn expand(&mut self) {
        self.capacity *= 2;
        self.entries.reserve_exact(self.capacity - self.entries.len());
    }
}

impl<K, V> KeyValueStore<K, V> {
    /// Number of live entries.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries the store can hold before it next doubles.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over entries in store order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|e| (&e.key, &e.value))
    }

    /// Iterates over keys in store order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|e| &e.key)
    }

    /// Iterates over values in store order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|e| &e.value)
    }
}

impl<K: StoreKey, V> Default for KeyValueStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// Equality ignores capacity: two stores are equal when they hold the same
// entries in the same order.
impl<K: PartialEq, V: PartialEq> PartialEq for KeyValueStore<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for KeyValueStore<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, entry) in self.entries.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}:{}", entry.key, entry.value)?;
        }
        f.write_str("}")
    }
}
