//! Typed Store Module
//!
//! Dual-indexed container for a single value type: a key -> value map plus
//! the insertion order of the keys.

use std::collections::{HashMap, VecDeque};

use crate::cache::{CacheValue, Entry};
use crate::error::{CacheError, Result};

// == Typed Store ==
/// Keyed storage with queue-like access for one value type.
///
/// `order` holds keys, never values, so positional removals always resolve
/// to exactly one map slot even when several keys share a value:
/// - Front = oldest
/// - Back = newest
///
/// Not synchronized; [`CacheStore`](crate::cache::CacheStore) owns the lock.
#[derive(Debug, Clone)]
pub struct TypedStore<V> {
    /// Key -> value lookup
    index: HashMap<String, V>,
    /// Keys in insertion order, each at most once
    order: VecDeque<String>,
}

impl<V> Default for TypedStore<V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            order: VecDeque::new(),
        }
    }
}

impl<V: CacheValue> TypedStore<V> {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Stores a value at the back of the order.
    ///
    /// Overwriting an existing key keeps its position.
    pub fn add(&mut self, key: String, value: V) -> Entry<V> {
        if self.index.insert(key.clone(), value.clone()).is_none() {
            self.order.push_back(key.clone());
        }
        Entry { key, value }
    }

    // == Unshift ==
    /// Stores a value at the front of the order.
    ///
    /// Overwriting an existing key moves it to the front.
    pub fn unshift(&mut self, key: String, value: V) -> Entry<V> {
        if self.index.insert(key.clone(), value.clone()).is_some() {
            self.remove_from_order(&key);
        }
        self.order.push_front(key.clone());
        Entry { key, value }
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`.
    pub fn get(&self, key: &str) -> Result<V> {
        self.index
            .get(key)
            .cloned()
            .ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    // == Delete ==
    /// Removes `key` if present.
    ///
    /// Returns whether an entry was removed; a missing key is not an error.
    pub fn delete(&mut self, key: &str) -> bool {
        if self.index.remove(key).is_some() {
            self.remove_from_order(key);
            true
        } else {
            false
        }
    }

    // == Shift ==
    /// Removes and returns the oldest entry.
    pub fn shift(&mut self) -> Result<Entry<V>> {
        let key = self
            .order
            .pop_front()
            .ok_or(CacheError::EmptyStore(V::KIND))?;
        self.take(key)
    }

    // == Pop ==
    /// Removes and returns the newest entry.
    pub fn pop(&mut self) -> Result<Entry<V>> {
        let key = self
            .order
            .pop_back()
            .ok_or(CacheError::EmptyStore(V::KIND))?;
        self.take(key)
    }

    // == Keys ==
    /// Iterates keys from oldest to newest.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    // == Length ==
    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Removes an already-unlinked key from the index.
    fn take(&mut self, key: String) -> Result<Entry<V>> {
        match self.index.remove(&key) {
            Some(value) => Ok(Entry { key, value }),
            None => Err(CacheError::Internal(format!(
                "{} store order references missing key '{}'",
                V::KIND,
                key
            ))),
        }
    }

    fn remove_from_order(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
        }
    }

    /// Panics unless index and order hold the same keys, each once.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        use std::collections::HashSet;

        let ordered: HashSet<&String> = self.order.iter().collect();
        assert_eq!(ordered.len(), self.order.len(), "duplicate key in order");
        assert_eq!(self.order.len(), self.index.len(), "order/index size mismatch");
        for key in &self.order {
            assert!(self.index.contains_key(key), "order key '{}' not indexed", key);
        }
    }
}
