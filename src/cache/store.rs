//! Cache Store Module
//!
//! Aggregates the string, int and float stores behind a single read-write lock.

use parking_lot::RwLock;

use crate::cache::{CacheStats, CacheValue, Entry, TypedStore};
use crate::error::Result;

// == Stores ==
/// The three typed stores guarded together by the cache lock.
#[derive(Debug, Default)]
pub struct Stores {
    pub(crate) strings: TypedStore<String>,
    pub(crate) ints: TypedStore<i64>,
    pub(crate) floats: TypedStore<f64>,
}

// == Cache Store ==
/// Thread-safe cache holding one [`TypedStore`] per value type.
///
/// Reads (`get_*`) share the lock; every other operation takes it
/// exclusively. One lock covers all three stores, so writes to different
/// types still serialize.
#[derive(Debug, Default)]
pub struct CacheStore {
    stores: RwLock<Stores>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a cache with three empty stores.
    pub fn new() -> Self {
        Self::default()
    }

    // == Generic Operations ==
    /// Appends `key` to the back of the `V` store, overwriting in place if present.
    pub fn add<V: CacheValue>(&self, key: String, value: V) -> Entry<V> {
        let mut stores = self.stores.write();
        V::store_mut(&mut stores).add(key, value)
    }

    /// Puts `key` at the front of the `V` store, moving it there if present.
    pub fn unshift<V: CacheValue>(&self, key: String, value: V) -> Entry<V> {
        let mut stores = self.stores.write();
        V::store_mut(&mut stores).unshift(key, value)
    }

    pub fn get<V: CacheValue>(&self, key: &str) -> Result<V> {
        let stores = self.stores.read();
        V::store(&stores).get(key)
    }

    /// Removes `key` from the `V` store. Returns whether it was present.
    pub fn delete<V: CacheValue>(&self, key: &str) -> bool {
        let mut stores = self.stores.write();
        V::store_mut(&mut stores).delete(key)
    }

    pub fn shift<V: CacheValue>(&self) -> Result<Entry<V>> {
        let mut stores = self.stores.write();
        V::store_mut(&mut stores).shift()
    }

    pub fn pop<V: CacheValue>(&self) -> Result<Entry<V>> {
        let mut stores = self.stores.write();
        V::store_mut(&mut stores).pop()
    }

    /// Number of live entries in the `V` store.
    pub fn len<V: CacheValue>(&self) -> usize {
        let stores = self.stores.read();
        V::store(&stores).len()
    }

    /// Keys of the `V` store from oldest to newest.
    pub fn keys<V: CacheValue>(&self) -> Vec<String> {
        let stores = self.stores.read();
        V::store(&stores).keys().map(str::to_owned).collect()
    }

    // == Stats ==
    /// Returns a consistent snapshot of the entry counts.
    pub fn stats(&self) -> CacheStats {
        let stores = self.stores.read();
        CacheStats::new(stores.strings.len(), stores.ints.len(), stores.floats.len())
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let stores = self.stores.read();
        stores.strings.assert_consistent();
        stores.ints.assert_consistent();
        stores.floats.assert_consistent();
    }
}

// == Typed Operations ==
// Named per-type entry points over the generic operations above.
macro_rules! typed_operations {
    ($(
        $ty:ty => $add:ident, $unshift:ident, $get:ident,
        $delete:ident, $shift:ident, $pop:ident;
    )*) => {
        impl CacheStore {
            $(
                #[doc = concat!("Appends to the `", stringify!($ty), "` store.")]
                pub fn $add(&self, key: String, value: $ty) -> Entry<$ty> {
                    self.add(key, value)
                }

                #[doc = concat!("Prepends to the `", stringify!($ty), "` store.")]
                pub fn $unshift(&self, key: String, value: $ty) -> Entry<$ty> {
                    self.unshift(key, value)
                }

                #[doc = concat!("Looks up a key in the `", stringify!($ty), "` store.")]
                pub fn $get(&self, key: &str) -> Result<$ty> {
                    self.get::<$ty>(key)
                }

                #[doc = concat!("Deletes a key from the `", stringify!($ty), "` store.")]
                pub fn $delete(&self, key: &str) -> bool {
                    self.delete::<$ty>(key)
                }

                #[doc = concat!("Removes the oldest `", stringify!($ty), "` entry.")]
                pub fn $shift(&self) -> Result<Entry<$ty>> {
                    self.shift::<$ty>()
                }

                #[doc = concat!("Removes the newest `", stringify!($ty), "` entry.")]
                pub fn $pop(&self) -> Result<Entry<$ty>> {
                    self.pop::<$ty>()
                }
            )*
        }
    };
}

typed_operations! {
    String => add_string, unshift_string, get_string, delete_string, shift_string, pop_string;
    i64 => add_int, unshift_int, get_int, delete_int, shift_int, pop_int;
    f64 => add_float, unshift_float, get_float, delete_float, shift_float, pop_float;
}
