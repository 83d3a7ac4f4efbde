//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the typed stores against a simple reference model.

use proptest::prelude::*;

use crate::cache::{CacheStore, Entry, TypedStore, ValueKind};
use crate::error::CacheError;

// == Strategies ==
/// Small key space so that overwrites and deletes of live keys are common
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-e]{1,2}".prop_map(|s| s)
}

/// Few distinct values so that several keys often share one
fn value_strategy() -> impl Strategy<Value = String> {
    "[xy]".prop_map(|s| s)
}

fn distinct_keys_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-zA-Z0-9_]{1,16}", 1..40)
        .prop_map(|keys| keys.into_iter().collect())
}

#[derive(Debug, Clone)]
enum StoreOp {
    Add { key: String, value: String },
    Unshift { key: String, value: String },
    Get { key: String },
    Delete { key: String },
    Shift,
    Pop,
}

fn store_op_strategy() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| StoreOp::Add { key, value }),
        (key_strategy(), value_strategy())
            .prop_map(|(key, value)| StoreOp::Unshift { key, value }),
        key_strategy().prop_map(|key| StoreOp::Get { key }),
        key_strategy().prop_map(|key| StoreOp::Delete { key }),
        Just(StoreOp::Shift),
        Just(StoreOp::Pop),
    ]
}

// == Reference Model ==
/// Ordered list of entries, oldest first.
#[derive(Debug, Default)]
struct Model {
    entries: Vec<(String, String)>,
}

impl Model {
    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    fn add(&mut self, key: String, value: String) {
        match self.position(&key) {
            Some(pos) => self.entries[pos].1 = value,
            None => self.entries.push((key, value)),
        }
    }

    fn unshift(&mut self, key: String, value: String) {
        if let Some(pos) = self.position(&key) {
            self.entries.remove(pos);
        }
        self.entries.insert(0, (key, value));
    }

    fn get(&self, key: &str) -> Option<String> {
        self.position(key).map(|pos| self.entries[pos].1.clone())
    }

    fn delete(&mut self, key: &str) {
        if let Some(pos) = self.position(key) {
            self.entries.remove(pos);
        }
    }

    fn shift(&mut self) -> Option<(String, String)> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    fn pop(&mut self) -> Option<(String, String)> {
        self.entries.pop()
    }

    fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }
}

fn as_pair(entry: Entry<String>) -> (String, String) {
    (entry.key, entry.value)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Any operation sequence leaves index and order holding the same keys,
    // each once, in the order the model predicts.
    #[test]
    fn prop_store_matches_model(ops in prop::collection::vec(store_op_strategy(), 1..80)) {
        let mut store = TypedStore::new();
        let mut model = Model::default();

        for op in ops {
            match op {
                StoreOp::Add { key, value } => {
                    let entry = store.add(key.clone(), value.clone());
                    prop_assert_eq!(as_pair(entry), (key.clone(), value.clone()));
                    model.add(key, value);
                }
                StoreOp::Unshift { key, value } => {
                    store.unshift(key.clone(), value.clone());
                    model.unshift(key, value);
                }
                StoreOp::Get { key } => {
                    prop_assert_eq!(store.get(&key).ok(), model.get(&key));
                }
                StoreOp::Delete { key } => {
                    let expected = model.get(&key).is_some();
                    prop_assert_eq!(store.delete(&key), expected);
                    model.delete(&key);
                }
                StoreOp::Shift => {
                    prop_assert_eq!(store.shift().ok().map(as_pair), model.shift());
                }
                StoreOp::Pop => {
                    prop_assert_eq!(store.pop().ok().map(as_pair), model.pop());
                }
            }

            store.assert_consistent();
            prop_assert_eq!(store.keys().collect::<Vec<_>>(), model.keys());
        }
    }

    // Adding distinct keys then shifting returns them oldest first.
    #[test]
    fn prop_shift_is_fifo(keys in distinct_keys_strategy()) {
        let mut store = TypedStore::new();
        for (i, key) in keys.iter().enumerate() {
            store.add(key.clone(), i as i64);
        }

        for (i, key) in keys.iter().enumerate() {
            let entry = store.shift().unwrap();
            prop_assert_eq!(&entry.key, key);
            prop_assert_eq!(entry.value, i as i64);
        }
        prop_assert!(store.is_empty());
    }

    // Adding distinct keys then popping returns them newest first.
    #[test]
    fn prop_pop_is_lifo(keys in distinct_keys_strategy()) {
        let mut store = TypedStore::new();
        for key in &keys {
            store.add(key.clone(), 1.0f64);
        }

        for key in keys.iter().rev() {
            prop_assert_eq!(&store.pop().unwrap().key, key);
        }
        prop_assert_eq!(store.pop(), Err(CacheError::EmptyStore(ValueKind::Float)));
    }

    // Unshifting distinct keys makes the last one the first to shift out.
    #[test]
    fn prop_unshift_reverses(keys in distinct_keys_strategy()) {
        let mut store = TypedStore::new();
        for key in &keys {
            store.unshift(key.clone(), "v".to_string());
        }

        let expected: Vec<&str> = keys.iter().rev().map(String::as_str).collect();
        prop_assert_eq!(store.keys().collect::<Vec<_>>(), expected);
        prop_assert_eq!(&store.shift().unwrap().key, keys.last().unwrap());
    }

    // Overwriting a key returns the new value and keeps a single order slot.
    #[test]
    fn prop_overwrite_preserves_identity(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut store = TypedStore::new();
        store.add(key.clone(), value1);
        store.add(key.clone(), value2.clone());

        prop_assert_eq!(store.get(&key).unwrap(), value2);
        prop_assert_eq!(store.keys().filter(|k| *k == key.as_str()).count(), 1);
        prop_assert_eq!(store.len(), 1);
    }

    // Deleting an absent key changes nothing.
    #[test]
    fn prop_delete_absent_is_noop(keys in distinct_keys_strategy(), missing in "-{1,4}") {
        let mut store = TypedStore::new();
        for key in &keys {
            store.add(key.clone(), 7i64);
        }
        let before: Vec<String> = store.keys().map(str::to_owned).collect();

        prop_assert!(!store.delete(&missing));
        prop_assert_eq!(store.keys().collect::<Vec<_>>(), before);
        prop_assert_eq!(store.len(), keys.len());
    }

    // Operations on one type never touch the others, even with shared keys.
    #[test]
    fn prop_type_isolation(ops in prop::collection::vec(store_op_strategy(), 1..40)) {
        let cache = CacheStore::new();
        cache.add_int("a".to_string(), 1);
        cache.add_float("a".to_string(), 1.5);

        for op in ops {
            match op {
                StoreOp::Add { key, value } => { cache.add_string(key, value); }
                StoreOp::Unshift { key, value } => { cache.unshift_string(key, value); }
                StoreOp::Get { key } => { let _ = cache.get_string(&key); }
                StoreOp::Delete { key } => { cache.delete_string(&key); }
                StoreOp::Shift => { let _ = cache.shift_string(); }
                StoreOp::Pop => { let _ = cache.pop_string(); }
            }
        }

        prop_assert_eq!(cache.get_int("a").unwrap(), 1);
        prop_assert_eq!(cache.get_float("a").unwrap(), 1.5);
        let stats = cache.stats();
        prop_assert_eq!((stats.ints, stats.floats), (1, 1));
        cache.assert_consistent();
    }
}

