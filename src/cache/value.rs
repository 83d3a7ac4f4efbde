//! Value Types Module
//!
//! Ties each supported value type to its own store inside the cache.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cache::store::Stores;
use crate::cache::TypedStore;

// == Value Kind ==
/// The three value types the cache keeps apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    Int,
    Float,
}

impl ValueKind {
    /// Every kind, in the order the stores are listed.
    pub const ALL: [ValueKind; 3] = [ValueKind::String, ValueKind::Int, ValueKind::Float];

    /// Suffix used by the RPC method names (`AddString`, `PopInt`, ...).
    pub fn method_suffix(self) -> &'static str {
        match self {
            ValueKind::String => "String",
            ValueKind::Int => "Int",
            ValueKind::Float => "Float",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
        };
        f.write_str(name)
    }
}

// == Entry ==
/// A key/value pair live in one typed store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<V> {
    pub key: String,
    pub value: V,
}

impl<V> Entry<V> {
    pub fn new(key: impl Into<String>, value: V) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

// == Cache Value ==
/// A type that has a dedicated store inside [`CacheStore`](crate::cache::CacheStore).
///
/// Implemented for `String`, `i64` and `f64`. The generic operations on
/// `CacheStore` use this to pick the right store, so the container logic
/// exists only once.
///
/// The trait is sealed; the cache has no store for other types.
///
/// ```compile_fail
/// use stricache::cache::{CacheValue, ValueKind};
///
/// #[derive(Clone)]
/// struct Custom;
///
/// impl CacheValue for Custom {
///     const KIND: ValueKind = ValueKind::Int;
/// }
/// ```
pub trait CacheValue: sealed::Sealed + Clone + Send + Sync + 'static {
    /// Which store this type lives in.
    const KIND: ValueKind;

    fn store(stores: &Stores) -> &TypedStore<Self>;

    fn store_mut(stores: &mut Stores) -> &mut TypedStore<Self>;
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for String {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
}

impl CacheValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn store(stores: &Stores) -> &TypedStore<Self> {
        &stores.strings
    }

    fn store_mut(stores: &mut Stores) -> &mut TypedStore<Self> {
        &mut stores.strings
    }
}

impl CacheValue for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn store(stores: &Stores) -> &TypedStore<Self> {
        &stores.ints
    }

    fn store_mut(stores: &mut Stores) -> &mut TypedStore<Self> {
        &mut stores.ints
    }
}

impl CacheValue for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn store(stores: &Stores) -> &TypedStore<Self> {
        &stores.floats
    }

    fn store_mut(stores: &mut Stores) -> &mut TypedStore<Self> {
        &mut stores.floats
    }
}
