//! Cache Module
//!
//! In-memory typed storage: one keyed, insertion-ordered store per value type.

mod stats;
mod store;
mod typed;
mod value;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use stats::CacheStats;
pub use store::CacheStore;
pub use typed::TypedStore;
pub use value::{CacheValue, Entry, ValueKind};

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;
