//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming RPC request bodies.

use serde::Deserialize;

use crate::cache::MAX_KEY_LENGTH;

/// Checks that a key is non-empty and within the length limit.
///
/// Returns an error message if validation fails, None if valid.
pub fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        ));
    }
    None
}

/// Request body for the Add* and Unshift* operations
///
/// # Fields
/// - `key`: The key to store the value under
/// - `value`: A JSON string, integer or number depending on the method
///
/// A `ttl` field sent by older clients is accepted and ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRequest<V> {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: V,
}

impl<V> ItemRequest<V> {
    /// Validates the request data
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key)
    }
}

/// Request body for the Get* and Delete* operations
#[derive(Debug, Clone, Deserialize)]
pub struct KeyRequest {
    /// The cache key
    pub key: String,
}

impl KeyRequest {
    /// Validates the request data
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key)
    }
}
