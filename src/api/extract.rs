//! Request Extractors
//!
//! JSON body extractor whose failures answer in the same `{"error": ...}`
//! shape as every other cache error.

use axum::extract::FromRequest;

use crate::error::CacheError;

/// Like `axum::Json`, but a missing, malformed or wrongly typed body is
/// rejected with [`CacheError::InvalidRequest`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(CacheError))]
pub struct RpcJson<T>(pub T);
