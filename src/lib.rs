//! Stricache - An in-memory typed cache server
//!
//! Keeps separate string, integer and float stores, each offering keyed
//! lookup plus queue-like push/pop at both ends, behind an RPC interface.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::CacheStore;
pub use config::Config;
