//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::api::routes::DEFAULT_MAX_CONCURRENT_REQUESTS;

const DEFAULT_PORT: u16 = 7999;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface the server binds to
    pub server_host: IpAddr,
    /// Server port
    pub server_port: u16,
    /// Maximum number of requests handled at once
    pub max_concurrent_requests: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_HOST` - Bind address (default: 0.0.0.0)
    /// - `SERVER_PORT` - Server port (default: 7999)
    /// - `MAX_CONCURRENT_REQUESTS` - In-flight request cap (default: 200)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_host: parse_var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            max_concurrent_requests: parse_var("MAX_CONCURRENT_REQUESTS")
                .filter(|max| *max > 0)
                .unwrap_or(defaults.max_concurrent_requests),
        }
    }

    /// Address the listener binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            server_port: DEFAULT_PORT,
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_REQUESTS,
        }
    }
}
