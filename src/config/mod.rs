// src/config/mod.rs
// Probe configuration. Values are explicit per run and threaded through
// the client, never process globals.

use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// The original harness left the request timeout to library defaults,
/// which is an unbounded wait. We pin an explicit one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    base_url: Url,
    pub timeout: Duration,
}

impl ProbeConfig {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid base URL: {base_url}"))?;
        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Full URL for a route path from the check table.
    pub fn route(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}
