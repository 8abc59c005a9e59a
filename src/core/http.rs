//! HTTP utilities for Sleeper API communication

use crate::{config::SourceConfig, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};

/// Headers sent with every upstream request. Sleeper is public, so no cookies or tokens.
pub fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Build the shared client for one source: user agent, JSON accept header, per-call timeout.
pub fn build_client(config: &SourceConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(default_headers())
        .timeout(config.timeout)
        .build()?;
    Ok(client)
}
