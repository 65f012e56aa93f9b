use std::time::Duration;

use anyhow::{Context, Result};

use crate::error::CatalogError;

mod fetch;
mod http_client;

mod types;
pub use self::types::*;

/// `fetch(url) -> bytes | failure(status)`.
///
/// Implemented over HTTP by [`RemoteClient`]; tests substitute in-memory fetchers.
pub trait Fetch: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, CatalogError>;

    /// Body as text. A body that is not UTF-8 cannot be put on the clipboard
    /// as text, so it is a copy failure.
    fn fetch_text(&self, url: &str) -> Result<String, CatalogError> {
        let bytes = self.fetch(url)?;
        String::from_utf8(bytes).map_err(|_| CatalogError::Copy {
            reason: format!("{} is not UTF-8 text", url),
        })
    }
}

#[derive(Clone)]
pub struct RemoteClient {
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("graphics-catalog/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .context("build reqwest client")?;
        Ok(Self { client })
    }
}
