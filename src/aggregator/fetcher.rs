//! Resource fetcher trait
//!
//! The aggregator only needs "give me the JSON at this reference". Keeping
//! that behind a trait lets the HTTP client be swapped for an in-memory
//! source.

use crate::error::Result;
use crate::http::HttpClient;
use crate::types::JsonValue;
use async_trait::async_trait;

/// Dereferences page and detail references into JSON documents
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Retrieve the JSON document behind a reference
    async fn fetch_json(&self, reference: &str) -> Result<JsonValue>;
}

#[async_trait]
impl ResourceFetcher for HttpClient {
    async fn fetch_json(&self, reference: &str) -> Result<JsonValue> {
        self.get_json(reference).await
    }
}

