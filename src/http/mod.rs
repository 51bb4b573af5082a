//! HTTP client module
//!
//! Provides the HTTP client used to dereference page and detail references.
//!
//! # Features
//!
//! - **Status Classification**: Non-success statuses become `Error::HttpStatus`
//! - **JSON Decoding**: Typed or untyped JSON bodies via serde

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
