//! Configuration, request options, and per-operation result values.

use crate::links::{Link, Links};
use serde_json::Value;
use std::collections::BTreeMap;

/// Base URI of the hosted Clarify API.
pub const DEFAULT_BASE_URL: &str = "https://api.clarify.io/v1/";

/// Configuration for connecting to the Clarify API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the API root.
    pub base_url: String,
    /// API key sent as the bearer credential on every request.
    pub api_key: String,
}

impl ApiConfig {
    /// Config for the hosted API with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Config for a specific deployment (tests, on-premise installs).
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

/// Form fields for create/update calls, serialized in key order.
pub type Fields = BTreeMap<String, String>;

/// Result of a single API operation: the HTTP status and decoded body.
///
/// HTTP-level failures are not errors; the status travels with the body so
/// callers can classify the outcome themselves.
#[derive(Debug, Clone)]
pub struct Document {
    /// HTTP status code of the response.
    pub status: u16,
    /// Decoded JSON body; `Null` when the response body was empty.
    pub body: Value,
}

impl Document {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `_links` relation map of the body, empty when absent.
    pub fn links(&self) -> Links {
        Links::from_body(&self.body)
    }

    /// A top-level string field of the body.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.body.get(name).and_then(Value::as_str)
    }
}

/// Result of creating a resource.
#[derive(Debug, Clone)]
pub struct Created {
    /// HTTP status code of the response.
    pub status: u16,
    /// Value of the `Location` header, when the server sent one.
    pub location: Option<String>,
    /// Decoded JSON body.
    pub body: Value,
}

impl Created {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One page of a collection listing.
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// HTTP status code of the response.
    pub status: u16,
    /// Links to the items on this page; empty on a non-success status.
    pub items: Vec<Link>,
    /// Link to the next page, when the server provided one.
    pub next: Option<Link>,
    /// Decoded JSON body, including pagination metadata.
    pub body: Value,
}

impl Page {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Query options for listing and search calls.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Maximum number of results per page.
    pub limit: u32,
    /// Relations to embed inline in the response.
    pub embed: String,
    /// Opaque pagination cursor from a previous page.
    pub iterator: String,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            embed: String::new(),
            iterator: String::new(),
        }
    }
}

impl ListOptions {
    /// Set the page size.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the relations to embed.
    #[must_use]
    pub fn embed(mut self, embed: impl Into<String>) -> Self {
        self.embed = embed.into();
        self
    }

    /// Set the pagination cursor.
    #[must_use]
    pub fn iterator(mut self, iterator: impl Into<String>) -> Self {
        self.iterator = iterator.into();
        self
    }

    /// Query pairs in the order the API documents them.
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("limit", self.limit.to_string()),
            ("embed", self.embed.clone()),
            ("iterator", self.iterator.clone()),
        ]
    }
}
