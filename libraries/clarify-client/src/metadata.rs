//! Bundle metadata sub-resource.

use crate::client::ClarifyClient;
use crate::error::Result;
use crate::subresource::SubresourceClient;
use crate::types::{Document, Fields};
use serde_json::Value;

/// Relation under which a bundle links its user metadata.
const METADATA_REL: &str = "clarify:metadata";

/// Client for the user metadata nested under a bundle.
pub struct MetadataClient<'a> {
    inner: SubresourceClient<'a>,
}

impl<'a> MetadataClient<'a> {
    pub(crate) fn new(client: &'a ClarifyClient) -> Self {
        Self {
            inner: SubresourceClient::new(client, METADATA_REL),
        }
    }

    pub(crate) fn raw(&self) -> &SubresourceClient<'a> {
        &self.inner
    }

    /// Load a bundle's user metadata.
    pub async fn load(&self, bundle_id: &str) -> Result<Document> {
        self.inner.load(bundle_id).await
    }

    /// Replace a bundle's user metadata with the given JSON document.
    pub async fn update(
        &self,
        bundle_id: &str,
        data: &Value,
        version: Option<u64>,
    ) -> Result<Document> {
        let mut fields = Fields::new();
        fields.insert("data".to_string(), data.to_string());
        if let Some(version) = version {
            fields.insert("version".to_string(), version.to_string());
        }

        self.inner.update(bundle_id, &fields).await
    }

    /// Reset a bundle's user metadata to an empty document.
    pub async fn reset(&self, bundle_id: &str) -> Result<Document> {
        self.inner.delete(bundle_id).await
    }
}
