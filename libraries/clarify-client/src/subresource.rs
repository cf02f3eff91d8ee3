//! Resources addressed through a parent bundle's link map.
//!
//! Sub-resources have no stable top-level path: their URI is discovered from
//! the relation link embedded in the parent bundle, then used as the base of
//! the CRUD operation being performed.

use crate::client::ClarifyClient;
use crate::error::{ClientError, Result};
use crate::metadata::MetadataClient;
use crate::tracks::TrackClient;
use crate::types::{Document, Fields};
use serde::Serialize;
use tracing::debug;
use url::Url;

/// A sub-resource client produced by name lookup.
///
/// Variants share the same resolve-then-request semantics; they differ in the
/// relation they resolve and the typed operations the inner clients expose.
pub enum Subresource<'a> {
    /// The track list nested under a bundle
    Tracks(TrackClient<'a>),
    /// The user metadata nested under a bundle
    Metadata(MetadataClient<'a>),
}

impl<'a> Subresource<'a> {
    fn raw(&self) -> &SubresourceClient<'a> {
        match self {
            Subresource::Tracks(tracks) => tracks.raw(),
            Subresource::Metadata(metadata) => metadata.raw(),
        }
    }

    /// Load the sub-resource of a bundle.
    pub async fn load(&self, bundle_id: &str) -> Result<Document> {
        self.raw().load(bundle_id).await
    }

    /// Create the sub-resource of a bundle from raw form fields.
    pub async fn create(&self, bundle_id: &str, fields: &Fields) -> Result<Document> {
        self.raw().create(bundle_id, fields).await
    }

    /// Update the sub-resource of a bundle from raw form fields.
    pub async fn update(&self, bundle_id: &str, fields: &Fields) -> Result<Document> {
        self.raw().update(bundle_id, fields).await
    }

    /// Delete the sub-resource of a bundle.
    pub async fn delete(&self, bundle_id: &str) -> Result<Document> {
        self.raw().delete(bundle_id).await
    }
}

/// Shared plumbing for resources resolved from a parent bundle's links.
pub(crate) struct SubresourceClient<'a> {
    client: &'a ClarifyClient,
    rel: &'static str,
}

impl<'a> SubresourceClient<'a> {
    pub(crate) fn new(client: &'a ClarifyClient, rel: &'static str) -> Self {
        Self { client, rel }
    }

    /// Resolve the sub-resource URI from the parent bundle's link map.
    ///
    /// Loads the parent first; fails with [`ClientError::LinkNotFound`] when
    /// the bundle does not expose the relation.
    pub(crate) async fn resolve(&self, bundle_id: &str) -> Result<Url> {
        let url = self.client.resolve(bundle_id)?;
        debug!(url = %url, rel = self.rel, "Resolving sub-resource link");

        let parent = self.client.execute(self.client.http().get(url)).await?;
        let links = parent.links();
        let href = links.href(self.rel).ok_or_else(|| ClientError::LinkNotFound {
            rel: self.rel.to_string(),
            bundle: bundle_id.to_string(),
        })?;

        self.client.resolve(href)
    }

    pub(crate) async fn load(&self, bundle_id: &str) -> Result<Document> {
        let url = self.resolve(bundle_id).await?;
        debug!(url = %url, rel = self.rel, "Loading sub-resource");

        self.client.execute(self.client.http().get(url)).await
    }

    /// Load directly by a known hyperlink, skipping parent resolution.
    pub(crate) async fn load_link(&self, href: &str) -> Result<Document> {
        let url = self.client.resolve(href)?;
        debug!(url = %url, rel = self.rel, "Loading sub-resource by link");

        self.client.execute(self.client.http().get(url)).await
    }

    pub(crate) async fn create<T: Serialize + ?Sized>(
        &self,
        bundle_id: &str,
        fields: &T,
    ) -> Result<Document> {
        let url = self.resolve(bundle_id).await?;
        debug!(url = %url, rel = self.rel, "Creating sub-resource");

        let request = self.client.http().post(url).form(fields);
        self.client.execute(request).await
    }

    pub(crate) async fn update<T: Serialize + ?Sized>(
        &self,
        bundle_id: &str,
        fields: &T,
    ) -> Result<Document> {
        let url = self.resolve(bundle_id).await?;
        debug!(url = %url, rel = self.rel, "Updating sub-resource");

        let request = self.client.http().put(url).form(fields);
        self.client.execute(request).await
    }

    pub(crate) async fn delete(&self, bundle_id: &str) -> Result<Document> {
        let url = self.resolve(bundle_id).await?;
        debug!(url = %url, rel = self.rel, "Deleting sub-resource");

        self.client.execute(self.client.http().delete(url)).await
    }
}
