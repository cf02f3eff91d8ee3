//! Track operations nested under a bundle.

use crate::client::ClarifyClient;
use crate::error::Result;
use crate::subresource::SubresourceClient;
use crate::types::Document;
use serde::Serialize;

/// Relation under which a bundle links its track list.
const TRACKS_REL: &str = "clarify:tracks";

/// Fields accepted when creating or updating a track.
///
/// Only populated fields are sent; the server keeps its current value for
/// anything omitted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrackFields {
    /// Position of the track within the bundle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<u32>,
    /// Human-readable label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// URL of the media this track points at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    /// Audio channel selector ("left", "right", or empty for both).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_channel: Option<String>,
    /// Free-form source tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Track list version, for optimistic concurrency on updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
}

impl TrackFields {
    /// Fields for a new track pointing at the given media URL.
    pub fn new(media_url: impl Into<String>) -> Self {
        Self {
            media_url: Some(media_url.into()),
            ..Self::default()
        }
    }

    /// Set the track position.
    #[must_use]
    pub fn track(mut self, track: u32) -> Self {
        self.track = Some(track);
        self
    }

    /// Set the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the audio channel selector.
    #[must_use]
    pub fn audio_channel(mut self, audio_channel: impl Into<String>) -> Self {
        self.audio_channel = Some(audio_channel.into());
        self
    }

    /// Set the source tag.
    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the track list version.
    #[must_use]
    pub fn version(mut self, version: u64) -> Self {
        self.version = Some(version);
        self
    }
}

/// Client for the track list nested under a bundle.
///
/// Tracks are addressed through the bundle's `clarify:tracks` link, so every
/// operation first loads the parent bundle to resolve that link.
pub struct TrackClient<'a> {
    inner: SubresourceClient<'a>,
}

impl<'a> TrackClient<'a> {
    pub(crate) fn new(client: &'a ClarifyClient) -> Self {
        Self {
            inner: SubresourceClient::new(client, TRACKS_REL),
        }
    }

    pub(crate) fn raw(&self) -> &SubresourceClient<'a> {
        &self.inner
    }

    /// Load the track list of a bundle.
    pub async fn load(&self, bundle_id: &str) -> Result<Document> {
        self.inner.load(bundle_id).await
    }

    /// Load a single track by its hyperlink, as listed in the track list.
    ///
    /// Skips parent resolution: the href (relative or absolute) already
    /// addresses the track.
    pub async fn load_one(&self, href: &str) -> Result<Document> {
        self.inner.load_link(href).await
    }

    /// Add a track to a bundle.
    pub async fn create(&self, bundle_id: &str, fields: &TrackFields) -> Result<Document> {
        self.inner.create(bundle_id, fields).await
    }

    /// Update a bundle's track list.
    pub async fn update(&self, bundle_id: &str, fields: &TrackFields) -> Result<Document> {
        self.inner.update(bundle_id, fields).await
    }

    /// Remove a bundle's tracks.
    pub async fn delete(&self, bundle_id: &str) -> Result<Document> {
        self.inner.delete(bundle_id).await
    }
}
