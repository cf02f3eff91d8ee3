//! Bundle resource operations.

use crate::client::ClarifyClient;
use crate::error::{ClientError, Result};
use crate::metadata::MetadataClient;
use crate::search::{SearchClient, SearchOutcome};
use crate::subresource::Subresource;
use crate::tracks::TrackClient;
use crate::types::{Created, Document, Fields, ListOptions, Page};
use tracing::debug;

/// Path of the bundle collection under the API root.
const COLLECTION: &str = "bundles";

/// Client for the bundle collection.
///
/// Bundles are the top-level audio-metadata resource. Every operation issues
/// one request and returns an explicit result value; non-2xx statuses come
/// back as data on that value, never as an `Err`.
pub struct BundleClient<'a> {
    client: &'a ClarifyClient,
}

impl<'a> BundleClient<'a> {
    pub(crate) fn new(client: &'a ClarifyClient) -> Self {
        Self { client }
    }

    /// List bundles.
    ///
    /// Returns the item links of the page on success, and an empty page on a
    /// non-success status; check [`Page::status`] to distinguish the two.
    pub async fn index(&self, options: ListOptions) -> Result<Page> {
        let url = self.client.resolve(COLLECTION)?;
        debug!(url = %url, limit = options.limit, "Listing bundles");

        let request = self.client.http().get(url).query(&options.query());
        let doc = self.client.execute(request).await?;

        let (items, next) = if doc.is_success() {
            let links = doc.links();
            (links.items().to_vec(), links.all("next").first().cloned())
        } else {
            (Vec::new(), None)
        };

        Ok(Page {
            status: doc.status,
            items,
            next,
            body: doc.body,
        })
    }

    /// Load a bundle by relative path or full hyperlink.
    ///
    /// The decoded body is returned whatever the status; check
    /// [`Document::is_success`].
    pub async fn load(&self, id: &str) -> Result<Document> {
        let url = self.client.resolve(id)?;
        debug!(url = %url, "Loading bundle");

        self.client.execute(self.client.http().get(url)).await
    }

    /// Create a bundle from form fields.
    ///
    /// The `Location` header of the response, when present, is surfaced on
    /// the returned [`Created`] value.
    pub async fn create(&self, fields: &Fields) -> Result<Created> {
        let url = self.client.resolve(COLLECTION)?;
        debug!(url = %url, "Creating bundle");

        let request = self.client.http().post(url).form(fields);
        let response = self.client.process(request).await?;

        let location = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let doc = ClarifyClient::decode(response).await?;

        Ok(Created {
            status: doc.status,
            location,
            body: doc.body,
        })
    }

    /// Update a bundle.
    ///
    /// `fields` must carry an `id` addressing the bundle (relative path or
    /// full hyperlink); it is stripped from the form body and used only for
    /// the request URL. A `version` field, when present, must be numeric.
    /// Both checks fail before any request is sent.
    pub async fn update(&self, fields: &Fields) -> Result<Document> {
        if let Some(version) = fields.get("version") {
            if version.parse::<f64>().is_err() {
                return Err(ClientError::InvalidVersion(version.clone()));
            }
        }

        let id = fields.get("id").ok_or(ClientError::MissingField("id"))?;
        let url = self.client.resolve(id)?;

        let mut body = fields.clone();
        body.remove("id");

        debug!(url = %url, "Updating bundle");
        let request = self.client.http().put(url).form(&body);
        self.client.execute(request).await
    }

    /// Delete a bundle by relative path or full hyperlink.
    pub async fn delete(&self, id: &str) -> Result<Document> {
        let url = self.client.resolve(id)?;
        debug!(url = %url, "Deleting bundle");

        self.client.execute(self.client.http().delete(url)).await
    }

    /// Search bundle transcripts; delegates to the search client with the
    /// same credential.
    pub async fn search(&self, query: &str, options: ListOptions) -> Result<SearchOutcome> {
        SearchClient::new(self.client).search(query, options).await
    }

    /// Track sub-resource client.
    pub fn tracks(&self) -> TrackClient<'a> {
        TrackClient::new(self.client)
    }

    /// Metadata sub-resource client.
    pub fn metadata(&self) -> MetadataClient<'a> {
        MetadataClient::new(self.client)
    }

    /// Resolve a logical sub-resource name to its client.
    ///
    /// Unrecognized names fail with [`ClientError::InvalidResource`].
    pub fn subresource(&self, name: &str) -> Result<Subresource<'a>> {
        match name {
            "tracks" => Ok(Subresource::Tracks(self.tracks())),
            "metadata" => Ok(Subresource::Metadata(self.metadata())),
            other => Err(ClientError::InvalidResource(other.to_string())),
        }
    }
}
