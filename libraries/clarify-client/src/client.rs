//! Main Clarify API client.

use crate::bundles::BundleClient;
use crate::error::{ClientError, Result};
use crate::search::SearchClient;
use crate::types::{ApiConfig, Document};
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Main client for the Clarify audio-metadata API.
///
/// The client owns the HTTP transport and the credential, and hands out
/// sub-clients for bundle, track, metadata, and search operations. It holds
/// no per-operation state; every operation returns an explicit result value
/// carrying the status code and decoded body.
///
/// # Example
///
/// ```ignore
/// use clarify_client::{ApiConfig, ClarifyClient, ListOptions};
///
/// let client = ClarifyClient::new(ApiConfig::new("my-api-key"))?;
///
/// let page = client.bundles().index(ListOptions::default()).await?;
/// for item in &page.items {
///     let bundle = client.bundles().load(&item.href).await?;
///     println!("{}", bundle.str_field("name").unwrap_or("<unnamed>"));
/// }
/// ```
pub struct ClarifyClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl ClarifyClient {
    /// Create a client for the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let base_url = validate_base_url(&config.base_url)?;

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("clarify-client/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key,
        })
    }

    /// Base URL of the API root.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Get a bundle client for the bundle collection.
    pub fn bundles(&self) -> BundleClient<'_> {
        BundleClient::new(self)
    }

    /// Get a search client for transcript search.
    pub fn search(&self) -> SearchClient<'_> {
        SearchClient::new(self)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Resolve a relative path against the base URL, or pass an absolute
    /// hyperlink through verbatim (following links from prior responses).
    pub(crate) fn resolve(&self, path_or_url: &str) -> Result<Url> {
        if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
            Url::parse(path_or_url)
                .map_err(|e| ClientError::InvalidUrl(format!("{path_or_url}: {e}")))
        } else {
            self.base_url
                .join(path_or_url)
                .map_err(|e| ClientError::InvalidUrl(format!("{path_or_url}: {e}")))
        }
    }

    /// Send a request with the bearer credential attached.
    ///
    /// The single chokepoint every operation goes through. Non-2xx statuses
    /// are not errors here; only transport failures surface as `Err`.
    pub(crate) async fn process(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.bearer_auth(&self.api_key).send().await?;
        Ok(response)
    }

    /// Decode a response into a status plus JSON body document.
    ///
    /// An empty body decodes to JSON null; anything else must parse.
    pub(crate) async fn decode(response: Response) -> Result<Document> {
        let status = response.status().as_u16();
        let text = response.text().await?;

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|e| ClientError::InvalidJson(e.to_string()))?
        };

        Ok(Document { status, body })
    }

    /// Send a request through the chokepoint and decode the response.
    pub(crate) async fn execute(&self, request: RequestBuilder) -> Result<Document> {
        let response = self.process(request).await?;
        Self::decode(response).await
    }
}

fn validate_base_url(raw: &str) -> Result<Url> {
    if raw.is_empty() {
        return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
    }

    if !raw.starts_with("http://") && !raw.starts_with("https://") {
        return Err(ClientError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }

    // Relative paths only join cleanly when the root ends with a slash.
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };

    Url::parse(&normalized).map_err(|e| ClientError::InvalidUrl(e.to_string()))
}
