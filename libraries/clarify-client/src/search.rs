//! Transcript search.

use crate::client::ClarifyClient;
use crate::error::Result;
use crate::links::{Link, Links};
use crate::types::ListOptions;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Path of the search endpoint under the API root.
const SEARCH_PATH: &str = "search";

/// Client for the transcript search endpoint.
pub struct SearchClient<'a> {
    client: &'a ClarifyClient,
}

impl<'a> SearchClient<'a> {
    pub(crate) fn new(client: &'a ClarifyClient) -> Self {
        Self { client }
    }

    /// Search bundle transcripts for `query`.
    ///
    /// Typed results are present only on a success status with a decodable
    /// body; the raw body and status always come back, so a failed search is
    /// data rather than an error.
    pub async fn search(&self, query: &str, options: ListOptions) -> Result<SearchOutcome> {
        let url = self.client.resolve(SEARCH_PATH)?;
        debug!(url = %url, query = %query, limit = options.limit, "Searching transcripts");

        let mut params = vec![("query", query.to_string())];
        params.extend(options.query());

        let request = self.client.http().get(url).query(&params);
        let doc = self.client.execute(request).await?;

        let results = if doc.is_success() {
            match serde_json::from_value::<SearchResults>(doc.body.clone()) {
                Ok(results) => Some(results),
                Err(e) => {
                    warn!(error = %e, "Failed to decode search results");
                    None
                }
            }
        } else {
            None
        };

        if let Some(results) = &results {
            debug!(items = results.item_results.len(), "Search complete");
        }

        Ok(SearchOutcome {
            status: doc.status,
            results,
            body: doc.body,
        })
    }
}

/// Result of a search call: the status plus typed results when decodable.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// HTTP status code of the response.
    pub status: u16,
    /// Decoded results, present only on a success status.
    pub results: Option<SearchResults>,
    /// Raw JSON body, kept for error details and unmodeled fields.
    pub body: Value,
}

impl SearchOutcome {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Decoded search response.
///
/// `item_results` and the `item` relation of `links` are positionally
/// aligned: index `i` in both refers to the same matched bundle. Use
/// [`SearchResults::matched_items`] to walk them together.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults {
    /// One entry per matched bundle, in relevance order.
    #[serde(default)]
    pub item_results: Vec<ItemResult>,
    /// Link map; the `item` relation lists the matched bundles.
    #[serde(default, rename = "_links")]
    pub links: Links,
    /// Page size the server applied, when reported.
    #[serde(default)]
    pub limit: Option<u32>,
}

impl SearchResults {
    /// Pair each matched bundle's link with its results, preserving the
    /// positional alignment of the response.
    pub fn matched_items(&self) -> impl Iterator<Item = (&Link, &ItemResult)> {
        self.links.item_list().iter().zip(self.item_results.iter())
    }
}

/// Results within a single matched bundle.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemResult {
    /// Relevance score, when the server computes one.
    #[serde(default)]
    pub score: Option<f64>,
    /// One entry per search term, in query order.
    #[serde(default)]
    pub term_results: Vec<TermResult>,
}

/// Matches of one search term within one bundle.
#[derive(Debug, Clone, Deserialize)]
pub struct TermResult {
    /// The term these matches belong to.
    #[serde(default)]
    pub term: Option<String>,
    /// Match groups, in transcript order.
    #[serde(default)]
    pub matches: Vec<TermMatch>,
}

/// One group of hits for a term.
#[derive(Debug, Clone, Deserialize)]
pub struct TermMatch {
    /// Track the hits were found in, when reported.
    #[serde(default)]
    pub track: Option<u32>,
    /// Timestamped spans, in transcript order.
    #[serde(default)]
    pub hits: Vec<Hit>,
}

/// A single timestamped match span.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Hit {
    /// Start offset in seconds.
    pub start: f64,
    /// End offset in seconds.
    pub end: f64,
}
