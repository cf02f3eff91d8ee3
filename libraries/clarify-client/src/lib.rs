//! Clarify API client
//!
//! HTTP client library for the Clarify audio-metadata REST API.
//!
//! # Features
//!
//! - **Bundles**: create, list, load, update, and delete audio bundles
//! - **Tracks**: manage the track list nested under a bundle
//! - **Metadata**: read and replace a bundle's user metadata
//! - **Search**: query transcripts and get back timestamped hits
//!
//! Every request carries a bearer API key. Responses embed a `_links`
//! relation map used to navigate between resources instead of hardcoding
//! URIs. HTTP-level failures come back as data (status code plus decoded
//! body) on the result value; only transport failures and argument
//! validation produce an `Err`.
//!
//! # Example
//!
//! ```ignore
//! use clarify_client::{ApiConfig, ClarifyClient, ListOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ClarifyClient::new(ApiConfig::new("my-api-key"))?;
//!
//!     // Search transcripts
//!     let outcome = client.search().search("close", ListOptions::default()).await?;
//!
//!     if let Some(results) = outcome.results {
//!         for (link, item) in results.matched_items() {
//!             let bundle = client.bundles().load(&link.href).await?;
//!             println!("{}", bundle.str_field("name").unwrap_or("<unnamed>"));
//!
//!             for term in &item.term_results {
//!                 for group in &term.matches {
//!                     for hit in &group.hits {
//!                         println!("{} -- {}", hit.start, hit.end);
//!                     }
//!                 }
//!             }
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

mod bundles;
mod client;
mod error;
mod links;
mod metadata;
mod search;
mod subresource;
mod tracks;
mod types;

// Re-export main types
pub use bundles::BundleClient;
pub use client::ClarifyClient;
pub use error::{ClientError, Result};
pub use links::{Link, LinkEntry, Links, LINKS_KEY};
pub use metadata::MetadataClient;
pub use search::{
    Hit, ItemResult, SearchClient, SearchOutcome, SearchResults, TermMatch, TermResult,
};
pub use subresource::Subresource;
pub use tracks::{TrackClient, TrackFields};
pub use types::{ApiConfig, Created, Document, Fields, ListOptions, Page, DEFAULT_BASE_URL};
