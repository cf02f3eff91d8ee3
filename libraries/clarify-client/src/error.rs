//! Error types for the Clarify client.

use thiserror::Error;

/// Errors that can occur when talking to the Clarify API.
///
/// Non-2xx HTTP statuses are deliberately not represented here: operations
/// return them as data on the result value (see [`crate::Document`]). Only
/// transport failures and argument validation produce an error.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid base URL or unresolvable request path
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Response body could not be decoded as JSON
    #[error("Invalid JSON in response: {0}")]
    InvalidJson(String),

    /// Unrecognized logical sub-resource name
    #[error("Unknown sub-resource: {0}")]
    InvalidResource(String),

    /// The `version` field of an update was not numeric
    #[error("Version must be numeric, got {0:?}")]
    InvalidVersion(String),

    /// A required field was missing from the field set
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The parent bundle does not expose the requested relation link
    #[error("Bundle {bundle} has no {rel} link")]
    LinkNotFound {
        /// Relation name that was looked up
        rel: String,
        /// Bundle id or href the lookup was made against
        bundle: String,
    },
}

/// Result type for Clarify client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
