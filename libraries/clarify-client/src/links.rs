//! Hyperlink structures used by the API's response envelope.
//!
//! Every response body may embed a linked-resource map under the reserved
//! `_links` key, mapping relation names ("self", "items", "item",
//! sub-resource relations) to either a single hyperlink object or an ordered
//! list of them. Clients navigate between resources through these links
//! rather than hardcoding URIs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Reserved body key under which responses embed their link map.
pub const LINKS_KEY: &str = "_links";

/// A single hyperlink reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Link {
    /// Target URI, either absolute or relative to the API host.
    pub href: String,
}

impl Link {
    /// Link to the given href.
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// A relation's value: a single link or an ordered list of links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LinkEntry {
    /// The relation points at exactly one resource
    One(Link),
    /// The relation lists several resources, in response order
    Many(Vec<Link>),
}

/// The linked-resource map embedded in API responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Links(pub BTreeMap<String, LinkEntry>);

impl Links {
    /// Decode the `_links` map from a response body.
    ///
    /// Returns an empty map when the body has no decodable link section.
    pub fn from_body(body: &Value) -> Self {
        body.get(LINKS_KEY)
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }

    /// Href of a relation, taking the first link when the relation is a list.
    pub fn href(&self, rel: &str) -> Option<&str> {
        match self.0.get(rel)? {
            LinkEntry::One(link) => Some(link.href.as_str()),
            LinkEntry::Many(links) => links.first().map(|link| link.href.as_str()),
        }
    }

    /// All links of a relation, in response order.
    pub fn all(&self, rel: &str) -> &[Link] {
        match self.0.get(rel) {
            Some(LinkEntry::One(link)) => std::slice::from_ref(link),
            Some(LinkEntry::Many(links)) => links.as_slice(),
            None => &[],
        }
    }

    /// Links under the `items` relation of a collection listing.
    pub fn items(&self) -> &[Link] {
        self.all("items")
    }

    /// Links under the `item` relation of a search response.
    pub fn item_list(&self) -> &[Link] {
        self.all("item")
    }

    /// Whether the map carries the given relation.
    pub fn contains(&self, rel: &str) -> bool {
        self.0.contains_key(rel)
    }
}
