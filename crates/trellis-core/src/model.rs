//! Core data structures for the dependency graph

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique, stable identifier for a vertex within a graph.
///
/// Ids are opaque string keys: hashable, totally ordered, and comparable
/// against plain `&str` for lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct VertexId(String);

impl VertexId {
    pub fn new(id: impl Into<String>) -> Self {
        VertexId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VertexId {
    fn from(id: &str) -> Self {
        VertexId(id.to_string())
    }
}

impl From<String> for VertexId {
    fn from(id: String) -> Self {
        VertexId(id)
    }
}

// Lets `HashMap<VertexId, _>` be probed with `&str` keys.
impl Borrow<str> for VertexId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VertexId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for VertexId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for VertexId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The conventional opaque body type: an ordered JSON object.
///
/// The engine never inspects vertex bodies; this alias is just the common
/// choice for callers shuttling JSON-shaped payloads through the graph.
pub type JsonBody = serde_json::Map<String, serde_json::Value>;

/// A single vertex: an id, the ordered ids it points to, and an opaque body.
///
/// `adjacent_to` preserves edge arrival order and, when maintained through
/// [`DiGraph`](crate::DiGraph) operations, never contains duplicates or the
/// vertex's own id. Raw imports take the adjacency as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex<B> {
    pub id: VertexId,
    /// Wire name kept as `adjacentTo` for the flat record format.
    #[serde(rename = "adjacentTo")]
    pub adjacent_to: Vec<VertexId>,
    pub body: B,
}

impl<B> Vertex<B> {
    /// A vertex with no outgoing edges.
    pub fn new(id: impl Into<VertexId>, body: B) -> Self {
        Vertex {
            id: id.into(),
            adjacent_to: Vec::new(),
            body,
        }
    }

    /// A vertex with a pre-built adjacency, as read from a raw record.
    pub fn with_adjacency(id: impl Into<VertexId>, adjacent_to: Vec<VertexId>, body: B) -> Self {
        Vertex {
            id: id.into(),
            adjacent_to,
            body,
        }
    }

    /// Whether this vertex points directly at `id`.
    pub fn points_to(&self, id: &str) -> bool {
        self.adjacent_to.iter().any(|adj| adj.as_str() == id)
    }
}
