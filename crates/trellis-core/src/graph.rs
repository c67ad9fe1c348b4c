//! Insertion-ordered directed graph: vertex store, edge manager, body mutator

use std::collections::{HashMap, HashSet};

use crate::error::GraphError;
use crate::model::{Vertex, VertexId};

/// An in-memory directed graph keyed by [`VertexId`].
///
/// The graph exclusively owns its vertices. Storage is an explicit ordered
/// map — a hash index plus an insertion-order sequence — so iteration order
/// over the graph always equals vertex insertion order, with first add
/// winning for duplicate ids.
///
/// All read access hands out borrows into the live graph; mutation goes
/// through the engine's own operations, which maintain the adjacency
/// invariants (no duplicates, no self-references).
pub struct DiGraph<B> {
    index: HashMap<VertexId, Vertex<B>>,
    order: Vec<VertexId>,
}

impl<B> std::fmt::Debug for DiGraph<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiGraph")
            .field("vertex_count", &self.vertex_count())
            .field("edge_count", &self.edge_count())
            .finish()
    }
}

impl<B> DiGraph<B> {
    pub fn new() -> Self {
        DiGraph {
            index: HashMap::new(),
            order: Vec::new(),
        }
    }

    // ── Vertex store ────────────────────────────────────────

    /// Insert `vertex` only if its id is absent. Returns whether it was
    /// inserted; on a duplicate id the original vertex, including its
    /// original body and adjacency, is retained untouched.
    pub fn add_vertex(&mut self, vertex: Vertex<B>) -> bool {
        if self.index.contains_key(&vertex.id) {
            return false;
        }
        self.order.push(vertex.id.clone());
        self.index.insert(vertex.id.clone(), vertex);
        true
    }

    /// Insert a batch of vertices. Duplicate ids within the input are
    /// discarded first (keeping the first occurrence per id), then each
    /// survivor goes through [`add_vertex`](Self::add_vertex) semantics.
    pub fn add_vertices(&mut self, vertices: impl IntoIterator<Item = Vertex<B>>) {
        let mut seen: HashSet<VertexId> = HashSet::new();
        for vertex in vertices {
            if seen.insert(vertex.id.clone()) {
                self.add_vertex(vertex);
            }
        }
    }

    pub fn has_vertex(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Get a vertex by id.
    pub fn vertex(&self, id: &str) -> Option<&Vertex<B>> {
        self.index.get(id)
    }

    /// Iterate over all vertices in insertion order. This is a live
    /// borrowing view of the graph, not a copy.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<B>> {
        self.order.iter().filter_map(|id| self.index.get(id))
    }

    /// Total number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// Total number of stored adjacency entries, inert ones included.
    pub fn edge_count(&self) -> usize {
        self.index.values().map(|v| v.adjacent_to.len()).sum()
    }

    /// Remove the vertex and strip every other vertex's adjacency entry
    /// referencing it. Vertices that depended on the deleted one survive
    /// with a shrunk adjacency. Returns whether the vertex existed.
    pub fn delete_vertex(&mut self, id: &str) -> bool {
        let Some(pos) = self.order.iter().position(|v| v.as_str() == id) else {
            return false;
        };
        self.order.remove(pos);
        self.index.remove(id);
        for vertex in self.index.values_mut() {
            vertex.adjacent_to.retain(|adj| adj.as_str() != id);
        }
        tracing::debug!("Deleted vertex {id} and stripped referencing edges");
        true
    }

    // ── Edge manager ────────────────────────────────────────

    /// Add a directed edge `from -> to`, preserving arrival order.
    ///
    /// Silent no-op when `from == to`, when either endpoint is absent, or
    /// when the edge already exists.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        if from == to {
            return;
        }
        self.insert_edge(from, to);
    }

    /// Strict variant of [`add_edge`](Self::add_edge): identical semantics
    /// except a self-referencing edge is rejected with an error instead of
    /// being silently dropped.
    pub fn try_add_edge(&mut self, from: &str, to: &str) -> Result<(), GraphError> {
        if from == to {
            return Err(GraphError::SelfReferencingEdge(VertexId::from(from)));
        }
        self.insert_edge(from, to);
        Ok(())
    }

    fn insert_edge(&mut self, from: &str, to: &str) {
        if !self.index.contains_key(to) {
            return;
        }
        let Some(vertex) = self.index.get_mut(from) else {
            return;
        };
        if !vertex.points_to(to) {
            vertex.adjacent_to.push(VertexId::from(to));
        }
    }

    /// Remove the edge `from -> to` if present. Returns whether it existed.
    pub fn delete_edge(&mut self, from: &str, to: &str) -> bool {
        let Some(vertex) = self.index.get_mut(from) else {
            return false;
        };
        let Some(pos) = vertex.adjacent_to.iter().position(|adj| adj.as_str() == to) else {
            return false;
        };
        vertex.adjacent_to.remove(pos);
        true
    }

    /// Whether the direct edge `from -> to` is stored.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.vertex(from).is_some_and(|v| v.points_to(to))
    }

    // ── Body mutator ────────────────────────────────────────

    /// Wholesale body replacement. Returns whether the vertex existed.
    pub fn update_vertex_body(&mut self, id: &str, body: B) -> bool {
        match self.index.get_mut(id) {
            Some(vertex) => {
                vertex.body = body;
                true
            }
            None => false,
        }
    }

    /// Scoped in-place edit of a vertex's body with exclusive mutable
    /// access. `Ok(false)` when the vertex is absent. A transform error
    /// propagates to the caller with no rollback of partial edits already
    /// applied inside the transform; callers requiring atomicity should
    /// edit a local copy and swap it in as the final step.
    pub fn merge_vertex_body<F, E>(&mut self, id: &str, transform: F) -> Result<bool, E>
    where
        F: FnOnce(&mut B) -> Result<(), E>,
    {
        match self.index.get_mut(id) {
            Some(vertex) => transform(&mut vertex.body).map(|()| true),
            None => Ok(false),
        }
    }

    /// Infallible counterpart of [`merge_vertex_body`](Self::merge_vertex_body).
    pub fn mutate_vertex_body<F>(&mut self, id: &str, transform: F) -> bool
    where
        F: FnOnce(&mut B),
    {
        match self.index.get_mut(id) {
            Some(vertex) => {
                transform(&mut vertex.body);
                true
            }
            None => false,
        }
    }

    // ── Import / export ─────────────────────────────────────

    /// Build a graph from a flat record, applying
    /// [`add_vertex`](Self::add_vertex) semantics per entry in input order
    /// (first id wins on duplicates). No cross-entry validation is
    /// performed: adjacency entries that don't resolve stay inert at query
    /// time rather than failing at load time.
    pub fn from_raw(records: impl IntoIterator<Item = Vertex<B>>) -> Self {
        let mut graph = Self::new();
        for vertex in records {
            graph.add_vertex(vertex);
        }
        graph
    }
}

impl<B: Clone> DiGraph<B> {
    /// Export an insertion-ordered snapshot of the graph, round-trippable
    /// through [`from_raw`](Self::from_raw).
    pub fn to_record(&self) -> Vec<Vertex<B>> {
        self.vertices().cloned().collect()
    }
}

impl<B> Default for DiGraph<B> {
    fn default() -> Self {
        Self::new()
    }
}
