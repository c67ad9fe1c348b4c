//! Test helpers for building vertices and graphs

use serde_json::Value;

use crate::graph::DiGraph;
use crate::model::{JsonBody, Vertex, VertexId};

/// A vertex with an empty body and no outgoing edges.
pub fn vertex(id: &str) -> Vertex<JsonBody> {
    Vertex::new(id, JsonBody::new())
}

/// A vertex with an empty body and a pre-built adjacency.
pub fn vertex_adjacent_to(id: &str, adjacent: &[&str]) -> Vertex<JsonBody> {
    Vertex::with_adjacency(
        id,
        adjacent.iter().map(|a| VertexId::from(*a)).collect(),
        JsonBody::new(),
    )
}

/// Unwrap a `serde_json::json!` object literal into a [`JsonBody`].
pub fn json_body(value: Value) -> JsonBody {
    match value {
        Value::Object(map) => map,
        other => panic!("test body must be a JSON object, got {other}"),
    }
}

/// A vertex carrying a JSON object body built with `serde_json::json!`.
pub fn vertex_with_body(id: &str, body: Value) -> Vertex<JsonBody> {
    Vertex::new(id, json_body(body))
}

/// An edgeless graph over the given ids.
pub fn graph_of(ids: &[&str]) -> DiGraph<JsonBody> {
    let mut graph = DiGraph::new();
    graph.add_vertices(ids.iter().map(|id| vertex(id)));
    graph
}

/// A graph over the given ids with the given edges added in order.
pub fn graph_with_edges(ids: &[&str], edges: &[(&str, &str)]) -> DiGraph<JsonBody> {
    let mut graph = graph_of(ids);
    for (from, to) in edges {
        graph.add_edge(from, to);
    }
    graph
}

/// Collect vertex ids from a sequence of vertex borrows.
pub fn ids_of<'a, B: 'a>(vertices: impl IntoIterator<Item = &'a Vertex<B>>) -> Vec<String> {
    vertices.into_iter().map(|v| v.id.to_string()).collect()
}

/// Sorted string ids of one cycle group, for order-insensitive asserts.
pub fn sorted_group(group: &[VertexId]) -> Vec<String> {
    let mut ids: Vec<String> = group.iter().map(|id| id.to_string()).collect();
    ids.sort();
    ids
}
