//! Trellis Core — insertion-ordered directed graph engine with bounded,
//! deduplicated cycle detection
//!
//! The graph is a pure in-memory data structure: single-threaded, fully
//! synchronous, no I/O. Callers feed it vertex records and read back
//! sequences of ids; traversal and deep-dependency walks are lazy
//! iterators borrowing the graph.

pub mod cycles;
pub mod deps;
pub mod error;
pub mod graph;
pub mod model;
pub mod traversal;


#[cfg(test)]
pub mod test_utils;

pub use deps::DeepWalk;
pub use error::GraphError;
pub use graph::DiGraph;
pub use model::{JsonBody, Vertex, VertexId};
pub use traversal::{Traversal, TraversalMode};
