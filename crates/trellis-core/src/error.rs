//! Error types for the graph engine.

use crate::model::VertexId;

/// Errors surfaced by the strict-mode graph operations.
///
/// The engine is tolerant by default: operations referencing a missing
/// vertex or edge are no-ops. The one deliberate rejection is the
/// self-referencing edge, raised only through
/// [`DiGraph::try_add_edge`](crate::DiGraph::try_add_edge).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A vertex may never point to itself.
    #[error("edge {0} -> {0} is self-referencing")]
    SelfReferencingEdge(VertexId),
}
