//! Lazy, ordered graph traversal (breadth-first and depth-first)

use std::collections::{HashSet, VecDeque};

use crate::graph::DiGraph;
use crate::model::{Vertex, VertexId};

/// Order in which a [`Traversal`] visits vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalMode {
    /// Visit all direct neighbors before descending further.
    Bfs,
    /// Recurse into each neighbor before the next sibling.
    Dfs,
}

/// A lazy, single-pass walk over a graph.
///
/// Yields each vertex exactly once, even on cyclic input, and terminates by
/// exhausting its frontier. Output order is a pure function of adjacency
/// order and store insertion order. The iterator borrows the graph, so the
/// borrow checker rules out structural mutation while a walk is live.
pub struct Traversal<'g, B> {
    graph: &'g DiGraph<B>,
    mode: TraversalMode,
    /// Roots not yet seeded into the frontier, in store order for
    /// whole-graph walks.
    roots: VecDeque<VertexId>,
    frontier: VecDeque<VertexId>,
    visited: HashSet<VertexId>,
}

impl<'g, B> Iterator for Traversal<'g, B> {
    type Item = &'g Vertex<B>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next = match self.mode {
                TraversalMode::Bfs => self.frontier.pop_front(),
                TraversalMode::Dfs => self.frontier.pop_back(),
            };
            let Some(id) = next else {
                // Restart from the next not-yet-visited root; the visited
                // set is shared across the whole call.
                let root = self.roots.pop_front()?;
                if !self.visited.contains(&root) {
                    self.frontier.push_back(root);
                }
                continue;
            };
            if !self.visited.insert(id.clone()) {
                continue;
            }
            // An unresolvable id (deleted vertex, dangling root) is inert.
            let Some(vertex) = self.graph.vertex(id.as_str()) else {
                continue;
            };
            match self.mode {
                TraversalMode::Bfs => {
                    for adj in &vertex.adjacent_to {
                        if !self.visited.contains(adj) {
                            self.frontier.push_back(adj.clone());
                        }
                    }
                }
                // Push in reverse so the stack pops neighbors in
                // adjacency order.
                TraversalMode::Dfs => {
                    for adj in vertex.adjacent_to.iter().rev() {
                        if !self.visited.contains(adj) {
                            self.frontier.push_back(adj.clone());
                        }
                    }
                }
            }
            return Some(vertex);
        }
    }
}

impl<B> DiGraph<B> {
    /// Walk the whole graph, restarting the chosen mode's walk from each
    /// not-yet-visited vertex in store insertion order.
    pub fn traverse(&self, mode: TraversalMode) -> Traversal<'_, B> {
        Traversal {
            graph: self,
            mode,
            roots: self.vertices().map(|v| v.id.clone()).collect(),
            frontier: VecDeque::new(),
            visited: HashSet::new(),
        }
    }

    /// Walk from `root` only, following adjacency order. Produces an empty
    /// sequence when `root` is absent from the store.
    pub fn traverse_from(&self, root: &str, mode: TraversalMode) -> Traversal<'_, B> {
        Traversal {
            graph: self,
            mode,
            roots: VecDeque::from([VertexId::from(root)]),
            frontier: VecDeque::new(),
            visited: HashSet::new(),
        }
    }
}
