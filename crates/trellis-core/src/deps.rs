//! Direct and transitive dependency collection

use std::collections::HashSet;

use crate::graph::DiGraph;
use crate::model::{Vertex, VertexId};

#[derive(Debug, Clone, Copy)]
enum WalkDirection {
    /// Follow adjacency (top-to-bottom).
    Children,
    /// Follow reverse adjacency (bottom-to-top).
    Parents,
}

/// A lazy depth-first walk over transitively reachable vertex ids.
///
/// Each id is yielded at most once per walk (one visited set per call),
/// so the walk terminates on cyclic input. The walk's root is excluded
/// from the output unless it is independently reached again via some
/// other path.
pub struct DeepWalk<'g, B> {
    graph: &'g DiGraph<B>,
    direction: WalkDirection,
    /// Pending ids with the depth they were discovered at.
    stack: Vec<(VertexId, usize)>,
    visited: HashSet<VertexId>,
    depth_limit: Option<usize>,
}

impl<'g, B> DeepWalk<'g, B> {
    fn new(
        graph: &'g DiGraph<B>,
        root: &str,
        direction: WalkDirection,
        depth_limit: Option<usize>,
    ) -> Self {
        let mut walk = DeepWalk {
            graph,
            direction,
            stack: Vec::new(),
            visited: HashSet::new(),
            depth_limit,
        };
        // The first adjacency expansion counts as depth 1. An absent root
        // produces an empty walk.
        if depth_limit != Some(0) && graph.has_vertex(root) {
            walk.push_neighbors(root, 1);
        }
        walk
    }

    /// Resolve `id`'s neighbors in the walk direction and stack them in
    /// reverse, so popping follows adjacency (or store-scan) order.
    fn push_neighbors(&mut self, id: &str, depth: usize) {
        let neighbors: Vec<&VertexId> = match self.direction {
            WalkDirection::Children => match self.graph.vertex(id) {
                Some(vertex) => vertex
                    .adjacent_to
                    .iter()
                    .filter(|adj| self.graph.has_vertex(adj.as_str()))
                    .collect(),
                None => Vec::new(),
            },
            WalkDirection::Parents => self
                .graph
                .vertices()
                .filter(|v| v.points_to(id))
                .map(|v| &v.id)
                .collect(),
        };
        for neighbor in neighbors.into_iter().rev() {
            if !self.visited.contains(neighbor) {
                self.stack.push((neighbor.clone(), depth));
            }
        }
    }
}

impl<B> Iterator for DeepWalk<'_, B> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, depth)) = self.stack.pop() {
            if !self.visited.insert(id.clone()) {
                continue;
            }
            // Reaching the depth bound stops further expansion without
            // discarding ids already yielded.
            if self.depth_limit.is_none_or(|limit| depth < limit) {
                self.push_neighbors(id.as_str(), depth + 1);
            }
            return Some(id);
        }
        None
    }
}

impl<B> DiGraph<B> {
    /// Direct children of `id`, in adjacency order. Empty if `id` is
    /// absent; inert adjacency entries are skipped.
    pub fn children(&self, id: &str) -> Vec<&Vertex<B>> {
        match self.vertex(id) {
            Some(vertex) => vertex
                .adjacent_to
                .iter()
                .filter_map(|adj| self.vertex(adj.as_str()))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Direct parents of `id`: every vertex whose adjacency includes it,
    /// in store insertion order. Empty if `id` is absent.
    pub fn parents(&self, id: &str) -> Vec<&Vertex<B>> {
        if !self.has_vertex(id) {
            return Vec::new();
        }
        self.vertices().filter(|v| v.points_to(id)).collect()
    }

    /// Lazy DFS walk over ids transitively reachable from `id` through
    /// adjacency. `depth_limit` bounds the walk, measured from the first
    /// adjacency expansion (depth 1).
    pub fn deep_children(&self, id: &str, depth_limit: Option<usize>) -> DeepWalk<'_, B> {
        DeepWalk::new(self, id, WalkDirection::Children, depth_limit)
    }

    /// Lazy DFS walk over ids transitively reaching `id` through reverse
    /// adjacency. `depth_limit` as in [`deep_children`](Self::deep_children).
    pub fn deep_parents(&self, id: &str, depth_limit: Option<usize>) -> DeepWalk<'_, B> {
        DeepWalk::new(self, id, WalkDirection::Parents, depth_limit)
    }

    /// True iff a deep walk from `a` reaches `b` and a deep walk from `b`
    /// reaches `a`. Direct adjacency is checked first as the cheap path.
    pub fn mutual_path_exists(&self, a: &str, b: &str) -> bool {
        self.reaches(a, b) && self.reaches(b, a)
    }

    fn reaches(&self, from: &str, to: &str) -> bool {
        if self.has_edge(from, to) {
            return true;
        }
        self.deep_children(from, None).any(|id| id == to)
    }
}
