//! Bounded cycle detection with membership trimming and set-level dedup

use std::collections::{BTreeSet, HashSet};

use crate::graph::DiGraph;
use crate::model::VertexId;

impl<B> DiGraph<B> {
    /// Whether the graph contains at least one cycle, scanning without a
    /// depth bound.
    pub fn has_cycles(&self) -> bool {
        self.has_cycles_within(usize::MAX)
    }

    /// Early-exit cycle probe: stops scanning further edges on the first
    /// walk that revisits its root within `max_depth`.
    pub fn has_cycles_within(&self, max_depth: usize) -> bool {
        if max_depth == 0 {
            return false;
        }
        for root in self.vertices() {
            for adjacent in &root.adjacent_to {
                if !self.has_vertex(adjacent.as_str()) {
                    continue;
                }
                if self
                    .bounded_walk_to_root(root.id.as_str(), adjacent, max_depth)
                    .is_some()
                {
                    return true;
                }
            }
        }
        false
    }

    /// Exhaustive cycle search without a depth bound.
    pub fn find_cycles(&self) -> Vec<Vec<VertexId>> {
        self.find_cycles_within(usize::MAX)
    }

    /// Exhaustive, bounded cycle search.
    ///
    /// Every directed edge `(root, adjacent)` whose target resolves seeds a
    /// bounded walk from `adjacent`; a walk that arrives back at `root`
    /// yields a candidate cycle path. Candidates are trimmed to true cycle
    /// members — vertices with a confirmed mutual path to at least one
    /// other candidate member — then deduplicated by exact vertex-set
    /// equality, irrespective of order or rotation. Candidates whose sets
    /// differ even partially stay separate entries.
    pub fn find_cycles_within(&self, max_depth: usize) -> Vec<Vec<VertexId>> {
        let mut cycles: Vec<Vec<VertexId>> = Vec::new();
        let mut seen_sets: HashSet<BTreeSet<VertexId>> = HashSet::new();

        if max_depth == 0 {
            return cycles;
        }
        for root in self.vertices() {
            for adjacent in &root.adjacent_to {
                if !self.has_vertex(adjacent.as_str()) {
                    continue;
                }
                let Some(candidate) =
                    self.bounded_walk_to_root(root.id.as_str(), adjacent, max_depth)
                else {
                    continue;
                };
                let members = self.trim_to_cycle_members(&candidate);
                if members.is_empty() {
                    continue;
                }
                let set: BTreeSet<VertexId> = members.iter().cloned().collect();
                if seen_sets.insert(set) {
                    tracing::debug!(
                        "Confirmed cycle of {} vertices starting from {}",
                        members.len(),
                        root.id
                    );
                    cycles.push(members);
                }
            }
        }
        cycles
    }

    /// Whether the graph is free of cycles.
    pub fn is_acyclic(&self) -> bool {
        !self.has_cycles()
    }

    /// Bounded, visited-tracked DFS from `start`, accumulating ids in
    /// arrival order. Aborts the instant `root` is revisited — that
    /// revisit is the cycle signal — returning the walk prefix ending at
    /// it. `None` when the walk exhausts without reaching `root`.
    ///
    /// Depth accounting: reaching `root`'s adjacency already counts as
    /// depth 1, so `start` enters at depth 1 and expansion stops once a
    /// vertex sits at `max_depth`.
    fn bounded_walk_to_root(
        &self,
        root: &str,
        start: &VertexId,
        max_depth: usize,
    ) -> Option<Vec<VertexId>> {
        let mut path: Vec<VertexId> = Vec::new();
        let mut visited: HashSet<VertexId> = HashSet::new();
        let mut stack: Vec<(VertexId, usize)> = vec![(start.clone(), 1)];

        while let Some((id, depth)) = stack.pop() {
            if !visited.insert(id.clone()) {
                continue;
            }
            path.push(id.clone());
            if id == root {
                return Some(path);
            }
            if depth >= max_depth {
                continue;
            }
            let Some(vertex) = self.vertex(id.as_str()) else {
                continue;
            };
            for adj in vertex.adjacent_to.iter().rev() {
                if !visited.contains(adj) && self.has_vertex(adj.as_str()) {
                    stack.push((adj.clone(), depth + 1));
                }
            }
        }
        None
    }

    /// Keep a candidate vertex only if a mutual path exists between it and
    /// at least one other vertex of the candidate path; vertices merely
    /// visited en route, with no confirmed return path, are dropped.
    fn trim_to_cycle_members(&self, candidate: &[VertexId]) -> Vec<VertexId> {
        candidate
            .iter()
            .enumerate()
            .filter(|(i, id)| {
                candidate
                    .iter()
                    .enumerate()
                    .any(|(j, other)| *i != j && self.mutual_path_exists(id.as_str(), other.as_str()))
            })
            .map(|(_, id)| id.clone())
            .collect()
    }
}
