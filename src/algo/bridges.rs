//! Bridge discovery.
//!
//! A **bridge** is a chain of boundary edges connecting two marked vertices
//! through unmarked interior vertices. Bridges are the unit of work for the
//! corner-fill engine: they are recomputed from scratch against the current
//! mesh at the start of every step and never persisted across steps.
//!
//! # Algorithm
//!
//! From every marked vertex, each boundary edge to an unmarked neighbor
//! starts a candidate chain. The chain grows greedily: if exactly one
//! boundary edge leaves the current tip towards a vertex not already in the
//! chain, it is taken; a dead end or a fork (zero or several continuations)
//! discards the candidate silently. Growth succeeds the moment it reaches a
//! marked vertex. This greedy single-successor walk is exact on manifold
//! boundary loops, where interior boundary vertices have degree two, and
//! refuses to guess on non-manifold forks.

use std::collections::HashSet;

use crate::mesh::{MeshStore, VertexId};

/// An ordered chain of vertices joined by boundary edges, with marked
/// endpoints and unmarked interior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bridge {
    vertices: Vec<VertexId>,
}

impl Bridge {
    pub(crate) fn new(vertices: Vec<VertexId>) -> Self {
        debug_assert!(vertices.len() >= 2);
        Self { vertices }
    }

    /// The full vertex chain, endpoints included.
    #[inline]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Number of vertices in the chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the chain is empty. Always false for discovered bridges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The first endpoint.
    #[inline]
    pub fn first(&self) -> VertexId {
        self.vertices[0]
    }

    /// The last endpoint.
    #[inline]
    pub fn last(&self) -> VertexId {
        self.vertices[self.vertices.len() - 1]
    }

    /// The interior vertices (everything but the two endpoints).
    #[inline]
    pub fn interior(&self) -> &[VertexId] {
        &self.vertices[1..self.vertices.len() - 1]
    }

    /// The chain neighbor of an endpoint: the adjacent interior vertex, or
    /// the opposite endpoint if the chain has no interior.
    ///
    /// `endpoint` must be [`first`](Self::first) or [`last`](Self::last).
    pub fn neighbor_of(&self, endpoint: VertexId) -> VertexId {
        if endpoint == self.first() {
            self.vertices[1]
        } else {
            debug_assert_eq!(endpoint, self.last());
            self.vertices[self.vertices.len() - 2]
        }
    }

    /// Replace `old` with `new` wherever it appears as an endpoint.
    pub(crate) fn replace_endpoint(&mut self, old: VertexId, new: VertexId) {
        let last = self.vertices.len() - 1;
        if self.vertices[0] == old {
            self.vertices[0] = new;
        }
        if self.vertices[last] == old {
            self.vertices[last] = new;
        }
    }

    /// Orientation-independent identity: a chain and its reverse compare
    /// equal under this key.
    fn canonical_key(&self) -> Vec<VertexId> {
        if self.first() <= self.last() {
            self.vertices.clone()
        } else {
            self.vertices.iter().rev().copied().collect()
        }
    }
}

/// Find all bridges in the mesh's current boundary.
///
/// Returns one bridge per chain regardless of which endpoint the walk
/// started from. Chains of three or fewer vertices (fewer than two interior
/// vertices) are dropped: they are too short to subdivide and filling them
/// would make no progress. Candidates that dead-end, fork, or exceed the
/// vertex-count growth cap are discarded without signaling.
pub fn find_bridges(mesh: &MeshStore) -> Vec<Bridge> {
    let mut bridges = Vec::new();
    let mut seen: HashSet<Vec<VertexId>> = HashSet::new();
    let cap = mesh.num_vertices();

    for v in mesh.marked_vertices() {
        for u in mesh.boundary_neighbors(v) {
            // An edge directly joining two marked vertices is a degenerate
            // zero-length adjacency, not a bridge start.
            if mesh.is_marked(u) {
                continue;
            }

            let Some(bridge) = grow_bridge(mesh, v, u, cap) else {
                continue;
            };
            if bridge.len() <= 3 {
                continue;
            }
            if seen.insert(bridge.canonical_key()) {
                bridges.push(bridge);
            }
        }
    }

    bridges
}

/// Grow a candidate chain `[start, next]` until it reaches a marked vertex.
///
/// Returns `None` on a dead end, a fork, or when growth exceeds `cap`
/// appended vertices (a malformed or cyclic boundary).
fn grow_bridge(mesh: &MeshStore, start: VertexId, next: VertexId, cap: usize) -> Option<Bridge> {
    let mut chain = vec![start, next];
    let mut tip = next;

    loop {
        if chain.len() > cap {
            return None;
        }

        let mut successor = None;
        for n in mesh.boundary_neighbors(tip) {
            if chain.contains(&n) {
                continue;
            }
            if successor.is_some() {
                // Fork: refuse to choose among ambiguous continuations
                return None;
            }
            successor = Some(n);
        }

        let n = successor?;
        chain.push(n);
        if mesh.is_marked(n) {
            return Some(Bridge::new(chain));
        }
        tip = n;
    }
}
