//! Indexed mesh store for corner filling.
//!
//! This module provides the minimal mesh representation the fill algorithm
//! operates on: vertices with positions, marked flags, and incident-edge
//! lists; edges as unordered vertex pairs with incident-face counts; and
//! faces as ordered vertex loops.
//!
//! # Boundary Handling
//!
//! An edge is a **boundary edge** iff at most one face is incident to it.
//! The open region to be filled is bounded by chains of such edges; the
//! store answers the boundary queries the bridge walk needs in O(degree).
//!
//! # Mutation Model
//!
//! All mutation is append-only: vertices, edges, and faces are created but
//! never deleted, and a face loop is never changed after creation. Edges are
//! deduplicated by their endpoint pair, so faces created on either side of
//! the same pair share one edge record and its incidence count.

use std::collections::HashMap;

use nalgebra::Point3;

use super::index::{EdgeId, FaceId, VertexId};
use crate::error::{MeshError, Result};

/// A vertex in the mesh store.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// The 3D position of this vertex.
    pub position: Point3<f64>,

    /// Whether this vertex is an active corner endpoint for the fill
    /// algorithm ("selected" in host vocabulary).
    pub marked: bool,

    /// All edges incident to this vertex.
    pub(crate) edges: Vec<EdgeId>,
}

impl Vertex {
    /// Create a new unmarked vertex at the given position.
    pub fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            marked: false,
            edges: Vec::new(),
        }
    }
}

/// An edge in the mesh store: an unordered pair of vertices plus the number
/// of faces incident to it.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    /// The two endpoint vertices.
    pub ends: [VertexId; 2],

    /// Number of incident faces (0, 1, or more).
    pub faces: u32,
}

impl Edge {
    /// Check if this edge is on the boundary (at most one incident face).
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.faces <= 1
    }
}

/// A face in the mesh store: an ordered cyclic loop of at least three
/// vertices. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct Face {
    /// The boundary loop of this face, in winding order.
    pub vertices: Vec<VertexId>,
}

/// The indexed mesh store.
///
/// Owns all vertex, edge, and face records by index. Everything else in the
/// crate operates on the mesh only through this interface.
#[derive(Debug, Clone, Default)]
pub struct MeshStore {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    faces: Vec<Face>,

    /// Lookup from sorted endpoint pair to edge id, for deduplication.
    edge_map: HashMap<(u32, u32), EdgeId>,
}

/// Canonical lookup key for an unordered vertex pair.
#[inline]
fn edge_key(a: VertexId, b: VertexId) -> (u32, u32) {
    let (a, b) = (a.index() as u32, b.index() as u32);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl MeshStore {
    /// Create a new empty mesh store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh store with pre-allocated capacity.
    pub fn with_capacity(num_vertices: usize, num_faces: usize) -> Self {
        // A quad-dominant fill creates roughly one edge per vertex plus one
        // per face ring; over-reserving slightly avoids rehashing mid-fill.
        let num_edges = num_vertices + num_faces * 2;

        Self {
            vertices: Vec::with_capacity(num_vertices),
            edges: Vec::with_capacity(num_edges),
            faces: Vec::with_capacity(num_faces),
            edge_map: HashMap::with_capacity(num_edges),
        }
    }

    // ==================== Accessors ====================

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Get a vertex by id.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    /// Get an edge by id.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// Get a face by id.
    #[inline]
    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.index()]
    }

    /// Get the position of a vertex.
    #[inline]
    pub fn position(&self, v: VertexId) -> &Point3<f64> {
        &self.vertex(v).position
    }

    /// Get the boundary loop of a face, in winding order.
    #[inline]
    pub fn face_vertices(&self, f: FaceId) -> &[VertexId] {
        &self.face(f).vertices
    }

    // ==================== Marking ====================

    /// Set the marked flag of a vertex.
    #[inline]
    pub fn mark(&mut self, v: VertexId, value: bool) {
        self.vertices[v.index()].marked = value;
    }

    /// Check whether a vertex is marked.
    #[inline]
    pub fn is_marked(&self, v: VertexId) -> bool {
        self.vertex(v).marked
    }

    // ==================== Topology Queries ====================

    /// Check if an edge is on the boundary (at most one incident face).
    #[inline]
    pub fn is_boundary_edge(&self, e: EdgeId) -> bool {
        self.edge(e).is_boundary()
    }

    /// Get the endpoint of an edge opposite to `v`.
    ///
    /// `v` must be one of the edge's endpoints.
    #[inline]
    pub fn other_end(&self, e: EdgeId, v: VertexId) -> VertexId {
        let ends = self.edge(e).ends;
        if ends[0] == v {
            ends[1]
        } else {
            ends[0]
        }
    }

    /// Look up the edge between two vertices, if one exists.
    #[inline]
    pub fn edge_between(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.edge_map.get(&edge_key(a, b)).copied()
    }

    /// Iterate over the edges incident to a vertex.
    pub fn vertex_edges(&self, v: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.vertex(v).edges.iter().copied()
    }

    /// Iterate over the boundary edges incident to a vertex.
    pub fn boundary_edges_of(&self, v: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.vertex_edges(v).filter(|&e| self.is_boundary_edge(e))
    }

    /// Iterate over vertices joined to `v` by a boundary edge.
    pub fn boundary_neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.boundary_edges_of(v).map(move |e| self.other_end(e, v))
    }

    // ==================== Iteration ====================

    /// Iterate over all vertex ids.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Iterate over all marked vertices.
    pub fn marked_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertex_ids().filter(|&v| self.is_marked(v))
    }

    /// Iterate over all edge ids.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId::new)
    }

    /// Iterate over all face ids.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        (0..self.faces.len()).map(FaceId::new)
    }

    // ==================== Construction ====================

    /// Add a new unmarked vertex and return its id.
    pub fn add_vertex(&mut self, position: Point3<f64>) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(position));
        id
    }

    /// Add an edge between two vertices, or return the existing one.
    ///
    /// The edge starts with no incident faces; the host's open-region rim
    /// arrives through this path before any face touches it.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> EdgeId {
        let key = edge_key(a, b);
        if let Some(&e) = self.edge_map.get(&key) {
            return e;
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(Edge {
            ends: [a, b],
            faces: 0,
        });
        self.edge_map.insert(key, id);
        self.vertices[a.index()].edges.push(id);
        self.vertices[b.index()].edges.push(id);
        id
    }

    /// Add a face with the given boundary loop.
    ///
    /// Creates any missing edges along the loop, increments the incident
    /// face count of every loop edge, and appends the face.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::DegenerateFace`] if the loop has fewer than
    /// three distinct vertices, and [`MeshError::InvalidVertexIndex`] if a
    /// vertex id is out of range.
    pub fn add_face(&mut self, loop_vertices: &[VertexId]) -> Result<FaceId> {
        for &v in loop_vertices {
            if v.index() >= self.vertices.len() {
                return Err(MeshError::InvalidVertexIndex {
                    face: self.faces.len(),
                    vertex: v.index(),
                });
            }
        }

        let mut distinct: Vec<VertexId> = loop_vertices.to_vec();
        distinct.sort_unstable();
        distinct.dedup();
        if distinct.len() < 3 {
            return Err(MeshError::DegenerateFace {
                distinct: distinct.len(),
            });
        }

        for i in 0..loop_vertices.len() {
            let a = loop_vertices[i];
            let b = loop_vertices[(i + 1) % loop_vertices.len()];
            let e = self.add_edge(a, b);
            self.edges[e.index()].faces += 1;
        }

        let id = FaceId::new(self.faces.len());
        self.faces.push(Face {
            vertices: loop_vertices.to_vec(),
        });
        Ok(id)
    }

    // ==================== Validation ====================

    /// Check that the store's cross-references are consistent.
    pub fn is_valid(&self) -> bool {
        // Edge endpoints in range and registered with both vertices
        for (ei, edge) in self.edges.iter().enumerate() {
            for &v in &edge.ends {
                if v.index() >= self.vertices.len() {
                    return false;
                }
                if !self.vertices[v.index()].edges.contains(&EdgeId::new(ei)) {
                    return false;
                }
            }
        }

        // Every consecutive face-loop pair shares a recorded edge with at
        // least one incident face
        for face in &self.faces {
            for i in 0..face.vertices.len() {
                let a = face.vertices[i];
                let b = face.vertices[(i + 1) % face.vertices.len()];
                match self.edge_between(a, b) {
                    Some(e) => {
                        if self.edge(e).faces == 0 {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_store() -> (MeshStore, [VertexId; 4]) {
        let mut mesh = MeshStore::new();
        let v0 = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let v1 = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        let v2 = mesh.add_vertex(Point3::new(1.0, 1.0, 0.0));
        let v3 = mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
        (mesh, [v0, v1, v2, v3])
    }

    #[test]
    fn test_empty_store() {
        let mesh = MeshStore::new();
        assert_eq!(mesh.num_vertices(), 0);
        assert_eq!(mesh.num_edges(), 0);
        assert_eq!(mesh.num_faces(), 0);
        assert!(mesh.is_valid());
    }

    #[test]
    fn test_add_vertex_unmarked() {
        let mut mesh = MeshStore::new();
        let v = mesh.add_vertex(Point3::new(1.0, 2.0, 3.0));
        assert_eq!(v.index(), 0);
        assert!(!mesh.is_marked(v));
        assert_eq!(*mesh.position(v), Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_edge_dedup() {
        let (mut mesh, [v0, v1, ..]) = quad_store();
        let e0 = mesh.add_edge(v0, v1);
        let e1 = mesh.add_edge(v1, v0);
        assert_eq!(e0, e1);
        assert_eq!(mesh.num_edges(), 1);
        assert_eq!(mesh.edge_between(v0, v1), Some(e0));
    }

    #[test]
    fn test_add_face_creates_shared_edges() {
        let (mut mesh, [v0, v1, v2, v3]) = quad_store();
        mesh.add_face(&[v0, v1, v2]).unwrap();
        mesh.add_face(&[v0, v2, v3]).unwrap();

        // 5 edges total: the diagonal v0-v2 is shared
        assert_eq!(mesh.num_edges(), 5);
        let diagonal = mesh.edge_between(v0, v2).unwrap();
        assert_eq!(mesh.edge(diagonal).faces, 2);
        assert!(!mesh.is_boundary_edge(diagonal));

        // The four rim edges each have one face
        for (a, b) in [(v0, v1), (v1, v2), (v2, v3), (v3, v0)] {
            let e = mesh.edge_between(a, b).unwrap();
            assert_eq!(mesh.edge(e).faces, 1);
            assert!(mesh.is_boundary_edge(e));
        }
        assert!(mesh.is_valid());
    }

    #[test]
    fn test_face_over_existing_edge() {
        let (mut mesh, [v0, v1, v2, _]) = quad_store();
        let e = mesh.add_edge(v0, v1);
        assert_eq!(mesh.edge(e).faces, 0);

        mesh.add_face(&[v0, v1, v2]).unwrap();
        // The pre-existing edge was reused, not duplicated
        assert_eq!(mesh.num_edges(), 3);
        assert_eq!(mesh.edge(e).faces, 1);
    }

    #[test]
    fn test_degenerate_face_rejected() {
        let (mut mesh, [v0, v1, ..]) = quad_store();
        let err = mesh.add_face(&[v0, v1, v0]).unwrap_err();
        assert!(matches!(err, MeshError::DegenerateFace { distinct: 2 }));
        assert_eq!(mesh.num_faces(), 0);
    }

    #[test]
    fn test_invalid_vertex_rejected() {
        let (mut mesh, [v0, v1, ..]) = quad_store();
        let bogus = VertexId::new(99);
        let err = mesh.add_face(&[v0, v1, bogus]).unwrap_err();
        assert!(matches!(
            err,
            MeshError::InvalidVertexIndex { vertex: 99, .. }
        ));
    }

    #[test]
    fn test_boundary_queries() {
        let (mut mesh, [v0, v1, v2, v3]) = quad_store();
        mesh.add_face(&[v0, v1, v2]).unwrap();
        mesh.add_face(&[v0, v2, v3]).unwrap();

        // v0 sees rim edges to v1 and v3; the diagonal is interior
        let neighbors: Vec<VertexId> = mesh.boundary_neighbors(v0).collect();
        assert_eq!(neighbors.len(), 2);
        assert!(neighbors.contains(&v1));
        assert!(neighbors.contains(&v3));
    }

    #[test]
    fn test_marking() {
        let (mut mesh, [v0, _, v2, _]) = quad_store();
        mesh.mark(v0, true);
        mesh.mark(v2, true);
        assert!(mesh.is_marked(v0));
        assert!(!mesh.is_marked(VertexId::new(1)));

        let marked: Vec<VertexId> = mesh.marked_vertices().collect();
        assert_eq!(marked, vec![v0, v2]);

        mesh.mark(v0, false);
        assert!(!mesh.is_marked(v0));
    }

    #[test]
    fn test_other_end() {
        let (mut mesh, [v0, v1, ..]) = quad_store();
        let e = mesh.add_edge(v0, v1);
        assert_eq!(mesh.other_end(e, v0), v1);
        assert_eq!(mesh.other_end(e, v1), v0);
    }
}
