//! Mesh construction utilities.
//!
//! This module converts between the host's face-vertex representation and
//! the [`MeshStore`]. The host hands over vertex positions, loose edges
//! (the rim of the open region), and face loops before a fill run, and
//! reads the mutated elements back afterwards to persist them.

use nalgebra::Point3;

use super::index::VertexId;
use super::store::MeshStore;
use crate::error::{MeshError, Result};

/// Build a mesh store from host elements.
///
/// # Arguments
/// * `positions` - Vertex positions
/// * `edges` - Loose edges as index pairs; edges implied by faces need not
///   be listed, the store deduplicates either way
/// * `faces` - Face loops as index sequences (3 or more vertices each)
///
/// Marked flags are not part of the element lists; the host applies its
/// selection afterwards via [`MeshStore::mark`].
///
/// # Errors
///
/// Fails if any index is out of range or a face loop has fewer than three
/// distinct vertices. Validation runs before any element is inserted.
///
/// # Example
/// ```
/// use quilt::mesh::build_from_elements;
/// use nalgebra::Point3;
///
/// let positions = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
/// ];
/// let edges = vec![[0, 1], [1, 2], [2, 0]];
///
/// let mesh = build_from_elements(&positions, &edges, &[]).unwrap();
/// assert_eq!(mesh.num_vertices(), 3);
/// assert_eq!(mesh.num_edges(), 3);
/// ```
pub fn build_from_elements(
    positions: &[Point3<f64>],
    edges: &[[usize; 2]],
    faces: &[Vec<usize>],
) -> Result<MeshStore> {
    for (ei, edge) in edges.iter().enumerate() {
        for &vi in edge {
            if vi >= positions.len() {
                return Err(MeshError::InvalidEdgeIndex {
                    edge: ei,
                    vertex: vi,
                });
            }
        }
    }

    for (fi, face) in faces.iter().enumerate() {
        for &vi in face {
            if vi >= positions.len() {
                return Err(MeshError::InvalidVertexIndex {
                    face: fi,
                    vertex: vi,
                });
            }
        }
        let mut distinct = face.clone();
        distinct.sort_unstable();
        distinct.dedup();
        if distinct.len() < 3 {
            return Err(MeshError::DegenerateFace {
                distinct: distinct.len(),
            });
        }
    }

    let mut mesh = MeshStore::with_capacity(positions.len(), faces.len());

    let vertex_ids: Vec<VertexId> = positions.iter().map(|&pos| mesh.add_vertex(pos)).collect();

    for edge in edges {
        mesh.add_edge(vertex_ids[edge[0]], vertex_ids[edge[1]]);
    }

    for face in faces {
        let loop_vertices: Vec<VertexId> = face.iter().map(|&vi| vertex_ids[vi]).collect();
        mesh.add_face(&loop_vertices)?;
    }

    Ok(mesh)
}

/// Convert a mesh store back to host elements.
///
/// Returns `(positions, edges, faces)`. All edges are listed, including
/// ones implied by faces, so the host can rebuild its representation
/// without re-deriving adjacency.
pub fn to_elements(mesh: &MeshStore) -> (Vec<Point3<f64>>, Vec<[usize; 2]>, Vec<Vec<usize>>) {
    let positions: Vec<Point3<f64>> = mesh.vertex_ids().map(|v| *mesh.position(v)).collect();

    let edges: Vec<[usize; 2]> = mesh
        .edge_ids()
        .map(|e| {
            let ends = mesh.edge(e).ends;
            [ends[0].index(), ends[1].index()]
        })
        .collect();

    let faces: Vec<Vec<usize>> = mesh
        .face_ids()
        .map(|f| mesh.face_vertices(f).iter().map(|v| v.index()).collect())
        .collect();

    (positions, edges, faces)
}
