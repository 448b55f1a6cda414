//! Face synthesis primitives.
//!
//! Two low-level constructors used by the corner-fill engine: an apex quad
//! that closes a corner between two adjacent bridge edges, and a quad strip
//! that consumes a whole bridge's interior.
//!
//! The offset formulas here are fixed contracts: the parallelogram apex and
//! the averaged closing vector reproduce the behavior the fill was tuned
//! for, and downstream steps depend on where they place new vertices.

use crate::error::Result;
use crate::mesh::{FaceId, MeshStore, VertexId};

use super::bridges::Bridge;

/// Synthesize an apex vertex and quad at a corner.
///
/// `c` is the corner vertex, `n1` and `n2` its chain neighbors on the two
/// incident bridges. The apex completes the parallelogram spanned by the
/// two incoming directions:
///
/// ```text
/// apex = c + (n1 - c) + (n2 - c)
/// ```
///
/// The face loop is `(c, n2, apex, n1)`; the `n1`/`n2` swap relative to the
/// naive order keeps the winding consistent with the surrounding boundary
/// orientation. The returned apex is unmarked; the engine marks it and
/// substitutes it for `c` in the bridge set.
pub fn apex_face(
    mesh: &mut MeshStore,
    c: VertexId,
    n1: VertexId,
    n2: VertexId,
) -> Result<(VertexId, FaceId)> {
    let pc = *mesh.position(c);
    let p1 = *mesh.position(n1);
    let p2 = *mesh.position(n2);

    let apex = mesh.add_vertex(pc + (p1 - pc) + (p2 - pc));
    let face = mesh.add_face(&[c, n2, apex, n1])?;
    Ok((apex, face))
}

/// Synthesize the quad strip closing a bridge's interior.
///
/// Both bridge endpoints must already be corner-processed apexes. The strip
/// advances two interior vertices per face: each pair `(a, b)` yields a
/// quad `(prev_apex, a, b, next_apex)` where `next_apex` is a new vertex at
/// `b` plus the strip displacement, except on the final pair where it is
/// the bridge's terminal vertex. An odd interior count leaves a single
/// trailing vertex, closed with a triangle against the terminal vertex.
///
/// The displacement is the average of the boundary closing vectors at the
/// bridge's two ends:
///
/// ```text
/// d = ((v0 - v1) + (vk - v[k-1])) / 2
/// ```
///
/// which approximates a consistent inward offset along the whole strip.
///
/// Returns `(faces_created, vertices_created)`.
pub fn bridge_strip(mesh: &mut MeshStore, bridge: &Bridge) -> Result<(usize, usize)> {
    let chain = bridge.vertices();
    let k = chain.len() - 1;
    let (v0, vk) = (chain[0], chain[k]);

    let p0 = *mesh.position(v0);
    let p1 = *mesh.position(chain[1]);
    let pk = *mesh.position(vk);
    let pk1 = *mesh.position(chain[k - 1]);
    let displacement = ((p0 - p1) + (pk - pk1)) / 2.0;

    let interior = &chain[1..k];
    let mut prev_apex = v0;
    let mut faces_created = 0;
    let mut vertices_created = 0;

    let mut i = 0;
    while i < interior.len() {
        if i + 1 < interior.len() {
            let (a, b) = (interior[i], interior[i + 1]);
            let next_apex = if i + 2 >= interior.len() {
                vk
            } else {
                vertices_created += 1;
                let pos = *mesh.position(b) + displacement;
                mesh.add_vertex(pos)
            };
            mesh.add_face(&[prev_apex, a, b, next_apex])?;
            prev_apex = next_apex;
            faces_created += 1;
            i += 2;
        } else {
            // Trailing odd vertex: same rule with next_apex = vk, no new vertex
            mesh.add_face(&[prev_apex, interior[i], vk])?;
            faces_created += 1;
            i += 1;
        }
    }

    Ok((faces_created, vertices_created))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn corner_mesh() -> (MeshStore, VertexId, VertexId, VertexId) {
        let mut mesh = MeshStore::new();
        let c = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let n1 = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        let n2 = mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
        mesh.add_edge(c, n1);
        mesh.add_edge(c, n2);
        (mesh, c, n1, n2)
    }

    fn strip_mesh(len: usize) -> (MeshStore, Bridge) {
        let mut mesh = MeshStore::new();
        let ids: Vec<VertexId> = (0..len)
            .map(|i| mesh.add_vertex(Point3::new(i as f64, 0.0, 0.0)))
            .collect();
        for pair in ids.windows(2) {
            mesh.add_edge(pair[0], pair[1]);
        }
        (mesh, Bridge::new(ids))
    }

    #[test]
    fn test_apex_position_is_parallelogram() {
        let (mut mesh, c, n1, n2) = corner_mesh();
        let (apex, _) = apex_face(&mut mesh, c, n1, n2).unwrap();
        assert_eq!(*mesh.position(apex), Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_apex_face_loop_order() {
        let (mut mesh, c, n1, n2) = corner_mesh();
        let (apex, face) = apex_face(&mut mesh, c, n1, n2).unwrap();
        assert_eq!(mesh.face_vertices(face), &[c, n2, apex, n1]);
    }

    #[test]
    fn test_apex_unmarked() {
        let (mut mesh, c, n1, n2) = corner_mesh();
        mesh.mark(c, true);
        let (apex, _) = apex_face(&mut mesh, c, n1, n2).unwrap();
        assert!(!mesh.is_marked(apex));
    }

    #[test]
    fn test_strip_even_interior() {
        // [v0, u1, u2, u3, u4, v5]: pairs (u1,u2) and (u3,u4)
        let (mut mesh, bridge) = strip_mesh(6);
        let (faces, vertices) = bridge_strip(&mut mesh, &bridge).unwrap();

        assert_eq!(faces, 2);
        assert_eq!(vertices, 1);
        // Final quad closes against the terminal vertex
        let last = mesh.face_vertices(FaceId::new(1));
        assert_eq!(last[3], bridge.last());
    }

    #[test]
    fn test_strip_odd_interior() {
        // [v0, u1, u2, u3, v4]: quad for (u1,u2), triangle for u3
        let (mut mesh, bridge) = strip_mesh(5);
        let (faces, vertices) = bridge_strip(&mut mesh, &bridge).unwrap();

        assert_eq!(faces, 2);
        assert_eq!(vertices, 1);
        let tail = mesh.face_vertices(FaceId::new(1));
        assert_eq!(tail.len(), 3);
        assert_eq!(tail[2], bridge.last());
    }

    #[test]
    fn test_strip_minimal_interior() {
        // [v0, u1, u2, v3]: a single quad, no synthesized vertex
        let (mut mesh, bridge) = strip_mesh(4);
        let (faces, vertices) = bridge_strip(&mut mesh, &bridge).unwrap();
        assert_eq!(faces, 1);
        assert_eq!(vertices, 0);
    }

    #[test]
    fn test_strip_displacement() {
        // Collinear chain along x: closing vectors are (-1,0,0) at the
        // start and (1,0,0) at the end, so the displacement averages to
        // zero and synthesized vertices land on their pair's second vertex.
        let (mut mesh, bridge) = strip_mesh(6);
        let before = mesh.num_vertices();
        bridge_strip(&mut mesh, &bridge).unwrap();

        let synthesized = VertexId::new(before);
        assert_eq!(*mesh.position(synthesized), Point3::new(2.0, 0.0, 0.0));
    }
}
