//! # Quilt
//!
//! An iterative corner-fill library for closing open mesh boundaries.
//!
//! Quilt takes a mesh with an open region bounded by chains of unfilled
//! edges, a set of user-marked corner vertices on that boundary, and
//! synthesizes new quads and triangles that close the gap inward until no
//! boundary chains remain.
//!
//! ## How it works
//!
//! The fill runs in steps. Each step:
//!
//! 1. Finds the **bridges**: boundary-edge chains connecting two marked
//!    vertices through unmarked interior vertices.
//! 2. Closes every **corner** (a vertex where exactly two bridges meet)
//!    with an apex quad, marking the new apex vertex.
//! 3. Closes every bridge whose endpoints were both replaced by fresh
//!    apexes with a strip of quads consuming its interior.
//!
//! The loop repeats against the mutated mesh until no bridges remain
//! ([`FillStatus::Converged`](algo::FillStatus::Converged)) or a step limit
//! is reached ([`FillStatus::Aborted`](algo::FillStatus::Aborted)). All
//! mutation is append-only, so an aborted run still leaves a valid mesh.
//!
//! ## Quick Start
//!
//! ```
//! use quilt::prelude::*;
//! use nalgebra::Point3;
//!
//! // An open square rim with all four corners marked.
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let edges = vec![[0, 1], [1, 2], [2, 3], [3, 0]];
//!
//! let mut mesh = build_from_elements(&positions, &edges, &[]).unwrap();
//! for v in mesh.vertex_ids().collect::<Vec<_>>() {
//!     mesh.mark(v, true);
//! }
//!
//! // Directly adjacent marked vertices leave nothing to fill.
//! let report = corner_fill(&mut mesh, &FillOptions::new()).unwrap();
//! assert_eq!(report.status, FillStatus::Converged);
//! assert_eq!(report.steps, 0);
//! ```
//!
//! ## Host integration
//!
//! The library operates on an in-process [`MeshStore`](mesh::MeshStore)
//! only. A host editor converts its persistent mesh representation into a
//! store with [`build_from_elements`](mesh::build_from_elements), applies
//! the user's selection via [`mark`](mesh::MeshStore::mark), runs
//! [`corner_fill`](algo::corner_fill), and writes the mutated elements back
//! with [`to_elements`](mesh::to_elements). Normal recalculation and
//! undo/redo stay on the host side.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use quilt::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::{
        corner_fill, corner_fill_with_progress, find_bridges, Bridge, FillOptions, FillReport,
        FillStatus, Progress,
    };
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{
        build_from_elements, to_elements, Edge, EdgeId, Face, FaceId, MeshStore, Vertex, VertexId,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;
