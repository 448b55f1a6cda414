//! Core mesh data structures.
//!
//! This module provides the indexed mesh store the fill algorithm operates
//! on, together with the conversions at the host boundary.
//!
//! # Overview
//!
//! The primary type is [`MeshStore`]: vertices carry a position, a marked
//! flag, and their incident edges; edges carry their endpoint pair and an
//! incident-face count; faces are ordered vertex loops. An edge with at
//! most one incident face is a boundary edge, and chains of boundary edges
//! are what the corner-fill algorithm walks and closes.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe index wrappers:
//! - [`VertexId`] - Identifies a vertex
//! - [`EdgeId`] - Identifies an edge
//! - [`FaceId`] - Identifies a face
//!
//! # Construction
//!
//! The host converts its representation in and out through the builder:
//!
//! ```
//! use quilt::mesh::{build_from_elements, to_elements};
//! use nalgebra::Point3;
//!
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let faces = vec![vec![0, 1, 2]];
//!
//! let mesh = build_from_elements(&positions, &[], &faces).unwrap();
//! let (out_positions, out_edges, out_faces) = to_elements(&mesh);
//! assert_eq!(out_faces, faces);
//! ```

mod builder;
mod index;
mod store;

pub use builder::{build_from_elements, to_elements};
pub use index::{EdgeId, FaceId, VertexId};
pub use store::{Edge, Face, MeshStore, Vertex};
