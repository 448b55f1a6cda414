//! Error types for quilt.
//!
//! This module defines all error types used throughout the library.
//!
//! Note that running out of fill steps is *not* an error: the engine reports
//! it as [`FillStatus::Aborted`](crate::algo::FillStatus::Aborted) with the
//! partially filled mesh retained, because every mutation is append-only and
//! the mesh stays structurally valid.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh construction or corner filling.
#[derive(Error, Debug)]
pub enum MeshError {
    /// A face references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index in the input list.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// An edge references an invalid vertex index.
    #[error("edge {edge} references invalid vertex index {vertex}")]
    InvalidEdgeIndex {
        /// The edge index in the input list.
        edge: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face loop has fewer than three distinct vertices.
    #[error("degenerate face: loop has {distinct} distinct vertices (minimum 3)")]
    DegenerateFace {
        /// Number of distinct vertices in the offending loop.
        distinct: usize,
    },

    /// A corner's two incident bridges are in fact one closed bridge whose
    /// endpoints both coincide with the corner. Apex synthesis has no
    /// well-defined pairing for this configuration, so the fill run aborts.
    #[error("degenerate bridge loop: vertex {vertex} is both endpoints of a single bridge")]
    DegenerateLoop {
        /// The corner vertex index.
        vertex: usize,
    },
}
