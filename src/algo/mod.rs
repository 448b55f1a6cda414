//! Boundary-closure algorithms.
//!
//! This module contains the corner-fill pipeline:
//!
//! - **Bridge discovery**: enumerating boundary chains between marked
//!   vertices ([`find_bridges`])
//! - **Face synthesis**: the apex and strip constructors the engine builds
//!   new geometry with ([`synth`])
//! - **Corner fill**: the iterative closure engine ([`corner_fill`])
//! - **Progress**: per-step progress reporting ([`Progress`])

pub mod bridges;
pub mod corner_fill;
pub mod progress;
pub mod synth;

pub use bridges::{find_bridges, Bridge};
pub use corner_fill::{
    corner_fill, corner_fill_with_progress, FillOptions, FillReport, FillStatus,
};
pub use progress::Progress;
