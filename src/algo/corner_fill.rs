//! Iterative corner-fill closure engine.
//!
//! The engine drives the fill loop: it queries the current bridge set,
//! synthesizes an apex face at every corner vertex with exactly two incident
//! bridges, closes each bridge whose endpoints were both replaced this step
//! with a quad strip, and repeats against the mutated mesh until no bridges
//! remain or the step limit is hit.
//!
//! All mutation is append-only, so an aborted run leaves a structurally
//! valid, partially filled mesh.

use std::collections::{HashMap, HashSet};

use crate::error::{MeshError, Result};
use crate::mesh::{MeshStore, VertexId};

use super::bridges::find_bridges;
use super::progress::Progress;
use super::synth::{apex_face, bridge_strip};

// ==================== Options ====================

/// Options for the corner-fill engine.
#[derive(Debug, Clone)]
pub struct FillOptions {
    /// Maximum number of fill steps before the run is aborted.
    ///
    /// The limit is the engine's only non-convergence guard: a boundary
    /// configuration that never reduces its bridges would otherwise loop
    /// forever.
    pub max_steps: usize,
}

impl FillOptions {
    /// Create options with the default step limit.
    pub fn new() -> Self {
        Self { max_steps: 100 }
    }

    /// Set the maximum number of fill steps.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }
}

impl Default for FillOptions {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== Report ====================

/// Terminal state of a fill run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillStatus {
    /// No bridges remain; the boundary is closed as far as the algorithm
    /// can close it.
    Converged,
    /// The step limit was reached before the bridge set emptied. The mesh
    /// keeps every face synthesized so far.
    Aborted,
}

/// Summary of a completed fill run.
#[derive(Debug, Clone)]
pub struct FillReport {
    /// How the run terminated.
    pub status: FillStatus,
    /// Number of fill steps executed.
    pub steps: usize,
    /// Total faces synthesized across all steps.
    pub faces_created: usize,
    /// Total vertices synthesized across all steps.
    pub vertices_created: usize,
}

impl std::fmt::Display for FillReport {
    // Single status line for host-facing messaging
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let outcome = match self.status {
            FillStatus::Converged => "converged after",
            FillStatus::Aborted => "aborted at step limit",
        };
        write!(
            f,
            "{} {} step(s): {} face(s), {} vertex(es) created",
            outcome, self.steps, self.faces_created, self.vertices_created
        )
    }
}

// ==================== Engine ====================

/// Run the corner-fill engine to convergence or the step limit.
///
/// Starting from the mesh's marked vertices, each step finds the current
/// bridges, closes every corner with exactly two incident bridges via an
/// apex face, then closes every bridge whose endpoints were both replaced
/// by fresh apexes with a quad strip. New apexes are marked, so the next
/// step's bridge search picks up from the advanced front.
///
/// Corners incident to fewer or more than two bridges are skipped for the
/// step; they become eligible once neighboring bridges resolve.
///
/// Reaching the step limit is not an error: the run returns
/// [`FillStatus::Aborted`] with the partially filled mesh retained.
pub fn corner_fill(mesh: &mut MeshStore, options: &FillOptions) -> Result<FillReport> {
    corner_fill_internal(mesh, options, None)
}

/// Run the corner-fill engine with progress reporting.
///
/// See [`corner_fill`] for algorithm details. The progress callback is
/// invoked once per step, never mid-step.
pub fn corner_fill_with_progress(
    mesh: &mut MeshStore,
    options: &FillOptions,
    progress: &Progress,
) -> Result<FillReport> {
    corner_fill_internal(mesh, options, Some(progress))
}

fn corner_fill_internal(
    mesh: &mut MeshStore,
    options: &FillOptions,
    progress: Option<&Progress>,
) -> Result<FillReport> {
    let mut steps = 0;
    let mut faces_created = 0;
    let mut vertices_created = 0;

    loop {
        let mut bridges = find_bridges(mesh);
        if bridges.is_empty() {
            return Ok(FillReport {
                status: FillStatus::Converged,
                steps,
                faces_created,
                vertices_created,
            });
        }
        if steps >= options.max_steps {
            return Ok(FillReport {
                status: FillStatus::Aborted,
                steps,
                faces_created,
                vertices_created,
            });
        }
        if let Some(progress) = progress {
            progress.report(steps, options.max_steps, "corner fill");
        }

        // Endpoint incidence over this step's bridge snapshot. Replacements
        // below mutate the bridge list in place; the incidence map is never
        // rebuilt mid-step.
        let mut incidence: HashMap<VertexId, Vec<usize>> = HashMap::new();
        for (i, bridge) in bridges.iter().enumerate() {
            incidence.entry(bridge.first()).or_default().push(i);
            incidence.entry(bridge.last()).or_default().push(i);
        }

        // Only corners with exactly two incident bridges are eligible this
        // step. Sorted by vertex index so the synthesis order (and thus new
        // vertex numbering) is deterministic.
        let mut corners: Vec<VertexId> = incidence
            .iter()
            .filter(|(_, bs)| bs.len() == 2)
            .map(|(&v, _)| v)
            .collect();
        corners.sort_unstable_by_key(|v| v.index());

        let mut apexes: HashSet<VertexId> = HashSet::new();
        for c in corners {
            let &[b1, b2] = incidence[&c].as_slice() else {
                unreachable!("corner filter guarantees two incidences");
            };
            if b1 == b2 {
                // A single bridge closed on itself; there is no second
                // neighbor to pair the apex against.
                return Err(MeshError::DegenerateLoop { vertex: c.index() });
            }
            let n1 = bridges[b1].neighbor_of(c);
            let n2 = bridges[b2].neighbor_of(c);

            let (apex, _) = apex_face(mesh, c, n1, n2)?;
            mesh.mark(apex, true);
            bridges[b1].replace_endpoint(c, apex);
            bridges[b2].replace_endpoint(c, apex);
            apexes.insert(apex);
            faces_created += 1;
            vertices_created += 1;
        }

        // A bridge is ready for strip synthesis once both its endpoints are
        // apexes from this step.
        for bridge in &bridges {
            if apexes.contains(&bridge.first()) && apexes.contains(&bridge.last()) {
                let (faces, vertices) = bridge_strip(mesh, bridge)?;
                faces_created += faces;
                vertices_created += vertices;
            }
        }

        steps += 1;
    }
}
