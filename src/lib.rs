#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod analyser;
pub mod camera;
pub mod config;
pub mod diagnostics;
pub mod session;
pub mod solver;
pub mod types;

// Leaf helpers – public, but considered unstable internals.
pub mod angle;
pub mod bezier;

// --- High-level re-exports -------------------------------------------------

// Main entry points: solver + analyser and their results.
pub use crate::analyser::{Analyser, AnalyserParams};
pub use crate::solver::{Solver, SolverParams};
pub use crate::types::{GesturePath, TargetPath, TargetSample, Verdict};

// Camera abstraction consumed by the solver.
pub use crate::camera::{CameraView, Projection};

// High-level diagnostics returned next to results.
pub use crate::diagnostics::{MatchReport, SolveReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use pursuit_core::prelude::*;
/// use nalgebra::Vector3;
///
/// # fn main() {
/// let camera = CameraView::look_at(
///     Vector3::zeros(),
///     Vector3::new(0.0, 0.0, 10.0),
///     Vector3::new(0.0, 1.0, 0.0),
///     60.0,
///     1920.0,
///     1080.0,
/// );
/// let targets = vec![TargetSample { id: 0, world_pos: Vector3::new(1.0, 0.5, 6.0) }];
///
/// let solver = Solver::new(SolverParams::default());
/// let paths = solver.solve(Vector3::zeros(), &targets, &camera);
/// println!("paths={} phase0={:.2}", paths.len(), paths[0].phase);
/// # }
/// ```
pub mod prelude {
    pub use crate::analyser::{Analyser, AnalyserParams};
    pub use crate::camera::CameraView;
    pub use crate::session::PursuitSession;
    pub use crate::solver::{Solver, SolverParams};
    pub use crate::types::{GesturePath, TargetPath, TargetSample, Verdict};
}
