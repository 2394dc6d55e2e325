//! Target layout solver: turns a start point and a set of 3D targets into
//! separable marker paths.
//!
//! Overview
//! - Projects every target through the supplied [`CameraView`](crate::CameraView)
//!   and drops entries behind the camera.
//! - Recentres screen angles on the median target so ordering stays stable
//!   across the ±180° wrap, then sorts left to right.
//! - Chains neighbours into groups in one forward pass, pruning on both the
//!   neighbour gap and the total group span.
//! - Staggers each group's start phases by 3D distance rank and bends each
//!   member's path with a camera-relative control point; crowded narrow
//!   groups fall back to straight lines with hue-spaced colors.
//!
//! Modules
//! - [`params`] – tunables for grouping, zones, curvature and fallbacks.
//! - `meta` – per-target projection records local to one solve.
//! - `grouping` – dynamic re-centering and the sequential angular chain.
//! - `phase` – per-group start-offset assignment.
//! - `shaping` – zone multipliers, bend directions, high-density fallback.
//! - `pipeline` – the public [`Solver`] driving the stages.
//! - [`spread`] – the simple index-fanned baseline layout.

mod grouping;
mod meta;
pub mod params;
mod phase;
mod pipeline;
mod shaping;
pub mod spread;

pub use params::{SolverParams, SpreadParams};
pub use pipeline::Solver;
pub use spread::spread_paths;
