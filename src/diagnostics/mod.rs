//! Structured diagnostics returned next to solver and analyser results.
//!
//! `SolveReport` is the entry point for layout runs, `MatchReport` for
//! classification. Both serialize to JSON for offline inspection; the demo
//! binary dumps them directly.

pub mod analyser;
pub mod solver;
pub mod timing;

pub use analyser::{MatchReport, MatchTrace};
pub use solver::{GroupDescriptor, InputDescriptor, SolveReport, SolveTrace};
pub use timing::{StageTiming, TimingBreakdown};
