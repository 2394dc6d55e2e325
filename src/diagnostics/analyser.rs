//! Per-candidate score breakdown for one classification request.

use crate::types::{CandidateScore, Verdict};
use serde::Serialize;

/// Everything the analyser measured while classifying one gesture.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTrace {
    pub user_samples: usize,
    /// Mean per-step speed of the user's gesture, pixels per second.
    pub user_avg_speed: f32,
    /// Scores for every candidate that produced a finite combined score, in
    /// input order.
    pub scores: Vec<CandidateScore>,
    /// Candidates dropped for producing NaN/infinite scores.
    pub rejected: usize,
}

/// Outcome of [`Analyser::classify`](crate::Analyser): the verdict plus the
/// full diagnostic trace for observability by the caller.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub verdict: Verdict,
    pub trace: MatchTrace,
}
