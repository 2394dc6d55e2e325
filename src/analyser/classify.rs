//! Combined-score classification of a user gesture against marker
//! trajectories.

use super::frechet::frechet_distance;
use super::params::AnalyserParams;
use super::speed::{average_speed, velocity_similarity};
use crate::diagnostics::{MatchReport, MatchTrace};
use crate::types::{CandidateScore, GesturePath, UnclassifiedReason, Verdict};
use log::debug;

/// Gesture analyser. Pure: identical inputs always produce the same verdict
/// and scores.
#[derive(Clone, Debug, Default)]
pub struct Analyser {
    params: AnalyserParams,
}

impl Analyser {
    pub fn new(params: AnalyserParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AnalyserParams {
        &self.params
    }

    /// Scores one candidate trajectory against the user's measured average
    /// speed and gesture shape. Returns `None` when any term degenerates to
    /// a non-finite value.
    fn score_candidate(
        &self,
        user: &GesturePath,
        user_avg_speed: f32,
        id: u32,
        candidate: &GesturePath,
    ) -> Option<CandidateScore> {
        let frechet = frechet_distance(&user.points, &candidate.points);

        // Normalizing by the endpoint diagonal makes the shape cost
        // scale-invariant; short diagonals skip the division.
        let diag = candidate.endpoint_span();
        let normalized_frechet = if diag > 1.0 { frechet / diag } else { frechet };

        let target_speed = average_speed(&candidate.points, &candidate.timestamps);
        let corrected = target_speed * self.params.perception_coefficient;
        let vsim =
            velocity_similarity(user_avg_speed, corrected, self.params.velocity_sensitivity);

        let combined = self.params.shape_weight * normalized_frechet
            + self.params.velocity_weight * (1.0 - vsim);
        if !combined.is_finite() {
            return None;
        }

        Some(CandidateScore {
            id,
            frechet,
            normalized_frechet,
            velocity_similarity: vsim,
            combined,
        })
    }

    /// Classifies the user gesture against all candidates: winner is the
    /// lowest finite combined score. Fails explicitly (never guesses) when
    /// the gesture is too short or every candidate was rejected.
    pub fn classify(
        &self,
        user: &GesturePath,
        candidates: &[(u32, GesturePath)],
    ) -> MatchReport {
        let user_avg_speed = average_speed(&user.points, &user.timestamps);
        let mut trace = MatchTrace {
            user_samples: user.len(),
            user_avg_speed,
            scores: Vec::new(),
            rejected: 0,
        };

        if user.len() < self.params.min_user_samples {
            debug!(
                "Analyser::classify too few user samples: {} < {}",
                user.len(),
                self.params.min_user_samples
            );
            return MatchReport {
                verdict: Verdict::Unclassified {
                    reason: UnclassifiedReason::TooFewUserSamples,
                },
                trace,
            };
        }
        if candidates.is_empty() {
            return MatchReport {
                verdict: Verdict::Unclassified {
                    reason: UnclassifiedReason::NoCandidates,
                },
                trace,
            };
        }

        for (id, candidate) in candidates {
            match self.score_candidate(user, user_avg_speed, *id, candidate) {
                Some(score) => {
                    debug!(
                        "Analyser::classify target {} frechet={:.2} nfrechet={:.3} vsim={:.3} combined={:.3}",
                        score.id,
                        score.frechet,
                        score.normalized_frechet,
                        score.velocity_similarity,
                        score.combined
                    );
                    trace.scores.push(score);
                }
                None => trace.rejected += 1,
            }
        }

        let winner = trace
            .scores
            .iter()
            .min_by(|a, b| {
                a.combined
                    .partial_cmp(&b.combined)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|s| s.id);

        let verdict = match winner {
            Some(target_id) => Verdict::Match { target_id },
            None => Verdict::Unclassified {
                reason: UnclassifiedReason::AllCandidatesRejected,
            },
        };
        MatchReport { verdict, trace }
    }
}
