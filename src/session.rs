//! Pursuit session glue: collects marker recordings and the user gesture,
//! then runs classification once everything has arrived.
//!
//! The orchestration around the core is frame-driven and external: markers
//! animate concurrently and each reports its recorded screen trajectory when
//! it finishes. This module is the completion-count barrier between those
//! callbacks and the analyser — plain bookkeeping, no threads, no engine
//! coupling.

use crate::analyser::Analyser;
use crate::diagnostics::MatchReport;
use crate::types::GesturePath;
use log::debug;
use nalgebra::Vector2;

/// Accumulates one marker's on-screen trajectory while it animates.
#[derive(Clone, Debug, Default)]
pub struct MarkerRecorder {
    path: GesturePath,
}

impl MarkerRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one frame: the marker's projected screen position and the
    /// frame timestamp in seconds.
    pub fn record(&mut self, screen_pos: Vector2<f32>, timestamp: f32) {
        self.path.push(screen_pos, timestamp);
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn finish(self) -> GesturePath {
        self.path
    }
}

/// One pursuit round: N candidate markers plus one user gesture.
#[derive(Clone, Debug)]
pub struct PursuitSession {
    expected_candidates: usize,
    candidates: Vec<(u32, GesturePath)>,
    user: Option<GesturePath>,
}

impl PursuitSession {
    /// Starts a round that waits for `expected_candidates` marker recordings.
    pub fn new(expected_candidates: usize) -> Self {
        Self {
            expected_candidates,
            candidates: Vec::with_capacity(expected_candidates),
            user: None,
        }
    }

    /// Delivers a finished marker recording. Re-delivery for an id already
    /// seen replaces the previous recording (a marker restarted mid-round).
    pub fn complete_marker(&mut self, target_id: u32, recording: GesturePath) {
        if let Some(slot) = self.candidates.iter_mut().find(|(id, _)| *id == target_id) {
            debug!("PursuitSession: replacing recording for target {target_id}");
            slot.1 = recording;
        } else {
            self.candidates.push((target_id, recording));
        }
    }

    /// Delivers the user's recorded gesture for this round.
    pub fn complete_user_gesture(&mut self, gesture: GesturePath) {
        self.user = Some(gesture);
    }

    /// True once every expected marker and the user gesture have arrived.
    pub fn is_complete(&self) -> bool {
        self.user.is_some() && self.candidates.len() >= self.expected_candidates
    }

    pub fn candidates_received(&self) -> usize {
        self.candidates.len()
    }

    /// Runs classification once the barrier is satisfied; `None` while
    /// recordings are still outstanding.
    pub fn classify(&self, analyser: &Analyser) -> Option<MatchReport> {
        if !self.is_complete() {
            debug!(
                "PursuitSession::classify not ready: {}/{} markers, user={}",
                self.candidates.len(),
                self.expected_candidates,
                self.user.is_some()
            );
            return None;
        }
        let user = self.user.as_ref()?;
        Some(analyser.classify(user, &self.candidates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording(x0: f32, samples: usize) -> GesturePath {
        let mut rec = MarkerRecorder::new();
        for i in 0..samples {
            rec.record(Vector2::new(x0 + i as f32 * 10.0, 50.0), i as f32 * 0.05);
        }
        rec.finish()
    }

    #[test]
    fn barrier_waits_for_all_recordings() {
        let analyser = Analyser::default();
        let mut session = PursuitSession::new(2);
        assert!(!session.is_complete());
        assert!(session.classify(&analyser).is_none());

        session.complete_marker(0, recording(0.0, 30));
        session.complete_user_gesture(recording(1.0, 20));
        assert!(!session.is_complete());
        assert!(session.classify(&analyser).is_none());

        session.complete_marker(1, recording(500.0, 30));
        assert!(session.is_complete());
        let report = session.classify(&analyser).expect("session is complete");
        assert_eq!(report.verdict.target_id(), Some(0));
    }

    #[test]
    fn redelivered_marker_replaces_previous_recording() {
        let mut session = PursuitSession::new(1);
        session.complete_marker(3, recording(0.0, 5));
        session.complete_marker(3, recording(0.0, 40));
        assert_eq!(session.candidates_received(), 1);
        session.complete_user_gesture(recording(0.0, 20));
        let report = session
            .classify(&Analyser::default())
            .expect("session is complete");
        assert_eq!(report.trace.scores.len(), 1);
    }
}
