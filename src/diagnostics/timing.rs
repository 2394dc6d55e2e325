use serde::Serialize;
use std::time::Instant;

/// Wall-clock timing for one solver or analyser stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

/// Aggregated timing trace for one solve or classify call.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Records the elapsed time since `start` under `label`. Zero-duration
    /// stages are kept; they still document that the stage ran.
    pub fn record(&mut self, label: impl Into<String>, start: Instant) {
        self.stages.push(StageTiming {
            label: label.into(),
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        });
    }

    pub fn finish(&mut self, start: Instant) {
        self.total_ms = start.elapsed().as_secs_f64() * 1000.0;
    }
}
