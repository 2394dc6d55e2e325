//! Tunables for gesture-vs-marker scoring.

use serde::{Deserialize, Serialize};

/// Analyser parameters: score weights, perceptual correction and guards.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyserParams {
    /// Weight of the normalized Fréchet (shape) term in the combined score.
    pub shape_weight: f32,
    /// Weight of the `1 - velocity_similarity` term.
    pub velocity_weight: f32,
    /// Multiplier < 1 applied to a marker's measured speed before comparing
    /// against the user. Users track a moving target's apparent speed as
    /// lower than its programmed speed.
    pub perception_coefficient: f32,
    /// Exponential sensitivity of the velocity similarity.
    pub velocity_sensitivity: f32,
    /// Minimum user samples required before classification is attempted.
    pub min_user_samples: usize,
}

impl Default for AnalyserParams {
    fn default() -> Self {
        Self {
            shape_weight: 0.7,
            velocity_weight: 0.3,
            perception_coefficient: 0.85,
            velocity_sensitivity: 1.5,
            min_user_samples: 5,
        }
    }
}
