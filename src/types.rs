//! Core data types shared by the solver, analyser and session glue.

use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// A candidate target handed to the layout solver.
///
/// The `id` is a stable external identity; it is carried through grouping,
/// phase assignment and classification untouched.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetSample {
    pub id: u32,
    pub world_pos: Vector3<f32>,
}

/// RGB display color, components in [0, 1]. Purely diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Builds a fully saturated color from a hue fraction in [0, 1).
    pub fn from_hue(hue: f32) -> Self {
        let h = hue.rem_euclid(1.0) * 6.0;
        let sector = h.floor() as i32 % 6;
        let f = h - h.floor();
        match sector {
            0 => Color::new(1.0, f, 0.0),
            1 => Color::new(1.0 - f, 1.0, 0.0),
            2 => Color::new(0.0, 1.0, f),
            3 => Color::new(0.0, 1.0 - f, 1.0),
            4 => Color::new(f, 0.0, 1.0),
            _ => Color::new(1.0, 0.0, 1.0 - f),
        }
    }
}

/// One solved marker path: the solver's per-target output.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetPath {
    pub id: u32,
    /// World-space polyline the marker travels. Two points for straight
    /// members, `curve_resolution + 1` points for curved ones.
    pub points: Vec<Vector3<f32>>,
    /// Fractional start offset into the shared travel duration, in [0, 1).
    pub phase: f32,
    /// Group debug color; `None` only when the target never joined a group.
    pub color: Option<Color>,
    pub straight: bool,
}

/// An ordered 2D trajectory with parallel timestamps.
///
/// Used both for the user's drawn gesture and for each marker's recorded
/// on-screen trajectory. Timestamps are seconds, non-decreasing, one per
/// point.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GesturePath {
    pub points: Vec<Vector2<f32>>,
    pub timestamps: Vec<f32>,
}

impl GesturePath {
    pub fn new(points: Vec<Vector2<f32>>, timestamps: Vec<f32>) -> Self {
        Self { points, timestamps }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Straight-line distance between the first and last recorded point.
    /// Zero for paths with fewer than two points.
    pub fn endpoint_span(&self) -> f32 {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() >= 2 => (last - first).norm(),
            _ => 0.0,
        }
    }

    pub fn push(&mut self, point: Vector2<f32>, timestamp: f32) {
        self.points.push(point);
        self.timestamps.push(timestamp);
    }
}

/// Per-candidate diagnostic scores produced during classification.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateScore {
    pub id: u32,
    /// Raw discrete Fréchet distance in pixels.
    pub frechet: f32,
    /// Fréchet normalized by the candidate's endpoint diagonal.
    pub normalized_frechet: f32,
    /// Velocity similarity in [0, 1]; 1 means speeds match perceptually.
    pub velocity_similarity: f32,
    /// Weighted combination; lower is better.
    pub combined: f32,
}

/// Why a classification request produced no winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UnclassifiedReason {
    /// The user's gesture carried fewer samples than the configured minimum.
    TooFewUserSamples,
    /// No candidate trajectories were supplied.
    NoCandidates,
    /// Every candidate produced a non-finite combined score.
    AllCandidatesRejected,
}

/// Outcome of one classification request.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Verdict {
    Match { target_id: u32 },
    Unclassified { reason: UnclassifiedReason },
}

impl Verdict {
    pub fn target_id(&self) -> Option<u32> {
        match self {
            Verdict::Match { target_id } => Some(*target_id),
            Verdict::Unclassified { .. } => None,
        }
    }
}
