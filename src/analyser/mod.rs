//! Gesture analyser: scores a drawn 2D trajectory against recorded marker
//! trajectories and classifies the best match.
//!
//! Shape is measured with the discrete Fréchet distance normalized by the
//! candidate's endpoint diagonal; tempo with a perceptually corrected
//! velocity similarity. Both feed a weighted combined score, lower is
//! better. Everything here is a pure function over point/time sequences.

mod classify;
mod frechet;
pub mod params;
mod speed;

pub use classify::Analyser;
pub use frechet::frechet_distance;
pub use params::AnalyserParams;
pub use speed::{
    average_speed, resample, speed_profile, velocity_profile_similarity, velocity_similarity,
};
