//! Landmark frame types and boundary validation.

use serde::{Deserialize, Serialize};

use crate::topology::MIN_LANDMARKS;
use crate::LivenessError;

/// A single tracked facial landmark in normalized image coordinates.
///
/// `x` and `y` are typically in `[0, 1]` relative to the image; `z` is the
/// tracker's relative depth estimate. Produced fresh each frame by the
/// external tracker and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// One tracker output frame.
///
/// An empty `landmarks` vector means the tracker detected no face in this
/// frame; that is a well-formed input, not an error. Timestamps are
/// caller-supplied milliseconds and must be monotonically non-decreasing
/// within a session (the visibility tracker compares them directly).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub landmarks: Vec<Point>,
    pub image_width: u32,
    pub image_height: u32,
    pub timestamp_ms: u64,
}

impl Frame {
    /// Whether the tracker detected a face in this frame.
    pub fn face_present(&self) -> bool {
        !self.landmarks.is_empty()
    }
}

/// A landmark slice validated against the estimator topology.
///
/// Construction checks the slice length once at the boundary; estimators may
/// then index the named topology constants without per-access checks.
#[derive(Debug, Clone, Copy)]
pub struct FaceLandmarks<'a> {
    points: &'a [Point],
}

impl<'a> FaceLandmarks<'a> {
    /// Validate a non-empty landmark slice against [`MIN_LANDMARKS`].
    pub fn new(points: &'a [Point]) -> Result<Self, LivenessError> {
        if points.len() < MIN_LANDMARKS {
            return Err(LivenessError::InvalidFrame {
                landmarks: points.len(),
                required: MIN_LANDMARKS,
            });
        }
        Ok(Self { points })
    }

    pub(crate) fn point(&self, index: usize) -> &Point {
        &self.points[index]
    }
}
