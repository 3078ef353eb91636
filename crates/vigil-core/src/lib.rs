//! Active liveness detection via landmark-driven gesture challenges.
//!
//! A static photograph cannot blink or turn its head on request. This crate
//! evaluates a stream of facial-landmark frames (MediaPipe FaceMesh topology)
//! against a gesture challenge: the subject must either turn their head to
//! both sides or blink a required number of times. Per frame it derives an
//! eye-aspect-ratio (EAR) signal for blink counting, a yaw estimate for
//! head-turn detection, and a face-visibility flag, and feeds all three into
//! a small session state machine that latches a terminal "passed" verdict.
//!
//! The crate owns no camera, tracker, or rendering: the host runs whatever
//! capture pipeline it likes and calls [`LivenessSession::process_frame`]
//! once per landmark frame.
//!
//! # Threat Coverage
//!
//! - **Blocks:** Printed photographs and static screenshots held in front of
//!   the camera (neither can satisfy the gesture challenge).
//! - **Does not block:** Video replay of a subject performing the gestures,
//!   high-quality 3D masks, or adversarial displays.

use thiserror::Error;

pub mod config;
pub mod ear;
pub mod geometry;
pub mod landmarks;
pub mod session;
pub mod topology;
pub mod visibility;
pub mod yaw;

pub use config::LivenessConfig;
pub use ear::{both_eyes_ear, eye_ear, Eye};
pub use landmarks::{FaceLandmarks, Frame, Point};
pub use session::{LivenessSession, LivenessSignals};
pub use visibility::VisibilityTracker;
pub use yaw::estimate_yaw;

/// Errors surfaced by session construction and frame processing.
///
/// Degenerate geometry (zero eye width, zero face width) is deliberately NOT
/// an error: noisy trackers produce it routinely, so the affected scalar
/// falls back to a 0.0 sentinel and the frame is flagged via
/// [`LivenessSignals::degenerate_geometry`].
#[derive(Error, Debug)]
pub enum LivenessError {
    /// The frame claims a detected face but carries fewer landmarks than the
    /// estimators reference. The session state is left untouched.
    #[error("frame holds {landmarks} landmarks, estimators require at least {required}")]
    InvalidFrame { landmarks: usize, required: usize },

    /// Blink hysteresis requires the open threshold to sit strictly above
    /// the close threshold; anything else would count borderline noise as
    /// blinks. Rejected at construction, never at frame time.
    #[error("ear_open_threshold ({open}) must be greater than ear_close_threshold ({close})")]
    ThresholdOrdering { close: f64, open: f64 },
}
