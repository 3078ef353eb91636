//! Challenge thresholds and session configuration.

use serde::{Deserialize, Serialize};

use crate::LivenessError;

/// Thresholds governing the liveness challenge.
///
/// `ear_close_threshold` / `ear_open_threshold` form a hysteresis pair: a
/// blink is counted only when the per-frame EAR dips below the close
/// threshold and later rises back above the open one. The gap between them
/// keeps a borderline EAR hovering near one value from registering as a
/// burst of blinks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessConfig {
    /// Normalized yaw magnitude that registers a head turn.
    pub yaw_threshold: f64,
    /// EAR below this arms the eye-closed state.
    pub ear_close_threshold: f64,
    /// EAR above this, while armed, counts one blink.
    pub ear_open_threshold: f64,
    /// Blink count must exceed this for the blink path to pass.
    pub blink_required: u32,
    /// Milliseconds without a detected face before visibility drops.
    pub face_lost_timeout_ms: u64,
}

impl Default for LivenessConfig {
    fn default() -> Self {
        Self {
            yaw_threshold: 0.12,
            ear_close_threshold: 0.23,
            ear_open_threshold: 0.28,
            blink_required: 1,
            face_lost_timeout_ms: 1500,
        }
    }
}

impl LivenessConfig {
    /// Fail-fast threshold check, run at session construction so a bad
    /// configuration can never surface mid-stream.
    pub fn validate(&self) -> Result<(), LivenessError> {
        if self.ear_open_threshold <= self.ear_close_threshold {
            return Err(LivenessError::ThresholdOrdering {
                close: self.ear_close_threshold,
                open: self.ear_open_threshold,
            });
        }
        Ok(())
    }
}
