//! The liveness challenge session state machine.

use serde::Serialize;

use crate::config::LivenessConfig;
use crate::ear::both_eyes_ear;
use crate::landmarks::{FaceLandmarks, Frame};
use crate::visibility::VisibilityTracker;
use crate::yaw::estimate_yaw;
use crate::LivenessError;

/// Per-frame output of [`LivenessSession::process_frame`].
#[derive(Debug, Clone, Serialize)]
pub struct LivenessSignals {
    /// Mean EAR across both eyes; 0.0 sentinel when no face or degenerate.
    pub ear: f64,
    /// Signed yaw estimate; 0.0 sentinel when no face or degenerate.
    pub yaw: f64,
    pub face_visible: bool,
    pub blink_count: u32,
    pub head_left_seen: bool,
    pub head_right_seen: bool,
    pub passed: bool,
    /// True when this frame's geometry collapsed (zero eye or face width)
    /// and a sentinel scalar was substituted.
    pub degenerate_geometry: bool,
}

/// One liveness challenge over one landmark stream.
///
/// The session is the sole owner of all challenge state; the host creates
/// one per camera stream, feeds it every tracker frame in order, and reads
/// the returned [`LivenessSignals`]. The challenge passes when the subject
/// has turned their head both ways, or has blinked more than the required
/// count; the two gesture paths run as independent flags, in any order.
/// Once passed, the verdict is terminal until [`LivenessSession::reset`].
///
/// Brief occlusions never reset gesture progress: an empty frame only
/// updates the visibility tracker, and an invalid frame updates nothing.
#[derive(Debug)]
pub struct LivenessSession {
    config: LivenessConfig,
    visibility: VisibilityTracker,
    blink_count: u32,
    eye_closed: bool,
    head_left_seen: bool,
    head_right_seen: bool,
    passed: bool,
}

impl LivenessSession {
    /// Build a session, rejecting invalid threshold configurations up front.
    pub fn new(config: LivenessConfig) -> Result<Self, LivenessError> {
        config.validate()?;
        let visibility = VisibilityTracker::new(config.face_lost_timeout_ms);
        Ok(Self {
            config,
            visibility,
            blink_count: 0,
            eye_closed: false,
            head_left_seen: false,
            head_right_seen: false,
            passed: false,
        })
    }

    /// Evaluate one tracker frame.
    ///
    /// Total over every well-formed frame: an empty landmark list is a
    /// valid "no face" observation. A non-empty frame shorter than the
    /// estimator topology is rejected without mutating any state.
    pub fn process_frame(&mut self, frame: &Frame) -> Result<LivenessSignals, LivenessError> {
        if !frame.face_present() {
            let face_visible = self.visibility.observe(false, frame.timestamp_ms);
            return Ok(self.signals(0.0, 0.0, face_visible, false));
        }

        // Validate before touching any state
        let face = FaceLandmarks::new(&frame.landmarks)?;
        let face_visible = self.visibility.observe(true, frame.timestamp_ms);

        // Degeneracy is tracked per scalar: a collapsed face width must
        // not stop a validly-measured eye from feeding the blink path,
        // and vice versa.
        let mut ear_degenerate = false;
        let ear = both_eyes_ear(&face).unwrap_or_else(|| {
            ear_degenerate = true;
            0.0
        });
        let mut yaw_degenerate = false;
        let yaw = estimate_yaw(&face).unwrap_or_else(|| {
            yaw_degenerate = true;
            0.0
        });
        if ear_degenerate || yaw_degenerate {
            tracing::warn!(
                timestamp_ms = frame.timestamp_ms,
                ear_degenerate,
                yaw_degenerate,
                "degenerate geometry, substituting sentinel"
            );
        }

        if face_visible && !self.passed {
            self.observe_head_turn(yaw);
        }
        if face_visible && !self.passed && !ear_degenerate {
            self.observe_blink(ear);
        }

        Ok(self.signals(ear, yaw, face_visible, ear_degenerate || yaw_degenerate))
    }

    fn observe_head_turn(&mut self, yaw: f64) {
        if yaw > self.config.yaw_threshold && !self.head_left_seen {
            self.head_left_seen = true;
            tracing::info!(yaw, "head turn left registered");
        }
        if yaw < -self.config.yaw_threshold && !self.head_right_seen {
            self.head_right_seen = true;
            tracing::info!(yaw, "head turn right registered");
        }
        if self.head_left_seen && self.head_right_seen {
            self.mark_passed("both head turns observed");
        }
    }

    fn observe_blink(&mut self, ear: f64) {
        if ear < self.config.ear_close_threshold && !self.eye_closed {
            self.eye_closed = true;
        } else if ear > self.config.ear_open_threshold && self.eye_closed {
            self.eye_closed = false;
            self.blink_count += 1;
            tracing::debug!(blink_count = self.blink_count, ear, "blink counted");
            if self.blink_count > self.config.blink_required {
                self.mark_passed("required blinks observed");
            }
        }
    }

    fn mark_passed(&mut self, gesture: &str) {
        if !self.passed {
            self.passed = true;
            tracing::info!(
                blink_count = self.blink_count,
                head_left_seen = self.head_left_seen,
                head_right_seen = self.head_right_seen,
                gesture,
                "liveness challenge passed"
            );
        }
    }

    /// Clear all counters, flags, and the visibility window.
    pub fn reset(&mut self) {
        self.visibility.reset();
        self.blink_count = 0;
        self.eye_closed = false;
        self.head_left_seen = false;
        self.head_right_seen = false;
        self.passed = false;
        tracing::debug!("session reset");
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn blink_count(&self) -> u32 {
        self.blink_count
    }

    pub fn config(&self) -> &LivenessConfig {
        &self.config
    }

    fn signals(
        &self,
        ear: f64,
        yaw: f64,
        face_visible: bool,
        degenerate_geometry: bool,
    ) -> LivenessSignals {
        LivenessSignals {
            ear,
            yaw,
            face_visible,
            blink_count: self.blink_count,
            head_left_seen: self.head_left_seen,
            head_right_seen: self.head_right_seen,
            passed: self.passed,
            degenerate_geometry,
        }
    }
}
