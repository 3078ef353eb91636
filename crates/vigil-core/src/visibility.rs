//! Debounced face-visibility tracking.

/// Tracks whether a face has been observed recently.
///
/// Trackers drop a frame or two even on a steady subject, so visibility is
/// debounced: an empty frame flips the flag off only once `timeout_ms` has
/// elapsed since the last frame that carried a face. Timestamps come from
/// the frames themselves and must be monotonically non-decreasing.
#[derive(Debug)]
pub struct VisibilityTracker {
    timeout_ms: u64,
    last_face_seen_at: Option<u64>,
    face_visible: bool,
}

impl VisibilityTracker {
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            last_face_seen_at: None,
            face_visible: true,
        }
    }

    /// Record one frame observation and return the updated visibility.
    ///
    /// The first observation anchors the timeout window even when it carries
    /// no face, so a session that never sees a face still times out relative
    /// to its own start rather than never.
    pub fn observe(&mut self, face_present: bool, now_ms: u64) -> bool {
        if face_present {
            self.last_face_seen_at = Some(now_ms);
            self.face_visible = true;
            return true;
        }

        match self.last_face_seen_at {
            Some(seen_at) if now_ms.saturating_sub(seen_at) > self.timeout_ms => {
                if self.face_visible {
                    tracing::info!(
                        elapsed_ms = now_ms.saturating_sub(seen_at),
                        timeout_ms = self.timeout_ms,
                        "face lost"
                    );
                }
                self.face_visible = false;
            }
            Some(_) => {} // within the debounce window
            None => self.last_face_seen_at = Some(now_ms),
        }
        self.face_visible
    }

    pub fn is_visible(&self) -> bool {
        self.face_visible
    }

    pub fn reset(&mut self) {
        self.last_face_seen_at = None;
        self.face_visible = true;
    }
}
