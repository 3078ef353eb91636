//! Threshold resolution: built-in defaults, `VIGIL_*` environment
//! variables, then command-line flags, most specific wins.

use clap::Args;
use vigil_core::LivenessConfig;

#[derive(Debug, Args)]
pub struct ThresholdArgs {
    /// Normalized yaw magnitude that registers a head turn
    #[arg(long)]
    yaw_threshold: Option<f64>,
    /// EAR below this arms the eye-closed state
    #[arg(long)]
    ear_close_threshold: Option<f64>,
    /// EAR above this, while armed, counts one blink
    #[arg(long)]
    ear_open_threshold: Option<f64>,
    /// Blink count must exceed this for the blink path to pass
    #[arg(long)]
    blink_required: Option<u32>,
    /// Milliseconds without a detected face before visibility drops
    #[arg(long)]
    face_lost_timeout_ms: Option<u64>,
}

impl ThresholdArgs {
    pub fn resolve(&self) -> LivenessConfig {
        let mut config = from_env();
        if let Some(v) = self.yaw_threshold {
            config.yaw_threshold = v;
        }
        if let Some(v) = self.ear_close_threshold {
            config.ear_close_threshold = v;
        }
        if let Some(v) = self.ear_open_threshold {
            config.ear_open_threshold = v;
        }
        if let Some(v) = self.blink_required {
            config.blink_required = v;
        }
        if let Some(v) = self.face_lost_timeout_ms {
            config.face_lost_timeout_ms = v;
        }
        config
    }
}

/// Load configuration from `VIGIL_*` environment variables with defaults.
pub fn from_env() -> LivenessConfig {
    let defaults = LivenessConfig::default();
    LivenessConfig {
        yaw_threshold: env_f64("VIGIL_YAW_THRESHOLD", defaults.yaw_threshold),
        ear_close_threshold: env_f64("VIGIL_EAR_CLOSE_THRESHOLD", defaults.ear_close_threshold),
        ear_open_threshold: env_f64("VIGIL_EAR_OPEN_THRESHOLD", defaults.ear_open_threshold),
        blink_required: env_u32("VIGIL_BLINK_REQUIRED", defaults.blink_required),
        face_lost_timeout_ms: env_u64("VIGIL_FACE_LOST_TIMEOUT_MS", defaults.face_lost_timeout_ms),
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_u32(key: &str, default: u32) -> u32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
