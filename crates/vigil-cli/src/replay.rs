//! `vigil replay` and `vigil inspect` — drive a recorded landmark capture
//! through the evaluator.
//!
//! A capture is a JSON array of frames as produced by a tracker bridge:
//! `[{"landmarks": [{"x":..,"y":..,"z":..}, ...], "image_width": 1280,
//! "image_height": 720, "timestamp_ms": 0}, ...]`. An empty `landmarks`
//! array records a frame with no detected face.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use vigil_core::{
    both_eyes_ear, estimate_yaw, eye_ear, Eye, FaceLandmarks, Frame, LivenessError,
    LivenessSession,
};

use crate::config::ThresholdArgs;

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Path to a JSON capture file
    capture: PathBuf,

    /// Emit one JSON object per frame instead of text lines
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    thresholds: ThresholdArgs,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Path to a JSON capture file
    capture: PathBuf,
}

fn load_capture(path: &Path) -> Result<Vec<Frame>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read capture file {}", path.display()))?;
    let frames: Vec<Frame> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse capture file {}", path.display()))?;
    Ok(frames)
}

pub fn run(args: ReplayArgs) -> Result<()> {
    let config = args.thresholds.resolve();
    let mut session = LivenessSession::new(config)?;

    let frames = load_capture(&args.capture)?;
    tracing::info!(
        frames = frames.len(),
        capture = %args.capture.display(),
        "replaying capture"
    );

    for (i, frame) in frames.iter().enumerate() {
        let signals = match session.process_frame(frame) {
            Ok(signals) => signals,
            // Per-frame errors are local to the frame; the session is
            // untouched and the next frame is the retry
            Err(err @ LivenessError::InvalidFrame { .. }) => {
                tracing::warn!(frame = i, error = %err, "skipping invalid frame");
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        if args.json {
            println!("{}", serde_json::to_string(&signals)?);
        } else {
            println!(
                "frame {i:4}  t={:6}ms  ear={:.3}  yaw={:+.3}  visible={}  blinks={}  left={}  right={}{}{}",
                frame.timestamp_ms,
                signals.ear,
                signals.yaw,
                signals.face_visible,
                signals.blink_count,
                signals.head_left_seen,
                signals.head_right_seen,
                if signals.degenerate_geometry { "  [degenerate]" } else { "" },
                if signals.passed { "  PASSED" } else { "" },
            );
        }
    }

    if session.passed() {
        tracing::info!(blinks = session.blink_count(), "liveness challenge passed");
        Ok(())
    } else {
        bail!("liveness challenge not passed");
    }
}

pub fn inspect(args: InspectArgs) -> Result<()> {
    let frames = load_capture(&args.capture)?;

    for (i, frame) in frames.iter().enumerate() {
        if !frame.face_present() {
            println!("frame {i:4}  t={:6}ms  no face", frame.timestamp_ms);
            continue;
        }
        let face = match FaceLandmarks::new(&frame.landmarks) {
            Ok(face) => face,
            Err(err) => {
                tracing::warn!(frame = i, error = %err, "skipping invalid frame");
                continue;
            }
        };

        let fmt = |v: Option<f64>| match v {
            Some(v) => format!("{v:+.4}"),
            None => "degenerate".to_string(),
        };
        println!(
            "frame {i:4}  t={:6}ms  ear_left={}  ear_right={}  ear={}  yaw={}",
            frame.timestamp_ms,
            fmt(eye_ear(&face, Eye::Left)),
            fmt(eye_ear(&face, Eye::Right)),
            fmt(both_eyes_ear(&face)),
            fmt(estimate_yaw(&face)),
        );
    }

    Ok(())
}
