//! Eye-aspect-ratio estimation.
//!
//! EAR is the ratio of lid separation to eye width: low when the eye is
//! closed, higher when open. This module implements the pose-robust
//! projection variant: lid separation is measured along the normal of the
//! eye's own corner-to-corner axis, so the ratio survives head roll that
//! would corrupt a raw vertical distance.

use crate::geometry::{axis, distance_2d, normal, project_distance};
use crate::landmarks::FaceLandmarks;
use crate::topology::{EyeTopology, LEFT_EYE, RIGHT_EYE};

/// Eye selector for per-eye estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eye {
    Left,
    Right,
}

impl Eye {
    fn topology(self) -> EyeTopology {
        match self {
            Eye::Left => LEFT_EYE,
            Eye::Right => RIGHT_EYE,
        }
    }
}

/// Openness ratio for one eye in one frame.
///
/// Returns `None` when the eye geometry is degenerate (coincident corners,
/// zero eye width); the session maps that to the 0.0 sentinel and flags the
/// frame rather than failing it.
pub fn eye_ear(face: &FaceLandmarks<'_>, eye: Eye) -> Option<f64> {
    let topo = eye.topology();

    let outer = face.point(topo.outer);
    let inner = face.point(topo.inner);

    let eye_axis = axis(outer, inner)?;
    let lid_normal = normal(eye_axis);

    let v: f64 = topo
        .lid_pairs
        .iter()
        .map(|&(upper, lower)| project_distance(face.point(upper), face.point(lower), lid_normal))
        .sum();

    let h = distance_2d(inner, outer);
    if h == 0.0 {
        return None;
    }

    Some(v / (2.0 * h))
}

/// Mean EAR across both eyes for one frame.
///
/// `None` if either eye is degenerate; a one-eyed reading would bias the
/// blink hysteresis rather than inform it.
pub fn both_eyes_ear(face: &FaceLandmarks<'_>) -> Option<f64> {
    let left = eye_ear(face, Eye::Left)?;
    let right = eye_ear(face, Eye::Right)?;
    Some((left + right) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::Point;
    use crate::topology::{FACE_MESH_LANDMARKS, LEFT_EYE, RIGHT_EYE};

    /// Build a full-mesh landmark set with both eyes horizontal, width 0.1,
    /// and each lid pair separated vertically by `2 * lid_gap`.
    ///
    /// With a horizontal axis the lid normal is vertical, so the projected
    /// separation per pair is exactly `2 * lid_gap` and
    /// `EAR = (2 pairs * 2 * lid_gap) / (2 * 0.1) = 20 * lid_gap`.
    fn mesh_with_eyes(lid_gap: f64) -> Vec<Point> {
        let mut points = vec![Point::new(0.0, 0.0, 0.0); FACE_MESH_LANDMARKS];
        for (topo, outer_x) in [(LEFT_EYE, 0.30), (RIGHT_EYE, 0.60)] {
            points[topo.outer] = Point::new(outer_x, 0.5, 0.0);
            points[topo.inner] = Point::new(outer_x + 0.1, 0.5, 0.0);
            for (upper, lower) in topo.lid_pairs {
                points[upper] = Point::new(outer_x + 0.05, 0.5 - lid_gap, 0.0);
                points[lower] = Point::new(outer_x + 0.05, 0.5 + lid_gap, 0.0);
            }
        }
        points
    }

    #[test]
    fn open_eye_lands_in_the_open_band() {
        let points = mesh_with_eyes(0.015); // EAR 0.30
        let face = FaceLandmarks::new(&points).unwrap();
        let ear = both_eyes_ear(&face).unwrap();
        assert!((ear - 0.30).abs() < 1e-9);
        assert!(ear > 0.28, "open eye must clear the open threshold");
    }

    #[test]
    fn shut_eye_lands_in_the_closed_band() {
        let points = mesh_with_eyes(0.005); // EAR 0.10
        let face = FaceLandmarks::new(&points).unwrap();
        let ear = both_eyes_ear(&face).unwrap();
        assert!((ear - 0.10).abs() < 1e-9);
        assert!(ear < 0.23, "shut eye must sit below the close threshold");
    }

    #[test]
    fn both_eyes_ear_is_the_mean() {
        let mut points = mesh_with_eyes(0.015);
        // Shut the right eye only
        for (upper, lower) in RIGHT_EYE.lid_pairs {
            points[upper] = Point::new(0.65, 0.5 - 0.005, 0.0);
            points[lower] = Point::new(0.65, 0.5 + 0.005, 0.0);
        }
        let face = FaceLandmarks::new(&points).unwrap();
        let left = eye_ear(&face, Eye::Left).unwrap();
        let right = eye_ear(&face, Eye::Right).unwrap();
        let mean = both_eyes_ear(&face).unwrap();
        assert!((mean - (left + right) / 2.0).abs() < 1e-12);
        assert!((mean - 0.20).abs() < 1e-9);
    }

    #[test]
    fn ear_is_roll_invariant() {
        // Rotate the whole left eye 30° about its outer corner; the
        // projection method must report the same ratio.
        let flat = mesh_with_eyes(0.015);
        let face = FaceLandmarks::new(&flat).unwrap();
        let reference = eye_ear(&face, Eye::Left).unwrap();

        let (sin, cos) = (30.0f64.to_radians()).sin_cos();
        let pivot = (0.30, 0.5);
        let rotate = |p: Point| {
            let (dx, dy) = (p.x - pivot.0, p.y - pivot.1);
            Point::new(
                pivot.0 + dx * cos - dy * sin,
                pivot.1 + dx * sin + dy * cos,
                p.z,
            )
        };

        let mut rolled = flat.clone();
        let topo = LEFT_EYE;
        for idx in [topo.outer, topo.inner]
            .into_iter()
            .chain(topo.lid_pairs.into_iter().flat_map(|(u, l)| [u, l]))
        {
            rolled[idx] = rotate(rolled[idx]);
        }
        let face = FaceLandmarks::new(&rolled).unwrap();
        let rotated = eye_ear(&face, Eye::Left).unwrap();
        assert!((rotated - reference).abs() < 1e-9);
    }

    #[test]
    fn coincident_corners_are_degenerate() {
        let mut points = mesh_with_eyes(0.015);
        points[LEFT_EYE.inner] = points[LEFT_EYE.outer];
        let face = FaceLandmarks::new(&points).unwrap();
        assert!(eye_ear(&face, Eye::Left).is_none());
        assert!(both_eyes_ear(&face).is_none());
        // The other eye still measures on its own
        assert!(eye_ear(&face, Eye::Right).is_some());
    }
}
