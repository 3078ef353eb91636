//! Pure vector math over landmark points.
//!
//! Every function here is side-effect-free; degenerate inputs (coincident
//! points) are reported as `None` rather than dividing by zero, and callers
//! map that to the crate's 0.0 sentinel policy.

use crate::landmarks::Point;

/// A 2D direction in the image plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// Euclidean distance using the image-plane coordinates only.
pub fn distance_2d(a: &Point, b: &Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Euclidean distance including the tracker's relative depth.
pub fn distance_3d(a: &Point, b: &Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2) + (a.z - b.z).powi(2)).sqrt()
}

/// Unit direction from `a` to `b` in the image plane.
///
/// Returns `None` when the two points coincide in 2D, since no direction
/// exists; this is the crate's documented degenerate-axis policy.
pub fn axis(a: &Point, b: &Point) -> Option<Vec2> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length = dx.hypot(dy);
    if length == 0.0 {
        return None;
    }
    Some(Vec2 {
        x: dx / length,
        y: dy / length,
    })
}

/// Perpendicular of a 2D unit vector, rotated +90°.
pub fn normal(axis: Vec2) -> Vec2 {
    Vec2 {
        x: -axis.y,
        y: axis.x,
    }
}

/// Separation of `a` and `b` measured along `normal`.
///
/// The absolute dot product of `(a - b)` with the normal. Projecting onto
/// the eye-axis normal makes lid separation robust to head roll, where a
/// raw vertical distance would shrink as the head tilts.
pub fn project_distance(a: &Point, b: &Point, normal: Vec2) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * normal.x + dy * normal.y).abs()
}
