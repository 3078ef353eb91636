//! Landmark index sets for the MediaPipe FaceMesh topology.
//!
//! These are configuration data, not algorithm: the estimators read whatever
//! indices are named here, so adapting the crate to a different tracker
//! topology means editing this module only.

/// The landmark indices describing one eye.
///
/// `outer` and `inner` are the eye corners (the horizontal reference axis);
/// `lid_pairs` are (upper lid, lower lid) pairs measured across that axis.
#[derive(Debug, Clone, Copy)]
pub struct EyeTopology {
    pub outer: usize,
    pub inner: usize,
    pub lid_pairs: [(usize, usize); 2],
}

/// Left eye as seen in the image (subject's right).
pub const LEFT_EYE: EyeTopology = EyeTopology {
    outer: 33,
    inner: 133,
    lid_pairs: [(160, 144), (158, 153)],
};

/// Right eye as seen in the image (subject's left).
pub const RIGHT_EYE: EyeTopology = EyeTopology {
    outer: 362,
    inner: 263,
    lid_pairs: [(385, 380), (387, 373)],
};

/// Nose tip, the yaw probe point.
pub const NOSE_TIP: usize = 1;
/// Left face contour point at cheek height.
pub const LEFT_CHEEK: usize = 234;
/// Right face contour point at cheek height.
pub const RIGHT_CHEEK: usize = 454;

/// Minimum landmark count a frame must carry: the highest index referenced
/// by any estimator ([`RIGHT_CHEEK`]) plus one. Real FaceMesh frames carry
/// [`FACE_MESH_LANDMARKS`] or more.
pub const MIN_LANDMARKS: usize = RIGHT_CHEEK + 1;

/// Base FaceMesh topology size (refined-iris variants carry 478).
pub const FACE_MESH_LANDMARKS: usize = 468;
