use crate::config::PoseConfig;
use crate::error::{PoseError, Result};
use crate::num::{ArucoId, Matrix4, Number, Vector3};
use crate::slam3d::{self, SE3Quat};

use serde::{Deserialize, Serialize};

/// A marker id paired with the transform estimated for it in one detection.
///
/// The transform uses the column-vector convention: translation sits in
/// column 3 and points are mapped as `transform * p`. Nothing is
/// validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPose {
    aruco_id: ArucoId,
    transform: Matrix4,
}

impl MarkerPose {
    #[inline]
    pub fn new(aruco_id: ArucoId, transform: Matrix4) -> Self {
        Self {
            aruco_id,
            transform,
        }
    }

    /// Builds a pose from 16 values in column-major order, which is also
    /// the `m11..m44` field order of a SceneKit `SCNMatrix4`.
    pub fn from_array(aruco_id: ArucoId, values: [Number; 16]) -> Self {
        Self::new(aruco_id, Matrix4::from_column_slice(&values))
    }

    pub fn from_isometry(aruco_id: ArucoId, iso: &SE3Quat) -> Self {
        Self::new(aruco_id, slam3d::from_isometry(iso))
    }

    #[inline]
    pub fn aruco_id(&self) -> ArucoId {
        self.aruco_id
    }

    #[inline]
    pub fn set_aruco_id(&mut self, aruco_id: ArucoId) {
        self.aruco_id = aruco_id;
    }

    #[inline]
    pub fn transform(&self) -> &Matrix4 {
        &self.transform
    }

    #[inline]
    pub fn set_transform(&mut self, transform: Matrix4) {
        self.transform = transform;
    }

    pub fn to_array(&self) -> [Number; 16] {
        let mut values = [0.0; 16];
        values.copy_from_slice(self.transform.as_slice());
        values
    }

    #[inline]
    pub fn translation(&self) -> Vector3 {
        self.transform.fixed_view::<3, 1>(0, 3).into_owned()
    }

    /// Re-expresses a camera-relative pose in world space.
    pub fn in_world(&self, camera_to_world: &Matrix4) -> Self {
        Self::new(self.aruco_id, camera_to_world * self.transform)
    }

    pub fn inverse(&self) -> Result<Self> {
        self.transform
            .try_inverse()
            .map(|inv| Self::new(self.aruco_id, inv))
            .ok_or(PoseError::Singular)
    }

    pub fn isometry(&self, config: &PoseConfig) -> Result<SE3Quat> {
        slam3d::to_isometry(&self.transform, config)
    }

    /// Same id and every matrix entry within `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: Number) -> bool {
        self.aruco_id == other.aruco_id
            && self
                .transform
                .iter()
                .zip(other.transform.iter())
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}
