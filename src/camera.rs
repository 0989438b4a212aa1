use crate::config::PoseConfig;
use crate::error::Result;
use crate::num::{Matrix4, Point3, Rotation3, Vector3};
use crate::slam3d;

use serde::{Deserialize, Serialize};

/// Where the camera is and how it is turned, read off its world transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraReading {
    pub location: Point3,
    /// Pitch, yaw and roll about x, y and z in SceneKit's order: roll is
    /// applied first, then yaw, then pitch, i.e. `R = Rx * Ry * Rz`.
    pub euler_angles: Vector3,
}

impl CameraReading {
    pub fn from_transform(camera_to_world: &Matrix4, config: &PoseConfig) -> Result<Self> {
        let iso = slam3d::to_isometry(camera_to_world, config)?;

        Ok(Self {
            location: Point3::from(iso.translation.vector),
            euler_angles: pitch_yaw_roll(&iso.rotation.to_rotation_matrix()),
        })
    }
}

/// Splits `R = Rx(pitch) * Ry(yaw) * Rz(roll)`.
pub fn pitch_yaw_roll(rotation: &Rotation3) -> Vector3 {
    let r = rotation.matrix();
    let yaw = r[(0, 2)].max(-1.0).min(1.0).asin();

    // gimbal lock: pitch and roll share an axis, fold it all into pitch
    if r[(0, 2)].abs() >= 1.0 - 1e-12 {
        let pitch = r[(2, 1)].atan2(r[(1, 1)]);
        return Vector3::new(pitch, yaw, 0.0);
    }

    let pitch = (-r[(1, 2)]).atan2(r[(2, 2)]);
    let roll = (-r[(0, 1)]).atan2(r[(0, 0)]);
    Vector3::new(pitch, yaw, roll)
}
