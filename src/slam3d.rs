use crate::config::PoseConfig;
use crate::error::{PoseError, Result};
use crate::num::{Matrix3, Matrix4, Number, UnitQuaternion, Vector3};
use crate::solver::{RotationSolver, Solver};

use log::warn;
use nalgebra::{Isometry3, Translation3};

pub type SE3Quat = Isometry3<Number>;

/// An affine transform split as `T * R * S`. Shear has no place in this
/// split, so [`decompose`] refuses it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decomposition {
    pub translation: Vector3,
    pub rotation: UnitQuaternion,
    /// Per-axis scale; a mirrored transform carries a negative x scale.
    pub scale: Vector3,
}

impl Decomposition {
    #[inline]
    pub fn isometry(&self) -> SE3Quat {
        SE3Quat::from_parts(Translation3::from(self.translation), self.rotation)
    }

    pub fn is_rigid(&self, tolerance: Number) -> bool {
        self.scale.iter().all(|s| (s - 1.0).abs() <= tolerance)
    }
}

pub fn decompose(m: &Matrix4, config: &PoseConfig) -> Result<Decomposition> {
    if !m.iter().all(|value| value.is_finite()) {
        warn!("rejecting transform with non-finite entries");
        return Err(PoseError::NonFinite);
    }

    let bottom = [m[(3, 0)], m[(3, 1)], m[(3, 2)], m[(3, 3)]];
    let is_affine = bottom
        .iter()
        .zip([0.0, 0.0, 0.0, 1.0].iter())
        .all(|(value, expected)| (value - expected).abs() <= config.affine_tolerance);
    if !is_affine {
        warn!("rejecting projective transform with bottom row {:?}", bottom);
        return Err(PoseError::NotAffine(bottom));
    }

    let linear: Matrix3 = m.fixed_view::<3, 3>(0, 0).into_owned();
    let translation: Vector3 = m.fixed_view::<3, 1>(0, 3).into_owned();

    let mut scale = Vector3::zeros();
    for axis in 0..3 {
        let length = linear.column(axis).norm();
        if length <= config.affine_tolerance {
            warn!("rejecting transform with collapsed axis {}", axis);
            return Err(PoseError::Degenerate { axis, length });
        }
        scale[axis] = length;
    }
    if linear.determinant() < 0.0 {
        scale.x = -scale.x;
    }

    let normalized = linear * Matrix3::from_diagonal(&scale.map(|s| 1.0 / s));
    let shear = (normalized.transpose() * normalized - Matrix3::identity()).amax();
    if shear > config.rigid_tolerance {
        warn!("rejecting sheared transform (deviation {})", shear);
        return Err(PoseError::Sheared(shear));
    }

    let rotation = RotationSolver {
        matrix: &normalized,
        epsilon: config.rotation_epsilon,
    }
    .solve(config.rotation_max_iter);

    Ok(Decomposition {
        translation,
        rotation: UnitQuaternion::from_rotation_matrix(&rotation),
        scale,
    })
}

pub fn to_isometry(m: &Matrix4, config: &PoseConfig) -> Result<SE3Quat> {
    let parts = decompose(m, config)?;
    if !parts.is_rigid(config.rigid_tolerance) {
        warn!("rejecting scaled transform with axis scales {:?}", parts.scale);
        return Err(PoseError::NotRigid([
            parts.scale.x,
            parts.scale.y,
            parts.scale.z,
        ]));
    }
    Ok(parts.isometry())
}

#[inline]
pub fn from_isometry(iso: &SE3Quat) -> Matrix4 {
    iso.to_homogeneous()
}
