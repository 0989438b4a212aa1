use super::Solver;
use crate::num::{Matrix3, Number, Rotation3, UnitQuaternion};

use log::trace;

/// Projects a near-orthonormal 3x3 block onto the closest rotation.
pub struct RotationSolver<'a> {
    pub matrix: &'a Matrix3,
    pub epsilon: Number,
}

impl<'a> Solver<Rotation3> for RotationSolver<'a> {
    const MAX_ITER: usize = 32;

    fn solve(self, repeat: usize) -> Rotation3 {
        // a direct quaternion readout is exact for clean input and keeps
        // half-turns away from the fixed point at identity
        let guess = {
            let raw = UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(
                *self.matrix,
            ));
            UnitQuaternion::new_normalize(*raw.quaternion()).to_rotation_matrix()
        };

        trace!("projecting onto SO(3) with at most {} iterations", repeat);
        Rotation3::from_matrix_eps(self.matrix, self.epsilon, repeat, guess)
    }
}
