use crate::num::Number;
use crate::solver::{RotationSolver, Solver};

use serde::{Deserialize, Serialize};

/// Tunables shared by the decomposition helpers and the anchor map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoseConfig {
    /// Edge length of a printed marker, in metres.
    pub marker_size: Number,
    /// Allowed deviation of the bottom row from `[0 0 0 1]`.
    pub affine_tolerance: Number,
    /// Allowed deviation of an axis scale from 1 for a rigid transform.
    pub rigid_tolerance: Number,
    /// Iteration cap for the SO(3) projection; `0` means iterate until
    /// the update falls below `rotation_epsilon`.
    pub rotation_max_iter: usize,
    pub rotation_epsilon: Number,
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            marker_size: 0.04,
            affine_tolerance: 1e-6,
            rigid_tolerance: 1e-3,
            rotation_max_iter: RotationSolver::MAX_ITER,
            rotation_epsilon: 1e-12,
        }
    }
}
