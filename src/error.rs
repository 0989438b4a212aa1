use crate::num::Number;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PoseError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PoseError {
    #[error("Transform contains a non-finite entry")]
    NonFinite,

    #[error("Transform is not affine: bottom row is {0:?}")]
    NotAffine([Number; 4]),

    #[error("Transform collapses axis {axis} (length {length})")]
    Degenerate { axis: usize, length: Number },

    #[error("Transform shears its axes (deviation from orthogonal {0})")]
    Sheared(Number),

    #[error("Transform is not rigid: axis scales are {0:?}")]
    NotRigid([Number; 3]),

    #[error("Transform has no inverse")]
    Singular,
}
