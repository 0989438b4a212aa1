pub type Number = f64;

/// Marker label assigned by the upstream detector.
pub type ArucoId = i32;

pub type Point3 = nalgebra::Point3<Number>;

pub type Vector3 = nalgebra::Vector3<Number>;

pub type Matrix3 = nalgebra::Matrix3<Number>;
pub type Matrix4 = nalgebra::Matrix4<Number>;

pub type Rotation3 = nalgebra::Rotation3<Number>;
pub type UnitQuaternion = nalgebra::UnitQuaternion<Number>;
