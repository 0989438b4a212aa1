//! Marker poses handed from a fiducial tracker to a scene consumer.
//!
//! The crate's centre is [`MarkerPose`], a marker id paired with a 4x4
//! transform. Around it sit rigid-transform helpers ([`slam3d`]), a
//! per-marker anchor map ([`anchor`]) and camera readings ([`camera`]).

pub mod anchor;
pub mod camera;
pub mod config;
pub mod error;
pub mod num;
pub mod pose;
pub mod slam3d;
pub mod solver;

pub use anchor::{AnchorMap, AnchorUpdate, MarkerAnchor};
pub use camera::CameraReading;
pub use config::PoseConfig;
pub use error::{PoseError, Result};
pub use pose::MarkerPose;
