use std::collections::HashMap;

use crate::config::PoseConfig;
use crate::num::{ArucoId, Matrix4, Number};
use crate::pose::MarkerPose;

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

/// A placed object standing in for one observed marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerAnchor {
    pub aruco_id: ArucoId,
    /// Edge length of the placed cube, in metres.
    pub size: Number,
    /// Display hue in degrees, derived from the id.
    pub hue: Number,
    pub world_transform: Matrix4,
}

impl MarkerAnchor {
    pub fn new(aruco_id: ArucoId, size: Number, world_transform: Matrix4) -> Self {
        Self {
            aruco_id,
            size,
            hue: hue_of(aruco_id),
            world_transform,
        }
    }
}

/// Spreads neighbouring ids apart on the colour wheel.
#[inline]
pub fn hue_of(aruco_id: ArucoId) -> Number {
    (i64::from(aruco_id) * 3).rem_euclid(250) as Number
}

/// Outcome of feeding one batch of detections into an [`AnchorMap`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorUpdate {
    pub created: Vec<ArucoId>,
    pub moved: Vec<ArucoId>,
}

impl AnchorUpdate {
    /// A newly placed anchor means the world origin should be re-established.
    #[inline]
    pub fn requires_relocalization(&self) -> bool {
        !self.created.is_empty()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.moved.is_empty()
    }
}

/// One anchor per marker id, kept in world space.
#[derive(Debug, Clone)]
pub struct AnchorMap {
    anchor_size: Number,
    anchors: HashMap<ArucoId, MarkerAnchor>,
}

impl AnchorMap {
    pub fn new(config: &PoseConfig) -> Self {
        Self {
            anchor_size: config.marker_size,
            anchors: HashMap::new(),
        }
    }

    #[inline]
    pub fn find(&self, aruco_id: ArucoId) -> Option<&MarkerAnchor> {
        self.anchors.get(&aruco_id)
    }

    /// Places camera-relative detections into the world.
    pub fn update(&mut self, poses: &[MarkerPose], camera_to_world: &Matrix4) -> AnchorUpdate {
        let mut update = AnchorUpdate::default();

        for pose in poses {
            let world = pose.in_world(camera_to_world);
            let aruco_id = world.aruco_id();

            match self.anchors.get_mut(&aruco_id) {
                Some(anchor) => {
                    anchor.world_transform = *world.transform();
                    update.moved.push(aruco_id);
                }
                None => {
                    debug!("placing anchor for marker {}", aruco_id);
                    let anchor = MarkerAnchor::new(aruco_id, self.anchor_size, *world.transform());
                    self.anchors.insert(aruco_id, anchor);
                    update.created.push(aruco_id);
                }
            }
        }

        if !update.is_empty() {
            debug!(
                "anchor update: {} created, {} moved",
                update.created.len(),
                update.moved.len()
            );
        }
        update
    }

    pub fn remove(&mut self, aruco_id: ArucoId) -> Option<MarkerAnchor> {
        self.anchors.remove(&aruco_id)
    }

    pub fn clear(&mut self) {
        self.anchors.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn ids(&self) -> Vec<ArucoId> {
        self.anchors.keys().copied().sorted().collect_vec()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MarkerAnchor> {
        self.anchors.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::Vector3;

    use approx::assert_relative_eq;

    fn at(aruco_id: ArucoId, x: Number, y: Number, z: Number) -> MarkerPose {
        MarkerPose::new(aruco_id, Matrix4::new_translation(&Vector3::new(x, y, z)))
    }

    #[test]
    fn test_hue() {
        assert_eq!(hue_of(0), 0.0);
        assert_eq!(hue_of(23), 69.0);
        assert_eq!(hue_of(100), 50.0);
        assert_eq!(hue_of(-1), 247.0);
    }

    #[test]
    fn test_first_sighting_creates() {
        let mut map = AnchorMap::new(&PoseConfig::default());
        let camera = Matrix4::new_translation(&Vector3::new(0.0, 1.0, 0.0));

        let update = map.update(&[at(3, 0.0, 0.0, -1.0), at(8, 0.5, 0.0, -1.0)], &camera);
        assert_eq!(update.created, vec![3, 8]);
        assert!(update.moved.is_empty());
        assert!(update.requires_relocalization());

        let anchor = map.find(3).unwrap();
        assert_eq!(anchor.size, 0.04);
        assert_eq!(anchor.hue, 9.0);
        assert_relative_eq!(
            anchor.world_transform,
            Matrix4::new_translation(&Vector3::new(0.0, 1.0, -1.0))
        );
    }

    #[test]
    fn test_resighting_moves() {
        let mut map = AnchorMap::new(&PoseConfig::default());
        map.update(&[at(3, 0.0, 0.0, -1.0)], &Matrix4::identity());

        let update = map.update(
            &[at(3, 0.0, 0.0, -2.0), at(4, 0.0, 0.0, -1.0)],
            &Matrix4::identity(),
        );
        assert_eq!(update.moved, vec![3]);
        assert_eq!(update.created, vec![4]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.find(3).unwrap().world_transform[(2, 3)], -2.0);

        let update = map.update(&[at(4, 0.0, 0.0, -3.0)], &Matrix4::identity());
        assert!(!update.requires_relocalization());
    }

    #[test]
    fn test_duplicate_in_batch_keeps_last() {
        let mut map = AnchorMap::new(&PoseConfig::default());
        let update = map.update(
            &[at(6, 0.0, 0.0, -1.0), at(6, 0.0, 0.0, -4.0)],
            &Matrix4::identity(),
        );

        assert_eq!(update.created, vec![6]);
        assert_eq!(update.moved, vec![6]);
        assert_eq!(map.find(6).unwrap().world_transform[(2, 3)], -4.0);
    }

    #[test]
    fn test_empty_batch() {
        let mut map = AnchorMap::new(&PoseConfig::default());
        let update = map.update(&[], &Matrix4::identity());

        assert!(update.is_empty());
        assert!(map.is_empty());
    }

    #[test]
    fn test_anchor_serde() {
        let anchor = MarkerAnchor::new(
            17,
            0.04,
            Matrix4::new_translation(&Vector3::new(0.1, -0.2, 0.3)),
        );
        let json = serde_json::to_string(&anchor).unwrap();
        let decoded: MarkerAnchor = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, anchor);
        assert_eq!(decoded.hue, 51.0);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut map = AnchorMap::new(&PoseConfig::default());
        map.update(
            &[at(9, 0.0, 0.0, 0.0), at(2, 0.0, 0.0, 0.0), at(5, 0.0, 0.0, 0.0)],
            &Matrix4::identity(),
        );
        assert_eq!(map.ids(), vec![2, 5, 9]);

        assert_eq!(map.remove(5).map(|a| a.aruco_id), Some(5));
        assert!(map.remove(5).is_none());
        assert_eq!(map.iter().count(), 2);

        map.clear();
        assert!(map.is_empty());
    }
}
