use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Maximum number of contact points in a single manifold
pub const MAX_MANIFOLD_POINTS: usize = 2;

/// Marks a feature slot that does not take part in a contact
pub const NULL_FEATURE: u8 = u8::MAX;

/// The geometric features that produced a contact point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ContactFeature {
    /// Edge on the reference shape whose plane the point was clipped against
    pub reference_edge: u8,

    /// Edge on the incident shape
    pub incident_edge: u8,

    /// Vertex on the incident shape
    pub incident_vertex: u8,

    /// 1 when the reference shape is the second shape of the pair
    pub flip: u8,
}

/// Stable identity of a contact point across steps
///
/// Two points from consecutive steps are the same physical contact exactly
/// when their ids are equal. The id packs a [`ContactFeature`] into one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ContactId(u32);

impl ContactId {
    /// The id used by single-point shape pairs
    pub const ZERO: Self = Self(0);

    /// Packs the given features into an id
    pub fn from_features(features: ContactFeature) -> Self {
        Self(u32::from_le_bytes([
            features.reference_edge,
            features.incident_edge,
            features.incident_vertex,
            features.flip,
        ]))
    }

    /// Unpacks the features of this id
    pub fn features(self) -> ContactFeature {
        let [reference_edge, incident_edge, incident_vertex, flip] = self.0.to_le_bytes();
        ContactFeature {
            reference_edge,
            incident_edge,
            incident_vertex,
            flip,
        }
    }
}

impl From<ContactFeature> for ContactId {
    fn from(features: ContactFeature) -> Self {
        Self::from_features(features)
    }
}

/// A contact point within a manifold, with the solver state that persists across steps
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ManifoldPoint {
    /// Anchor in the first body's local frame
    pub local_point1: Vector2,

    /// Anchor in the second body's local frame
    pub local_point2: Vector2,

    /// Signed distance along the normal, negative when overlapping
    pub separation: f32,

    /// Accumulated normal impulse
    pub normal_impulse: f32,

    /// Accumulated friction impulse
    pub tangent_impulse: f32,

    /// Feature identity of this point
    pub id: ContactId,
}

impl ManifoldPoint {
    /// Creates a point with zeroed impulses
    pub fn new(local_point1: Vector2, local_point2: Vector2, separation: f32, id: ContactId) -> Self {
        Self {
            local_point1,
            local_point2,
            separation,
            normal_impulse: 0.0,
            tangent_impulse: 0.0,
            id,
        }
    }
}

/// The contact points shared by two shapes along one normal
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Manifold {
    /// World-space normal pointing from the first shape to the second
    pub normal: Vector2,

    points: [ManifoldPoint; MAX_MANIFOLD_POINTS],

    point_count: usize,
}

impl Manifold {
    /// Creates an empty manifold
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of points
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Returns whether the manifold has no points
    pub fn is_empty(&self) -> bool {
        self.point_count == 0
    }

    /// Returns the live points
    pub fn points(&self) -> &[ManifoldPoint] {
        &self.points[..self.point_count]
    }

    /// Returns the live points mutably
    pub fn points_mut(&mut self) -> &mut [ManifoldPoint] {
        &mut self.points[..self.point_count]
    }

    /// Appends a point
    ///
    /// # Panics
    ///
    /// Panics if the manifold already holds [`MAX_MANIFOLD_POINTS`] points.
    pub fn push_point(&mut self, point: ManifoldPoint) {
        assert!(
            self.point_count < MAX_MANIFOLD_POINTS,
            "manifold overflow: more than {} points",
            MAX_MANIFOLD_POINTS
        );
        self.points[self.point_count] = point;
        self.point_count += 1;
    }

    /// Removes all points, leaving the normal untouched
    pub fn clear(&mut self) {
        self.point_count = 0;
    }
}
