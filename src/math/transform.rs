use crate::math::{Rotation, Vector2};
use nalgebra as na;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Represents a rigid transformation in 2D space (position and rotation)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Transform {
    /// Position in 2D space
    pub position: Vector2,

    /// Rotation about the origin
    pub rotation: Rotation,
}

impl Transform {
    /// Creates a new transform with the given position and rotation
    #[inline]
    pub fn new(position: Vector2, rotation: Rotation) -> Self {
        Self { position, rotation }
    }

    /// Creates a new identity transform (no translation, no rotation)
    #[inline]
    pub fn identity() -> Self {
        Self {
            position: Vector2::zero(),
            rotation: Rotation::identity(),
        }
    }

    /// Creates a new transform from just a position
    #[inline]
    pub fn from_position(position: Vector2) -> Self {
        Self {
            position,
            rotation: Rotation::identity(),
        }
    }

    /// Creates a new transform from a position and an angle in radians
    #[inline]
    pub fn from_position_angle(position: Vector2, angle: f32) -> Self {
        Self {
            position,
            rotation: Rotation::from_angle(angle),
        }
    }

    /// Transforms a point from local space to world space
    #[inline]
    pub fn transform_point(&self, point: Vector2) -> Vector2 {
        self.position + self.rotation.rotate_vector(point)
    }

    /// Transforms a point from world space to local space
    #[inline]
    pub fn inverse_transform_point(&self, point: Vector2) -> Vector2 {
        self.rotation.inverse_rotate_vector(point - self.position)
    }

    /// Transforms a direction from local space to world space (ignores translation)
    #[inline]
    pub fn transform_direction(&self, direction: Vector2) -> Vector2 {
        self.rotation.rotate_vector(direction)
    }

    /// Transforms a direction from world space to local space (ignores translation)
    #[inline]
    pub fn inverse_transform_direction(&self, direction: Vector2) -> Vector2 {
        self.rotation.inverse_rotate_vector(direction)
    }

    /// Returns the inverse of this transform
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        Self {
            position: rotation.rotate_vector(-self.position),
            rotation,
        }
    }

    /// Convert to a nalgebra isometry
    pub fn to_nalgebra(&self) -> na::Isometry2<f32> {
        na::Isometry2::from_parts(
            na::Translation2::new(self.position.x, self.position.y),
            self.rotation.to_nalgebra(),
        )
    }

    /// Convert from a nalgebra isometry
    pub fn from_nalgebra(isometry: &na::Isometry2<f32>) -> Self {
        Self {
            position: Vector2::from_nalgebra(&isometry.translation.vector),
            rotation: Rotation::from_nalgebra(&isometry.rotation),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
