use crate::math::Vector2;
use nalgebra as na;
use std::fmt;
use std::ops::Mul;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A rotation in the plane, stored as the cosine and sine of its angle
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Rotation {
    /// Cosine of the rotation angle
    pub cos: f32,

    /// Sine of the rotation angle
    pub sin: f32,
}

impl Rotation {
    /// Creates the identity rotation
    #[inline]
    pub fn identity() -> Self {
        Self { cos: 1.0, sin: 0.0 }
    }

    /// Creates a rotation from an angle in radians
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        Self::from_nalgebra(&na::UnitComplex::new(angle))
    }

    /// Returns the angle in radians of this rotation (in the range [-PI, PI])
    #[inline]
    pub fn angle(&self) -> f32 {
        self.sin.atan2(self.cos)
    }

    /// Returns the inverse rotation
    #[inline]
    pub fn inverse(&self) -> Self {
        Self { cos: self.cos, sin: -self.sin }
    }

    /// Rotates a vector by this rotation
    #[inline]
    pub fn rotate_vector(&self, v: Vector2) -> Vector2 {
        Vector2::new(
            self.cos * v.x - self.sin * v.y,
            self.sin * v.x + self.cos * v.y,
        )
    }

    /// Rotates a vector by the inverse of this rotation
    #[inline]
    pub fn inverse_rotate_vector(&self, v: Vector2) -> Vector2 {
        Vector2::new(
            self.cos * v.x + self.sin * v.y,
            -self.sin * v.x + self.cos * v.y,
        )
    }

    /// Convert to a nalgebra unit complex number
    #[inline]
    pub fn to_nalgebra(&self) -> na::UnitComplex<f32> {
        na::UnitComplex::from_cos_sin_unchecked(self.cos, self.sin)
    }

    /// Convert from a nalgebra unit complex number
    #[inline]
    pub fn from_nalgebra(rotation: &na::UnitComplex<f32>) -> Self {
        Self {
            cos: rotation.cos_angle(),
            sin: rotation.sin_angle(),
        }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Rotation {
    type Output = Self;

    /// Composes two rotations, applying `rhs` first
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            cos: self.cos * rhs.cos - self.sin * rhs.sin,
            sin: self.sin * rhs.cos + self.cos * rhs.sin,
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Rotation({} rad)", self.angle())
    }
}
