use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::Result;

/// A circular collision shape
#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    /// Center of the circle in body-local coordinates
    local_position: Vector2,

    /// The radius of the circle
    radius: f32,
}

impl CircleShape {
    /// Creates a new circle centered on the body origin
    pub fn new(radius: f32) -> Result<Self> {
        Self::with_offset(Vector2::zero(), radius)
    }

    /// Creates a new circle centered at `local_position` in body coordinates
    pub fn with_offset(local_position: Vector2, radius: f32) -> Result<Self> {
        if !(radius >= 0.0) || !radius.is_finite() {
            return Err(PhysicsError::InvalidParameter(format!(
                "Circle radius must be finite and non-negative, got {}",
                radius
            )));
        }

        Ok(Self {
            local_position,
            radius,
        })
    }

    /// Returns the radius of the circle
    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    /// Returns the center of the circle in body-local coordinates
    pub fn get_local_position(&self) -> Vector2 {
        self.local_position
    }
}
