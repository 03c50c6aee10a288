use crate::math::Vector2;

/// A single point fixed to a body, colliding with zero radius
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointShape {
    /// Location of the point in body-local coordinates
    local_position: Vector2,
}

impl PointShape {
    /// Creates a new point at the given body-local position
    pub fn new(local_position: Vector2) -> Self {
        Self { local_position }
    }

    /// Returns the point in body-local coordinates
    pub fn get_local_position(&self) -> Vector2 {
        self.local_position
    }
}
