mod vector;
mod rotation;
mod transform;

pub use vector::Vector2;
pub use rotation::Rotation;
pub use transform::Transform;

/// Constant for a very small number, used for comparisons
pub const EPSILON: f32 = 1.0e-6;
