use crate::core::ShapeHandle;

/// An unordered pair of shapes that could be in contact
///
/// The handles are stored sorted, so `(a, b)` and `(b, a)` are the same pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollisionPair {
    /// The shape with the smaller handle
    pub shape_a: ShapeHandle,

    /// The shape with the larger handle
    pub shape_b: ShapeHandle,
}

impl CollisionPair {
    /// Creates a new collision pair
    pub fn new(shape_a: ShapeHandle, shape_b: ShapeHandle) -> Self {
        // Always sort the handles to ensure consistent ordering
        if shape_a <= shape_b {
            Self { shape_a, shape_b }
        } else {
            Self { shape_a: shape_b, shape_b: shape_a }
        }
    }

    /// Checks if this collision pair contains the specified shape
    pub fn contains(&self, shape: ShapeHandle) -> bool {
        self.shape_a == shape || self.shape_b == shape
    }
}
