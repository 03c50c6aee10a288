mod shape;
mod circle;
mod point;
mod polygon;

pub use self::shape::{Shape, ShapeGeometry, ShapeKind};
pub use self::circle::CircleShape;
pub use self::point::PointShape;
pub use self::polygon::{PolygonShape, MAX_POLYGON_VERTICES};
