use crate::bodies::Material;
use crate::collision::CollisionFilter;
use crate::core::BodyHandle;
use crate::shapes::{CircleShape, PointShape, PolygonShape};

/// The closed set of shape kinds that contact dispatch is keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Circle,
    Point,
    Polygon,
}

impl ShapeKind {
    /// Number of shape kinds, the side length of the dispatch table
    pub const COUNT: usize = 3;

    /// All kinds, in index order
    pub const ALL: [ShapeKind; Self::COUNT] = [ShapeKind::Circle, ShapeKind::Point, ShapeKind::Polygon];

    /// Dense index of this kind in `0..COUNT`
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Geometry of a shape in its body's local frame
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeGeometry {
    Circle(CircleShape),
    Point(PointShape),
    Polygon(PolygonShape),
}

impl ShapeGeometry {
    /// Returns the kind of this geometry
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeGeometry::Circle(_) => ShapeKind::Circle,
            ShapeGeometry::Point(_) => ShapeKind::Point,
            ShapeGeometry::Polygon(_) => ShapeKind::Polygon,
        }
    }
}

impl From<CircleShape> for ShapeGeometry {
    fn from(circle: CircleShape) -> Self {
        ShapeGeometry::Circle(circle)
    }
}

impl From<PointShape> for ShapeGeometry {
    fn from(point: PointShape) -> Self {
        ShapeGeometry::Point(point)
    }
}

impl From<PolygonShape> for ShapeGeometry {
    fn from(polygon: PolygonShape) -> Self {
        ShapeGeometry::Polygon(polygon)
    }
}

/// A collision shape attached to a rigid body
///
/// Shapes are immutable once built and shared between the storage and every
/// contact that references them.
#[derive(Debug, Clone)]
pub struct Shape {
    /// The body this shape is attached to
    body: BodyHandle,

    /// Local geometry
    geometry: ShapeGeometry,

    /// Surface material used to derive contact friction and restitution
    material: Material,

    /// Sensors report contacts but are never solid
    is_sensor: bool,

    /// Category/mask filtering applied when pairs are added
    filter: CollisionFilter,
}

impl Shape {
    /// Creates a new shape on the given body with the default material
    pub fn new(body: BodyHandle, geometry: impl Into<ShapeGeometry>) -> Self {
        Self {
            body,
            geometry: geometry.into(),
            material: Material::default(),
            is_sensor: false,
            filter: CollisionFilter::default(),
        }
    }

    /// Sets the shape's material
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Marks the shape as a sensor
    pub fn with_sensor(mut self, is_sensor: bool) -> Self {
        self.is_sensor = is_sensor;
        self
    }

    /// Sets the shape's collision filter
    pub fn with_filter(mut self, filter: CollisionFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Returns the kind of this shape
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    /// Returns the body this shape is attached to
    pub fn body(&self) -> BodyHandle {
        self.body
    }

    /// Returns the shape's local geometry
    pub fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    /// Returns the shape's material
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Returns the friction coefficient of the shape's material
    pub fn friction(&self) -> f32 {
        self.material.friction
    }

    /// Returns the restitution coefficient of the shape's material
    pub fn restitution(&self) -> f32 {
        self.material.restitution
    }

    /// Returns whether the shape is a sensor
    pub fn is_sensor(&self) -> bool {
        self.is_sensor
    }

    /// Returns the shape's collision filter
    pub fn filter(&self) -> &CollisionFilter {
        &self.filter
    }

    /// Returns the circle geometry, if this is a circle
    pub fn as_circle(&self) -> Option<&CircleShape> {
        match &self.geometry {
            ShapeGeometry::Circle(circle) => Some(circle),
            _ => None,
        }
    }

    /// Returns the point geometry, if this is a point
    pub fn as_point(&self) -> Option<&PointShape> {
        match &self.geometry {
            ShapeGeometry::Point(point) => Some(point),
            _ => None,
        }
    }

    /// Returns the polygon geometry, if this is a polygon
    pub fn as_polygon(&self) -> Option<&PolygonShape> {
        match &self.geometry {
            ShapeGeometry::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }
}
