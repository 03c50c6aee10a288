mod manifold;
mod collide_circle;
mod collide_polygon;
mod collision_filter;
mod collision_pair;

pub use self::manifold::{
    ContactFeature, ContactId, Manifold, ManifoldPoint, MAX_MANIFOLD_POINTS, NULL_FEATURE,
};
pub use self::collide_circle::{
    collide_circles, collide_point_and_circle, collide_polygon_and_circle, collide_polygon_and_point,
};
pub use self::collide_polygon::collide_polygons;
pub use self::collision_filter::{CollisionFilter, CollisionGroup, CollisionMask};
pub use self::collision_pair::CollisionPair;
