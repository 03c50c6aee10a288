use crate::collision::{
    collide_circles, collide_point_and_circle, collide_polygon_and_circle, collide_polygon_and_point,
    collide_polygons, Manifold,
};
use crate::math::Transform;
use crate::shapes::{Shape, ShapeKind};
use std::fmt::Debug;
use std::sync::Arc;

/// Computes fresh manifolds for one ordered pair of shape kinds
///
/// A generator only ever sees shapes of the kinds returned by
/// [`ContactGenerator::shape_kinds`], in that order; `Contact::new` enforces it.
pub trait ContactGenerator: Send + Sync + Debug {
    /// The ordered pair of shape kinds this generator handles
    fn shape_kinds(&self) -> (ShapeKind, ShapeKind);

    /// Number of independently tracked manifolds per contact
    fn manifold_capacity(&self) -> usize {
        1
    }

    /// Overwrites manifold `index` with the current geometry of the pair
    fn generate(
        &self,
        index: usize,
        manifold: &mut Manifold,
        shape_a: &Shape,
        xf_a: &Transform,
        shape_b: &Shape,
        xf_b: &Transform,
    );
}

fn kind_mismatch(expected: (ShapeKind, ShapeKind), shape_a: &Shape, shape_b: &Shape) -> ! {
    panic!(
        "contact generator for {:?} received {:?}/{:?}",
        expected,
        shape_a.kind(),
        shape_b.kind()
    )
}

/// Circle against circle
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleContactGenerator;

impl ContactGenerator for CircleContactGenerator {
    fn shape_kinds(&self) -> (ShapeKind, ShapeKind) {
        (ShapeKind::Circle, ShapeKind::Circle)
    }

    fn generate(
        &self,
        _index: usize,
        manifold: &mut Manifold,
        shape_a: &Shape,
        xf_a: &Transform,
        shape_b: &Shape,
        xf_b: &Transform,
    ) {
        match (shape_a.as_circle(), shape_b.as_circle()) {
            (Some(circle_a), Some(circle_b)) => collide_circles(manifold, circle_a, xf_a, circle_b, xf_b),
            _ => kind_mismatch(self.shape_kinds(), shape_a, shape_b),
        }
    }
}

/// Point against circle
#[derive(Debug, Clone, Copy, Default)]
pub struct PointAndCircleContactGenerator;

impl ContactGenerator for PointAndCircleContactGenerator {
    fn shape_kinds(&self) -> (ShapeKind, ShapeKind) {
        (ShapeKind::Point, ShapeKind::Circle)
    }

    fn generate(
        &self,
        _index: usize,
        manifold: &mut Manifold,
        shape_a: &Shape,
        xf_a: &Transform,
        shape_b: &Shape,
        xf_b: &Transform,
    ) {
        match (shape_a.as_point(), shape_b.as_circle()) {
            (Some(point), Some(circle)) => collide_point_and_circle(manifold, point, xf_a, circle, xf_b),
            _ => kind_mismatch(self.shape_kinds(), shape_a, shape_b),
        }
    }
}

/// Polygon against circle
#[derive(Debug, Clone, Copy, Default)]
pub struct PolygonAndCircleContactGenerator;

impl ContactGenerator for PolygonAndCircleContactGenerator {
    fn shape_kinds(&self) -> (ShapeKind, ShapeKind) {
        (ShapeKind::Polygon, ShapeKind::Circle)
    }

    fn generate(
        &self,
        _index: usize,
        manifold: &mut Manifold,
        shape_a: &Shape,
        xf_a: &Transform,
        shape_b: &Shape,
        xf_b: &Transform,
    ) {
        match (shape_a.as_polygon(), shape_b.as_circle()) {
            (Some(polygon), Some(circle)) => collide_polygon_and_circle(manifold, polygon, xf_a, circle, xf_b),
            _ => kind_mismatch(self.shape_kinds(), shape_a, shape_b),
        }
    }
}

/// Polygon against point
#[derive(Debug, Clone, Copy, Default)]
pub struct PolygonAndPointContactGenerator;

impl ContactGenerator for PolygonAndPointContactGenerator {
    fn shape_kinds(&self) -> (ShapeKind, ShapeKind) {
        (ShapeKind::Polygon, ShapeKind::Point)
    }

    fn generate(
        &self,
        _index: usize,
        manifold: &mut Manifold,
        shape_a: &Shape,
        xf_a: &Transform,
        shape_b: &Shape,
        xf_b: &Transform,
    ) {
        match (shape_a.as_polygon(), shape_b.as_point()) {
            (Some(polygon), Some(point)) => collide_polygon_and_point(manifold, polygon, xf_a, point, xf_b),
            _ => kind_mismatch(self.shape_kinds(), shape_a, shape_b),
        }
    }
}

/// Polygon against polygon
#[derive(Debug, Clone, Copy, Default)]
pub struct PolygonContactGenerator;

impl ContactGenerator for PolygonContactGenerator {
    fn shape_kinds(&self) -> (ShapeKind, ShapeKind) {
        (ShapeKind::Polygon, ShapeKind::Polygon)
    }

    fn generate(
        &self,
        _index: usize,
        manifold: &mut Manifold,
        shape_a: &Shape,
        xf_a: &Transform,
        shape_b: &Shape,
        xf_b: &Transform,
    ) {
        match (shape_a.as_polygon(), shape_b.as_polygon()) {
            (Some(poly_a), Some(poly_b)) => collide_polygons(manifold, poly_a, xf_a, poly_b, xf_b),
            _ => kind_mismatch(self.shape_kinds(), shape_a, shape_b),
        }
    }
}

/// The generators registered by `ContactFactory::default`
pub fn default_generators() -> Vec<Arc<dyn ContactGenerator>> {
    vec![
        Arc::new(CircleContactGenerator),
        Arc::new(PointAndCircleContactGenerator),
        Arc::new(PolygonAndCircleContactGenerator),
        Arc::new(PolygonAndPointContactGenerator),
        Arc::new(PolygonContactGenerator),
    ]
}
