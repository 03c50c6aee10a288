use phys_contacts::collision::{
    collide_circles, collide_point_and_circle, collide_polygon_and_circle, collide_polygon_and_point,
    collide_polygons, CollisionFilter, CollisionGroup, CollisionPair, Manifold, ContactId, NULL_FEATURE,
};
use phys_contacts::bodies::RigidBody;
use phys_contacts::core::{BodyStorage, ShapeStorage, Storage};
use phys_contacts::error::PhysicsError;
use phys_contacts::math::{Transform, Vector2};
use phys_contacts::shapes::{CircleShape, PointShape, PolygonShape, Shape};
use approx::assert_relative_eq;
use std::f32::consts::PI;

fn at(x: f32, y: f32) -> Transform {
    Transform::from_position(Vector2::new(x, y))
}

#[test]
fn test_circles_touching() {
    let circle = CircleShape::new(1.0).unwrap();
    let mut manifold = Manifold::new();

    collide_circles(&mut manifold, &circle, &at(0.0, 0.0), &circle, &at(1.5, 0.0));

    assert_eq!(manifold.point_count(), 1);
    assert_relative_eq!(manifold.normal, Vector2::unit_x(), epsilon = 1e-6);

    let point = manifold.points()[0];
    assert_relative_eq!(point.separation, -0.5, epsilon = 1e-6);
    assert_eq!(point.id, ContactId::ZERO);
    assert_relative_eq!(point.local_point1, Vector2::new(0.75, 0.0), epsilon = 1e-6);
    assert_relative_eq!(point.local_point2, Vector2::new(-0.75, 0.0), epsilon = 1e-6);
}

#[test]
fn test_circles_apart_clear_manifold() {
    let circle = CircleShape::new(1.0).unwrap();
    let mut manifold = Manifold::new();

    collide_circles(&mut manifold, &circle, &at(0.0, 0.0), &circle, &at(1.5, 0.0));
    assert!(!manifold.is_empty());

    collide_circles(&mut manifold, &circle, &at(0.0, 0.0), &circle, &at(2.5, 0.0));
    assert!(manifold.is_empty());
}

#[test]
fn test_concentric_circles_use_fallback_normal() {
    let circle = CircleShape::new(0.5).unwrap();
    let mut manifold = Manifold::new();

    collide_circles(&mut manifold, &circle, &at(1.0, 1.0), &circle, &at(1.0, 1.0));

    assert_eq!(manifold.point_count(), 1);
    assert_eq!(manifold.normal, Vector2::unit_y());
    assert_relative_eq!(manifold.points()[0].separation, -1.0);
}

#[test]
fn test_circle_offset_is_respected() {
    let offset = CircleShape::with_offset(Vector2::new(1.0, 0.0), 0.5).unwrap();
    let centered = CircleShape::new(0.5).unwrap();
    let mut manifold = Manifold::new();

    // The offset circle sits at x = 1, overlapping the other at x = 1.8
    collide_circles(&mut manifold, &offset, &at(0.0, 0.0), &centered, &at(1.8, 0.0));

    assert_eq!(manifold.point_count(), 1);
    assert_relative_eq!(manifold.points()[0].separation, -0.2, epsilon = 1e-5);
}

#[test]
fn test_point_inside_circle() {
    let point = PointShape::new(Vector2::zero());
    let circle = CircleShape::new(1.0).unwrap();
    let mut manifold = Manifold::new();

    collide_point_and_circle(&mut manifold, &point, &at(0.0, 0.0), &circle, &at(0.0, 0.9));

    assert_eq!(manifold.point_count(), 1);
    assert_relative_eq!(manifold.normal, Vector2::unit_y(), epsilon = 1e-6);

    let contact = manifold.points()[0];
    assert_relative_eq!(contact.separation, -0.1, epsilon = 1e-5);
    assert_relative_eq!(contact.local_point1, Vector2::new(0.0, -0.05), epsilon = 1e-5);
    assert_relative_eq!(contact.local_point2, Vector2::new(0.0, -0.95), epsilon = 1e-5);
}

#[test]
fn test_point_outside_circle() {
    let point = PointShape::new(Vector2::zero());
    let circle = CircleShape::new(1.0).unwrap();
    let mut manifold = Manifold::new();

    collide_point_and_circle(&mut manifold, &point, &at(0.0, 0.0), &circle, &at(0.0, 1.1));

    assert!(manifold.is_empty());
}

#[test]
fn test_polygon_and_circle_face_region() {
    let ground = PolygonShape::new_box(2.0, 0.5).unwrap();
    let circle = CircleShape::new(0.5).unwrap();
    let mut manifold = Manifold::new();

    collide_polygon_and_circle(&mut manifold, &ground, &at(0.0, 0.0), &circle, &at(0.3, 0.9));

    assert_eq!(manifold.point_count(), 1);
    assert_relative_eq!(manifold.normal, Vector2::unit_y(), epsilon = 1e-6);

    let point = manifold.points()[0];
    assert_relative_eq!(point.separation, -0.1, epsilon = 1e-5);

    let features = point.id.features();
    assert_eq!(features.incident_vertex, NULL_FEATURE);
    assert_ne!(features.incident_edge, NULL_FEATURE);
}

#[test]
fn test_polygon_and_circle_vertex_region() {
    let ground = PolygonShape::new_box(1.0, 1.0).unwrap();
    let circle = CircleShape::new(0.5).unwrap();
    let mut manifold = Manifold::new();

    // Diagonally beyond the (1, 1) corner
    collide_polygon_and_circle(&mut manifold, &ground, &at(0.0, 0.0), &circle, &at(1.3, 1.3));

    assert_eq!(manifold.point_count(), 1);
    let diagonal = Vector2::new(1.0, 1.0).normalize();
    assert_relative_eq!(manifold.normal, diagonal, epsilon = 1e-5);

    let expected = 0.3 * 2.0f32.sqrt() - 0.5;
    assert_relative_eq!(manifold.points()[0].separation, expected, epsilon = 1e-5);

    let features = manifold.points()[0].id.features();
    assert_eq!(features.incident_edge, NULL_FEATURE);
    assert_eq!(features.incident_vertex, 2);
}

#[test]
fn test_polygon_and_circle_center_inside() {
    let ground = PolygonShape::new_box(1.0, 1.0).unwrap();
    let circle = CircleShape::new(0.25).unwrap();
    let mut manifold = Manifold::new();

    collide_polygon_and_circle(&mut manifold, &ground, &at(0.0, 0.0), &circle, &at(0.0, 0.8));

    assert_eq!(manifold.point_count(), 1);
    assert_relative_eq!(manifold.normal, Vector2::unit_y(), epsilon = 1e-6);
    assert_relative_eq!(manifold.points()[0].separation, -0.2 - 0.25, epsilon = 1e-5);
}

#[test]
fn test_polygon_and_point() {
    let ground = PolygonShape::new_box(1.0, 1.0).unwrap();
    let point = PointShape::new(Vector2::zero());
    let mut manifold = Manifold::new();

    collide_polygon_and_point(&mut manifold, &ground, &at(0.0, 0.0), &point, &at(0.95, 0.0));
    assert_eq!(manifold.point_count(), 1);
    assert_relative_eq!(manifold.normal, Vector2::unit_x(), epsilon = 1e-6);
    assert_relative_eq!(manifold.points()[0].separation, -0.05, epsilon = 1e-5);

    collide_polygon_and_point(&mut manifold, &ground, &at(0.0, 0.0), &point, &at(1.05, 0.0));
    assert!(manifold.is_empty());
}

#[test]
fn test_polygons_resting_box() {
    let ground = PolygonShape::new_box(5.0, 0.5).unwrap();
    let crate_box = PolygonShape::new_box(0.5, 0.5).unwrap();
    let mut manifold = Manifold::new();

    collide_polygons(&mut manifold, &ground, &at(0.0, 0.0), &crate_box, &at(0.0, 0.95));

    assert_eq!(manifold.point_count(), 2);
    assert_relative_eq!(manifold.normal, Vector2::unit_y(), epsilon = 1e-6);

    for point in manifold.points() {
        assert_relative_eq!(point.separation, -0.05, epsilon = 1e-5);
        assert_eq!(point.id.features().flip, 0);
    }
    assert_ne!(manifold.points()[0].id, manifold.points()[1].id);
}

#[test]
fn test_polygons_normal_points_from_first_to_second() {
    let small = PolygonShape::new_box(0.5, 0.5).unwrap();
    let large = PolygonShape::new_box(5.0, 0.5).unwrap();
    let mut manifold = Manifold::new();

    // The small box is shape A and sits on top of the large one
    collide_polygons(&mut manifold, &small, &at(0.0, 0.95), &large, &at(0.0, 0.0));

    assert_eq!(manifold.point_count(), 2);
    assert_relative_eq!(manifold.normal, -Vector2::unit_y(), epsilon = 1e-6);
    for point in manifold.points() {
        assert_relative_eq!(point.separation, -0.05, epsilon = 1e-5);
    }
}

#[test]
fn test_polygons_separated() {
    let a = PolygonShape::new_box(0.5, 0.5).unwrap();
    let mut manifold = Manifold::new();

    collide_polygons(&mut manifold, &a, &at(0.0, 0.0), &a, &at(1.1, 0.0));

    assert!(manifold.is_empty());
}

#[test]
fn test_rotated_polygon_touches_by_corner() {
    let ground = PolygonShape::new_box(5.0, 0.5).unwrap();
    let diamond = PolygonShape::new_box(0.5, 0.5).unwrap();
    let mut manifold = Manifold::new();

    let corner_depth = 0.5 * 2.0f32.sqrt();
    let xf = Transform::from_position_angle(
        Vector2::new(0.0, 0.5 + corner_depth - 0.02),
        std::f32::consts::FRAC_PI_4,
    );
    collide_polygons(&mut manifold, &ground, &at(0.0, 0.0), &diamond, &xf);

    assert_eq!(manifold.point_count(), 1);
    assert_relative_eq!(manifold.points()[0].separation, -0.02, epsilon = 1e-4);
}

#[test]
fn test_invalid_shapes_are_rejected() {
    assert!(matches!(CircleShape::new(-1.0), Err(PhysicsError::InvalidParameter(_))));
    assert!(CircleShape::new(f32::NAN).is_err());

    // Too few vertices
    assert!(PolygonShape::new(&[Vector2::zero(), Vector2::unit_x()]).is_err());

    // Clockwise winding
    let clockwise = [
        Vector2::new(0.0, 0.0),
        Vector2::new(0.0, 1.0),
        Vector2::new(1.0, 0.0),
    ];
    assert!(PolygonShape::new(&clockwise).is_err());

    // Repeated vertex
    let degenerate = [
        Vector2::new(0.0, 0.0),
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 1.0),
    ];
    assert!(PolygonShape::new(&degenerate).is_err());
}

#[test]
fn test_polygon_normals_point_outward() {
    let polygon = PolygonShape::new_box(1.0, 2.0).unwrap();
    let normals = polygon.get_normals();

    assert_relative_eq!(normals[0], Vector2::new(0.0, -1.0), epsilon = 1e-6);
    assert_relative_eq!(normals[1], Vector2::new(1.0, 0.0), epsilon = 1e-6);
    assert_relative_eq!(normals[2], Vector2::new(0.0, 1.0), epsilon = 1e-6);
    assert_relative_eq!(normals[3], Vector2::new(-1.0, 0.0), epsilon = 1e-6);
    assert_relative_eq!(polygon.get_centroid(), Vector2::zero(), epsilon = 1e-6);
}

#[test]
fn test_oriented_box_vertices() {
    let polygon = PolygonShape::new_oriented_box(1.0, 0.5, Vector2::new(2.0, 0.0), PI / 2.0).unwrap();

    assert_eq!(polygon.vertex_count(), 4);
    assert_relative_eq!(polygon.get_vertices()[0], Vector2::new(2.5, -1.0), epsilon = 1e-6);
    assert_relative_eq!(polygon.get_vertices()[2], Vector2::new(1.5, 1.0), epsilon = 1e-6);
    assert_relative_eq!(polygon.get_normals()[0], Vector2::new(1.0, 0.0), epsilon = 1e-6);
    assert_relative_eq!(polygon.get_centroid(), Vector2::new(2.0, 0.0), epsilon = 1e-6);
}

#[test]
fn test_collision_filter_rules() {
    let default = CollisionFilter::default();
    assert!(default.should_collide(&default));

    let debris = CollisionFilter::new(CollisionGroup::DEBRIS, CollisionGroup::STATIC);
    let dynamic = CollisionFilter::new(CollisionGroup::DYNAMIC, CollisionGroup::ALL);
    assert!(!debris.should_collide(&dynamic));

    let ground = CollisionFilter::new(CollisionGroup::STATIC, CollisionGroup::ALL);
    assert!(debris.should_collide(&ground));

    // A shared negative group never collides, a shared positive one always does
    let ragdoll = CollisionFilter::default().with_group_index(-3);
    assert!(!ragdoll.should_collide(&ragdoll));

    let squad = debris.with_group_index(2);
    assert!(squad.should_collide(&dynamic.with_group_index(2)));
}

#[test]
fn test_collision_pair_is_order_independent() {
    let mut bodies: BodyStorage<RigidBody> = BodyStorage::new();
    let body = bodies.add(RigidBody::new_dynamic(Vector2::zero()));

    let mut shapes = ShapeStorage::new();
    let a = shapes.insert(Shape::new(body, PointShape::new(Vector2::zero())));
    let b = shapes.insert(Shape::new(body, PointShape::new(Vector2::unit_x())));

    let pair = CollisionPair::new(b, a);
    assert_eq!(pair, CollisionPair::new(a, b));
    assert_eq!(pair.shape_a, a);
    assert_eq!(pair.shape_b, b);
    assert!(pair.contains(a) && pair.contains(b));
}

#[test]
fn test_polygons_flip_when_second_face_is_better() {
    let diamond = PolygonShape::new_box(0.5, 0.5).unwrap();
    let ground = PolygonShape::new_box(5.0, 0.5).unwrap();
    let mut manifold = Manifold::new();

    let corner_depth = 0.5 * 2.0f32.sqrt();
    let xf = Transform::from_position_angle(
        Vector2::new(0.0, 0.5 + corner_depth - 0.02),
        std::f32::consts::FRAC_PI_4,
    );

    // The ground's top face is the reference even though the ground is shape B
    collide_polygons(&mut manifold, &diamond, &xf, &ground, &at(0.0, 0.0));

    assert_eq!(manifold.point_count(), 1);
    assert_relative_eq!(manifold.normal, -Vector2::unit_y(), epsilon = 1e-5);

    let point = manifold.points()[0];
    assert_eq!(point.id.features().flip, 1);
    assert_relative_eq!(point.separation, -0.02, epsilon = 1e-4);
}
