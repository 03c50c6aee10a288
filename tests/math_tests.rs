use phys_contacts::math::{Vector2, Transform, Rotation};
use phys_contacts::bodies::{Material, MixRule, RigidBody, RigidBodyType};
use std::f32::consts::PI;
use approx::assert_relative_eq;

#[test]
fn test_vector2_operations() {
    let v1 = Vector2::new(1.0, 2.0);
    let v2 = Vector2::new(3.0, 5.0);

    // Addition
    let sum = v1 + v2;
    assert_eq!(sum.x, 4.0);
    assert_eq!(sum.y, 7.0);

    // Subtraction
    let diff = v2 - v1;
    assert_eq!(diff.x, 2.0);
    assert_eq!(diff.y, 3.0);

    // Scalar multiplication
    let scaled = v1 * 2.0;
    assert_eq!(scaled, Vector2::new(2.0, 4.0));

    // Dot and cross
    assert_eq!(v1.dot(&v2), 13.0);
    assert_eq!(v1.cross(&v2), 1.0 * 5.0 - 2.0 * 3.0);

    // Normalize
    let normalized = v2.normalize();
    assert_relative_eq!(normalized.length(), 1.0);
    assert_relative_eq!(normalized.x, 3.0 / 34.0f32.sqrt());

    let mut v = Vector2::new(0.0, 4.0);
    assert_relative_eq!(v.normalize_mut(), 4.0);
    assert_eq!(v, Vector2::unit_y());

    // Zero vectors stay zero
    assert_eq!(Vector2::zero().normalize(), Vector2::zero());
}

#[test]
fn test_scalar_cross_products() {
    // s x v rotates v by +90 degrees and scales it
    let v = Vector2::new(1.0, 0.0);
    assert_eq!(Vector2::scalar_cross(2.0, &v), Vector2::new(0.0, 2.0));

    // v x s rotates by -90 degrees
    assert_eq!(v.cross_scalar(2.0), Vector2::new(0.0, -2.0));
    assert_eq!(v.perpendicular(), Vector2::new(0.0, 1.0));
}

#[test]
fn test_rotation() {
    let rotation = Rotation::from_angle(PI / 2.0);
    let rotated = rotation.rotate_vector(Vector2::unit_x());
    assert_relative_eq!(rotated, Vector2::unit_y(), epsilon = 1e-6);

    let back = rotation.inverse_rotate_vector(rotated);
    assert_relative_eq!(back, Vector2::unit_x(), epsilon = 1e-6);

    assert_relative_eq!(rotation.angle(), PI / 2.0, epsilon = 1e-6);
    assert_relative_eq!((rotation * rotation).angle().abs(), PI, epsilon = 1e-5);
}

#[test]
fn test_transform_round_trip_through_nalgebra() {
    let transform = Transform::from_position_angle(Vector2::new(1.0, -2.0), 0.3);
    let point = Vector2::new(0.5, 0.25);

    let world = transform.transform_point(point);
    let local = transform.inverse_transform_point(world);
    assert_relative_eq!(local, point, epsilon = 1e-6);

    let iso = transform.to_nalgebra();
    let na_world = iso * nalgebra::Point2::new(point.x, point.y);
    assert_relative_eq!(world.x, na_world.x, epsilon = 1e-6);
    assert_relative_eq!(world.y, na_world.y, epsilon = 1e-6);

    let restored = Transform::from_nalgebra(&iso);
    assert_relative_eq!(restored.position, transform.position, epsilon = 1e-6);
    assert_relative_eq!(restored.rotation.angle(), 0.3, epsilon = 1e-6);

    let inverse = transform.inverse();
    assert_relative_eq!(inverse.transform_point(world), point, epsilon = 1e-6);
}

#[test]
fn test_point_velocity_on_spinning_body() {
    let mut body = RigidBody::new_dynamic(Vector2::new(2.0, 0.0));
    body.set_linear_velocity(Vector2::new(1.0, 0.0));
    body.set_angular_velocity(3.0);

    // A point one unit above the center moves left from the spin
    let v = body.get_linear_velocity_from_world_point(Vector2::new(2.0, 1.0));
    assert_relative_eq!(v, Vector2::new(1.0 - 3.0, 0.0), epsilon = 1e-6);

    let same = body.get_linear_velocity_from_local_point(Vector2::new(0.0, 1.0));
    assert_relative_eq!(same, v, epsilon = 1e-6);
}

#[test]
fn test_body_frame_with_offset_center() {
    let mut body = RigidBody::new_kinematic(Vector2::new(1.0, 1.0));
    assert_eq!(body.get_body_type(), RigidBodyType::Kinematic);

    body.set_angle(PI / 2.0);
    body.set_local_center(Vector2::new(1.0, 0.0));
    assert_eq!(body.get_local_center(), Vector2::new(1.0, 0.0));
    assert_eq!(body.get_position(), Vector2::new(1.0, 1.0));
    assert_relative_eq!(body.get_rotation().angle(), PI / 2.0, epsilon = 1e-6);

    // The center of mass ends up above the origin after the quarter turn
    assert_relative_eq!(body.get_world_center(), Vector2::new(1.0, 2.0), epsilon = 1e-6);
    assert_relative_eq!(body.get_world_vector(Vector2::unit_x()), Vector2::unit_y(), epsilon = 1e-6);

    let world = body.get_world_point(Vector2::new(0.5, 0.25));
    assert_relative_eq!(body.get_local_point(world), Vector2::new(0.5, 0.25), epsilon = 1e-6);

    // Spinning about the offset center, the body origin moves along +x
    body.set_angular_velocity(2.0);
    let v = body.get_linear_velocity_from_world_point(body.get_position());
    assert_relative_eq!(v, Vector2::new(2.0, 0.0), epsilon = 1e-6);
}

#[test]
fn test_static_body_ignores_velocity() {
    let mut body = RigidBody::new_static(Vector2::zero());
    body.set_linear_velocity(Vector2::new(5.0, 5.0));
    body.set_angular_velocity(1.0);

    assert_eq!(body.get_linear_velocity(), Vector2::zero());
    assert_eq!(body.get_angular_velocity(), 0.0);
}

#[test]
fn test_material_mixing() {
    let rubber = Material::rubber();
    let ice = Material::ice();

    assert_relative_eq!(
        MixRule::GeometricMean.combine(rubber.friction, ice.friction),
        (rubber.friction * ice.friction).sqrt()
    );
    assert_eq!(MixRule::Max.combine(0.2, 0.8), 0.8);
    assert_eq!(MixRule::Min.combine(0.2, 0.8), 0.2);
    assert_relative_eq!(MixRule::Average.combine(0.2, 0.8), 0.5);
    assert_relative_eq!(MixRule::Multiply.combine(0.5, 0.5), 0.25);
}
