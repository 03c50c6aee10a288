use crate::bodies::RigidBody;
use crate::collision::{ContactId, ManifoldPoint};
use crate::math::Vector2;
use crate::shapes::Shape;

/// A world-space snapshot of one contact point, built for a single listener call
#[derive(Debug, Clone, Copy)]
pub struct ContactPoint<'a> {
    /// The first shape of the contact
    pub shape_a: &'a Shape,

    /// The second shape of the contact
    pub shape_b: &'a Shape,

    /// World position of the anchor on the first body
    pub position: Vector2,

    /// Velocity of the anchor on body B minus the velocity of the anchor on body A
    pub relative_velocity: Vector2,

    /// World contact normal, pointing from A to B
    pub normal: Vector2,

    /// Signed separation, negative when overlapping
    pub separation: f32,

    /// Feature identity of the point
    pub id: ContactId,

    /// Combined friction of the contact
    pub friction: f32,

    /// Combined restitution of the contact
    pub restitution: f32,
}

impl<'a> ContactPoint<'a> {
    /// Builds a snapshot of `point` from the current kinematic state of both bodies
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_manifold_point(
        shape_a: &'a Shape,
        body_a: &RigidBody,
        shape_b: &'a Shape,
        body_b: &RigidBody,
        normal: Vector2,
        point: &ManifoldPoint,
        friction: f32,
        restitution: f32,
    ) -> Self {
        let v1 = body_a.get_linear_velocity_from_local_point(point.local_point1);
        let v2 = body_b.get_linear_velocity_from_local_point(point.local_point2);

        Self {
            shape_a,
            shape_b,
            position: body_a.get_world_point(point.local_point1),
            relative_velocity: v2 - v1,
            normal,
            separation: point.separation,
            id: point.id,
            friction,
            restitution,
        }
    }
}
