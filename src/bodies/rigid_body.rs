use crate::bodies::RigidBodyType;
use crate::core::BodyHandle;
use crate::math::{Rotation, Transform, Vector2};

/// Type alias for a handle to a rigid body
pub type RigidBodyHandle = BodyHandle;

/// The kinematic state of a rigid body as seen by contact evaluation
///
/// Contacts only ever read bodies; the solver that owns the step is the
/// one writing velocities and transforms between evaluations.
#[derive(Debug, Clone)]
pub struct RigidBody {
    /// The body's transform in world space (origin of the body frame)
    transform: Transform,

    /// Center of mass in body-local coordinates
    local_center: Vector2,

    /// The body's linear velocity (of the center of mass)
    linear_velocity: Vector2,

    /// The body's angular velocity in radians per second
    angular_velocity: f32,

    /// The body's type (dynamic, kinematic, or static)
    body_type: RigidBodyType,

    /// Whether the body is currently asleep
    sleeping: bool,
}

impl RigidBody {
    /// Creates a new rigid body with the given transform
    pub fn new(transform: Transform, body_type: RigidBodyType) -> Self {
        Self {
            transform,
            local_center: Vector2::zero(),
            linear_velocity: Vector2::zero(),
            angular_velocity: 0.0,
            body_type,
            sleeping: false,
        }
    }

    /// Creates a new dynamic rigid body at the given position
    pub fn new_dynamic(position: Vector2) -> Self {
        Self::new(Transform::from_position(position), RigidBodyType::Dynamic)
    }

    /// Creates a new kinematic rigid body at the given position
    pub fn new_kinematic(position: Vector2) -> Self {
        Self::new(Transform::from_position(position), RigidBodyType::Kinematic)
    }

    /// Creates a new static rigid body at the given position
    pub fn new_static(position: Vector2) -> Self {
        Self::new(Transform::from_position(position), RigidBodyType::Static)
    }

    /// Returns the body's transform
    pub fn get_transform(&self) -> &Transform {
        &self.transform
    }

    /// Sets the body's transform
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Returns the body's origin in world space
    pub fn get_position(&self) -> Vector2 {
        self.transform.position
    }

    /// Sets the body's origin in world space
    pub fn set_position(&mut self, position: Vector2) {
        self.transform.position = position;
    }

    /// Returns the body's rotation
    pub fn get_rotation(&self) -> Rotation {
        self.transform.rotation
    }

    /// Sets the body's rotation from an angle in radians
    pub fn set_angle(&mut self, angle: f32) {
        self.transform.rotation = Rotation::from_angle(angle);
    }

    /// Returns the center of mass in body-local coordinates
    pub fn get_local_center(&self) -> Vector2 {
        self.local_center
    }

    /// Sets the center of mass in body-local coordinates
    pub fn set_local_center(&mut self, local_center: Vector2) {
        self.local_center = local_center;
    }

    /// Returns the center of mass in world space
    pub fn get_world_center(&self) -> Vector2 {
        self.transform.transform_point(self.local_center)
    }

    /// Returns the linear velocity of the center of mass
    pub fn get_linear_velocity(&self) -> Vector2 {
        self.linear_velocity
    }

    /// Sets the linear velocity of the center of mass
    pub fn set_linear_velocity(&mut self, velocity: Vector2) {
        if self.body_type == RigidBodyType::Static {
            return;
        }
        self.linear_velocity = velocity;
    }

    /// Returns the angular velocity in radians per second
    pub fn get_angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    /// Sets the angular velocity in radians per second
    pub fn set_angular_velocity(&mut self, omega: f32) {
        if self.body_type == RigidBodyType::Static {
            return;
        }
        self.angular_velocity = omega;
    }

    /// Returns the body's type
    pub fn get_body_type(&self) -> RigidBodyType {
        self.body_type
    }

    /// Returns whether the body is static
    pub fn is_static(&self) -> bool {
        self.body_type == RigidBodyType::Static
    }

    /// Returns whether the body is asleep
    pub fn is_sleeping(&self) -> bool {
        self.sleeping
    }

    /// Puts the body to sleep and clears its velocities
    pub fn put_to_sleep(&mut self) {
        self.sleeping = true;
        self.linear_velocity = Vector2::zero();
        self.angular_velocity = 0.0;
    }

    /// Wakes the body up
    pub fn wake_up(&mut self) {
        self.sleeping = false;
    }

    /// Gets the world coordinates of a point given in body-local coordinates
    pub fn get_world_point(&self, local_point: Vector2) -> Vector2 {
        self.transform.transform_point(local_point)
    }

    /// Gets the world coordinates of a vector given in body-local coordinates
    pub fn get_world_vector(&self, local_vector: Vector2) -> Vector2 {
        self.transform.transform_direction(local_vector)
    }

    /// Gets the body-local coordinates of a point given in world coordinates
    pub fn get_local_point(&self, world_point: Vector2) -> Vector2 {
        self.transform.inverse_transform_point(world_point)
    }

    /// Gets the velocity of a point attached to the body, given in world coordinates
    pub fn get_linear_velocity_from_world_point(&self, world_point: Vector2) -> Vector2 {
        let arm = world_point - self.get_world_center();
        self.linear_velocity + Vector2::scalar_cross(self.angular_velocity, &arm)
    }

    /// Gets the velocity of a point attached to the body, given in body-local coordinates
    pub fn get_linear_velocity_from_local_point(&self, local_point: Vector2) -> Vector2 {
        self.get_linear_velocity_from_world_point(self.get_world_point(local_point))
    }
}
