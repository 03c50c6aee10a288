pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod collision;
pub mod contacts;

/// Re-export common types for easier usage
pub use crate::core::{BodyHandle, ShapeHandle, BodyStorage, ShapeStorage, ContactConfig, EventQueue};
pub use crate::bodies::{RigidBody, RigidBodyType, RigidBodyHandle, Material};
pub use crate::shapes::{Shape, ShapeKind, CircleShape, PointShape, PolygonShape};
pub use crate::collision::{ContactId, Manifold, ManifoldPoint};
pub use crate::contacts::{Contact, ContactFactory, ContactListener, ContactManager, ContactPoint};
pub use crate::math::Vector2;

/// Error types for the contact engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("Contact listener failed: {0}")]
        Listener(#[source] Box<dyn std::error::Error + Send + Sync>),
    }
}

/// Result type for contact engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
