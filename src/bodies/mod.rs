mod rigid_body;
mod material;
mod body_type;

pub use self::rigid_body::{RigidBody, RigidBodyHandle};
pub use self::material::{Material, MixRule};
pub use self::body_type::RigidBodyType;
