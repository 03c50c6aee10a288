#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Type of rigid body, determining how it takes part in contacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum RigidBodyType {
    /// Dynamic bodies are fully simulated (affected by forces, collisions, etc.)
    #[default]
    Dynamic,

    /// Kinematic bodies are moved programmatically but affect dynamic bodies
    Kinematic,

    /// Static bodies don't move; two static bodies never form a contact
    Static,
}
