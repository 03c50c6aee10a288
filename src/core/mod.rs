pub mod config;
pub mod storage;
pub mod events;

pub use self::config::ContactConfig;
pub use self::storage::{BodyStorage, ShapeStorage, Storage};
pub use self::events::{ContactEvent, ContactEventType, EventQueue};

/// A unique identifier for a body in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) u32);

/// A unique identifier for a shape in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeHandle(pub(crate) u32);
