mod contact;
mod contact_point;
mod contact_generator;
mod factory;
mod listener;
mod manager;

pub use self::contact::{Contact, ContactFlags};
pub use self::contact_point::ContactPoint;
pub use self::contact_generator::{
    default_generators, CircleContactGenerator, ContactGenerator, PointAndCircleContactGenerator,
    PolygonAndCircleContactGenerator, PolygonAndPointContactGenerator, PolygonContactGenerator,
};
pub use self::factory::ContactFactory;
pub use self::listener::ContactListener;
pub use self::manager::ContactManager;
