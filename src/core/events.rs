use crate::collision::ContactId;
use crate::contacts::{ContactListener, ContactPoint};
use crate::core::BodyHandle;
use crate::math::Vector2;
use crate::Result;
use std::collections::VecDeque;

/// Types of contact point events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactEventType {
    /// A contact point appeared this step
    Add,

    /// A contact point from the previous step is still present
    Persist,

    /// A contact point from the previous step is gone
    Remove,
}

/// An owned record of one listener notification
#[derive(Debug, Clone, PartialEq)]
pub struct ContactEvent {
    /// The type of contact event
    pub event_type: ContactEventType,

    /// The body carrying the first shape
    pub body_a: BodyHandle,

    /// The body carrying the second shape
    pub body_b: BodyHandle,

    /// World position of the contact point
    pub position: Vector2,

    /// Velocity of the point on body B minus the velocity of the point on body A
    pub relative_velocity: Vector2,

    /// World contact normal, from A to B
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

impl ContactEvent {
    /// Copies a snapshot into an owned event
    pub fn from_point(event_type: ContactEventType, point: &ContactPoint<'_>) -> Self {
        Self {
            event_type,
            body_a: point.shape_a.body(),
            body_b: point.shape_b.body(),
            position: point.position,
            relative_velocity: point.relative_velocity,
            normal: point.normal,
            separation: point.separation,
            id: point.id,
            friction: point.friction,
            restitution: point.restitution,
        }
    }
}

/// A listener that records every notification in arrival order
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<ContactEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Adds an event to the queue
    pub fn push_event(&mut self, event: ContactEvent) {
        self.events.push_back(event);
    }

    /// Gets the next event from the queue
    pub fn next_event(&mut self) -> Option<ContactEvent> {
        self.events.pop_front()
    }

    /// Returns the recorded events in arrival order
    pub fn events(&self) -> impl Iterator<Item = &ContactEvent> {
        self.events.iter()
    }

    /// Returns the number of recorded events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Gets all events of a specific type
    pub fn events_of_type(&self, event_type: ContactEventType) -> Vec<&ContactEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Gets all events involving a specific body
    pub fn events_for_body(&self, body: BodyHandle) -> Vec<&ContactEvent> {
        self.events
            .iter()
            .filter(|e| e.body_a == body || e.body_b == body)
            .collect()
    }
}

impl ContactListener for EventQueue {
    fn add(&mut self, point: &ContactPoint<'_>) -> Result<()> {
        self.push_event(ContactEvent::from_point(ContactEventType::Add, point));
        Ok(())
    }

    fn persist(&mut self, point: &ContactPoint<'_>) -> Result<()> {
        self.push_event(ContactEvent::from_point(ContactEventType::Persist, point));
        Ok(())
    }

    fn remove(&mut self, point: &ContactPoint<'_>) -> Result<()> {
        self.push_event(ContactEvent::from_point(ContactEventType::Remove, point));
        Ok(())
    }
}
