use crate::bodies::RigidBody;
use crate::collision::CollisionPair;
use crate::contacts::{Contact, ContactFactory, ContactListener};
use crate::core::{BodyStorage, ContactConfig, ShapeHandle, ShapeStorage};
use crate::Result;
use log::{debug, trace};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Owner of the live contacts between shape pairs
///
/// The manager is driven by a broad phase: it is told which pairs start and
/// stop overlapping, and evaluates every live contact once per step.
#[derive(Debug, Default)]
pub struct ContactManager {
    factory: ContactFactory,
    contacts: BTreeMap<CollisionPair, Contact>,
}

impl ContactManager {
    /// Creates a manager that builds contacts with `factory`
    pub fn new(factory: ContactFactory) -> Self {
        Self {
            factory,
            contacts: BTreeMap::new(),
        }
    }

    /// Starts tracking the pair `(a, b)`
    ///
    /// Returns `Ok(false)` when no contact was created: the pair is already
    /// tracked, both shapes sit on the same body, both bodies are static, the
    /// filters reject the pair, or no generator handles the shape kinds.
    pub fn add_pair(
        &mut self,
        shapes: &ShapeStorage,
        bodies: &BodyStorage<RigidBody>,
        a: ShapeHandle,
        b: ShapeHandle,
    ) -> Result<bool> {
        let pair = CollisionPair::new(a, b);
        if self.contacts.contains_key(&pair) {
            return Ok(false);
        }

        let shape_a = shapes.get_shape(pair.shape_a)?;
        let shape_b = shapes.get_shape(pair.shape_b)?;

        if shape_a.body() == shape_b.body() {
            return Ok(false);
        }

        let body_a = bodies.get_body(shape_a.body())?;
        let body_b = bodies.get_body(shape_b.body())?;
        if body_a.is_static() && body_b.is_static() {
            return Ok(false);
        }

        if !shape_a.filter().should_collide(shape_b.filter()) {
            trace!("pair {:?} rejected by collision filter", pair);
            return Ok(false);
        }

        match self.factory.create(Arc::clone(shape_a), Arc::clone(shape_b)) {
            Some(contact) => {
                self.contacts.insert(pair, contact);
                Ok(true)
            }
            None => {
                debug!(
                    "no contact generator for {:?}/{:?}, pair {:?} ignored",
                    shape_a.kind(),
                    shape_b.kind(),
                    pair
                );
                Ok(false)
            }
        }
    }

    /// Stops tracking the pair `(a, b)` and destroys its contact
    ///
    /// Every point still held by the contact is reported to `listener` as
    /// removed. The contact is destroyed even when the listener fails.
    pub fn remove_pair(
        &mut self,
        a: ShapeHandle,
        b: ShapeHandle,
        bodies: &BodyStorage<RigidBody>,
        listener: Option<&mut (dyn ContactListener + '_)>,
    ) -> Result<bool> {
        let Some(contact) = self.contacts.remove(&CollisionPair::new(a, b)) else {
            return Ok(false);
        };

        let reported = match listener {
            Some(listener) => contact.report_removal(bodies, listener),
            None => Ok(()),
        };
        contact.destroy();

        reported.map(|_| true)
    }

    /// Removes every pair involving `shape`, returning how many were removed
    pub fn remove_shape(
        &mut self,
        shape: ShapeHandle,
        bodies: &BodyStorage<RigidBody>,
        mut listener: Option<&mut (dyn ContactListener + '_)>,
    ) -> Result<usize> {
        let pairs: Vec<CollisionPair> = self
            .contacts
            .keys()
            .filter(|pair| pair.contains(shape))
            .copied()
            .collect();

        for pair in &pairs {
            self.remove_pair(pair.shape_a, pair.shape_b, bodies, listener.as_deref_mut())?;
        }

        Ok(pairs.len())
    }

    /// Evaluates every live contact once, in pair order
    ///
    /// Stops at the first error, which is returned. Contacts evaluated before
    /// the failure keep their new state.
    pub fn collide(
        &mut self,
        bodies: &BodyStorage<RigidBody>,
        mut listener: Option<&mut (dyn ContactListener + '_)>,
    ) -> Result<()> {
        let skip_sleeping = self.factory.config().skip_sleeping_pairs;

        for contact in self.contacts.values_mut() {
            if skip_sleeping && Self::both_asleep(contact, bodies)? {
                continue;
            }

            contact.evaluate(bodies, listener.as_deref_mut())?;
        }

        Ok(())
    }

    fn both_asleep(contact: &Contact, bodies: &BodyStorage<RigidBody>) -> Result<bool> {
        let body_a = bodies.get_body(contact.shape_a().body())?;
        let body_b = bodies.get_body(contact.shape_b().body())?;
        Ok(body_a.is_sleeping() && body_b.is_sleeping())
    }

    /// Gets the contact for the pair `(a, b)`, in either order
    pub fn get_contact(&self, a: ShapeHandle, b: ShapeHandle) -> Option<&Contact> {
        self.contacts.get(&CollisionPair::new(a, b))
    }

    /// Gets the contact for the pair `(a, b)` mutably, e.g. for solver write-back
    pub fn get_contact_mut(&mut self, a: ShapeHandle, b: ShapeHandle) -> Option<&mut Contact> {
        self.contacts.get_mut(&CollisionPair::new(a, b))
    }

    /// Iterates over all live contacts in pair order
    pub fn contacts(&self) -> impl Iterator<Item = (&CollisionPair, &Contact)> {
        self.contacts.iter()
    }

    /// Number of live contacts
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether there are no live contacts
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// The configuration contacts are created and evaluated with
    pub fn config(&self) -> &ContactConfig {
        self.factory.config()
    }
}
