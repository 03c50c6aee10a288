use crate::bodies::RigidBody;
use crate::collision::{Manifold, ManifoldPoint, MAX_MANIFOLD_POINTS};
use crate::contacts::{ContactGenerator, ContactListener, ContactPoint};
use crate::core::{BodyStorage, ContactConfig};
use crate::math::Vector2;
use crate::shapes::Shape;
use crate::Result;
use bitflags::bitflags;
use log::{debug, trace};
use std::sync::Arc;

bitflags! {
    /// State bits of a contact
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct ContactFlags: u32 {
        /// One of the shapes is a sensor; the solver must ignore this contact
        const NON_SOLID = 0x01;

        /// At least one manifold had points after the last evaluation
        const TOUCHING = 0x02;
    }
}

/// The persistent contact between two shapes whose bounding volumes overlap
///
/// A contact owns its manifolds and carries solver impulses from one step to
/// the next for every point whose feature identity survives. Shapes are
/// shared, never owned.
#[derive(Debug, Clone)]
pub struct Contact {
    shape_a: Arc<Shape>,
    shape_b: Arc<Shape>,
    generator: Arc<dyn ContactGenerator>,
    manifolds: Vec<Manifold>,

    /// Manifolds as they were before the last evaluation
    previous: Vec<Manifold>,

    friction: f32,
    restitution: f32,
    flags: ContactFlags,
}

impl Contact {
    /// Creates a contact between two shapes of the kinds `generator` handles
    ///
    /// # Panics
    ///
    /// Panics if the shapes are not exactly of the generator's kinds, in order.
    pub fn new(
        shape_a: Arc<Shape>,
        shape_b: Arc<Shape>,
        generator: Arc<dyn ContactGenerator>,
        config: &ContactConfig,
    ) -> Self {
        let (kind_a, kind_b) = generator.shape_kinds();
        assert!(
            shape_a.kind() == kind_a && shape_b.kind() == kind_b,
            "contact for {:?}/{:?} constructed with {:?}/{:?}",
            kind_a,
            kind_b,
            shape_a.kind(),
            shape_b.kind()
        );

        let capacity = generator.manifold_capacity();
        assert!(capacity > 0, "contact generator must track at least one manifold");

        let mut flags = ContactFlags::empty();
        if shape_a.is_sensor() || shape_b.is_sensor() {
            flags.insert(ContactFlags::NON_SOLID);
        }

        let friction = config.mix_friction(shape_a.friction(), shape_b.friction());
        let restitution = config.mix_restitution(shape_a.restitution(), shape_b.restitution());

        debug!("created {:?}/{:?} contact", kind_a, kind_b);

        Self {
            shape_a,
            shape_b,
            generator,
            manifolds: vec![Manifold::new(); capacity],
            previous: vec![Manifold::new(); capacity],
            friction,
            restitution,
            flags,
        }
    }

    /// Recomputes the manifolds, carries impulses over to persisting points,
    /// and notifies `listener` of every added, persisting and removed point
    ///
    /// All manifolds are committed before the listener runs, so a listener
    /// error cannot leave the solver state half updated.
    pub fn evaluate(
        &mut self,
        bodies: &BodyStorage<RigidBody>,
        listener: Option<&mut (dyn ContactListener + '_)>,
    ) -> Result<()> {
        let body_a = bodies.get_body(self.shape_a.body())?;
        let body_b = bodies.get_body(self.shape_b.body())?;
        let xf_a = *body_a.get_transform();
        let xf_b = *body_b.get_transform();

        // Must happen before the generator overwrites the manifolds.
        self.previous.copy_from_slice(&self.manifolds);

        for (index, (manifold, previous)) in self.manifolds.iter_mut().zip(&self.previous).enumerate() {
            self.generator.generate(index, manifold, &self.shape_a, &xf_a, &self.shape_b, &xf_b);
            warm_start(previous, manifold);
        }

        let touching = self.manifold_count() > 0;
        self.flags.set(ContactFlags::TOUCHING, touching);

        let Some(listener) = listener else {
            return Ok(());
        };

        for (previous, current) in self.previous.iter().zip(&self.manifolds) {
            self.notify(body_a, body_b, previous, current, listener)?;
        }

        Ok(())
    }

    /// Reports every point still held by the manifolds as removed
    ///
    /// Used when the pair stops overlapping and the contact is about to be destroyed.
    pub fn report_removal(
        &self,
        bodies: &BodyStorage<RigidBody>,
        listener: &mut dyn ContactListener,
    ) -> Result<()> {
        let body_a = bodies.get_body(self.shape_a.body())?;
        let body_b = bodies.get_body(self.shape_b.body())?;

        for manifold in &self.manifolds {
            for point in manifold.points() {
                listener.remove(&self.snapshot(body_a, body_b, manifold.normal, point))?;
            }
        }

        Ok(())
    }

    /// Tears the contact down
    pub fn destroy(self) {
        debug!(
            "destroyed {:?}/{:?} contact",
            self.shape_a.kind(),
            self.shape_b.kind()
        );
    }

    /// Returns all manifolds, including empty ones, in generator order
    pub fn manifolds(&self) -> &[Manifold] {
        &self.manifolds
    }

    /// Mutable manifolds, for the solver to store accumulated impulses
    pub fn manifolds_mut(&mut self) -> &mut [Manifold] {
        &mut self.manifolds
    }

    /// Number of manifolds that currently have points
    pub fn manifold_count(&self) -> usize {
        self.manifolds.iter().filter(|m| !m.is_empty()).count()
    }

    /// The first shape
    pub fn shape_a(&self) -> &Arc<Shape> {
        &self.shape_a
    }

    /// The second shape
    pub fn shape_b(&self) -> &Arc<Shape> {
        &self.shape_b
    }

    /// Combined friction, fixed at construction
    pub fn friction(&self) -> f32 {
        self.friction
    }

    /// Combined restitution, fixed at construction
    pub fn restitution(&self) -> f32 {
        self.restitution
    }

    /// Current state bits
    pub fn flags(&self) -> ContactFlags {
        self.flags
    }

    /// Whether any manifold had points after the last evaluation
    pub fn is_touching(&self) -> bool {
        self.flags.contains(ContactFlags::TOUCHING)
    }

    /// Whether the solver should act on this contact
    pub fn is_solid(&self) -> bool {
        !self.flags.contains(ContactFlags::NON_SOLID)
    }

    fn notify(
        &self,
        body_a: &RigidBody,
        body_b: &RigidBody,
        previous: &Manifold,
        current: &Manifold,
        listener: &mut dyn ContactListener,
    ) -> Result<()> {
        let matches = PointMatches::new(previous, current);
        let (mut added, mut persisted, mut removed) = (0, 0, 0);

        for (i, point) in current.points().iter().enumerate() {
            let snapshot = self.snapshot(body_a, body_b, current.normal, point);
            if matches.current_to_previous[i].is_some() {
                persisted += 1;
                listener.persist(&snapshot)?;
            } else {
                added += 1;
                listener.add(&snapshot)?;
            }
        }

        for (j, point) in previous.points().iter().enumerate() {
            if !matches.previous_matched[j] {
                removed += 1;
                listener.remove(&self.snapshot(body_a, body_b, previous.normal, point))?;
            }
        }

        if added + persisted + removed > 0 {
            trace!(
                "{:?}/{:?} contact: {} added, {} persisted, {} removed",
                self.shape_a.kind(),
                self.shape_b.kind(),
                added,
                persisted,
                removed
            );
        }

        Ok(())
    }

    fn snapshot<'a>(
        &'a self,
        body_a: &RigidBody,
        body_b: &RigidBody,
        normal: Vector2,
        point: &ManifoldPoint,
    ) -> ContactPoint<'a> {
        ContactPoint::from_manifold_point(
            &self.shape_a,
            body_a,
            &self.shape_b,
            body_b,
            normal,
            point,
            self.friction,
            self.restitution,
        )
    }
}

/// Pairing of current points with previous points by feature identity
///
/// A previous point is consumed by its first match, so duplicated ids can
/// never persist twice.
struct PointMatches {
    current_to_previous: [Option<usize>; MAX_MANIFOLD_POINTS],
    previous_matched: [bool; MAX_MANIFOLD_POINTS],
}

impl PointMatches {
    fn new(previous: &Manifold, current: &Manifold) -> Self {
        let mut matches = Self {
            current_to_previous: [None; MAX_MANIFOLD_POINTS],
            previous_matched: [false; MAX_MANIFOLD_POINTS],
        };

        for (i, point) in current.points().iter().enumerate() {
            let found = previous
                .points()
                .iter()
                .enumerate()
                .position(|(j, old)| !matches.previous_matched[j] && old.id == point.id);

            if let Some(j) = found {
                matches.previous_matched[j] = true;
                matches.current_to_previous[i] = Some(j);
            }
        }

        matches
    }
}

/// Copies accumulated impulses onto persisting points and zeroes new ones
fn warm_start(previous: &Manifold, current: &mut Manifold) {
    let matches = PointMatches::new(previous, current);
    let old_points = previous.points();

    for (i, point) in current.points_mut().iter_mut().enumerate() {
        match matches.current_to_previous[i] {
            Some(j) => {
                point.normal_impulse = old_points[j].normal_impulse;
                point.tangent_impulse = old_points[j].tangent_impulse;
            }
            None => {
                point.normal_impulse = 0.0;
                point.tangent_impulse = 0.0;
            }
        }
    }
}
