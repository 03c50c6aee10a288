use crate::contacts::{default_generators, Contact, ContactGenerator};
use crate::core::ContactConfig;
use crate::shapes::{Shape, ShapeKind};
use log::debug;
use std::sync::Arc;

/// A generator slot in the dispatch table
#[derive(Debug, Clone)]
struct Registration {
    generator: Arc<dyn ContactGenerator>,

    /// False when the slot was filled for the reversed kind order and the
    /// shapes must be swapped before construction
    primary: bool,
}

/// Builds contacts for shape pairs by table lookup on their kinds
#[derive(Debug, Clone)]
pub struct ContactFactory {
    registry: [[Option<Registration>; ShapeKind::COUNT]; ShapeKind::COUNT],
    config: ContactConfig,
}

impl ContactFactory {
    /// Creates a factory with no registered generators
    pub fn new(config: ContactConfig) -> Self {
        Self {
            registry: std::array::from_fn(|_| std::array::from_fn(|_| None)),
            config,
        }
    }

    /// Creates a factory with the built-in generators registered
    pub fn with_default_generators(config: ContactConfig) -> Self {
        let mut factory = Self::new(config);
        for generator in default_generators() {
            factory.register(generator);
        }
        factory
    }

    /// Registers `generator` for its kind pair, in both orders
    ///
    /// A previous registration for the same kinds is replaced.
    pub fn register(&mut self, generator: Arc<dyn ContactGenerator>) {
        let (kind_a, kind_b) = generator.shape_kinds();
        debug!("registering contact generator {:?} for {:?}/{:?}", generator, kind_a, kind_b);

        if kind_a != kind_b {
            self.registry[kind_b.index()][kind_a.index()] = Some(Registration {
                generator: Arc::clone(&generator),
                primary: false,
            });
        }

        self.registry[kind_a.index()][kind_b.index()] = Some(Registration {
            generator,
            primary: true,
        });
    }

    /// Whether some generator handles the two kinds, in either order
    pub fn is_registered(&self, kind_a: ShapeKind, kind_b: ShapeKind) -> bool {
        self.registry[kind_a.index()][kind_b.index()].is_some()
    }

    /// Creates the contact for two shapes, or `None` if no generator handles their kinds
    ///
    /// When the generator was registered for the reversed order, the returned
    /// contact has `shape_b` as its first shape.
    pub fn create(&self, shape_a: Arc<Shape>, shape_b: Arc<Shape>) -> Option<Contact> {
        let registration = self.registry[shape_a.kind().index()][shape_b.kind().index()].as_ref()?;
        let generator = Arc::clone(&registration.generator);

        let contact = if registration.primary {
            Contact::new(shape_a, shape_b, generator, &self.config)
        } else {
            Contact::new(shape_b, shape_a, generator, &self.config)
        };

        Some(contact)
    }

    /// Returns the configuration contacts are created with
    pub fn config(&self) -> &ContactConfig {
        &self.config
    }
}

impl Default for ContactFactory {
    fn default() -> Self {
        Self::with_default_generators(ContactConfig::default())
    }
}
