#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Surface properties of a shape
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Material {
    /// Coefficient of restitution (bounciness), 0-1
    pub restitution: f32,

    /// Coefficient of friction, usually 0-1
    pub friction: f32,

    /// Density of the material (kg/m^2)
    pub density: f32,
}

impl Material {
    /// Creates a new material with the specified properties
    pub fn new(density: f32, friction: f32, restitution: f32) -> Self {
        Self {
            density,
            friction,
            restitution,
        }
    }

    /// Creates a material for ice (low friction, high restitution)
    pub fn ice() -> Self {
        Self {
            density: 900.0,
            friction: 0.05,
            restitution: 0.4,
        }
    }

    /// Creates a material for rubber (high friction, high restitution)
    pub fn rubber() -> Self {
        Self {
            density: 1200.0,
            friction: 0.8,
            restitution: 0.7,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            density: 1000.0,
            friction: 0.2,
            restitution: 0.0,
        }
    }
}

/// How the material coefficients of two touching shapes are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum MixRule {
    /// Arithmetic mean of both coefficients
    Average,

    /// The smaller coefficient
    Min,

    /// The larger coefficient
    Max,

    /// Product of both coefficients
    Multiply,

    /// Square root of the product, so a zero on either side wins
    GeometricMean,
}

impl MixRule {
    /// Combines two coefficients according to this rule
    pub fn combine(self, a: f32, b: f32) -> f32 {
        match self {
            MixRule::Average => (a + b) * 0.5,
            MixRule::Min => a.min(b),
            MixRule::Max => a.max(b),
            MixRule::Multiply => a * b,
            MixRule::GeometricMean => (a * b).max(0.0).sqrt(),
        }
    }
}
