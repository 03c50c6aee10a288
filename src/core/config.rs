use crate::bodies::MixRule;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration parameters for contact creation and evaluation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ContactConfig {
    /// How the friction of two shapes is combined when a contact is created
    pub friction_mixing: MixRule,

    /// How the restitution of two shapes is combined when a contact is created
    pub restitution_mixing: MixRule,

    /// Whether contacts between two sleeping bodies are left untouched by a step
    pub skip_sleeping_pairs: bool,
}

impl ContactConfig {
    /// Combined friction of two shapes
    pub fn mix_friction(&self, friction_a: f32, friction_b: f32) -> f32 {
        self.friction_mixing.combine(friction_a, friction_b)
    }

    /// Combined restitution of two shapes
    pub fn mix_restitution(&self, restitution_a: f32, restitution_b: f32) -> f32 {
        self.restitution_mixing.combine(restitution_a, restitution_b)
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            friction_mixing: MixRule::GeometricMean,
            restitution_mixing: MixRule::Max,
            skip_sleeping_pairs: true,
        }
    }
}
