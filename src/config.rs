//! World configuration

use crate::math::Vec2;
use serde::{Deserialize, Serialize};

/// Settings a world is created with. The flags are stored and reported back;
/// nothing in this crate steps a simulation with them.
#[repr(C)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Gravity vector (default: -10 in Y)
    pub gravity: Vec2,

    /// Bodies may fall asleep when at rest
    pub allow_sleeping: bool,

    /// Reuse last step's impulses as the solver's initial guess
    pub warm_starting: bool,

    /// Continuous collision for fast bodies
    pub continuous_physics: bool,

    /// Single-step time of impact sub-stepping
    pub sub_stepping: bool,

    /// Clear accumulated forces after each step
    pub auto_clear_forces: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, -10.0),
            allow_sleeping: true,
            warm_starting: true,
            continuous_physics: true,
            sub_stepping: false,
            auto_clear_forces: true,
        }
    }
}

impl WorldConfig {
    /// Configuration for a world without gravity
    pub fn zero_gravity() -> Self {
        Self {
            gravity: Vec2::ZERO,
            ..Default::default()
        }
    }

    /// Set gravity
    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }
}
