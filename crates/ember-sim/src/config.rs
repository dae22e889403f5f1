//! Simulation tunables, written by the control surface and read by the
//! engine every tick

use ember_core::{Result, Vec3};
use serde::{Deserialize, Serialize};

/// Externally mutable simulation parameters.
///
/// The "var" fields are uniform jitter half-widths, not statistical
/// variance: a spawned value is `mean + uniform(-1, 1) * var`. The
/// engine sanitizes rather than rejects, so arbitrary slider input
/// degrades gracefully.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Particles spawned per second
    pub creation_rate: f32,
    /// Mean particle lifetime in seconds
    pub lifetime: f32,
    /// Lifetime jitter half-width in seconds
    pub lifetime_var: f32,
    /// Downward acceleration magnitude
    pub gravity: f32,
    /// Linear drag coefficient
    pub air_density: f32,
    /// Ground plane height (world y)
    pub ground: f32,
    /// Horizontal velocity fraction removed per ground contact, [0, 1]
    pub friction: f32,
    /// Vertical velocity fraction retained (sign-reversed) per bounce, [0, 1]
    pub elasticity: f32,
    /// Mean spawn position
    pub init_pos: Vec3,
    /// Spawn position jitter half-widths
    pub init_pos_var: Vec3,
    /// Mean spawn velocity
    pub init_vel: Vec3,
    /// Spawn velocity jitter half-widths
    pub init_vel_var: Vec3,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            creation_rate: 50.0,
            lifetime: 5.0,
            lifetime_var: 1.0,
            gravity: 9.8,
            air_density: 0.5,
            ground: 0.0,
            friction: 0.1,
            elasticity: 0.5,
            init_pos: Vec3::new(0.0, 5.0, 0.0),
            init_pos_var: Vec3::new(0.5, 0.5, 0.5),
            init_vel: Vec3::ZERO,
            init_vel_var: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl SimulationConfig {
    /// Clamp every field to its stable range. Negative rates, lifetimes,
    /// jitter widths and coefficients come straight from an interactive
    /// panel; they are clamped, never rejected.
    pub fn sanitize(mut self) -> Self {
        self.creation_rate = self.creation_rate.max(0.0);
        self.lifetime = self.lifetime.max(0.0);
        self.lifetime_var = self.lifetime_var.max(0.0);
        self.gravity = self.gravity.max(0.0);
        self.air_density = self.air_density.max(0.0);
        self.friction = self.friction.clamp(0.0, 1.0);
        self.elasticity = self.elasticity.clamp(0.0, 1.0);
        self.init_pos_var = self.init_pos_var.max_zero();
        self.init_vel_var = self.init_vel_var.max_zero();
        self
    }

    /// Parse a config from TOML; missing fields take their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
