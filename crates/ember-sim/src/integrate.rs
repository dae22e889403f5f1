//! Kinematic integration: gravity, drag, explicit Euler

use crate::config::SimulationConfig;
use crate::particle::Particle;

/// Advance one particle by `dt` seconds.
///
/// Drag is a linear damping factor `1 - air_density * dt`, clamped at
/// zero: it strictly opposes motion, scales monotonically with air
/// density, and a single step can stop a particle but never reverse it.
pub fn step(particle: &mut Particle, config: &SimulationConfig, dt: f32) {
    particle.velocity.y -= config.gravity * dt;

    let damping = (1.0 - config.air_density * dt).max(0.0);
    particle.velocity = particle.velocity * damping;

    particle.position += particle.velocity * dt;
}
