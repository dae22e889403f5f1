//! Stochastic emission: fractional-accumulator spawn scheduling and
//! spawn-state sampling

use crate::config::SimulationConfig;
use crate::particle::Particle;
use crate::rand::SimRng;
use ember_core::Vec3;

/// Decides how many particles to spawn each tick.
///
/// `creation_rate * dt` is accumulated with fractional carry so that
/// non-integer rates and small timesteps still produce the correct
/// long-run average instead of systematically under- or over-spawning.
pub struct Emitter {
    carry: f32,
}

impl Emitter {
    pub fn new() -> Self {
        Self { carry: 0.0 }
    }

    /// Number of particles to spawn this tick. Zero or negative rate or
    /// dt spawns nothing; a negative carry (possible after a rate drop)
    /// clamps back to zero.
    pub fn spawn_count(&mut self, creation_rate: f32, dt: f32) -> u32 {
        if self.carry < 0.0 {
            self.carry = 0.0;
        }
        if creation_rate <= 0.0 || dt <= 0.0 {
            return 0;
        }
        self.carry += creation_rate * dt;
        let count = self.carry as u32;
        self.carry -= count as f32;
        count
    }

    /// Sample the initial state of one spawned particle. Each component
    /// is jittered independently; lifetime never goes negative.
    pub fn sample(&self, config: &SimulationConfig, rng: &mut SimRng) -> Particle {
        let lifetime = (config.lifetime + rng.jitter() * config.lifetime_var).max(0.0);
        let position = jittered(config.init_pos, config.init_pos_var, rng);
        let velocity = jittered(config.init_vel, config.init_vel_var, rng);
        Particle::new(position, velocity, lifetime)
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

fn jittered(mean: Vec3, half_width: Vec3, rng: &mut SimRng) -> Vec3 {
    Vec3::new(
        mean.x + rng.jitter() * half_width.x,
        mean.y + rng.jitter() * half_width.y,
        mean.z + rng.jitter() * half_width.z,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_rate_is_exact() {
        let mut emitter = Emitter::new();
        let mut total = 0;
        for _ in 0..10 {
            total += emitter.spawn_count(100.0, 0.1);
        }
        assert_eq!(total, 100);
    }

    #[test]
    fn fractional_rate_carries_forward() {
        // 2.5 particles/s at 10Hz: 0.25 per tick, one spawn every 4 ticks
        let mut emitter = Emitter::new();
        let mut total = 0;
        for _ in 0..40 {
            total += emitter.spawn_count(2.5, 0.1);
        }
        assert_eq!(total, 10);
    }

    #[test]
    fn zero_and_negative_inputs_spawn_nothing() {
        let mut emitter = Emitter::new();
        assert_eq!(emitter.spawn_count(0.0, 0.1), 0);
        assert_eq!(emitter.spawn_count(-5.0, 0.1), 0);
        assert_eq!(emitter.spawn_count(100.0, 0.0), 0);
        assert_eq!(emitter.spawn_count(100.0, -0.1), 0);
    }

    #[test]
    fn samples_stay_within_half_widths() {
        let config = SimulationConfig {
            lifetime: 4.0,
            lifetime_var: 1.0,
            init_pos: Vec3::new(0.0, 5.0, 0.0),
            init_pos_var: Vec3::new(2.0, 0.5, 2.0),
            init_vel: Vec3::new(1.0, 0.0, -1.0),
            init_vel_var: Vec3::new(0.25, 0.25, 0.25),
            ..Default::default()
        };
        let emitter = Emitter::new();
        let mut rng = SimRng::new(42);
        for _ in 0..500 {
            let p = emitter.sample(&config, &mut rng);
            assert!(p.lifetime >= 3.0 && p.lifetime <= 5.0);
            assert!(p.position.x.abs() <= 2.0);
            assert!((p.position.y - 5.0).abs() <= 0.5);
            assert!(p.position.z.abs() <= 2.0);
            assert!((p.velocity.x - 1.0).abs() <= 0.25);
            assert!(p.velocity.y.abs() <= 0.25);
            assert!((p.velocity.z + 1.0).abs() <= 0.25);
            assert_eq!(p.age, 0.0);
            assert!(p.alive);
        }
    }

    #[test]
    fn sampled_lifetime_never_negative() {
        let config = SimulationConfig {
            lifetime: 0.1,
            lifetime_var: 5.0,
            ..Default::default()
        };
        let emitter = Emitter::new();
        let mut rng = SimRng::new(7);
        for _ in 0..200 {
            assert!(emitter.sample(&config, &mut rng).lifetime >= 0.0);
        }
    }
}
