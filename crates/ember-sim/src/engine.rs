//! The engine handle a host owns: one tick call runs emission,
//! integration and resolution to completion, then the render feed is
//! read on the same thread before the next tick begins.

use crate::collide;
use crate::config::SimulationConfig;
use crate::emitter::Emitter;
use crate::feed::{LiveParticle, ParticleInstance, RenderFeed};
use crate::integrate;
use crate::particle::{Particle, ParticleId, ParticlePool};
use crate::rand::SimRng;
use ember_core::Vec3;

/// Per-tick bookkeeping, mostly for hosts and tests
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    pub spawned: u32,
    pub killed: u32,
    pub live: usize,
}

/// Owns the particle pool for the simulation's lifetime. Dropping the
/// engine releases all pool storage.
pub struct Engine {
    config: SimulationConfig,
    /// Staged by `set_config`, applied at the start of the next tick
    pending: Option<SimulationConfig>,
    pool: ParticlePool,
    emitter: Emitter,
    feed: RenderFeed,
    rng: SimRng,
}

impl Engine {
    pub fn new(config: SimulationConfig) -> Self {
        Self::with_seed(config, 0x5EED_1234)
    }

    /// Build an engine with an explicit RNG seed; identical seeds and
    /// tick sequences replay identically.
    pub fn with_seed(config: SimulationConfig, seed: u32) -> Self {
        let config = config.sanitize();
        // Steady-state population is roughly rate * max lifetime;
        // pre-reserve that many slots, capped so an extreme slider
        // combination cannot demand a giant allocation up front.
        let expected = (config.creation_rate * (config.lifetime + config.lifetime_var)).ceil();
        let capacity = (expected as usize).min(65_536);
        Self {
            config,
            pending: None,
            pool: ParticlePool::with_capacity(capacity),
            emitter: Emitter::new(),
            feed: RenderFeed::new(),
            rng: SimRng::new(seed),
        }
    }

    /// The configuration in effect for the current tick
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Stage a new configuration. It is sanitized here and takes effect
    /// atomically at the start of the next `tick`.
    pub fn set_config(&mut self, config: SimulationConfig) {
        self.pending = Some(config.sanitize());
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Pipeline order: emission, integration, collision/lifetime
    /// resolution, feed repack. Particles spawned this tick are
    /// integrated and aged this tick. A pathologically large `dt` is
    /// one large Euler step, never special-cased; zero or negative `dt`
    /// spawns and moves nothing.
    pub fn tick(&mut self, dt: f32) -> TickStats {
        if let Some(config) = self.pending.take() {
            self.config = config;
        }
        let config = self.config;

        let mut spawned = 0;
        if dt > 0.0 {
            spawned = self.emitter.spawn_count(config.creation_rate, dt);
            for _ in 0..spawned {
                let particle = self.emitter.sample(&config, &mut self.rng);
                self.pool.spawn(particle);
            }

            self.pool.for_each_live_mut(|p| {
                integrate::step(p, &config, dt);
                collide::resolve(p, &config, dt);
            });
        }

        let killed = self.pool.reap(|p| p.expired()) as u32;
        let live = self.pool.live_count();

        self.feed.pack(&self.pool);

        TickStats {
            spawned,
            killed,
            live,
        }
    }

    /// Post-tick snapshot of every live particle
    pub fn live_particles(&self) -> impl Iterator<Item = LiveParticle> + '_ {
        self.pool.iter_live().map(LiveParticle::from_particle)
    }

    pub fn live_count(&self) -> usize {
        self.pool.live_count()
    }

    /// Packed instance data for one rendering submission
    pub fn instances(&self) -> &[ParticleInstance] {
        self.feed.instances()
    }

    /// Insert a single particle with explicit state, bypassing the
    /// emission policy. Hosts use this for scripted effects and tests
    /// use it for deterministic scenarios.
    pub fn inject(&mut self, position: Vec3, velocity: Vec3, lifetime: f32) -> ParticleId {
        self.pool
            .spawn(Particle::new(position, velocity, lifetime.max(0.0)))
    }
}
