//! Ember Sim - pooled particle simulation engine
//!
//! Provides a single-threaded particle simulation with:
//! - Free-list arena pool with stable particle ids
//! - Fractional-accumulator stochastic emission
//! - Euler integration under gravity and clamped linear drag
//! - Ground-plane collision with restitution and friction
//! - Age-based culling and a packed, upload-ready render feed
//!
//! The host owns an [`Engine`], feeds it wall-clock `dt` each tick, and
//! reads the live particle set back after the tick completes. All config
//! input is sanitized rather than rejected; the simulation path never
//! errors.

pub mod collide;
pub mod config;
pub mod emitter;
pub mod engine;
pub mod feed;
pub mod integrate;
pub mod particle;
pub mod rand;

pub use config::SimulationConfig;
pub use engine::{Engine, TickStats};
pub use feed::{LiveParticle, ParticleInstance, RenderFeed};
pub use particle::{Particle, ParticleId, ParticlePool};
