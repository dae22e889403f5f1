//! Render feed: read-only per-frame views and packed instance data

use crate::particle::{Particle, ParticlePool};
use bytemuck::{Pod, Zeroable};
use ember_core::Vec3;

/// Read-only snapshot of one live particle, valid for a single frame
#[derive(Clone, Copy, Debug)]
pub struct LiveParticle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub age: f32,
}

impl LiveParticle {
    pub(crate) fn from_particle(p: &Particle) -> Self {
        Self {
            position: p.position,
            velocity: p.velocity,
            age: p.age,
        }
    }
}

/// Packed per-particle instance data, upload-ready.
/// 32 bytes, two vec4 rows.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ParticleInstance {
    /// xyz = world position, w = age in seconds
    pub pos_age: [f32; 4],
    /// xyz = velocity, w = lifetime (age/lifetime gives fade factor)
    pub vel_lifetime: [f32; 4],
}

impl ParticleInstance {
    pub fn from_particle(p: &Particle) -> Self {
        Self {
            pos_age: [p.position.x, p.position.y, p.position.z, p.age],
            vel_lifetime: [p.velocity.x, p.velocity.y, p.velocity.z, p.lifetime],
        }
    }
}

/// Packs live particles into a reusable instance buffer once per frame.
///
/// The buffer is regenerated after every tick, so it never contains a
/// particle killed during that tick. The renderer consumes the slice
/// synchronously within the frame and must not retain it; the next tick
/// may reuse or free the underlying slots.
pub struct RenderFeed {
    instances: Vec<ParticleInstance>,
}

impl RenderFeed {
    pub fn new() -> Self {
        Self {
            instances: Vec::new(),
        }
    }

    /// Repack from the post-tick pool state
    pub fn pack(&mut self, pool: &ParticlePool) {
        self.instances.clear();
        for p in pool.iter_live() {
            self.instances.push(ParticleInstance::from_particle(p));
        }
    }

    pub fn instances(&self) -> &[ParticleInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl Default for RenderFeed {
    fn default() -> Self {
        Self::new()
    }
}
