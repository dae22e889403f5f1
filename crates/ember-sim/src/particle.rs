//! Particle record and the free-list arena pool that owns all particles

use ember_core::Vec3;

/// Simulation state for one particle
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Seconds since spawn
    pub age: f32,
    /// Sampled at spawn, immutable afterwards
    pub lifetime: f32,
    pub alive: bool,
}

impl Particle {
    pub fn new(position: Vec3, velocity: Vec3, lifetime: f32) -> Self {
        Self {
            position,
            velocity,
            age: 0.0,
            lifetime,
            alive: true,
        }
    }

    pub fn expired(&self) -> bool {
        self.age > self.lifetime
    }
}

/// Stable handle into the pool arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParticleId(pub u32);

/// Arena of particle slots with a dead-slot free list.
///
/// Spawning pops a free slot if one exists, otherwise grows storage, so
/// a spawn is amortized O(1) and capacity is never a hard limit. Ids
/// stay valid across unrelated kill/spawn cycles; a killed slot is only
/// reused by a later spawn.
pub struct ParticlePool {
    slots: Vec<Particle>,
    free: Vec<u32>,
    live: usize,
}

impl ParticlePool {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            live: 0,
        }
    }

    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Total slots allocated, live or dead
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Insert a live particle, reusing a dead slot when one is free
    pub fn spawn(&mut self, particle: Particle) -> ParticleId {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            self.slots[index as usize] = particle;
            ParticleId(index)
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(particle);
            ParticleId(index)
        }
    }

    /// Mark a slot dead and make it eligible for reuse. No-op for an
    /// already-dead slot or an out-of-range id.
    pub fn kill(&mut self, id: ParticleId) {
        let Some(slot) = self.slots.get_mut(id.0 as usize) else {
            return;
        };
        if slot.alive {
            slot.alive = false;
            self.live -= 1;
            self.free.push(id.0);
        }
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.slots.get(id.0 as usize).filter(|p| p.alive)
    }

    /// Visit every live particle exactly once, in unspecified order
    pub fn for_each_live_mut<F: FnMut(&mut Particle)>(&mut self, mut f: F) {
        for slot in &mut self.slots {
            if slot.alive {
                f(slot);
            }
        }
    }

    pub fn iter_live(&self) -> impl Iterator<Item = &Particle> {
        self.slots.iter().filter(|p| p.alive)
    }

    /// Kill every live particle matching the predicate, returning how
    /// many were killed
    pub fn reap<F: Fn(&Particle) -> bool>(&mut self, predicate: F) -> usize {
        let mut killed = 0;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.alive && predicate(slot) {
                slot.alive = false;
                self.free.push(index as u32);
                killed += 1;
            }
        }
        self.live -= killed;
        killed
    }
}

impl Default for ParticlePool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle_at(x: f32) -> Particle {
        Particle::new(Vec3::new(x, 0.0, 0.0), Vec3::ZERO, 1.0)
    }

    #[test]
    fn pool_spawn_and_kill() {
        let mut pool = ParticlePool::new();
        assert_eq!(pool.live_count(), 0);

        let a = pool.spawn(particle_at(0.0));
        let b = pool.spawn(particle_at(1.0));
        let c = pool.spawn(particle_at(2.0));
        assert_eq!(pool.live_count(), 3);
        assert_eq!(pool.slot_count(), 3);

        pool.kill(b);
        assert_eq!(pool.live_count(), 2);
        assert!(pool.get(b).is_none());
        assert!(pool.get(a).is_some());
        assert!(pool.get(c).is_some());

        // Double kill is a no-op
        pool.kill(b);
        assert_eq!(pool.live_count(), 2);
    }

    #[test]
    fn dead_slot_is_reused_before_growing() {
        let mut pool = ParticlePool::new();
        let a = pool.spawn(particle_at(0.0));
        pool.spawn(particle_at(1.0));
        pool.kill(a);

        let c = pool.spawn(particle_at(2.0));
        assert_eq!(c, a);
        assert_eq!(pool.slot_count(), 2);
        assert_eq!(pool.live_count(), 2);
    }

    #[test]
    fn iter_live_skips_dead() {
        let mut pool = ParticlePool::new();
        for i in 0..5 {
            pool.spawn(particle_at(i as f32));
        }
        pool.kill(ParticleId(1));
        pool.kill(ParticleId(3));

        let xs: Vec<f32> = pool.iter_live().map(|p| p.position.x).collect();
        assert_eq!(xs, vec![0.0, 2.0, 4.0]);
    }

    #[test]
    fn reap_kills_matching() {
        let mut pool = ParticlePool::new();
        for i in 0..4 {
            let mut p = particle_at(i as f32);
            p.age = i as f32;
            p.lifetime = 2.0;
            pool.spawn(p);
        }
        let killed = pool.reap(|p| p.expired());
        assert_eq!(killed, 1); // only age 3.0 exceeds lifetime 2.0
        assert_eq!(pool.live_count(), 3);
    }
}
