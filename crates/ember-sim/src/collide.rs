//! Ground-plane collision response and aging

use crate::config::SimulationConfig;
use crate::particle::Particle;

/// Resolve one particle against the ground plane and advance its age.
///
/// One resolved bounce per tick: the particle is clamped back onto the
/// plane, its vertical velocity reflected with restitution and its
/// horizontal velocity scaled by ground friction. A fast particle under
/// a large dt may tunnel past the plane in one step; that is accepted,
/// not sub-stepped. Expiry itself is the pool's job, via
/// [`Particle::expired`].
pub fn resolve(particle: &mut Particle, config: &SimulationConfig, dt: f32) {
    if particle.position.y < config.ground {
        particle.position.y = config.ground;
        particle.velocity.y = -particle.velocity.y * config.elasticity;
        let grip = 1.0 - config.friction;
        particle.velocity.x *= grip;
        particle.velocity.z *= grip;
    }

    particle.age += dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_core::Vec3;

    fn bounce_config() -> SimulationConfig {
        SimulationConfig {
            ground: 0.0,
            elasticity: 0.5,
            friction: 0.1,
            ..Default::default()
        }
    }

    #[test]
    fn penetrating_particle_is_clamped_and_reflected() {
        let mut p = Particle::new(
            Vec3::new(1.0, -0.2, 2.0),
            Vec3::new(3.0, -4.0, -1.0),
            10.0,
        );
        resolve(&mut p, &bounce_config(), 0.016);

        assert_eq!(p.position.y, 0.0);
        assert!((p.velocity.y - 2.0).abs() < 1e-6); // -(-4.0) * 0.5
        assert!((p.velocity.x - 2.7).abs() < 1e-6); // 3.0 * 0.9
        assert!((p.velocity.z - (-0.9)).abs() < 1e-6);
        // Horizontal position is untouched
        assert_eq!(p.position.x, 1.0);
        assert_eq!(p.position.z, 2.0);
    }

    #[test]
    fn airborne_particle_only_ages() {
        let mut p = Particle::new(Vec3::new(0.0, 3.0, 0.0), Vec3::new(1.0, -2.0, 0.0), 10.0);
        resolve(&mut p, &bounce_config(), 0.25);

        assert_eq!(p.position, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(p.velocity, Vec3::new(1.0, -2.0, 0.0));
        assert!((p.age - 0.25).abs() < 1e-6);
    }

    #[test]
    fn zero_elasticity_kills_vertical_velocity() {
        let config = SimulationConfig {
            elasticity: 0.0,
            ..bounce_config()
        };
        let mut p = Particle::new(Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, -5.0, 0.0), 10.0);
        resolve(&mut p, &config, 0.016);
        assert_eq!(p.velocity.y, 0.0);
        assert_eq!(p.position.y, 0.0);
    }

    #[test]
    fn full_friction_stops_sliding() {
        let config = SimulationConfig {
            friction: 1.0,
            ..bounce_config()
        };
        let mut p = Particle::new(Vec3::new(0.0, -0.1, 0.0), Vec3::new(4.0, -1.0, -4.0), 10.0);
        resolve(&mut p, &config, 0.016);
        assert_eq!(p.velocity.x, 0.0);
        assert_eq!(p.velocity.z, 0.0);
    }

    #[test]
    fn raised_ground_plane_is_respected() {
        let config = SimulationConfig {
            ground: 2.0,
            ..bounce_config()
        };
        let mut p = Particle::new(Vec3::new(0.0, 1.5, 0.0), Vec3::new(0.0, -1.0, 0.0), 10.0);
        resolve(&mut p, &config, 0.016);
        assert_eq!(p.position.y, 2.0);
        assert!(p.velocity.y > 0.0);
    }
}
