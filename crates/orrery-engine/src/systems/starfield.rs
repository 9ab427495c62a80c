use bytemuck::{Pod, Zeroable};
use crate::core::rng::Rng;

/// One star point. 4 floats = 16 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct StarVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Point size in world units.
    pub size: f32,
}

impl StarVertex {
    pub const FLOATS: usize = 4;

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, size: 0.1 }
    }

    pub fn distance_from_origin(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Starfield generation parameters.
#[derive(Debug, Clone, Copy)]
pub struct StarfieldConfig {
    /// Half-width of the sampling cube in world units.
    pub half_width: f32,
    /// Points closer to the origin than this are rejected, keeping stars
    /// outside the orbital system.
    pub clearance_radius: f32,
    /// Number of candidate draws. Rejection leaves at most this many
    /// accepted stars.
    pub candidates: usize,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            half_width: 1000.0,
            clearance_radius: 300.0,
            candidates: 10_000,
        }
    }
}

/// Sample candidate points uniformly in a cube and keep those at least
/// `clearance_radius` from the origin. Deterministic for a fixed seed.
pub fn generate_starfield(config: &StarfieldConfig, rng: &mut Rng) -> Vec<StarVertex> {
    let mut stars = Vec::with_capacity(config.candidates);
    let clearance_sq = config.clearance_radius * config.clearance_radius;

    for _ in 0..config.candidates {
        let x = rng.next_signed() * config.half_width;
        let y = rng.next_signed() * config.half_width;
        let z = rng.next_signed() * config.half_width;
        if x * x + y * y + z * z > clearance_sq {
            stars.push(StarVertex::new(x, y, z));
        }
    }

    stars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_star_inside_clearance_radius() {
        let config = StarfieldConfig::default();
        let mut rng = Rng::new(42);
        let stars = generate_starfield(&config, &mut rng);

        assert!(!stars.is_empty());
        assert!(stars.len() <= config.candidates);
        for star in &stars {
            assert!(
                star.distance_from_origin() >= config.clearance_radius,
                "star at distance {}",
                star.distance_from_origin()
            );
        }
    }

    #[test]
    fn stars_stay_inside_the_cube() {
        let config = StarfieldConfig::default();
        let mut rng = Rng::new(7);
        for star in generate_starfield(&config, &mut rng) {
            assert!(star.x.abs() <= config.half_width);
            assert!(star.y.abs() <= config.half_width);
            assert!(star.z.abs() <= config.half_width);
        }
    }

    #[test]
    fn deterministic_for_fixed_seed() {
        let config = StarfieldConfig::default();
        let a = generate_starfield(&config, &mut Rng::new(42));
        let b = generate_starfield(&config, &mut Rng::new(42));
        assert_eq!(a.len(), b.len());
        assert_eq!(a[0].x, b[0].x);
        assert_eq!(a[a.len() - 1].z, b[b.len() - 1].z);
    }

    #[test]
    fn most_candidates_survive_default_clearance() {
        // Cube half-width 1000, clearance 300: the rejected ball is a
        // small fraction of the cube volume.
        let config = StarfieldConfig::default();
        let stars = generate_starfield(&config, &mut Rng::new(1));
        assert!(stars.len() > config.candidates / 2);
    }
}
