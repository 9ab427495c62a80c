/// Body data — the fixed list the scene is built from.
///
/// Radii and distances are exaggerated for readability (to scale, the
/// planets would be sub-pixel). Speeds are the slider defaults, radians
/// of pivot rotation per second of elapsed time.

use orrery_engine::{BodyDescriptor, BodyRegistry};
use orrery_engine::components::mesh::MeshColor;

/// Body index constants into the default registry.
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const BODY_COUNT: usize = 8;

// ── Central body ─────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 10.0;
pub const SUN_COLOR: u32 = 0xFFFF00;
pub const SUN_EMISSIVE: f32 = 1.0;
/// Central-body self-rotation per frame, radians.
pub const SUN_SPIN_STEP: f32 = 0.0005;

/// Orbiting-body self-rotation per frame, radians. Independent of the
/// orbital speed sliders.
pub const BODY_SPIN_STEP: f32 = 0.005;

/// Emissive floor so bodies stay visible in the dark theme.
pub const BODY_EMISSIVE: f32 = 0.3;

// ── Saturn's ring ────────────────────────────────────────────────────

/// Ring bounds relative to the body radius.
pub const RING_INNER_PAD: f32 = 1.2;
pub const RING_OUTER_PAD: f32 = 3.5;
/// Fixed ring inclination about local X, radians.
pub const RING_TILT: f32 = -0.4 * std::f32::consts::PI;
pub const RING_COLOR: u32 = 0xAAAAAA;
pub const RING_ALPHA: f32 = 0.8;

// ── Lighting ─────────────────────────────────────────────────────────

pub const SUN_LIGHT_INTENSITY: f32 = 3.0;
pub const SUN_LIGHT_RADIUS: f32 = 300.0;

fn body(name: &str, radius: f32, distance: f32, color: u32, speed: f32, ringed: bool) -> BodyDescriptor {
    let c = MeshColor::from_hex(color);
    BodyDescriptor {
        name: name.to_string(),
        radius,
        orbital_distance: distance,
        color: [c.r, c.g, c.b],
        base_angular_speed: speed,
        ringed,
    }
}

/// The built-in eight-body registry, used unless the host supplies its
/// own via `sim_load_registry`.
pub fn default_registry() -> BodyRegistry {
    BodyRegistry::new(vec![
        body("Mercury", 1.0, 20.0, 0x888888, 0.40, false),
        body("Venus", 1.5, 30.0, 0xFFA500, 0.25, false),
        body("Earth", 1.6, 42.0, 0x0077FF, 0.18, false),
        body("Mars", 1.2, 55.0, 0xFF4500, 0.10, false),
        body("Jupiter", 4.0, 80.0, 0xFFD700, 0.05, false),
        body("Saturn", 3.5, 110.0, 0xF0E68C, 0.03, true),
        body("Uranus", 2.5, 135.0, 0xADD8E6, 0.02, false),
        body("Neptune", 2.4, 160.0, 0x4466FF, 0.01, false),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_is_valid_and_ordered() {
        let registry = default_registry();
        assert_eq!(registry.len(), BODY_COUNT);
        assert_eq!(registry.get(EARTH).unwrap().name, "Earth");
        assert_eq!(registry.get(NEPTUNE).unwrap().orbital_distance, 160.0);

        // Round-trips through the JSON the host reads for its sliders
        let back = BodyRegistry::from_json(&registry.to_json()).unwrap();
        assert_eq!(back.len(), BODY_COUNT);
    }

    #[test]
    fn only_saturn_is_ringed() {
        let registry = default_registry();
        for (i, body) in registry.iter().enumerate() {
            assert_eq!(body.ringed, i == SATURN, "{}", body.name);
        }
    }

    #[test]
    fn slider_defaults_fit_the_slider_range() {
        for body in default_registry().iter() {
            assert!((0.0..=1.0).contains(&body.base_angular_speed), "{}", body.name);
        }
    }
}
