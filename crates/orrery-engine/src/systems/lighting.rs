/// Lighting and clear-color state for the scene.
///
/// The point light sits at the central body and never moves; the ambient
/// intensity and the background color are theme state, swapped atomically
/// when the host toggles themes.

use glam::Vec3;

/// A point light with position, color, intensity, and falloff radius.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, r, g, b, intensity, radius]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    pub radius: f32,
}

impl PointLight {
    pub fn new(pos: Vec3, color: [f32; 3], intensity: f32, radius: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color[0],
            g: color[1],
            b: color[2],
            intensity,
            radius,
        }
    }
}

/// Manages active lights, ambient intensity, and the clear color.
pub struct LightState {
    lights: Vec<PointLight>,
    ambient: [f32; 3],
    ambient_intensity: f32,
    background: [f32; 3],
}

impl LightState {
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            ambient: [1.0, 1.0, 1.0],
            ambient_intensity: 0.2,
            background: [0.0, 0.0, 0.0],
        }
    }

    /// Add a point light to the scene.
    pub fn add(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    /// Remove all lights.
    pub fn clear(&mut self) {
        self.lights.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    pub fn count(&self) -> usize {
        self.lights.len()
    }

    /// Set the ambient light color.
    pub fn set_ambient(&mut self, r: f32, g: f32, b: f32) {
        self.ambient = [r, g, b];
    }

    pub fn ambient(&self) -> [f32; 3] {
        self.ambient
    }

    /// Set the ambient intensity multiplier (theme state).
    pub fn set_ambient_intensity(&mut self, intensity: f32) {
        self.ambient_intensity = intensity;
    }

    pub fn ambient_intensity(&self) -> f32 {
        self.ambient_intensity
    }

    /// Set the clear color (theme state).
    pub fn set_background(&mut self, r: f32, g: f32, b: f32) {
        self.background = [r, g, b];
    }

    pub fn background(&self) -> [f32; 3] {
        self.background
    }

    /// Pointer to the lights data for SAB serialization.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_light_is_8_floats() {
        assert_eq!(std::mem::size_of::<PointLight>(), 8 * 4);
    }

    #[test]
    fn add_and_count() {
        let mut state = LightState::new();
        state.add(PointLight::new(Vec3::ZERO, [1.0; 3], 3.0, 300.0));
        assert_eq!(state.count(), 1);
    }

    #[test]
    fn theme_state_round_trips() {
        let mut state = LightState::new();
        let (bg0, ai0) = (state.background(), state.ambient_intensity());

        state.set_background(0.07, 0.07, 0.09);
        state.set_ambient_intensity(0.1);
        state.set_background(bg0[0], bg0[1], bg0[2]);
        state.set_ambient_intensity(ai0);

        assert_eq!(state.background(), bg0);
        assert_eq!(state.ambient_intensity(), ai0);
    }
}
