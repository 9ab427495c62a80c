use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Number of sample points per guide ring.
pub const RING_SAMPLES: usize = 100;

/// One vertex of a guide polyline. 8 floats = 32 bytes stride; vertices
/// are consumed pairwise as a line list by the host renderer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct GuideVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub _pad: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl GuideVertex {
    pub const FLOATS: usize = 8;

    fn new(pos: Vec3, color: [f32; 4]) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            _pad: 0.0,
            r: color[0],
            g: color[1],
            b: color[2],
            a: color[3],
        }
    }
}

/// Guide-curve vertex accumulator, cleared and redrawn every frame.
/// Guides are non-interactive rings marking each body's orbital path.
pub struct GuideState {
    vertices: Vec<GuideVertex>,
}

impl GuideState {
    pub fn new() -> Self {
        Self {
            vertices: Vec::with_capacity(1024),
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Append a line segment.
    pub fn segment(&mut self, from: Vec3, to: Vec3, color: [f32; 4]) {
        self.vertices.push(GuideVertex::new(from, color));
        self.vertices.push(GuideVertex::new(to, color));
    }

    /// Append a closed ring of the given radius in the XZ plane,
    /// centered on `center`.
    pub fn ring(&mut self, center: Vec3, radius: f32, color: [f32; 4]) {
        let mut prev = center + Vec3::new(radius, 0.0, 0.0);
        for i in 1..=RING_SAMPLES {
            let theta = (i as f32 / RING_SAMPLES as f32) * std::f32::consts::TAU;
            let next = center + Vec3::new(radius * theta.cos(), 0.0, radius * theta.sin());
            self.segment(prev, next, color);
            prev = next;
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Raw pointer to vertex data for SharedArrayBuffer reads.
    pub fn as_ptr(&self) -> *const f32 {
        self.vertices.as_ptr() as *const f32
    }
}

impl Default for GuideState {
    fn default() -> Self {
        Self::new()
    }
}
