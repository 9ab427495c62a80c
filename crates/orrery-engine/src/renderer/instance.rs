use bytemuck::{Pod, Zeroable};

/// Per-body render data written to SharedArrayBuffer for the host renderer.
/// Must match the TypeScript protocol: 16 floats = 64 bytes stride.
///
/// `shape` selects the host pipeline: 0 = sphere, 1 = ring. For rings,
/// `radius` is the outer radius, `aux` the inner radius and `tilt` the
/// inclination about local X.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct BodyInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha: f32,
    /// Self-rotation about local Y in radians.
    pub spin: f32,
    pub emissive: f32,
    pub shininess: f32,
    pub shape: f32,
    pub aux: f32,
    pub tilt: f32,
    pub _pad0: f32,
    pub _pad1: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub const SHAPE_SPHERE: f32 = 0.0;
    pub const SHAPE_RING: f32 = 1.0;
}

/// Buffer of body instances rebuilt every frame from the scene.
pub struct BodyBuffer {
    instances: Vec<BodyInstance>,
}

impl BodyBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: BodyInstance) {
        self.instances.push(instance);
    }

    pub fn count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn as_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for BodyBuffer {
    fn default() -> Self {
        Self::new()
    }
}
