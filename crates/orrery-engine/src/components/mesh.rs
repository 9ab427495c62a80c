/// RGB color for mesh rendering.
#[derive(Debug, Clone, Copy)]
pub struct MeshColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl MeshColor {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed 0xRRGGBB value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }
}

impl Default for MeshColor {
    fn default() -> Self {
        Self { r: 0.6, g: 0.6, b: 0.8 }
    }
}

/// Shape primitive the host renderer knows how to draw.
#[derive(Debug, Clone, Copy)]
pub enum MeshShape {
    Sphere { radius: f32 },
    /// Flat annulus, tilted about the local X axis.
    Ring { inner: f32, outer: f32, tilt: f32 },
}

/// Component for rendered meshes.
#[derive(Debug, Clone, Copy)]
pub struct MeshComponent {
    pub shape: MeshShape,
    pub color: MeshColor,
    /// Phong specular exponent (default: 32.0).
    pub shininess: f32,
    /// HDR glow multiplier (default: 0.0, values > 0 push into EDR range).
    pub emissive: f32,
    /// Opacity (rings are drawn translucent).
    pub alpha: f32,
}

impl Default for MeshComponent {
    fn default() -> Self {
        Self {
            shape: MeshShape::Sphere { radius: 1.0 },
            color: MeshColor::default(),
            shininess: 32.0,
            emissive: 0.0,
            alpha: 1.0,
        }
    }
}

impl MeshComponent {
    pub fn new(shape: MeshShape, color: MeshColor) -> Self {
        Self {
            shape,
            color,
            ..Default::default()
        }
    }

    pub fn sphere(radius: f32, color: MeshColor) -> Self {
        Self::new(MeshShape::Sphere { radius }, color)
    }

    pub fn ring(inner: f32, outer: f32, tilt: f32, color: MeshColor) -> Self {
        Self::new(MeshShape::Ring { inner, outer, tilt }, color)
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Bounding radius used by picking.
    pub fn bounding_radius(&self) -> f32 {
        match self.shape {
            MeshShape::Sphere { radius } => radius,
            MeshShape::Ring { outer, .. } => outer,
        }
    }
}
