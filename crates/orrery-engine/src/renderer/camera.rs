use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

/// How far the camera may pitch above/below the orbital plane.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.05;
/// Orbit rotation per pixel of pointer drag.
const ROTATE_SPEED: f32 = 0.005;
/// Multiplicative zoom per scroll tick.
const ZOOM_STEP: f32 = 1.1;
const ZOOM_MIN: f32 = 20.0;
const ZOOM_MAX: f32 = 600.0;

/// A ray in world space, used for picking.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Perspective orbit camera.
///
/// The camera circles a fixed target (the scene origin): yaw/pitch come
/// from pointer drag, distance from scroll zoom. Produces the
/// view-projection matrix the host renderer consumes and the picking rays
/// the interaction layer consumes.
pub struct Camera3D {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub z_near: f32,
    pub z_far: f32,
    /// Viewport size in physical pixels.
    pub viewport_w: f32,
    pub viewport_h: f32,
    /// Device pixel ratio reported by the host.
    pub pixel_ratio: f32,
    /// Orbit target in world space.
    pub target: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl Camera3D {
    pub fn new(fov_y_deg: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            fov_y: fov_y_deg.to_radians(),
            z_near,
            z_far,
            viewport_w: 800.0,
            viewport_h: 600.0,
            pixel_ratio: 1.0,
            target: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.38,
            distance: 107.7,
        }
    }

    /// Place the camera explicitly by orbit parameters.
    pub fn set_orbit(&mut self, yaw: f32, pitch: f32, distance: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.distance = distance.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Resize the viewport (e.g. on window resize). Recomputes the aspect
    /// ratio used by the projection.
    pub fn resize(&mut self, viewport_w: f32, viewport_h: f32, pixel_ratio: f32) {
        self.viewport_w = viewport_w.max(1.0);
        self.viewport_h = viewport_h.max(1.0);
        self.pixel_ratio = pixel_ratio.max(0.1);
    }

    pub fn aspect(&self) -> f32 {
        self.viewport_w / self.viewport_h
    }

    /// World-space eye position derived from the orbit parameters.
    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + self.distance * Vec3::new(cp * sy, sp, cp * cy)
    }

    /// Orbit the camera from a pointer drag delta in pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * ROTATE_SPEED;
        self.pitch = (self.pitch + dy * ROTATE_SPEED).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Zoom by scroll direction (+1 in, -1 out). Distance is clamped.
    pub fn zoom(&mut self, direction: f32) {
        let factor = if direction > 0.0 { 1.0 / ZOOM_STEP } else { ZOOM_STEP };
        self.distance = (self.distance * factor).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    /// Perspective projection with Z in [0, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect(), self.z_near, self.z_far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_proj().to_cols_array_2d(),
        }
    }

    /// Cast a world-space ray through a pointer position in client pixels.
    pub fn ray_from_screen(&self, px: f32, py: f32) -> Ray {
        let ndc_x = px / self.viewport_w * 2.0 - 1.0;
        let ndc_y = -(py / self.viewport_h * 2.0 - 1.0);

        let inv = self.view_proj().inverse();
        let near = inv * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
        let far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let near = near.truncate() / near.w;
        let far = far.truncate() / far.w;

        Ray {
            origin: near,
            dir: (far - near).normalize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_aspect() {
        let mut cam = Camera3D::new(75.0, 0.1, 1000.0);
        cam.resize(1920.0, 1080.0, 2.0);
        assert!((cam.aspect() - 1920.0 / 1080.0).abs() < 1e-6);
        assert_eq!(cam.pixel_ratio, 2.0);
    }

    #[test]
    fn eye_distance_matches_orbit_distance() {
        let mut cam = Camera3D::new(75.0, 0.1, 1000.0);
        cam.set_orbit(1.2, 0.4, 150.0);
        assert!((cam.eye().length() - 150.0).abs() < 1e-3);
    }

    #[test]
    fn center_ray_points_at_target() {
        let cam = Camera3D::new(75.0, 0.1, 1000.0);
        let ray = cam.ray_from_screen(cam.viewport_w / 2.0, cam.viewport_h / 2.0);
        let to_target = (cam.target - cam.eye()).normalize();
        assert!(ray.dir.dot(to_target) > 0.999, "dir={:?}", ray.dir);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut cam = Camera3D::new(75.0, 0.1, 1000.0);
        cam.orbit(0.0, 1e6);
        let eye = cam.eye();
        // Never flips over the pole
        assert!(eye.y / (eye - cam.target).length() <= PITCH_LIMIT.sin() + 1e-4);
        // Further drag at the clamp is a no-op
        cam.orbit(0.0, 1e6);
        assert!((cam.eye() - eye).length() < 1e-3);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = Camera3D::new(75.0, 0.1, 1000.0);
        for _ in 0..1000 {
            cam.zoom(1.0);
        }
        assert!((cam.eye() - cam.target).length() >= ZOOM_MIN - 1e-3);
        for _ in 0..1000 {
            cam.zoom(-1.0);
        }
        assert!((cam.eye() - cam.target).length() <= ZOOM_MAX + 1e-3);
    }

    #[test]
    fn uniform_is_column_major_mat4() {
        let cam = Camera3D::new(75.0, 0.1, 1000.0);
        let u = cam.uniform();
        let rebuilt = Mat4::from_cols_array_2d(&u.view_proj);
        assert!((rebuilt.determinant() - cam.view_proj().determinant()).abs() < 1e-3);
    }
}
