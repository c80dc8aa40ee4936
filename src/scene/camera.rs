use glam::Vec3;

use crate::config::SceneConfig;

/// Perspective camera. Right-handed, y up, looks down -Z until aimed.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub up: Vec3,
    forward: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(position: Vec3, aspect: f32) -> Self {
        Self {
            position,
            up: Vec3::Y,
            forward: Vec3::NEG_Z,
            fov_y: 60.0,
            aspect,
            near: 0.1,
            far: 5000.0,
        }
    }

    /// Unit look direction.
    #[inline]
    pub fn world_direction(&self) -> Vec3 {
        self.forward
    }

    pub fn look_at(&mut self, target: Vec3) {
        let dir = (target - self.position).normalize_or_zero();
        if dir != Vec3::ZERO {
            self.forward = dir;
        }
    }
}

/// Camera controller that orbits a target point.
///
/// The scene only mutates the target and calls `update` once per frame.
pub trait OrbitControls {
    fn target(&self) -> Vec3;
    fn target_mut(&mut self) -> &mut Vec3;
    fn update(&mut self, camera: &mut Camera);
}

const MIN_POLAR: f32 = 1e-6;
const ZOOM_STEP: f32 = 0.95;

/// Orbit controls with damped rotation and distance limits.
///
/// Rotation and zoom requests accumulate and are applied gradually by
/// `update`. Panning is not offered; the target only moves when the
/// owner moves it.
#[derive(Debug, Clone, PartialEq)]
pub struct DampedOrbitControls {
    pub target: Vec3,
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    theta_delta: f32,
    phi_delta: f32,
    scale: f32,
}

impl Default for DampedOrbitControls {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}

impl DampedOrbitControls {
    pub fn from_config(cfg: &SceneConfig) -> Self {
        Self {
            target: Vec3::ZERO,
            damping_factor: cfg.damping_factor,
            min_distance: cfg.min_distance,
            max_distance: cfg.max_distance,
            theta_delta: 0.0,
            phi_delta: 0.0,
            scale: 1.0,
        }
    }

    /// Queue a rotation in radians (azimuth, polar).
    pub fn rotate(&mut self, azimuth: f32, polar: f32) {
        self.theta_delta -= azimuth;
        self.phi_delta -= polar;
    }

    /// Queue a zoom step. Positive moves away from the target.
    pub fn zoom(&mut self, delta: f32) {
        if delta > 0.0 {
            self.scale /= ZOOM_STEP;
        } else if delta < 0.0 {
            self.scale *= ZOOM_STEP;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.theta_delta.abs() < 1e-6 && self.phi_delta.abs() < 1e-6 && self.scale == 1.0
    }
}

impl OrbitControls for DampedOrbitControls {
    fn target(&self) -> Vec3 {
        self.target
    }

    fn target_mut(&mut self) -> &mut Vec3 {
        &mut self.target
    }

    fn update(&mut self, camera: &mut Camera) {
        let offset = camera.position - self.target;
        let radius = offset.length();

        let (mut theta, mut phi) = if radius > 0.0 {
            (offset.x.atan2(offset.z), (offset.y / radius).clamp(-1.0, 1.0).acos())
        } else {
            (0.0, std::f32::consts::FRAC_PI_2)
        };

        theta += self.theta_delta * self.damping_factor;
        phi += self.phi_delta * self.damping_factor;
        phi = phi.clamp(MIN_POLAR, std::f32::consts::PI - MIN_POLAR);

        // an inverted range resolves to max_distance instead of panicking
        let radius = (radius * self.scale).max(self.min_distance).min(self.max_distance);

        let (sin_phi, cos_phi) = phi.sin_cos();
        let offset = Vec3::new(
            radius * sin_phi * theta.sin(),
            radius * cos_phi,
            radius * sin_phi * theta.cos(),
        );
        camera.position = self.target + offset;
        camera.look_at(self.target);

        self.theta_delta *= 1.0 - self.damping_factor;
        self.phi_delta *= 1.0 - self.damping_factor;
        self.scale = 1.0;
    }
}
