//! Camera state shared with the front-end.
//!
//! Platform-free types: the front-end owns the real event loop and window,
//! these only turn orbit input into matrices the core and renderer agree on.

use crate::constants::{
    CAMERA_DISTANCE, CAMERA_FOVY_RADIANS, CAMERA_ZFAR, CAMERA_ZNEAR, MAX_POLAR_ANGLE,
    MIN_POLAR_ANGLE,
};
use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Orbit rig around the globe center. The polar angle is clamped so the
/// camera can never swing over the poles, matching the shipped launcher.
#[derive(Clone, Copy, Debug)]
pub struct OrbitCamera {
    pub azimuth: f32,
    pub polar: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            polar: FRAC_PI_2,
            distance: CAMERA_DISTANCE,
        }
    }
}

impl OrbitCamera {
    /// Apply a drag delta. Azimuth wraps freely; polar stays clamped.
    pub fn orbit(&mut self, d_azimuth: f32, d_polar: f32) {
        self.azimuth += d_azimuth;
        self.polar = (self.polar + d_polar).clamp(MIN_POLAR_ANGLE, MAX_POLAR_ANGLE);
    }

    /// Current eye position in world space. The default rig looks down -Z
    /// from `(0, 0, distance)`.
    pub fn eye(&self) -> Vec3 {
        let horizontal = self.polar.sin() * self.distance;
        Vec3::new(
            horizontal * self.azimuth.sin(),
            self.polar.cos() * self.distance,
            horizontal * self.azimuth.cos(),
        )
    }

    /// Full camera for the given viewport aspect, aimed at the globe center.
    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}
