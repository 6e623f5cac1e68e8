//! Pointer picking math: screen-space to world-space rays and ray/sphere
//! intersection. Pick resolution against the marker set lives in
//! [`crate::scene`], which owns the spun world positions.

use crate::state::Camera;
use glam::{Vec3, Vec4};

/// Nearest intersection parameter `t` of a ray with a sphere, or `None`
/// when the ray misses or the sphere is behind the origin.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Compute a world-space ray from pixel coordinates on a viewport of
/// `width` x `height`, using the camera's own matrices.
///
/// Returns `(ray_origin, ray_direction)` in world space.
pub fn screen_to_world_ray(
    camera: &Camera,
    width: f32,
    height: f32,
    sx: f32,
    sy: f32,
) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
    let inv = camera.view_proj().inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let far: Vec3 = p_far.truncate() / p_far.w;
    let origin = camera.eye;
    let dir = (far - origin).normalize();
    (origin, dir)
}
