//! Per-frame visibility classification and outward billboard orientation.
//!
//! Both are stateless functions of the current positions: visibility is a
//! single dot product against [`VISIBILITY_THRESHOLD`], and orientation is
//! re-derived from the marker's radius vector every frame, never updated
//! incrementally, so there is no transform drift to accumulate.

use crate::constants::VISIBILITY_THRESHOLD;
use glam::{Mat4, Vec3};

/// Dot product of the normalized marker position and viewpoint vectors.
/// `None` when either vector is degenerate (zero length), in which case
/// the caller keeps the previous frame's classification.
pub fn facing_dot(position: Vec3, viewpoint: Vec3) -> Option<f32> {
    let p = position.try_normalize()?;
    let v = viewpoint.try_normalize()?;
    Some(p.dot(v))
}

/// The threshold comparison on its own. Strict `>`: a dot of exactly
/// `VISIBILITY_THRESHOLD` is back-facing.
#[inline]
pub fn front_facing(dot: f32) -> bool {
    dot > VISIBILITY_THRESHOLD
}

/// Classify a marker against the viewpoint; `None` on degenerate input.
pub fn is_front_facing(position: Vec3, viewpoint: Vec3) -> Option<bool> {
    facing_dot(position, viewpoint).map(front_facing)
}

/// The point a marker aims at: twice as far from the origin along its own
/// radius vector. Tuned alongside the visibility threshold; icons stay
/// billboarded to the sphere surface rather than to the camera.
#[inline]
pub fn look_target(position: Vec3) -> Vec3 {
    position * 2.0
}

/// Orient a flat quad at `center` so its +Z face points along `facing`,
/// scaled uniformly by `scale`. Falls back to a Z-aligned up reference
/// near the poles where +Y is unusable.
pub fn billboard_transform(center: Vec3, facing: Vec3, scale: f32) -> Mat4 {
    let forward = facing.try_normalize().unwrap_or(Vec3::Z);
    let up_ref = if forward.y.abs() > 0.999 {
        Vec3::Z
    } else {
        Vec3::Y
    };
    let right = up_ref.cross(forward).normalize();
    let up = forward.cross(right);
    Mat4::from_cols(
        (right * scale).extend(0.0),
        (up * scale).extend(0.0),
        (forward * scale).extend(0.0),
        center.extend(1.0),
    )
}

/// Full outward orientation for a marker: face the [`look_target`] of its
/// own position so the icon always presents its face along the outward
/// normal, independent of where the camera is.
pub fn outward_transform(position: Vec3, scale: f32) -> Mat4 {
    billboard_transform(position, look_target(position) - position, scale)
}
