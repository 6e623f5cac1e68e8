//! Fibonacci/spiral point distribution on a sphere.
//!
//! Places `count` points with near-uniform nearest-neighbor spacing by
//! walking uniform-area latitude bands while advancing the azimuth by a
//! golden-ratio fraction of a turn. The irrational increment never lands
//! on the same `(phi, theta)` twice, so no two points coincide for any
//! count in the supported range. Purely a function of its inputs: the
//! same `(count, radius)` always yields a bit-identical sequence, which
//! keeps every icon's on-screen location stable across reloads.

use crate::constants::golden_ratio;
use crate::error::LayoutError;
use glam::Vec3;
use std::f32::consts::TAU;

/// Distribute `count` positions evenly over a sphere of `radius`.
///
/// The result is index-aligned with the caller's marker list: position
/// `i` belongs to marker `i`. `count == 0` yields an empty sequence.
pub fn fibonacci_sphere(count: usize, radius: f32) -> Result<Vec<Vec3>, LayoutError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(LayoutError::InvalidRadius(radius));
    }
    let n = count as f32;
    let mut positions = Vec::with_capacity(count);
    for i in 0..count {
        // Uniform-area polar bands: acos of an evenly spaced cosine.
        let phi = (1.0 - 2.0 * (i as f32 + 0.5) / n).acos();
        // Golden-ratio azimuth avoids the seams a linear spacing produces.
        let theta = TAU * i as f32 / golden_ratio();
        positions.push(
            radius
                * Vec3::new(
                    phi.sin() * theta.cos(),
                    phi.cos(),
                    phi.sin() * theta.sin(),
                ),
        );
    }
    Ok(positions)
}
