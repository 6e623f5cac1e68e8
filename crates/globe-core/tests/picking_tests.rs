// Tests for ray construction and ray/sphere intersection.

use glam::Vec3;
use globe_core::{ray_sphere, screen_to_world_ray, OrbitCamera};

#[test]
fn ray_sphere_intersection_basic() {
    // Ray from origin down +Z toward a sphere at (0, 0, 5), radius 2.
    let t = ray_sphere(
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, 5.0),
        2.0,
    )
    .expect("should hit");
    assert!((t - 3.0).abs() < 1e-5, "entry point at z=3, got t={t}");
}

#[test]
fn ray_sphere_intersection_miss() {
    // Ray along +X, sphere sitting off on +Z.
    let result = ray_sphere(
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 5.0),
        2.0,
    );
    assert!(result.is_none());
}

#[test]
fn ray_sphere_behind_origin_is_ignored() {
    // Sphere entirely behind the ray origin.
    let result = ray_sphere(
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, -5.0),
        2.0,
    );
    assert!(result.is_none());
}

#[test]
fn ray_sphere_tangent_grazes() {
    let result = ray_sphere(
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(2.0, 0.0, 5.0),
        2.0,
    );
    assert!(result.is_some());
    assert!(result.unwrap() > 0.0);
}

#[test]
fn screen_center_ray_points_at_the_orbit_target() {
    let camera = OrbitCamera::default().camera(16.0 / 9.0);
    let (origin, dir) = screen_to_world_ray(&camera, 1600.0, 900.0, 800.0, 450.0);
    assert!(origin.distance(camera.eye) < 1e-6);
    // Default rig sits on +Z looking at the origin.
    let expected = (camera.target - camera.eye).normalize();
    assert!(dir.distance(expected) < 1e-4, "dir {dir} vs {expected}");
}

#[test]
fn screen_corner_rays_diverge_from_the_center() {
    let camera = OrbitCamera::default().camera(16.0 / 9.0);
    let (_, center) = screen_to_world_ray(&camera, 1600.0, 900.0, 800.0, 450.0);
    let (_, corner) = screen_to_world_ray(&camera, 1600.0, 900.0, 0.0, 0.0);
    assert!(corner.distance(center) > 1e-3);
    // Both still head into the scene.
    assert!(center.z < 0.0);
    assert!(corner.z < 0.0);
    // Top-left of the viewport maps to -X, +Y in world space.
    assert!(corner.x < 0.0);
    assert!(corner.y > 0.0);
}
