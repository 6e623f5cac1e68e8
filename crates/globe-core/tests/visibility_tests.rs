// Tests for the visibility predicate and the outward billboard transform.

use glam::Vec3;
use globe_core::{
    billboard_transform, facing_dot, front_facing, is_front_facing, look_target,
    outward_transform, VISIBILITY_THRESHOLD,
};

#[test]
fn marker_directly_facing_the_camera_is_visible() {
    let dot = facing_dot(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 3.0)).unwrap();
    assert!((dot - 1.0).abs() < 1e-6);
    assert_eq!(
        is_front_facing(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 3.0)),
        Some(true)
    );
}

#[test]
fn antipodal_marker_is_hidden() {
    let dot = facing_dot(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 3.0)).unwrap();
    assert!((dot + 1.0).abs() < 1e-6);
    assert_eq!(
        is_front_facing(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 3.0)),
        Some(false)
    );
}

#[test]
fn exact_threshold_is_back_facing() {
    // The comparison is strict `>`, so the boundary itself is hidden.
    assert!(!front_facing(VISIBILITY_THRESHOLD));
    assert!(front_facing(VISIBILITY_THRESHOLD + 1e-6));
    assert!(!front_facing(VISIBILITY_THRESHOLD - 1e-6));
    assert!(front_facing(0.0));
    assert!(front_facing(1.0));
    assert!(!front_facing(-1.0));
}

#[test]
fn threshold_admits_markers_slightly_past_the_horizon() {
    // A marker ~100 degrees off the view axis still counts as visible.
    let just_past = (100.0_f32).to_radians().cos(); // about -0.17
    assert!(front_facing(just_past));
    let well_past = (120.0_f32).to_radians().cos(); // -0.5
    assert!(!front_facing(well_past));
}

#[test]
fn degenerate_vectors_are_undecidable() {
    assert_eq!(facing_dot(Vec3::ZERO, Vec3::new(0.0, 0.0, 3.0)), None);
    assert_eq!(facing_dot(Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO), None);
    assert_eq!(is_front_facing(Vec3::ONE, Vec3::ZERO), None);
}

#[test]
fn look_target_is_twice_the_position() {
    let p = Vec3::new(0.3, -0.8, 1.1);
    assert_eq!(look_target(p), p * 2.0);
}

#[test]
fn outward_transform_faces_along_the_radius_vector() {
    let p = Vec3::new(0.0, 0.0, 1.35);
    let m = outward_transform(p, 0.22);
    // Translation puts the quad at the marker position.
    let center = m.transform_point3(Vec3::ZERO);
    assert!(center.distance(p) < 1e-6);
    // Local +Z (the quad face) points along the outward normal.
    let face = m.transform_vector3(Vec3::Z);
    assert!(face.normalize().distance(p.normalize()) < 1e-6);
    assert!((face.length() - 0.22).abs() < 1e-6);
}

#[test]
fn outward_transform_is_orthogonal_at_the_poles() {
    for pole in [Vec3::new(0.0, 1.35, 0.0), Vec3::new(0.0, -1.35, 0.0)] {
        let m = outward_transform(pole, 1.0);
        let x = m.transform_vector3(Vec3::X);
        let y = m.transform_vector3(Vec3::Y);
        let z = m.transform_vector3(Vec3::Z);
        assert!((x.length() - 1.0).abs() < 1e-5, "pole {pole}: x {x}");
        assert!((y.length() - 1.0).abs() < 1e-5);
        assert!((z.length() - 1.0).abs() < 1e-5);
        assert!(x.dot(y).abs() < 1e-5);
        assert!(y.dot(z).abs() < 1e-5);
        assert!(z.dot(x).abs() < 1e-5);
        assert!(z.normalize().distance(pole.normalize()) < 1e-5);
    }
}

#[test]
fn billboard_transform_applies_uniform_scale() {
    let m = billboard_transform(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, 1.0), 2.5);
    assert!((m.transform_vector3(Vec3::X).length() - 2.5).abs() < 1e-5);
    assert!((m.transform_vector3(Vec3::Y).length() - 2.5).abs() < 1e-5);
}
