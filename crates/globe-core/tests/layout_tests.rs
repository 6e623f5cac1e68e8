// Tests for the Fibonacci sphere layout: exact counts, radius invariant,
// determinism, and spacing over the whole supported range.

use globe_core::{fibonacci_sphere, LayoutError, ICON_RADIUS};

#[test]
fn every_count_returns_exact_positions_on_the_shell() {
    for n in 1..=300usize {
        let positions = fibonacci_sphere(n, ICON_RADIUS).unwrap();
        assert_eq!(positions.len(), n);
        for (i, p) in positions.iter().enumerate() {
            let err = (p.length() - ICON_RADIUS).abs();
            assert!(
                err < 1e-6,
                "n={n} i={i}: |{}| off shell by {err}",
                p.length()
            );
        }
    }
}

#[test]
fn zero_count_yields_empty_sequence() {
    let positions = fibonacci_sphere(0, 1.0).unwrap();
    assert!(positions.is_empty());
}

#[test]
fn invalid_radius_is_rejected() {
    for bad in [0.0_f32, -1.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
        let result = fibonacci_sphere(12, bad);
        assert!(
            matches!(result, Err(LayoutError::InvalidRadius(_))),
            "radius {bad} should be rejected"
        );
    }
}

#[test]
fn identical_inputs_yield_bit_identical_sequences() {
    let a = fibonacci_sphere(137, 1.35).unwrap();
    let b = fibonacci_sphere(137, 1.35).unwrap();
    assert_eq!(a.len(), b.len());
    for (pa, pb) in a.iter().zip(&b) {
        assert_eq!(pa.x.to_bits(), pb.x.to_bits());
        assert_eq!(pa.y.to_bits(), pb.y.to_bits());
        assert_eq!(pa.z.to_bits(), pb.z.to_bits());
    }
}

#[test]
fn no_two_positions_coincide_and_spacing_scales_with_count() {
    // The minimum pairwise chord distance of this lattice stays above
    // roughly 2.7/sqrt(n) on the unit sphere; assert a safe lower bound.
    for n in [2usize, 12, 50, 150, 300] {
        let positions = fibonacci_sphere(n, 1.0).unwrap();
        let mut min_dist = f32::MAX;
        for i in 0..n {
            for j in (i + 1)..n {
                min_dist = min_dist.min(positions[i].distance(positions[j]));
            }
        }
        let bound = 1.5 / (n as f32).sqrt();
        assert!(
            min_dist > bound,
            "n={n}: min pairwise distance {min_dist} under bound {bound}"
        );
    }
}

#[test]
fn latitudes_descend_monotonically_with_index() {
    // Uniform-area bands walk from near the north pole to near the south.
    let positions = fibonacci_sphere(100, 1.0).unwrap();
    for pair in positions.windows(2) {
        assert!(pair[0].y > pair[1].y);
    }
    assert!(positions[0].y > 0.9);
    assert!(positions[99].y < -0.9);
}
