//! Cross-module property tests.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use zonepath::geom::{BaselineFrame, Point};
use zonepath::planner::{perturb_all, perturb_one};
use zonepath::zone::{CircleZone, Zone};

fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

proptest! {
    /// Coverage is symmetric under swapping the segment endpoints.
    #[test]
    fn coverage_symmetric(
        cx in -100.0..100.0f64,
        cy in -100.0..100.0f64,
        r in 0.5..50.0f64,
        ax in -200.0..200.0f64,
        ay in -200.0..200.0f64,
        bx in -200.0..200.0f64,
        by in -200.0..200.0f64,
    ) {
        let z = CircleZone::new(point(cx, cy), r, 0.5).unwrap();
        let fwd = z.chord(point(ax, ay), point(bx, by));
        let rev = z.chord(point(bx, by), point(ax, ay));
        prop_assert!((fwd - rev).abs() < 1e-6);
    }

    /// Two strictly interior endpoints cover the whole segment.
    #[test]
    fn coverage_interior_segment_is_full_length(
        cx in -100.0..100.0f64,
        cy in -100.0..100.0f64,
        r in 1.0..50.0f64,
        au in -0.9..0.9f64,
        av in -0.9..0.9f64,
        bu in -0.9..0.9f64,
        bv in -0.9..0.9f64,
    ) {
        // Scale unit-disc samples into the circle; reject the rim.
        let a = point(cx + au * r / 2.0, cy + av * r / 2.0);
        let b = point(cx + bu * r / 2.0, cy + bv * r / 2.0);
        let z = CircleZone::new(point(cx, cy), r, 0.5).unwrap();
        prop_assert!((z.chord(a, b) - a.dist(b)).abs() < 1e-9);
    }

    /// A segment beyond the circle's reach has zero coverage.
    #[test]
    fn coverage_far_segment_is_zero(
        r in 0.5..50.0f64,
        ay in -200.0..200.0f64,
        by in -200.0..200.0f64,
        offset in 0.001..500.0f64,
    ) {
        // Keep the whole segment strictly right of the circle.
        let x = r + offset;
        let z = CircleZone::new(point(0.0, 0.0), r, 0.5).unwrap();
        prop_assert_eq!(z.chord(point(x, ay), point(x + 100.0, by)), 0.0);
    }

    /// A permeability-1 zone never changes a segment's cost.
    #[test]
    fn neutral_zone_is_free(
        cx in -100.0..100.0f64,
        r in 1.0..60.0f64,
        ax in -200.0..200.0f64,
        bx in -200.0..200.0f64,
    ) {
        let zones: Vec<Box<dyn Zone>> =
            vec![Box::new(CircleZone::new(point(cx, 0.0), r, 1.0).unwrap())];
        let objective = zonepath::path::Objective::new(&zones);
        let a = point(ax, -5.0);
        let b = point(bx, 5.0);
        prop_assert!((objective.segment(a, b) - a.dist(b)).abs() < 1e-9);
    }

    /// Frame round-trip is the identity for any non-zero baseline.
    #[test]
    fn frame_round_trip(
        bx in -1000.0..1000.0f64,
        by in -1000.0..1000.0f64,
        fx in -1000.0..1000.0f64,
        fy in -1000.0..1000.0f64,
        px in -1000.0..1000.0f64,
        py in -1000.0..1000.0f64,
    ) {
        let base = point(bx, by);
        let far = point(fx, fy);
        prop_assume!(base.dist(far) > 1e-6);
        let frame = BaselineFrame::new(base, far).unwrap();
        let p = point(px, py);
        let back = frame.from_frame(frame.to_frame(p));
        prop_assert!(p.dist(back) < 1e-6);
    }

    /// Frame operators never break strict x-ordering, whatever the
    /// variance or seed.
    #[test]
    fn perturbation_preserves_ordering(
        seed in any::<u64>(),
        x_var in 0.1..500.0f64,
        y_var in 0.1..500.0f64,
        n in 1usize..12,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let spacing = 40.0;
        let mut pts: Vec<Point> = (0..n + 2).map(|i| point(i as f64 * spacing, 0.0)).collect();

        perturb_all(&mut pts, x_var, y_var, &mut rng);
        for pair in pts.windows(2) {
            prop_assert!(pair[0].x < pair[1].x);
        }

        perturb_one(&mut pts, x_var, y_var, &mut rng);
        for pair in pts.windows(2) {
            prop_assert!(pair[0].x < pair[1].x);
        }
    }
}
