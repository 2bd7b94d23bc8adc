//! Property tests for the predicate layer, the hull and polygon measures.
//!
//! Hull and polygon properties use small integer coordinates: every
//! orientation value is then exact in f64, collinear and duplicate points
//! are frequent, and assertions can be exact. The jittered variants move
//! those points by noise far below `eps`, so collinear and duplicate points
//! are only equal under the tolerance.

use nalgebra::vector;
use planar::prelude::*;
use proptest::prelude::*;

fn grid_points(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-20i32..=20, -20i32..=20), 0..max_len)
        .prop_map(|v| v.into_iter().map(|(x, y)| vector![x as f64, y as f64]).collect())
}

fn jittered_points(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    let noise = -1e-9f64..1e-9;
    prop::collection::vec((-5i32..=5, -5i32..=5, noise.clone(), noise), 0..max_len).prop_map(|v| {
        v.into_iter()
            .map(|(x, y, dx, dy)| vector![x as f64 + dx, y as f64 + dy])
            .collect()
    })
}

fn real_point() -> impl Strategy<Value = Point> {
    (-1e3f64..1e3, -1e3f64..1e3).prop_map(|(x, y)| vector![x, y])
}

fn distinct_count(points: &[Point]) -> usize {
    let mut v = points.to_vec();
    v.sort_by(planar::vec2::lex_cmp);
    v.dedup();
    v.len()
}

proptest! {
    #[test]
    fn orient_degenerate_and_antisymmetric(a in real_point(), b in real_point(), c in real_point()) {
        prop_assert_eq!(orient(a, a, a), 0.0);
        prop_assert_eq!(orient(a, b, c), -orient(a, c, b));
        let cfg = GeomCfg::default();
        prop_assert_eq!(orientation(a, b, c, cfg), orientation(a, c, b, cfg).reversed());
    }

    #[test]
    fn hull_contains_input_and_turns_left(pts in grid_points(60)) {
        let cfg = GeomCfg::default();
        match convex_hull(&pts, cfg) {
            Ok(h) => {
                prop_assert!(h.len() >= 3);
                prop_assert!(h.len() <= pts.len());
                let n = h.len();
                for k in 0..n {
                    prop_assert!(orient(h[k], h[(k + 1) % n], h[(k + 2) % n]) > 0.0);
                }
                for p in &pts {
                    for k in 0..n {
                        prop_assert!(orient(h[k], h[(k + 1) % n], *p) >= 0.0);
                    }
                }
                // starts at the lexicographic minimum
                for p in &pts {
                    prop_assert!(planar::vec2::lex_cmp(&h[0], p) != std::cmp::Ordering::Greater);
                }
            }
            Err(GeomError::InsufficientPoints { actual, .. }) => {
                prop_assert!(actual < 3);
                prop_assert_eq!(actual, distinct_count(&pts));
            }
            Err(GeomError::CollinearPoints { .. }) => {
                let (a, b) = (pts[0], pts[pts.len() - 1]);
                let first = pts.iter().find(|p| **p != a).copied().unwrap_or(b);
                for p in &pts {
                    prop_assert_eq!(orient(a, first, *p), 0.0);
                }
            }
            Err(e) => prop_assert!(false, "unexpected error {e}"),
        }
    }

    #[test]
    fn hull_ignores_input_order(
        (pts, shuffled) in grid_points(40).prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let cfg = GeomCfg::default();
        prop_assert_eq!(convex_hull(&pts, cfg), convex_hull(&shuffled, cfg));
        prop_assert_eq!(
            convex_hull_with(&pts, HullMode::KeepCollinear, cfg),
            convex_hull_with(&shuffled, HullMode::KeepCollinear, cfg)
        );
    }

    #[test]
    fn collinear_mode_is_a_superset(pts in grid_points(40)) {
        let cfg = GeomCfg::default();
        if let (Ok(strict), Ok(kept)) = (
            convex_hull(&pts, cfg),
            convex_hull_with(&pts, HullMode::KeepCollinear, cfg),
        ) {
            prop_assert!(kept.len() >= strict.len());
            for v in &strict {
                prop_assert!(kept.contains(v));
            }
            prop_assert_eq!(area_polygon(&kept), area_polygon(&strict));
            // every kept vertex lies on the strict hull's boundary
            for v in &kept {
                prop_assert_eq!(locate_point(&strict, *v, cfg), PointLocation::Boundary);
            }
        }
    }

    #[test]
    fn jittered_hull_contains_input(pts in jittered_points(40)) {
        let cfg = GeomCfg::default();
        let strict = convex_hull(&pts, cfg);
        let kept = convex_hull_with(&pts, HullMode::KeepCollinear, cfg);
        for h in [&strict, &kept] {
            match h {
                Ok(h) => {
                    for p in &pts {
                        prop_assert_ne!(locate_point(h, *p, cfg), PointLocation::Outside);
                    }
                    for (i, p) in h.iter().enumerate() {
                        for q in &h[i + 1..] {
                            prop_assert!(!cfg.points_eq(*p, *q));
                        }
                    }
                    prop_assert!(signed_area_polygon(h) > 0.0);
                }
                Err(GeomError::InsufficientPoints { actual, .. }) => prop_assert!(*actual < 3),
                Err(GeomError::CollinearPoints { .. }) => {}
                Err(e) => prop_assert!(false, "unexpected error {e}"),
            }
        }
        if let (Ok(strict), Ok(kept)) = (&strict, &kept) {
            let n = strict.len();
            for k in 0..n {
                prop_assert!(orient(strict[k], strict[(k + 1) % n], strict[(k + 2) % n]) > 0.0);
            }
            for v in strict {
                prop_assert!(kept.contains(v));
            }
        }
    }

    #[test]
    fn jittered_hull_ignores_input_order(
        (pts, shuffled) in jittered_points(40).prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let cfg = GeomCfg::default();
        prop_assert_eq!(convex_hull(&pts, cfg), convex_hull(&shuffled, cfg));
        prop_assert_eq!(
            convex_hull_with(&pts, HullMode::KeepCollinear, cfg),
            convex_hull_with(&shuffled, HullMode::KeepCollinear, cfg)
        );
    }

    #[test]
    fn hull_centroid_is_inside(pts in grid_points(40)) {
        let cfg = GeomCfg::default();
        if let Ok(h) = convex_hull(&pts, cfg) {
            let c = centroid_polygon(&h, cfg).expect("hull has positive area");
            prop_assert!(point_in_polygon(&h, c));
            prop_assert_eq!(locate_point(&h, c, cfg), PointLocation::Inside);
        }
    }

    #[test]
    fn area_ignores_winding_and_rotation(pts in grid_points(20), shift in 0usize..20) {
        let a = area_polygon(&pts);
        let mut rev = pts.clone();
        rev.reverse();
        prop_assert_eq!(area_polygon(&rev), a);
        let mut rot = pts.clone();
        if !rot.is_empty() {
            let k = shift % rot.len();
            rot.rotate_left(k);
        }
        prop_assert_eq!(area_polygon(&rot), a);
    }

    #[test]
    fn reflection_is_involution(a in real_point(), b in real_point(), p in real_point()) {
        let cfg = GeomCfg::default();
        prop_assume!((a - b).norm() > 1e-3);
        let l = Line::through(a, b, cfg).unwrap();
        let back = l.refl(l.refl(p));
        prop_assert!((back - p).norm() <= 1e-9 * (1.0 + p.norm() + a.norm()));
    }

    #[test]
    fn segment_tests_are_symmetric(pts in prop::collection::vec((-8i32..=8, -8i32..=8), 4)) {
        let cfg = GeomCfg::default();
        let q: Vec<Point> = pts.iter().map(|&(x, y)| vector![x as f64, y as f64]).collect();
        let (a, b, c, d) = (q[0], q[1], q[2], q[3]);
        prop_assert_eq!(inters(a, b, c, d, cfg), inters(c, d, a, b, cfg));
        prop_assert_eq!(inters(a, b, c, d, cfg), inters(b, a, d, c, cfg));
        prop_assert_eq!(
            proper_inter(a, b, c, d, cfg).is_some(),
            proper_inter(c, d, a, b, cfg).is_some()
        );
        // the same configuration shrunk to 1e-5 scale gives the same answers
        let s = 1e-5;
        prop_assert_eq!(inters(a * s, b * s, c * s, d * s, cfg), inters(a, b, c, d, cfg));
        prop_assert_eq!(
            proper_inter(a * s, b * s, c * s, d * s, cfg).is_some(),
            proper_inter(a, b, c, d, cfg).is_some()
        );
        if inters(a, b, c, d, cfg) {
            prop_assert!(seg_seg(a, b, c, d, cfg) < 1e-9);
        } else {
            prop_assert!(seg_seg(a, b, c, d, cfg) > 0.0);
        }
    }
}

#[test]
fn scenario_square_hull() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
        vector![0.5, 0.5],
    ];
    let h = convex_hull(&pts, GeomCfg::default()).unwrap();
    assert_eq!(h, pts[..4].to_vec());
}

#[test]
fn scenario_axes_meet_at_origin() {
    let cfg = GeomCfg::default();
    let l1 = Line::through(vector![0.0, 0.0], vector![1.0, 0.0], cfg).unwrap();
    let l2 = Line::through(vector![0.0, 0.0], vector![0.0, 1.0], cfg).unwrap();
    assert_eq!(inter(&l1, &l2, cfg), Some(vector![0.0, 0.0]));
}

#[test]
fn scenario_crossing_diagonals_distance() {
    let d = seg_seg(
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
        vector![1.0, 0.0],
        GeomCfg::default(),
    );
    assert_eq!(d, 0.0);
}

#[test]
fn scenario_triangle_area() {
    let a = area_triangle(vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]);
    assert!((a - 0.5).abs() < 1e-12);
}

#[test]
fn scenario_unit_circle_meets_x_axis() {
    let cfg = GeomCfg::default();
    let c = Circle::new(vector![0.0, 0.0], 1.0);
    let l = Line::from_equation(0.0, 1.0, 0.0, cfg).unwrap();
    let x = circle_line(&c, &l, cfg);
    assert_eq!(x.count(), 2);
    assert_eq!(x.points(), vec![vector![-1.0, 0.0], vector![1.0, 0.0]]);
}
