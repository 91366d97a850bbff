//! Property-based invariant tests for the geometry kernel.
//!
//! 1. A ray leaving a rounded rectangle's centre exits on its boundary.
//! 2. The exit point lies forward along the ray.
//! 3. Sector classification is total and consistent with the exit point.
//! 4. Line-line intersections lie on both lines.
//! 5. Ray-circle hits lie on the circle.

use std::f64::consts::TAU;

use proptest::prelude::*;
use scrollkit_core::{
    Point, RoundedRect, Sector, line_line_intersection, ray_circle_intersection,
};

// ── Helpers ─────────────────────────────────────────────────────────────

fn rounded_rect() -> impl Strategy<Value = RoundedRect> {
    (0.1f64..100.0, 0.1f64..100.0, 0.0f64..=1.0).prop_map(|(w, h, frac)| {
        RoundedRect::new(w, h, frac * w.min(h) / 2.0)
    })
}

/// Radius at its upper bound, so at least one pair of edges has zero length.
fn fully_rounded_rect() -> impl Strategy<Value = RoundedRect> {
    (0.1f64..100.0, 0.1f64..100.0).prop_map(|(w, h)| RoundedRect::new(w, h, w.min(h) / 2.0))
}

fn direction() -> impl Strategy<Value = Point> {
    (0.0f64..TAU, 0.01f64..100.0).prop_map(|(theta, len)| {
        Point::new(len * theta.cos(), len * theta.sin())
    })
}

fn origin() -> impl Strategy<Value = Point> {
    (-100.0f64..100.0, -100.0f64..100.0).prop_map(|(x, y)| Point::new(x, y))
}

/// Signed distance from `p` to the boundary of `rect` centred at the origin.
fn signed_distance(rect: &RoundedRect, p: Point) -> f64 {
    let r = rect.radius;
    let qx = p.x.abs() - (rect.size.x / 2.0 - r);
    let qy = p.y.abs() - (rect.size.y / 2.0 - r);
    let outside = Point::new(qx.max(0.0), qy.max(0.0)).length();
    let inside = qx.max(qy).min(0.0);
    outside + inside - r
}

fn cross(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Exit point lies on the boundary, forward along the ray
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ray_exit_lies_on_boundary(rect in rounded_rect(), a in origin(), delta in direction()) {
        let hit = rect.ray_exit(a, a + delta);
        prop_assert!(hit.is_some(), "no exit for {rect:?} along {delta:?}");
        let local = hit.unwrap() - a;
        let scale = 1.0 + rect.size.x.max(rect.size.y);
        let distance = signed_distance(&rect, local);
        prop_assert!(
            distance.abs() < 1e-6 * scale,
            "exit {local:?} is {distance} off the boundary of {rect:?}"
        );
    }

    #[test]
    fn fully_rounded_exit_lies_on_boundary(rect in fully_rounded_rect(), delta in direction()) {
        let angles = rect.boundary_angles();
        for pair in angles.windows(2) {
            prop_assert!(pair[0] <= pair[1], "{angles:?} out of order for {rect:?}");
        }
        let hit = rect.ray_exit(Point::ORIGIN, delta);
        prop_assert!(hit.is_some(), "no exit for {rect:?} along {delta:?}");
        let scale = 1.0 + rect.size.x.max(rect.size.y);
        let distance = signed_distance(&rect, hit.unwrap());
        prop_assert!(distance.abs() < 1e-6 * scale, "exit {distance} off boundary of {rect:?}");
    }

    #[test]
    fn ray_exit_is_forward_and_collinear(rect in rounded_rect(), a in origin(), delta in direction()) {
        let local = rect.ray_exit(a, a + delta).unwrap() - a;
        let dot = local.x * delta.x + local.y * delta.y;
        prop_assert!(dot > 0.0, "exit {local:?} behind ray {delta:?}");
        let scale = local.length() * delta.length();
        prop_assert!(cross(local, delta).abs() <= 1e-9 * scale.max(1.0));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Sector classification
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arc_exits_sit_on_their_corner_circle(rect in rounded_rect(), delta in direction()) {
        let sector = rect.sector(delta.angle());
        let local = rect.ray_exit(Point::ORIGIN, delta).unwrap();
        if let Some(center) = rect.arc_center(sector) {
            let scale = 1.0 + rect.size.x.max(rect.size.y);
            prop_assert!((local.distance(center) - rect.radius).abs() < 1e-6 * scale);
        } else {
            prop_assert!(rect.edge_endpoints(sector).is_some());
        }
    }

    #[test]
    fn cardinal_rays_hit_edge_midpoints(rect in rounded_rect()) {
        prop_assume!(rect.radius < rect.size.y / 2.0 && rect.radius < rect.size.x / 2.0);
        prop_assert_eq!(rect.sector(0.0), Sector::RightEdge);
        let right = rect.ray_exit(Point::ORIGIN, Point::new(1.0, 0.0)).unwrap();
        prop_assert!((right.x - rect.size.x / 2.0).abs() < 1e-9);
        let up = rect.ray_exit(Point::ORIGIN, Point::new(0.0, 1.0)).unwrap();
        prop_assert!((up.y - rect.size.y / 2.0).abs() < 1e-9);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4–5. Primitive intersections
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn line_line_hit_lies_on_both_lines(
        p1 in origin(), d1 in direction(), p3 in origin(), d2 in direction(),
    ) {
        let sin = cross(d1, d2) / (d1.length() * d2.length());
        prop_assume!(sin.abs() > 1e-3);
        let hit = line_line_intersection(p1, p1 + d1, p3, p3 + d2).unwrap();
        let scale = 1.0 + hit.length() + p1.length() + p3.length();
        prop_assert!((cross(hit - p1, d1) / d1.length()).abs() < 1e-7 * scale);
        prop_assert!((cross(hit - p3, d2) / d2.length()).abs() < 1e-7 * scale);
    }

    #[test]
    fn ray_from_inside_circle_hits_circle(
        dir in direction(), cx in -1.0f64..1.0, cy in -1.0f64..1.0, radius in 2.0f64..50.0,
    ) {
        let center = Point::new(cx, cy);
        let hit = ray_circle_intersection(dir, center, radius).unwrap();
        prop_assert!((hit.distance(center) - radius).abs() < 1e-7 * radius);
        prop_assert!(hit.x * dir.x + hit.y * dir.y > 0.0);
    }
}
