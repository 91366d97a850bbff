#![forbid(unsafe_code)]

//! Geometric primitives and intersection routines.
//!
//! Coordinates are real-valued render-space positions. Nothing here validates
//! caller intent beyond returning `None` where an intersection does not exist
//! (parallel lines, a zero-length direction, a ray that misses a circle).

use std::ops::{Add, Mul, Neg, Sub};

/// A point (or vector) in render space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the vector from the origin.
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self - other).length()
    }

    /// Direction angle in `[0, 2π)`.
    pub fn angle(self) -> f64 {
        let angle = self.y.atan2(self.x);
        if angle < 0.0 {
            angle + std::f64::consts::TAU
        } else {
            angle
        }
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    pub fn normalized(self) -> Option<Point> {
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            return None;
        }
        Some(self * (1.0 / len))
    }

    /// The vector rotated a quarter turn counter-clockwise.
    #[inline]
    pub const fn perp(self) -> Point {
        Point::new(-self.y, self.x)
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

#[inline]
fn det(a: f64, b: f64, c: f64, d: f64) -> f64 {
    a * d - b * c
}

/// Intersection of the infinite line through `p1, p2` with the infinite line
/// through `p3, p4`.
///
/// Uses the 2×2 determinant (Cramer's rule) form. Returns `None` when the
/// lines are parallel or either pair of points coincides.
pub fn line_line_intersection(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Point> {
    let dx12 = p1.x - p2.x;
    let dy12 = p1.y - p2.y;
    let dx34 = p3.x - p4.x;
    let dy34 = p3.y - p4.y;

    let denom = det(dx12, dy12, dx34, dy34);
    if denom == 0.0 {
        return None;
    }

    let cross12 = det(p1.x, p1.y, p2.x, p2.y);
    let cross34 = det(p3.x, p3.y, p4.x, p4.y);

    Some(Point::new(
        det(cross12, dx12, cross34, dx34) / denom,
        det(cross12, dy12, cross34, dy34) / denom,
    ))
}

/// Intersection of the ray from the origin through `dir` with the circle of
/// radius `radius` centred at `center`.
///
/// Solves `a·t² + b·t + c = 0` with `a = |dir|²`,
/// `b = −2(center · dir)`, `c = |center|² − radius²` and keeps the root that
/// lies furthest along `dir`. That is the forward exit point of the ray; for
/// `dir.x > 0` it is the root with the larger x, for `dir.x < 0` the one with
/// the smaller x.
///
/// Returns `None` for a zero direction or when the line misses the circle.
/// A discriminant that is negative only by rounding error (a tangent ray) is
/// treated as zero.
pub fn ray_circle_intersection(dir: Point, center: Point, radius: f64) -> Option<Point> {
    let a = dir.x * dir.x + dir.y * dir.y;
    if a == 0.0 || !a.is_finite() {
        return None;
    }
    let b = -2.0 * (center.x * dir.x + center.y * dir.y);
    let c = center.x * center.x + center.y * center.y - radius * radius;

    let mut discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        let scale = (b * b).max((4.0 * a * c).abs());
        if discriminant < -scale * 1e-9 {
            return None;
        }
        discriminant = 0.0;
    }

    let t = (-b + discriminant.sqrt()) / (2.0 * a);
    Some(dir * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: Point, expected: Point) {
        assert!(
            actual.distance(expected) < EPS,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn perpendicular_lines_meet() {
        let hit = line_line_intersection(
            Point::new(0.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
            Point::new(2.0, 0.0),
        )
        .unwrap();
        assert_close(hit, Point::new(1.0, 1.0));
    }

    #[test]
    fn ray_meets_vertical_edge() {
        let hit = line_line_intersection(
            Point::ORIGIN,
            Point::new(1.0, 0.5),
            Point::new(3.0, -1.0),
            Point::new(3.0, 1.0),
        )
        .unwrap();
        assert_close(hit, Point::new(3.0, 1.5));
    }

    #[test]
    fn parallel_lines_have_no_intersection() {
        assert!(
            line_line_intersection(
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0),
                Point::new(1.0, 2.0),
            )
            .is_none()
        );
    }

    #[test]
    fn coincident_points_have_no_intersection() {
        assert!(
            line_line_intersection(
                Point::new(1.0, 1.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0),
                Point::new(1.0, 2.0),
            )
            .is_none()
        );
    }

    #[test]
    fn ray_exits_circle_forward() {
        // Circle around (2, 0) with radius 1: the ray along +x enters at 1
        // and exits at 3.
        let hit = ray_circle_intersection(Point::new(1.0, 0.0), Point::new(2.0, 0.0), 1.0).unwrap();
        assert_close(hit, Point::new(3.0, 0.0));
    }

    #[test]
    fn ray_with_negative_x_picks_smaller_x() {
        let hit =
            ray_circle_intersection(Point::new(-1.0, 0.0), Point::new(-2.0, 0.0), 1.0).unwrap();
        assert_close(hit, Point::new(-3.0, 0.0));
    }

    #[test]
    fn vertical_ray_is_supported() {
        let hit = ray_circle_intersection(Point::new(0.0, 2.0), Point::new(0.0, 5.0), 2.0).unwrap();
        assert_close(hit, Point::new(0.0, 7.0));
    }

    #[test]
    fn ray_from_inside_circle_exits_forward_only() {
        let hit =
            ray_circle_intersection(Point::new(0.0, -1.0), Point::new(0.0, 0.0), 4.0).unwrap();
        assert_close(hit, Point::new(0.0, -4.0));
    }

    #[test]
    fn missing_ray_returns_none() {
        assert!(ray_circle_intersection(Point::new(1.0, 0.0), Point::new(0.0, 5.0), 1.0).is_none());
    }

    #[test]
    fn zero_direction_returns_none() {
        assert!(ray_circle_intersection(Point::ORIGIN, Point::new(1.0, 1.0), 1.0).is_none());
    }

    #[test]
    fn angle_is_in_unit_turn() {
        assert!((Point::new(1.0, 0.0).angle() - 0.0).abs() < EPS);
        assert!((Point::new(0.0, -1.0).angle() - 1.5 * std::f64::consts::PI).abs() < EPS);
        assert!((Point::new(-1.0, 0.0).angle() - std::f64::consts::PI).abs() < EPS);
    }

    #[test]
    fn normalized_rejects_zero_vector() {
        assert!(Point::ORIGIN.normalized().is_none());
        assert_close(Point::new(3.0, 4.0).normalized().unwrap(), Point::new(0.6, 0.8));
    }
}
