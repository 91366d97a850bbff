#![forbid(unsafe_code)]

//! Vertex computation for arrows, connector triangles and quad containment.

use crate::geometry::Point;

/// Vertices of an arrow: a quad for the shaft and a triangle for the head.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    /// Shaft corners: start-left, end-left, end-right, start-right.
    pub shaft: [Point; 4],
    /// Head base-left, base-right, tip.
    pub head: [Point; 3],
}

/// Arrow from `pos` along `dir`, with the tip at `pos + dir`.
///
/// The shaft is `line_width` wide and stops `cone_size` short of the tip,
/// where a head of base width `cone_size` begins. "Left" is the side a
/// quarter turn counter-clockwise from `dir`.
///
/// Returns `None` for a zero-length `dir`.
pub fn arrow(pos: Point, dir: Point, line_width: f64, cone_size: f64) -> Option<Arrow> {
    let left = dir.perp().normalized()?;
    let cone_dir = dir.normalized()? * cone_size;

    let line_left = left * (line_width / 2.0);
    let cone_left = left * (cone_size / 2.0);
    let tip = pos + dir;
    let base = tip - cone_dir;

    Some(Arrow {
        shaft: [
            pos + line_left,
            base + line_left,
            base - line_left,
            pos - line_left,
        ],
        head: [base + cone_left, base - cone_left, tip],
    })
}

/// Isosceles triangle with its base centred on `pos` and its apex at
/// `target`. The base is as wide as the triangle is tall.
///
/// Vertices: base-left, base-right, apex.
pub fn connector_triangle(pos: Point, target: Point) -> [Point; 3] {
    let half_base = (target - pos).perp() * 0.5;
    [pos + half_base, pos - half_base, target]
}

/// Axis-aligned box given by its lower-left corner and extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quad {
    pub origin: Point,
    pub size: Point,
}

impl Quad {
    #[inline]
    pub const fn new(origin: Point, size: Point) -> Self {
        Self { origin, size }
    }

    /// Centre of the box.
    #[inline]
    pub fn center(&self) -> Point {
        self.origin + self.size * 0.5
    }

    /// Inclusive containment, see [`quad_contains`].
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        quad_contains(point, self.origin, self.size)
    }
}

/// Whether `point` lies in the axis-aligned box with lower-left corner
/// `origin` and extent `size`. Edges count as inside.
#[inline]
pub fn quad_contains(point: Point, origin: Point, size: Point) -> bool {
    point.x >= origin.x
        && point.x <= origin.x + size.x
        && point.y >= origin.y
        && point.y <= origin.y + size.y
}
