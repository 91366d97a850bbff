#![forbid(unsafe_code)]

//! Rounded rectangles: boundary intersection and tessellation.
//!
//! A [`RoundedRect`] is axis-aligned, centred at the origin for intersection
//! purposes, with half-extents `size / 2` and a single corner radius. Its
//! boundary is split into eight pieces: four straight edges and four corner
//! arcs. The junctions between them, seen from the centre, give eight
//! reference angles that classify any ray direction into a [`Sector`].
//!
//! # Sector conventions
//!
//! With reference angles `r[0] ≤ … ≤ r[7]` in `[0, 2π]`:
//!
//! | angle θ                 | sector             |
//! |-------------------------|--------------------|
//! | `θ < r[0]` or `θ > r[7]`| right edge         |
//! | `r[0] ≤ θ ≤ r[1]`       | top-right arc      |
//! | `r[1] < θ ≤ r[2]`       | top edge           |
//! | `r[2] < θ ≤ r[3]`       | top-left arc       |
//! | `r[3] < θ ≤ r[4]`       | left edge          |
//! | `r[4] < θ ≤ r[5]`       | bottom-left arc    |
//! | `r[5] < θ ≤ r[6]`       | bottom edge        |
//! | `r[6] < θ ≤ r[7]`       | bottom-right arc   |
//!
//! Exact junction angles always resolve to the sector on their
//! counter-clockwise side except at `r[0]`, which belongs to the top-right
//! arc. Both neighbours meet at the same junction point, so the choice never
//! changes the result by more than rounding error.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::geometry::{Point, line_line_intersection, ray_circle_intersection};

/// Vertices emitted per corner arc by [`RoundedRect::outline`].
pub const ARC_SEGMENTS: usize = 10;

/// One of the eight boundary pieces of a rounded rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sector {
    RightEdge,
    TopRightArc,
    TopEdge,
    TopLeftArc,
    LeftEdge,
    BottomLeftArc,
    BottomEdge,
    BottomRightArc,
}

impl Sector {
    /// Whether this sector is a corner arc.
    #[inline]
    pub const fn is_arc(self) -> bool {
        matches!(
            self,
            Self::TopRightArc | Self::TopLeftArc | Self::BottomLeftArc | Self::BottomRightArc
        )
    }
}

/// Axis-aligned rectangle with uniformly rounded corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    /// Full width and height.
    pub size: Point,
    /// Corner radius. Expected to satisfy `radius ≤ min(width, height) / 2`.
    pub radius: f64,
}

impl RoundedRect {
    /// Create a rounded rectangle of the given full size and corner radius.
    #[inline]
    pub const fn new(width: f64, height: f64, radius: f64) -> Self {
        Self {
            size: Point::new(width, height),
            radius,
        }
    }

    #[inline]
    fn half(&self) -> Point {
        self.size * 0.5
    }

    /// Centre of the arc in the given corner, relative to the rectangle
    /// centre. Returns `None` for edge sectors.
    pub fn arc_center(&self, sector: Sector) -> Option<Point> {
        let h = self.half();
        let r = self.radius;
        match sector {
            Sector::TopRightArc => Some(Point::new(h.x - r, h.y - r)),
            Sector::TopLeftArc => Some(Point::new(-h.x + r, h.y - r)),
            Sector::BottomLeftArc => Some(Point::new(-h.x + r, -h.y + r)),
            Sector::BottomRightArc => Some(Point::new(h.x - r, -h.y + r)),
            _ => None,
        }
    }

    /// The two junction points delimiting a straight edge, relative to the
    /// rectangle centre. Returns `None` for arc sectors.
    pub fn edge_endpoints(&self, sector: Sector) -> Option<(Point, Point)> {
        let h = self.half();
        let r = self.radius;
        match sector {
            Sector::RightEdge => Some((Point::new(h.x, -h.y + r), Point::new(h.x, h.y - r))),
            Sector::TopEdge => Some((Point::new(h.x - r, h.y), Point::new(-h.x + r, h.y))),
            Sector::LeftEdge => Some((Point::new(-h.x, h.y - r), Point::new(-h.x, -h.y + r))),
            Sector::BottomEdge => Some((Point::new(h.x - r, -h.y), Point::new(-h.x + r, -h.y))),
            _ => None,
        }
    }

    /// The eight reference angles separating edges from arcs, ascending,
    /// in `[0, 2π]`.
    pub fn boundary_angles(&self) -> [f64; 8] {
        let h = self.half();
        let r = self.radius;
        [
            (h.y - r).atan2(h.x),
            h.y.atan2(h.x - r),
            h.y.atan2(-h.x + r),
            (h.y - r).atan2(-h.x),
            // Negated differences keep an exact zero at `-0.0`, so a stadium
            // end still lands on `-π` instead of `+π`.
            TAU + (-(h.y - r)).atan2(-h.x),
            TAU + (-h.y).atan2(-h.x + r),
            TAU + (-h.y).atan2(h.x - r),
            TAU + (-(h.y - r)).atan2(h.x),
        ]
    }

    /// Classify a direction angle in `[0, 2π)` into its boundary sector.
    pub fn sector(&self, angle: f64) -> Sector {
        let r = self.boundary_angles();
        if angle < r[0] || angle > r[7] {
            Sector::RightEdge
        } else if angle <= r[1] {
            Sector::TopRightArc
        } else if angle <= r[2] {
            Sector::TopEdge
        } else if angle <= r[3] {
            Sector::TopLeftArc
        } else if angle <= r[4] {
            Sector::LeftEdge
        } else if angle <= r[5] {
            Sector::BottomLeftArc
        } else if angle <= r[6] {
            Sector::BottomEdge
        } else {
            Sector::BottomRightArc
        }
    }

    /// Point where the ray from `a` through `b` leaves the rectangle boundary,
    /// with the rectangle centred on `a`.
    ///
    /// The ray direction is classified into a sector and intersected with
    /// that sector's edge line or corner circle. Returns `None` when `a` and
    /// `b` coincide.
    pub fn ray_exit(&self, a: Point, b: Point) -> Option<Point> {
        let delta = b - a;
        if delta == Point::ORIGIN || !delta.is_finite() {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                message = "geometry.degenerate_ray",
                ax = a.x,
                ay = a.y,
                bx = b.x,
                by = b.y
            );
            return None;
        }

        let sector = self.sector(delta.angle());
        let hit = match (self.edge_endpoints(sector), self.arc_center(sector)) {
            (Some((p3, p4)), _) => line_line_intersection(Point::ORIGIN, delta, p3, p4)?,
            (None, Some(center)) => ray_circle_intersection(delta, center, self.radius)?,
            (None, None) => return None,
        };
        Some(hit + a)
    }

    /// Closed vertex loop of the boundary for a rectangle whose lower-left
    /// corner sits at `origin`.
    ///
    /// Starts at the top of the left edge, walks counter-clockwise (down the
    /// left edge first) and repeats the first vertex at the end. Each corner
    /// contributes its leading junction point followed by
    /// [`ARC_SEGMENTS`] arc samples.
    pub fn outline(&self, origin: Point) -> Vec<Point> {
        let (x, y) = (origin.x, origin.y);
        let (w, h) = (self.size.x, self.size.y);
        let r = self.radius;

        // (arc centre, starting angle, leading junction point)
        let corners = [
            (Point::new(x + r, y + r), PI, Point::new(x, y + r)),
            (Point::new(x + w - r, y + r), -FRAC_PI_2, Point::new(x + w - r, y)),
            (Point::new(x + w - r, y + h - r), 0.0, Point::new(x + w, y + h - r)),
            (Point::new(x + r, y + h - r), FRAC_PI_2, Point::new(x + r, y + h)),
        ];

        let start = Point::new(x, y + h - r);
        let mut vertices = Vec::with_capacity(2 + corners.len() * (ARC_SEGMENTS + 1));
        vertices.push(start);
        for (center, phi0, lead) in corners {
            vertices.push(lead);
            for i in 0..ARC_SEGMENTS {
                let phi = phi0 + FRAC_PI_2 * i as f64 / ARC_SEGMENTS as f64;
                vertices.push(center + Point::new(phi.cos(), phi.sin()) * r);
            }
        }
        vertices.push(start);
        vertices
    }

    /// Triangle-fan vertices for a filled rectangle: the centre followed by
    /// [`outline`](Self::outline).
    pub fn triangle_fan(&self, origin: Point) -> Vec<Point> {
        let mut vertices = Vec::with_capacity(3 + 4 * (ARC_SEGMENTS + 1));
        vertices.push(origin + self.half());
        vertices.extend(self.outline(origin));
        vertices
    }
}
