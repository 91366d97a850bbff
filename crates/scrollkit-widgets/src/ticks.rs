#![forbid(unsafe_code)]

//! Render facts for tick marks and the cursor glyph.
//!
//! Nothing here draws. A [`TickLayout`] yields one [`Tick`] per domain
//! position with its primary-axis coordinate and cross-axis extent, and a
//! [`CursorGlyph`] describes the rounded square that marks the selected
//! index. The drawing collaborator turns these into quads and lines.

use scrollkit_core::{Magnitude, Point, Quad, RoundedRect};

use crate::params::{Orientation, ScrollerParams};

/// Cross-axis inset applied to both ends of a minor tick.
pub const MINOR_TICK_INSET: f64 = 0.01;

/// Corner radius of the cursor glyph.
pub const CURSOR_CORNER_RADIUS: f64 = 0.005;

/// One tick mark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub index: u64,
    /// Primary-axis render coordinate.
    pub position: f64,
    pub cross_min: f64,
    pub cross_max: f64,
    pub major: bool,
}

impl Tick {
    /// End points of the tick line in render space.
    pub fn endpoints(&self, orientation: Orientation) -> (Point, Point) {
        (
            orientation.compose(self.position, self.cross_min),
            orientation.compose(self.position, self.cross_max),
        )
    }
}

/// Iterator over the ticks of a scroller.
///
/// With `divide = size / divide_coeff`, ticks whose index is a multiple of
/// `divide` are major and span the full cross-axis band; the rest are inset
/// by [`MINOR_TICK_INSET`]. When `divide` is zero every tick is major.
///
/// Ticks are produced lazily. Domains whose size does not fit in `u64`
/// produce no ticks.
#[derive(Debug, Clone)]
pub struct TickLayout {
    params: ScrollerParams,
    count: u64,
    divide: u64,
    next: u64,
}

impl TickLayout {
    pub(crate) fn new<M: Magnitude>(params: &ScrollerParams, size: &M) -> Self {
        let count = size.to_u64().unwrap_or(0);
        // `divide_coeff` is validated positive.
        let coeff = params.divide_coeff().unsigned_abs().max(1);
        Self {
            params: *params,
            count,
            divide: count / coeff,
            next: 0,
        }
    }

    pub(crate) fn empty(params: &ScrollerParams) -> Self {
        Self {
            params: *params,
            count: 0,
            divide: 0,
            next: 0,
        }
    }

    /// Total number of ticks in the layout.
    #[inline]
    pub const fn tick_count(&self) -> u64 {
        self.count
    }

    /// Index spacing between major ticks, or zero when every tick is major.
    #[inline]
    pub const fn major_every(&self) -> u64 {
        self.divide
    }

    #[inline]
    pub const fn orientation(&self) -> Orientation {
        self.params.orientation()
    }

    fn tick(&self, index: u64) -> Tick {
        let p = &self.params;
        let position =
            p.render_offset() + p.render_size() * (index as f64 / self.count as f64);
        let major = self.divide == 0 || index % self.divide == 0;
        let inset = if major { 0.0 } else { MINOR_TICK_INSET };
        Tick {
            index,
            position,
            cross_min: p.render_pos_min() + inset,
            cross_max: p.render_pos_max() - inset,
            major,
        }
    }
}

impl Iterator for TickLayout {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.next >= self.count {
            return None;
        }
        let tick = self.tick(self.next);
        self.next += 1;
        Some(tick)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// The rounded square marking the selected index.
///
/// The square's side equals the cross-axis extent, it rests on
/// `render_pos_min`, and it is centred on the index's primary-axis
/// coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorGlyph {
    /// Lower-left corner in render space.
    pub origin: Point,
    pub shape: RoundedRect,
}

impl CursorGlyph {
    pub(crate) fn new(params: &ScrollerParams, primary_center: f64) -> Self {
        let side = params.cross_extent();
        let origin = params
            .orientation()
            .compose(primary_center - side / 2.0, params.render_pos_min());
        Self {
            origin,
            shape: RoundedRect::new(side, side, CURSOR_CORNER_RADIUS.min(side / 2.0)),
        }
    }

    /// Axis-aligned bounds.
    #[inline]
    pub fn bounds(&self) -> Quad {
        Quad::new(self.origin, self.shape.size)
    }

    /// Closed outline vertices, see [`RoundedRect::outline`].
    pub fn outline(&self) -> Vec<Point> {
        self.shape.outline(self.origin)
    }

    /// Where the ray from the glyph centre towards `target` leaves the glyph.
    pub fn exit_towards(&self, target: Point) -> Option<Point> {
        self.shape.ray_exit(self.bounds().center(), target)
    }
}
