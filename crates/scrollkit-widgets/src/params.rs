#![forbid(unsafe_code)]

//! Immutable widget configuration records.
//!
//! [`ScrollerParams`] places a scroller in render space: the primary axis
//! interval `[render_offset, render_offset + render_size]` that the whole
//! domain maps onto, and the cross-axis band `[render_pos_min,
//! render_pos_max]` the widget occupies. [`RangeWindowParams`] adds the
//! initial and minimum window widths for a range scroller.
//!
//! Both records are validated on construction and never change afterwards.
//! Derived configurations are built by copying, e.g.
//! [`ScrollerParams::with_range`].

use scrollkit_core::Point;

use crate::error::{Result, ScrollerError};

/// Which screen axis maps to the domain index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Split a point into `(primary, cross)` coordinates.
    #[inline]
    pub const fn split(self, point: Point) -> (f64, f64) {
        match self {
            Self::Horizontal => (point.x, point.y),
            Self::Vertical => (point.y, point.x),
        }
    }

    /// Build a point from `(primary, cross)` coordinates.
    #[inline]
    pub const fn compose(self, primary: f64, cross: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(primary, cross),
            Self::Vertical => Point::new(cross, primary),
        }
    }
}

/// Placement and hit-test tolerances of a scroller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawScrollerParams", into = "RawScrollerParams")
)]
pub struct ScrollerParams {
    orientation: Orientation,
    render_pos_min: f64,
    render_pos_max: f64,
    divide_coeff: i64,
    render_offset: f64,
    render_size: f64,
    accuracy: f64,
}

impl ScrollerParams {
    /// Validate and build a parameter record.
    ///
    /// # Errors
    ///
    /// - [`ScrollerError::InvalidDivideCoeff`] if `divide_coeff <= 0`.
    /// - [`ScrollerError::InvalidRenderSize`] if `render_size` is not a
    ///   positive finite number.
    /// - [`ScrollerError::InvertedCrossAxis`] if
    ///   `render_pos_min > render_pos_max`.
    pub fn new(
        orientation: Orientation,
        render_pos_min: f64,
        render_pos_max: f64,
        divide_coeff: i64,
        render_offset: f64,
        render_size: f64,
        accuracy: f64,
    ) -> Result<Self> {
        if divide_coeff <= 0 {
            return Err(ScrollerError::InvalidDivideCoeff {
                value: divide_coeff,
            });
        }
        if !render_size.is_finite() || render_size <= 0.0 {
            return Err(ScrollerError::InvalidRenderSize { value: render_size });
        }
        // Written negated so NaN bounds are rejected as well.
        if !(render_pos_min <= render_pos_max) {
            return Err(ScrollerError::InvertedCrossAxis {
                min: render_pos_min,
                max: render_pos_max,
            });
        }
        Ok(Self {
            orientation,
            render_pos_min,
            render_pos_max,
            divide_coeff,
            render_offset,
            render_size,
            accuracy,
        })
    }

    /// Derive a range-window record from this one.
    ///
    /// # Errors
    ///
    /// See [`RangeWindowParams::new`].
    pub fn with_range(
        &self,
        init_display_range: u64,
        min_display_range: u64,
    ) -> Result<RangeWindowParams> {
        RangeWindowParams::new(*self, init_display_range, min_display_range)
    }

    #[inline]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Lower cross-axis bound.
    #[inline]
    pub const fn render_pos_min(&self) -> f64 {
        self.render_pos_min
    }

    /// Upper cross-axis bound.
    #[inline]
    pub const fn render_pos_max(&self) -> f64 {
        self.render_pos_max
    }

    /// Every `size / divide_coeff`-th tick is major.
    #[inline]
    pub const fn divide_coeff(&self) -> i64 {
        self.divide_coeff
    }

    /// Primary-axis start of the domain in render space.
    #[inline]
    pub const fn render_offset(&self) -> f64 {
        self.render_offset
    }

    /// Primary-axis length of the domain in render space.
    #[inline]
    pub const fn render_size(&self) -> f64 {
        self.render_size
    }

    /// Tolerance added to both ends of the cross-axis hit band.
    #[inline]
    pub const fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Cross-axis extent `render_pos_max - render_pos_min`.
    #[inline]
    pub fn cross_extent(&self) -> f64 {
        self.render_pos_max - self.render_pos_min
    }

    /// Whether `point` falls in the widget's hit box: the cross-axis band
    /// widened by `accuracy` and the primary-axis interval, both inclusive.
    pub fn hit_box_contains(&self, point: Point) -> bool {
        let (primary, cross) = self.orientation.split(point);
        cross >= self.render_pos_min - self.accuracy
            && cross <= self.render_pos_max + self.accuracy
            && primary >= self.render_offset
            && primary <= self.render_offset + self.render_size
    }
}

/// Scroller placement plus window-width bounds for a range scroller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawRangeWindowParams", into = "RawRangeWindowParams")
)]
pub struct RangeWindowParams {
    scroller: ScrollerParams,
    init_display_range: u64,
    min_display_range: u64,
}

impl RangeWindowParams {
    /// Validate and build a range-window record.
    ///
    /// # Errors
    ///
    /// - [`ScrollerError::ZeroDisplayRange`] if either bound is zero.
    /// - [`ScrollerError::MinRangeExceedsInit`] if
    ///   `min_display_range > init_display_range`.
    pub fn new(
        scroller: ScrollerParams,
        init_display_range: u64,
        min_display_range: u64,
    ) -> Result<Self> {
        if init_display_range == 0 || min_display_range == 0 {
            return Err(ScrollerError::ZeroDisplayRange);
        }
        if min_display_range > init_display_range {
            return Err(ScrollerError::MinRangeExceedsInit {
                min: min_display_range,
                init: init_display_range,
            });
        }
        Ok(Self {
            scroller,
            init_display_range,
            min_display_range,
        })
    }

    /// The underlying scroller placement.
    #[inline]
    pub const fn scroller(&self) -> &ScrollerParams {
        &self.scroller
    }

    /// Window width a new range scroller starts with.
    #[inline]
    pub const fn init_display_range(&self) -> u64 {
        self.init_display_range
    }

    /// Smallest window width `set_range` will accept.
    #[inline]
    pub const fn min_display_range(&self) -> u64 {
        self.min_display_range
    }
}

// ----------------------------------------------------------------------------
// Persistence
// ----------------------------------------------------------------------------

#[cfg(feature = "state-persistence")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawScrollerParams {
    orientation: Orientation,
    render_pos_min: f64,
    render_pos_max: f64,
    divide_coeff: i64,
    render_offset: f64,
    render_size: f64,
    accuracy: f64,
}

#[cfg(feature = "state-persistence")]
impl TryFrom<RawScrollerParams> for ScrollerParams {
    type Error = ScrollerError;

    fn try_from(raw: RawScrollerParams) -> Result<Self> {
        Self::new(
            raw.orientation,
            raw.render_pos_min,
            raw.render_pos_max,
            raw.divide_coeff,
            raw.render_offset,
            raw.render_size,
            raw.accuracy,
        )
    }
}

#[cfg(feature = "state-persistence")]
impl From<ScrollerParams> for RawScrollerParams {
    fn from(params: ScrollerParams) -> Self {
        Self {
            orientation: params.orientation,
            render_pos_min: params.render_pos_min,
            render_pos_max: params.render_pos_max,
            divide_coeff: params.divide_coeff,
            render_offset: params.render_offset,
            render_size: params.render_size,
            accuracy: params.accuracy,
        }
    }
}

#[cfg(feature = "state-persistence")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRangeWindowParams {
    #[serde(flatten)]
    scroller: ScrollerParams,
    init_display_range: u64,
    min_display_range: u64,
}

#[cfg(feature = "state-persistence")]
impl TryFrom<RawRangeWindowParams> for RangeWindowParams {
    type Error = ScrollerError;

    fn try_from(raw: RawRangeWindowParams) -> Result<Self> {
        Self::new(raw.scroller, raw.init_display_range, raw.min_display_range)
    }
}

#[cfg(feature = "state-persistence")]
impl From<RangeWindowParams> for RawRangeWindowParams {
    fn from(params: RangeWindowParams) -> Self {
        Self {
            scroller: params.scroller,
            init_display_range: params.init_display_range,
            min_display_range: params.min_display_range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal() -> ScrollerParams {
        ScrollerParams::new(Orientation::Horizontal, 0.1, 0.2, 10, 0.0, 1.0, 0.01).unwrap()
    }

    #[test]
    fn rejects_non_positive_divide_coeff() {
        let err = ScrollerParams::new(Orientation::Horizontal, 0.0, 1.0, 0, 0.0, 1.0, 0.0);
        assert_eq!(err, Err(ScrollerError::InvalidDivideCoeff { value: 0 }));
        let err = ScrollerParams::new(Orientation::Horizontal, 0.0, 1.0, -2, 0.0, 1.0, 0.0);
        assert_eq!(err, Err(ScrollerError::InvalidDivideCoeff { value: -2 }));
    }

    #[test]
    fn rejects_degenerate_render_size() {
        for size in [0.0, -1.0, f64::INFINITY] {
            let err = ScrollerParams::new(Orientation::Vertical, 0.0, 1.0, 1, 0.0, size, 0.0);
            assert!(matches!(err, Err(ScrollerError::InvalidRenderSize { .. })), "{size}");
        }
        let err = ScrollerParams::new(Orientation::Vertical, 0.0, 1.0, 1, 0.0, f64::NAN, 0.0);
        assert!(matches!(err, Err(ScrollerError::InvalidRenderSize { .. })));
    }

    #[test]
    fn rejects_inverted_cross_axis() {
        let err = ScrollerParams::new(Orientation::Horizontal, 0.5, 0.4, 1, 0.0, 1.0, 0.0);
        assert_eq!(
            err,
            Err(ScrollerError::InvertedCrossAxis { min: 0.5, max: 0.4 })
        );
    }

    #[test]
    fn range_bounds_are_validated() {
        let base = horizontal();
        assert_eq!(base.with_range(0, 0), Err(ScrollerError::ZeroDisplayRange));
        assert_eq!(base.with_range(5, 0), Err(ScrollerError::ZeroDisplayRange));
        assert_eq!(
            base.with_range(5, 10),
            Err(ScrollerError::MinRangeExceedsInit { min: 10, init: 5 })
        );
        let window = base.with_range(50, 10).unwrap();
        assert_eq!(window.init_display_range(), 50);
        assert_eq!(window.min_display_range(), 10);
        assert_eq!(window.scroller(), &base);
    }

    #[test]
    fn orientation_split_and_compose_are_inverse() {
        let p = Point::new(3.0, 7.0);
        assert_eq!(Orientation::Horizontal.split(p), (3.0, 7.0));
        assert_eq!(Orientation::Vertical.split(p), (7.0, 3.0));
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let (primary, cross) = orientation.split(p);
            assert_eq!(orientation.compose(primary, cross), p);
        }
    }

    #[test]
    fn hit_box_is_inclusive_and_widened_by_accuracy() {
        let params = horizontal();
        assert!(params.hit_box_contains(Point::new(0.0, 0.1)));
        assert!(params.hit_box_contains(Point::new(1.0, 0.2)));
        assert!(params.hit_box_contains(Point::new(0.5, 0.205)));
        assert!(!params.hit_box_contains(Point::new(0.5, 0.25)));
        assert!(!params.hit_box_contains(Point::new(1.01, 0.15)));
        assert!(!params.hit_box_contains(Point::new(-0.01, 0.15)));
    }

    #[test]
    fn vertical_hit_box_swaps_axes() {
        let params =
            ScrollerParams::new(Orientation::Vertical, 0.1, 0.2, 10, 0.0, 1.0, 0.0).unwrap();
        assert!(params.hit_box_contains(Point::new(0.15, 0.9)));
        assert!(!params.hit_box_contains(Point::new(0.9, 0.15)));
    }
}
