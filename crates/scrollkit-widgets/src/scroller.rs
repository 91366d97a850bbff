#![forbid(unsafe_code)]

//! Position controller.
//!
//! A [`Scroller`] owns a cursor index into a domain whose size is read from
//! the owner on every call. It moves the cursor by steps or to absolute
//! positions, maps render-space clicks to indices, and maps indices back to
//! render-space coordinates.
//!
//! # Invariants
//!
//! 1. After every mutation the stored cursor lies in `[0, size - 1]`, or is
//!    the sentinel `0` when the domain is empty.
//! 2. For any index `i < size`, a click at `render_position_of(i)` inside the
//!    cross-axis band is accepted and selects exactly `i`.
//! 3. No operation divides by an empty domain: queries return `None` and
//!    hit-tests return `false` instead.
//!
//! # Notification order
//!
//! New state is committed before any callback runs. `on_change` receives
//! the stored (clamped) value; a successful hit-test then fires `on_click`.
//! `increment` and `decrement` notify even when the cursor was already at a
//! domain edge and did not move.
//!
//! # Hit-test rounding
//!
//! The fractional index under a click is rounded half-to-even, so a click
//! exactly between ticks `2k` and `2k + 1` selects `2k`, and between
//! `2k + 1` and `2k + 2` selects `2k + 2`. This departs from rounding half
//! away from zero: in a 100-position domain a click at `0.505` computes an
//! index of exactly `50.5` and must select `50`.

use scrollkit_core::{Magnitude, Point};

use crate::hooks::ScrollerHooks;
use crate::params::ScrollerParams;
use crate::ticks::{CursorGlyph, TickLayout};

/// Discrete position controller over a domain of magnitude `M`.
pub struct Scroller<M: Magnitude> {
    params: ScrollerParams,
    hooks: ScrollerHooks<M>,
    cursor: M,
}

impl<M: Magnitude> std::fmt::Debug for Scroller<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scroller")
            .field("params", &self.params)
            .field("hooks", &self.hooks)
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl<M: Magnitude> Scroller<M> {
    /// Create a controller with its cursor at zero.
    pub fn new(params: ScrollerParams, hooks: ScrollerHooks<M>) -> Self {
        Self {
            params,
            hooks,
            cursor: M::zero(),
        }
    }

    #[inline]
    pub fn params(&self) -> &ScrollerParams {
        &self.params
    }

    /// Current domain size, read from the size source.
    ///
    /// Zero means the domain is empty.
    #[inline]
    pub fn size(&self) -> M {
        (self.hooks.size)()
    }

    /// The position source's value if one is installed, else the cursor.
    pub fn current_position(&self) -> M {
        match &self.hooks.position {
            Some(position) => position(),
            None => self.cursor.clone(),
        }
    }

    /// The controller-owned cursor, ignoring any position source.
    #[inline]
    pub fn cursor(&self) -> &M {
        &self.cursor
    }

    /// Move the cursor one step forward. Always notifies.
    pub fn increment(&mut self) -> M {
        let size = self.size();
        self.step_within(&size, 1, "increment")
    }

    /// Move the cursor one step back. Always notifies.
    pub fn decrement(&mut self) -> M {
        let size = self.size();
        self.step_within(&size, -1, "decrement")
    }

    /// Clamp `position` into the domain, store it and notify with the stored
    /// value.
    pub fn set_position(&mut self, position: M) -> M {
        let size = self.size();
        self.set_position_within(position, &size)
    }

    /// `set_position(current_position() + delta)`.
    pub fn change_by(&mut self, delta: i64) -> M {
        let size = self.size();
        self.change_by_within(delta, &size)
    }

    /// Index under `click`, without moving the cursor.
    ///
    /// Returns `None` when the click misses the hit box or the domain is
    /// empty.
    pub fn index_at(&self, click: Point) -> Option<M> {
        let size = self.size();
        self.index_at_within(click, &size)
    }

    /// Select the index under `click`.
    ///
    /// Returns whether the click hit the widget. On a hit the cursor moves,
    /// then `on_change` and `on_click` fire.
    pub fn hit_test(&mut self, click: Point) -> bool {
        let size = self.size();
        self.hit_test_within(click, &size)
    }

    /// Primary-axis render coordinate of `index`:
    /// `render_offset + render_size * index / size`.
    ///
    /// Returns `None` for an empty domain.
    pub fn render_position_of(&self, index: &M) -> Option<f64> {
        let size = self.size();
        self.render_position_within(index, &size)
    }

    /// Tick marks for the current domain.
    pub fn ticks(&self) -> TickLayout {
        TickLayout::new(&self.params, &self.size())
    }

    /// Cursor glyph centred on `index`. Returns `None` for an empty domain.
    pub fn cursor_glyph(&self, index: &M) -> Option<CursorGlyph> {
        let size = self.size();
        self.cursor_glyph_within(index, &size)
    }

    // ------------------------------------------------------------------
    // Size-parameterised operations
    //
    // The range scroller drives the same logic over its count of window
    // start positions instead of the raw domain size.
    // ------------------------------------------------------------------

    pub(crate) fn step_within(&mut self, size: &M, delta: i64, action: &str) -> M {
        let next = self.cursor.offset(delta).clamp_index(size);
        self.commit(next, size, action)
    }

    pub(crate) fn set_position_within(&mut self, position: M, size: &M) -> M {
        let next = position.clamp_index(size);
        self.commit(next, size, "set_position")
    }

    pub(crate) fn change_by_within(&mut self, delta: i64, size: &M) -> M {
        let target = self.current_position().offset(delta);
        self.set_position_within(target, size)
    }

    pub(crate) fn index_at_within(&self, click: Point, size: &M) -> Option<M> {
        if !size.is_positive() || !self.params.hit_box_contains(click) {
            return None;
        }
        let (primary, _) = self.params.orientation().split(click);
        let step = self.params.render_size() * (1.0 / size.to_f64());
        let fraction = (primary - self.params.render_offset()) / step;
        let index = if fraction.is_finite() {
            M::from_f64(fraction.round_ties_even())?
        } else if primary > self.params.render_offset() {
            // The domain is too large for `f64` to resolve single steps.
            size.minus(&M::one())
        } else {
            M::zero()
        };
        Some(index.clamp_index(size))
    }

    pub(crate) fn hit_test_within(&mut self, click: Point, size: &M) -> bool {
        let Some(index) = self.index_at_within(click, size) else {
            #[cfg(feature = "tracing")]
            if !size.is_positive() {
                self.log_empty_domain("hit_test");
            }
            return false;
        };
        self.commit(index, size, "hit_test");
        if let Some(on_click) = self.hooks.on_click.as_mut() {
            on_click();
        }
        true
    }

    pub(crate) fn render_position_within(&self, index: &M, size: &M) -> Option<f64> {
        let ratio = index.ratio(size)?;
        Some(self.params.render_offset() + self.params.render_size() * ratio)
    }

    pub(crate) fn cursor_glyph_within(&self, index: &M, size: &M) -> Option<CursorGlyph> {
        let center = self.render_position_within(index, size)?;
        Some(CursorGlyph::new(&self.params, center))
    }

    /// Store `next` as the cursor and notify. Every mutation funnels through
    /// here so the cursor is in place before any callback observes it.
    pub(crate) fn commit(&mut self, next: M, size: &M, action: &str) -> M {
        self.cursor = next;
        #[cfg(feature = "tracing")]
        {
            if size.is_positive() {
                self.log_position(action, size);
            } else {
                self.log_empty_domain(action);
            }
        }
        #[cfg(not(feature = "tracing"))]
        let _ = (size, action);
        if let Some(on_change) = self.hooks.on_change.as_mut() {
            on_change(&self.cursor);
        }
        self.cursor.clone()
    }

    #[cfg(feature = "tracing")]
    fn log_position(&self, action: &str, size: &M) {
        tracing::debug!(
            message = "scroller.position",
            action,
            position = %self.cursor,
            size = %size
        );
    }

    #[cfg(feature = "tracing")]
    fn log_empty_domain(&self, action: &str) {
        tracing::debug!(message = "scroller.empty_domain", action);
    }
}
