#![forbid(unsafe_code)]

//! Range-window controller.
//!
//! A [`RangeScroller`] shows a window of `range` consecutive positions over a
//! larger domain. It wraps a [`Scroller`] whose "position" is the window
//! start and whose domain is the count of valid starts,
//! `domain_size - range + 1`.
//!
//! # Invariants
//!
//! While the domain does not shrink below `min_range`:
//!
//! 1. `min_range <= range <= domain_size`.
//! 2. When the domain is larger than the window, the visible range is
//!    `[start, start + range - 1]` with `start + range - 1 <= domain_size - 1`.
//! 3. When the whole domain fits, the visible range is the whole domain and
//!    there is nothing to scroll: clicks are rejected, `track` does nothing,
//!    and no ticks or cursor are produced.
//!
//! # Tracking
//!
//! [`RangeScroller::track`] keeps a moving target visible. When the target
//! leaves the window on either side the window is moved so that its last
//! position is the target; a target already inside leaves the window alone.

use std::ops::RangeInclusive;

use scrollkit_core::{Magnitude, Point};

use crate::error::{Result, ScrollerError};
use crate::hooks::ScrollerHooks;
use crate::params::RangeWindowParams;
use crate::scroller::Scroller;
use crate::ticks::{CursorGlyph, TickLayout};

/// Sliding window of fixed width over a domain of magnitude `M`.
#[derive(Debug)]
pub struct RangeScroller<M: Magnitude> {
    params: RangeWindowParams,
    scroller: Scroller<M>,
    range: M,
    min_range: M,
}

impl<M: Magnitude> RangeScroller<M> {
    /// Create a controller with its window at the start of the domain.
    ///
    /// The initial range is `init_display_range`, clamped to the domain.
    ///
    /// # Errors
    ///
    /// [`ScrollerError::MinRangeExceedsDomain`] if the domain is smaller
    /// than `min_display_range` at construction.
    pub fn new(params: RangeWindowParams, hooks: ScrollerHooks<M>) -> Result<Self> {
        let scroller = Scroller::new(*params.scroller(), hooks);
        let domain = scroller.size();
        let min_range = M::from_u64(params.min_display_range());
        if min_range > domain {
            return Err(ScrollerError::min_range_exceeds_domain(&min_range, &domain));
        }
        let range = M::from_u64(params.init_display_range()).min(domain);
        Ok(Self {
            params,
            scroller,
            range,
            min_range,
        })
    }

    #[inline]
    pub fn params(&self) -> &RangeWindowParams {
        &self.params
    }

    /// The wrapped position controller.
    #[inline]
    pub fn scroller(&self) -> &Scroller<M> {
        &self.scroller
    }

    /// Size of the whole domain.
    #[inline]
    pub fn domain_size(&self) -> M {
        self.scroller.size()
    }

    /// Current window width.
    #[inline]
    pub fn range(&self) -> &M {
        &self.range
    }

    #[inline]
    pub fn min_range(&self) -> &M {
        &self.min_range
    }

    /// Number of valid window starts, `domain_size - range + 1`.
    ///
    /// Zero for an empty domain and one when the domain fits in the window.
    pub fn effective_size(&self) -> M {
        self.effective_size_for(&self.domain_size())
    }

    fn effective_size_for(&self, domain: &M) -> M {
        if !domain.is_positive() {
            return M::zero();
        }
        domain.minus(&self.range).plus(&M::one())
    }

    /// Whether the domain is larger than the window.
    #[inline]
    pub fn is_scrollable(&self) -> bool {
        self.domain_size() > self.range
    }

    /// The controller-owned window start, ignoring any position source.
    #[inline]
    pub fn cursor(&self) -> &M {
        self.scroller.cursor()
    }

    /// The window start as reported by the position source, or the cursor.
    #[inline]
    pub fn current_position(&self) -> M {
        self.scroller.current_position()
    }

    /// The current window start, clamped to the valid starts.
    pub fn window_start(&self) -> M {
        self.current_position().clamp_index(&self.effective_size())
    }

    /// Move the window one step forward. Always notifies.
    pub fn increment(&mut self) -> M {
        let size = self.effective_size();
        self.scroller.step_within(&size, 1, "increment")
    }

    /// Move the window one step back. Always notifies.
    pub fn decrement(&mut self) -> M {
        let size = self.effective_size();
        self.scroller.step_within(&size, -1, "decrement")
    }

    /// Move the window start to `start`, clamped to the valid starts.
    pub fn set_position(&mut self, start: M) -> M {
        let size = self.effective_size();
        self.scroller.set_position_within(start, &size)
    }

    pub fn change_by(&mut self, delta: i64) -> M {
        let size = self.effective_size();
        self.scroller.change_by_within(delta, &size)
    }

    /// Window start under `click`, without moving the window.
    pub fn index_at(&self, click: Point) -> Option<M> {
        if !self.is_scrollable() {
            return None;
        }
        self.scroller.index_at_within(click, &self.effective_size())
    }

    /// Move the window start to the position under `click`.
    ///
    /// Always `false` when the whole domain fits in the window.
    pub fn hit_test(&mut self, click: Point) -> bool {
        if !self.is_scrollable() {
            return false;
        }
        let size = self.effective_size();
        self.scroller.hit_test_within(click, &size)
    }

    /// Render coordinate of a window start.
    pub fn render_position_of(&self, start: &M) -> Option<f64> {
        self.scroller
            .render_position_within(start, &self.effective_size())
    }

    /// One tick per valid window start; empty when nothing scrolls.
    pub fn ticks(&self) -> TickLayout {
        if !self.is_scrollable() {
            return TickLayout::empty(self.params.scroller());
        }
        TickLayout::new(self.params.scroller(), &self.effective_size())
    }

    /// Cursor glyph for a window start; `None` when nothing scrolls.
    pub fn cursor_glyph(&self, start: &M) -> Option<CursorGlyph> {
        if !self.is_scrollable() {
            return None;
        }
        self.scroller
            .cursor_glyph_within(start, &self.effective_size())
    }

    /// Set the window width, clamped to `[min_range, domain_size]`.
    ///
    /// If the window would then run past the end of the domain, its start is
    /// pulled back to `domain_size - range` and `on_change` fires. If the
    /// domain has shrunk below `min_range`, `min_range` wins.
    pub fn set_range(&mut self, requested: M) -> M {
        let domain = self.domain_size();
        #[cfg(feature = "tracing")]
        let logged_request = requested.clone();

        self.range = requested.min(domain.clone()).max(self.min_range.clone());

        let start = self.current_position();
        if start.plus(&self.range) > domain {
            let shifted = domain.minus(&self.range);
            if shifted != start {
                let size = self.effective_size_for(&domain);
                self.scroller.commit(shifted, &size, "set_range");
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "range_scroller.range",
            requested = %logged_request,
            range = %self.range,
            cursor = %self.scroller.cursor(),
            domain = %domain
        );
        self.range.clone()
    }

    /// `set_range(range + delta)`.
    pub fn change_range_by(&mut self, delta: i64) -> M {
        let requested = self.range.offset(delta);
        self.set_range(requested)
    }

    /// Move the window so it contains `target`, which is clamped into the
    /// domain first. Returns the resulting window start.
    ///
    /// A target outside the window becomes the window's last position. Does
    /// nothing when the whole domain fits in the window.
    pub fn track(&mut self, target: M) -> M {
        let domain = self.domain_size();
        if domain <= self.range {
            return self.current_position();
        }
        let size = self.effective_size_for(&domain);
        let target = target.clamp_index(&domain);
        let start = self.current_position().clamp_index(&size);
        let end = start.plus(&self.range).minus(&M::one());
        if target >= start && target <= end {
            return start;
        }

        let next = target.plus(&M::one()).minus(&self.range);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "range_scroller.track",
            target = %target,
            cursor = %next
        );
        self.scroller.commit(next, &size, "track")
    }

    /// Visible positions, or `None` for an empty domain.
    ///
    /// The whole domain when it fits in one window, otherwise
    /// `[start, start + range - 1]`.
    pub fn visible_range(&self) -> Option<RangeInclusive<M>> {
        let domain = self.domain_size();
        if !domain.is_positive() {
            return None;
        }
        if domain <= self.range {
            return Some(M::zero()..=domain.minus(&M::one()));
        }
        let start = self
            .current_position()
            .clamp_index(&self.effective_size_for(&domain));
        let end = start.plus(&self.range).minus(&M::one());
        Some(start..=end)
    }

    /// First visible position; zero for an empty domain.
    pub fn visible_min(&self) -> M {
        self.visible_range()
            .map_or_else(M::zero, |range| range.into_inner().0)
    }

    /// Last visible position; zero for an empty domain.
    pub fn visible_max(&self) -> M {
        self.visible_range()
            .map_or_else(M::zero, |range| range.into_inner().1)
    }
}
