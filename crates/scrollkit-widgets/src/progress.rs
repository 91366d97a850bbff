#![forbid(unsafe_code)]

//! Read-only progress view.
//!
//! A [`ProgressBar`] is a [`Scroller`] that never hit-tests. It reports how
//! much of its primary-axis extent is filled for the current position.

use scrollkit_core::{Magnitude, Quad};

use crate::hooks::ScrollerHooks;
use crate::params::ScrollerParams;
use crate::scroller::Scroller;
use crate::ticks::TickLayout;

#[derive(Debug)]
pub struct ProgressBar<M: Magnitude> {
    scroller: Scroller<M>,
}

impl<M: Magnitude> ProgressBar<M> {
    pub fn new(params: ScrollerParams, hooks: ScrollerHooks<M>) -> Self {
        Self {
            scroller: Scroller::new(params, hooks),
        }
    }

    #[inline]
    pub fn params(&self) -> &ScrollerParams {
        self.scroller.params()
    }

    #[inline]
    pub fn size(&self) -> M {
        self.scroller.size()
    }

    #[inline]
    pub fn current_position(&self) -> M {
        self.scroller.current_position()
    }

    pub fn set_position(&mut self, position: M) -> M {
        self.scroller.set_position(position)
    }

    pub fn increment(&mut self) -> M {
        self.scroller.increment()
    }

    pub fn decrement(&mut self) -> M {
        self.scroller.decrement()
    }

    pub fn change_by(&mut self, delta: i64) -> M {
        self.scroller.change_by(delta)
    }

    pub fn ticks(&self) -> TickLayout {
        self.scroller.ticks()
    }

    /// Primary-axis length of the filled part:
    /// `render_size * position / (size - 1)`.
    ///
    /// A single-position domain is always full. Returns `None` for an empty
    /// domain.
    pub fn fill_extent(&self) -> Option<f64> {
        let size = self.size();
        if !size.is_positive() {
            return None;
        }
        let render_size = self.params().render_size();
        let last = size.minus(&M::one());
        let position = self.current_position().clamp_index(&size);
        match position.ratio(&last) {
            Some(ratio) => Some(render_size * ratio),
            None => Some(render_size),
        }
    }

    /// The bar's outline in render space.
    pub fn frame(&self) -> Quad {
        self.rect_with_extent(self.params().render_size())
    }

    /// The filled part of the bar, or `None` for an empty domain.
    pub fn fill_rect(&self) -> Option<Quad> {
        self.fill_extent().map(|extent| self.rect_with_extent(extent))
    }

    fn rect_with_extent(&self, primary_extent: f64) -> Quad {
        let p = self.params();
        let orientation = p.orientation();
        Quad::new(
            orientation.compose(p.render_offset(), p.render_pos_min()),
            orientation.compose(primary_extent, p.cross_extent()),
        )
    }
}
