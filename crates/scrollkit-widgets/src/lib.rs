#![forbid(unsafe_code)]

//! Scroller widgets: position, range-window and progress controllers.
//!
//! # Role in scrollkit
//! `scrollkit-widgets` owns the interactive state behind scrollbars, range
//! sliders and progress indicators. Controllers hold only a cursor (and, for
//! range windows, a width); the domain size and optionally the authoritative
//! position are read from the owner through [`ScrollerHooks`].
//!
//! # Primary responsibilities
//! - **Scroller**: clamped stepping and absolute moves, click hit-testing and
//!   index-to-render-space mapping.
//! - **RangeScroller**: a fixed-width window over a larger domain, with range
//!   resizing and target tracking.
//! - **ProgressBar**: a read-only view of a position.
//! - **Render facts**: tick layouts and the cursor glyph, as plain values.
//!
//! # How it fits in the system
//! Every controller is generic over [`scrollkit_core::Magnitude`], so the
//! same code serves `i64` domains and arbitrary-precision ones. Geometry
//! comes from `scrollkit-core`; drawing is left to the caller.
//!
//! # Feature flags
//! - `tracing`: structured debug events for position and range changes.
//! - `state-persistence`: serde support for the parameter records.

pub mod error;
pub mod hooks;
pub mod params;
pub mod progress;
pub mod range_scroller;
pub mod scroller;
pub mod ticks;

pub use error::{Result, ScrollerError};
pub use hooks::ScrollerHooks;
pub use params::{Orientation, RangeWindowParams, ScrollerParams};
pub use progress::ProgressBar;
pub use range_scroller::RangeScroller;
pub use scroller::Scroller;
pub use ticks::{CURSOR_CORNER_RADIUS, CursorGlyph, MINOR_TICK_INSET, Tick, TickLayout};

pub use scrollkit_core::{Bounded, Magnitude, Point, Unbounded};
