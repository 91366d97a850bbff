#![forbid(unsafe_code)]

//! Core: domain magnitudes and the geometry kernel.
//!
//! # Role in scrollkit
//! `scrollkit-core` is the leaf layer. It owns the numeric contract that the
//! scroller controllers are generic over, and the pure geometry used to place
//! and hit-test cursor glyphs.
//!
//! # Primary responsibilities
//! - **Magnitude**: ordered, saturating, non-negative domain quantities with a
//!   fixed-width fast path ([`magnitude::Bounded`]) and an arbitrary-precision
//!   variant ([`magnitude::Unbounded`]).
//! - **Geometry**: line-line and ray-circle intersection, rounded-rectangle
//!   boundary intersection and tessellation, arrow and connector vertices.
//!
//! # How it fits in the system
//! `scrollkit-widgets` builds its controllers on top of these two modules. No
//! module here issues draw calls; everything returns plain values that a
//! rendering collaborator consumes.

pub mod geometry;
pub mod magnitude;
pub mod rounded_rect;
pub mod shapes;

pub use geometry::{Point, line_line_intersection, ray_circle_intersection};
pub use magnitude::{BigUint, Bounded, Magnitude, Unbounded};
pub use rounded_rect::{ARC_SEGMENTS, RoundedRect, Sector};
pub use shapes::{Arrow, Quad, arrow, connector_triangle, quad_contains};
