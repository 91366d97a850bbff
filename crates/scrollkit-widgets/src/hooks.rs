#![forbid(unsafe_code)]

//! Callback record connecting a controller to its owner.

use std::fmt;

/// Callbacks a controller is built with.
///
/// Only `size` is mandatory. Optional hooks are plain fields, so a record is
/// assembled with struct-update syntax:
///
/// ```
/// use scrollkit_widgets::ScrollerHooks;
///
/// let hooks = ScrollerHooks {
///     on_change: Some(Box::new(|pos: &i64| println!("moved to {pos}"))),
///     ..ScrollerHooks::new(|| 100i64)
/// };
/// assert!(hooks.position.is_none());
/// ```
pub struct ScrollerHooks<M> {
    /// Current domain size. Called on every operation, never cached.
    pub size: Box<dyn Fn() -> M>,
    /// Authoritative external position. When present it takes precedence
    /// over the controller's own cursor for reads.
    pub position: Option<Box<dyn Fn() -> M>>,
    /// Invoked synchronously after the controller commits a new position.
    pub on_change: Option<Box<dyn FnMut(&M)>>,
    /// Invoked after `on_change` when a click moved the position.
    pub on_click: Option<Box<dyn FnMut()>>,
}

impl<M> ScrollerHooks<M> {
    /// Hooks with only a size source.
    pub fn new(size: impl Fn() -> M + 'static) -> Self {
        Self {
            size: Box::new(size),
            position: None,
            on_change: None,
            on_click: None,
        }
    }
}

impl<M: Clone + 'static> ScrollerHooks<M> {
    /// Hooks over a domain whose size never changes.
    pub fn fixed(size: M) -> Self {
        Self::new(move || size.clone())
    }
}

impl<M> fmt::Debug for ScrollerHooks<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollerHooks")
            .field("position", &self.position.is_some())
            .field("on_change", &self.on_change.is_some())
            .field("on_click", &self.on_click.is_some())
            .finish_non_exhaustive()
    }
}
