//! Provides `ScrollWrapper`, a decoration that adds a scroll bar to a drawable.

use crate::draw::{Canvas, Drawable};

/// A drawable wrapped with a scroll bar at a fixed scroll position.
///
/// Drawing delegates to the wrapped drawable first, then records the scroll
/// action parameterized by the stored position. The inner drawable is owned
/// and set at construction; it cannot be replaced afterwards.
#[derive(Debug, Clone)]
pub struct ScrollWrapper<D: Drawable> {
    inner: D,
    scroll_position: i32,
}

impl<D: Drawable> ScrollWrapper<D> {
    /// Construct a new `ScrollWrapper` around an owned inner drawable.
    pub fn new(inner: D, scroll_position: i32) -> Self {
        Self {
            inner,
            scroll_position,
        }
    }

    /// Get a reference to the inner drawable
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Get the scroll position of this wrapper
    pub fn scroll_position(&self) -> i32 {
        self.scroll_position
    }

    /// Record the scroll action for this wrapper.
    fn scroll_to(&self, canvas: &mut Canvas) {
        canvas.record(format!(
            "draw ScrollWrapper[scrollPosistion={}]",
            self.scroll_position
        ));
    }
}

impl<D: Drawable> Drawable for ScrollWrapper<D> {
    fn draw(&self, canvas: &mut Canvas) {
        self.inner.draw(canvas);
        self.scroll_to(canvas);
    }
}
