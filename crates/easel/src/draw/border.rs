//! Provides `BorderWrapper`, a decoration that adds a border to a drawable.

use crate::draw::{Canvas, Drawable};

/// A drawable wrapped with a border of a fixed width.
///
/// Drawing delegates to the wrapped drawable first, then records the border
/// action parameterized by the stored width. The inner drawable is owned and
/// set at construction; it cannot be replaced afterwards.
#[derive(Debug, Clone)]
pub struct BorderWrapper<D: Drawable> {
    inner: D,
    border_width: i32,
}

impl<D: Drawable> BorderWrapper<D> {
    /// Construct a new `BorderWrapper` around an owned inner drawable.
    pub fn new(inner: D, border_width: i32) -> Self {
        Self {
            inner,
            border_width,
        }
    }

    /// Get a reference to the inner drawable
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Get the border width of this wrapper
    pub fn border_width(&self) -> i32 {
        self.border_width
    }

    /// Record the border action for this wrapper.
    fn draw_border(&self, canvas: &mut Canvas) {
        canvas.record(format!(
            "draw BorderWrapper[borderWidth={}]",
            self.border_width
        ));
    }
}

impl<D: Drawable> Drawable for BorderWrapper<D> {
    fn draw(&self, canvas: &mut Canvas) {
        self.inner.draw(canvas);
        self.draw_border(canvas);
    }
}
