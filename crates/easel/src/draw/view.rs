//! Leaf views: drawable components with no further delegation.

use crate::draw::{Canvas, Drawable};

/// A plain text view.
///
/// Drawing records the fixed label `draw TextView`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextView;

impl TextView {
    /// Construct a new `TextView`.
    pub fn new() -> Self {
        Self
    }
}

impl Drawable for TextView {
    fn draw(&self, canvas: &mut Canvas) {
        canvas.record("draw TextView");
    }
}

/// A graph view.
///
/// Drawing records the fixed label `draw GraphView`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphView;

impl GraphView {
    /// Construct a new `GraphView`.
    pub fn new() -> Self {
        Self
    }
}

impl Drawable for GraphView {
    fn draw(&self, canvas: &mut Canvas) {
        canvas.record("draw GraphView");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_view_records_single_line() {
        let mut canvas = Canvas::new();
        TextView::new().draw(&mut canvas);

        assert_eq!(canvas.lines(), ["draw TextView"]);
    }

    #[test]
    fn test_graph_view_records_single_line() {
        let mut canvas = Canvas::new();
        GraphView::new().draw(&mut canvas);

        assert_eq!(canvas.lines(), ["draw GraphView"]);
    }

    #[test]
    fn test_leaf_draw_is_idempotent() {
        let view = TextView::new();

        let mut first = Canvas::new();
        view.draw(&mut first);
        let mut second = Canvas::new();
        view.draw(&mut second);

        assert_eq!(first, second);
    }
}
