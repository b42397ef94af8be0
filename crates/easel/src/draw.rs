//! Drawable components and their decorations.
//!
//! All drawable components implement the [`Drawable`] trait, which provides a
//! consistent interface for recording drawing actions on a [`Canvas`]. Leaf
//! views ([`TextView`], [`GraphView`]) record exactly one action; wrapper
//! views ([`ScrollWrapper`], [`BorderWrapper`]) own exactly one inner
//! drawable and record one additional action after delegating to it.
//!
//! Wrapping is transitive, so decorations stack: a chain of N wrappers around
//! a leaf records N+1 actions, innermost leaf first.

mod border;
mod canvas;
mod scroll;
mod view;

pub use border::BorderWrapper;
pub use canvas::Canvas;
pub use scroll::ScrollWrapper;
pub use view::{GraphView, TextView};

/// The capability of producing a visual-rendering side effect.
///
/// Drawing records one line on the canvas per drawing action performed along
/// the delegation chain, in delegation order. Implementations hold no mutable
/// state, so drawing the same value twice records identical sequences.
pub trait Drawable: std::fmt::Debug {
    fn draw(&self, canvas: &mut Canvas);
}

impl Drawable for Box<dyn Drawable> {
    fn draw(&self, canvas: &mut Canvas) {
        self.as_ref().draw(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_over_border_ordering() {
        let chain = ScrollWrapper::new(BorderWrapper::new(TextView::new(), 2), 1);

        let mut canvas = Canvas::new();
        chain.draw(&mut canvas);

        assert_eq!(
            canvas.lines(),
            [
                "draw TextView",
                "draw BorderWrapper[borderWidth=2]",
                "draw ScrollWrapper[scrollPosistion=1]",
            ]
        );
    }

    #[test]
    fn test_border_over_scroll_ordering() {
        let chain = BorderWrapper::new(ScrollWrapper::new(TextView::new(), 1), 2);

        let mut canvas = Canvas::new();
        chain.draw(&mut canvas);

        assert_eq!(
            canvas.lines(),
            [
                "draw TextView",
                "draw ScrollWrapper[scrollPosistion=1]",
                "draw BorderWrapper[borderWidth=2]",
            ]
        );
    }

    #[test]
    fn test_swapping_wrappers_keeps_leaf_first() {
        let scroll_outer = ScrollWrapper::new(BorderWrapper::new(TextView::new(), 2), 1);
        let border_outer = BorderWrapper::new(ScrollWrapper::new(TextView::new(), 1), 2);

        let mut canvas_a = Canvas::new();
        scroll_outer.draw(&mut canvas_a);
        let mut canvas_b = Canvas::new();
        border_outer.draw(&mut canvas_b);

        // The leaf line stays first; only the wrapper lines swap.
        assert_eq!(canvas_a.lines()[0], "draw TextView");
        assert_eq!(canvas_b.lines()[0], "draw TextView");
        assert_eq!(canvas_a.lines()[1], canvas_b.lines()[2]);
        assert_eq!(canvas_a.lines()[2], canvas_b.lines()[1]);
    }

    #[test]
    fn test_drawing_twice_is_idempotent() {
        let chain = BorderWrapper::new(ScrollWrapper::new(GraphView::new(), 7), 3);

        let mut first = Canvas::new();
        chain.draw(&mut first);
        let mut second = Canvas::new();
        chain.draw(&mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn test_boxed_drawable_delegates() {
        let boxed: Box<dyn Drawable> = Box::new(TextView::new());
        let chain = ScrollWrapper::new(boxed, 4);

        let mut canvas = Canvas::new();
        chain.draw(&mut canvas);

        assert_eq!(
            canvas.lines(),
            ["draw TextView", "draw ScrollWrapper[scrollPosistion=4]"]
        );
    }
}
