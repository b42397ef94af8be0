//! The built-in demonstration sequence.
//!
//! Renders the four classic chains: a scrolled text view, a bordered graph
//! view, and the same text view decorated in both stacking orders.

use easel::draw::{BorderWrapper, Canvas, Drawable, GraphView, ScrollWrapper, TextView};

/// Render the demonstration chains.
///
/// Each chain becomes one block of output, one line per drawing action;
/// blocks are separated by a blank line.
pub fn render() -> String {
    let chains: [Box<dyn Drawable>; 4] = [
        Box::new(ScrollWrapper::new(TextView::new(), 1)),
        Box::new(BorderWrapper::new(GraphView::new(), 2)),
        Box::new(ScrollWrapper::new(BorderWrapper::new(TextView::new(), 2), 1)),
        Box::new(BorderWrapper::new(ScrollWrapper::new(TextView::new(), 1), 2)),
    ];

    let blocks: Vec<String> = chains
        .iter()
        .map(|chain| {
            let mut canvas = Canvas::new();
            chain.draw(&mut canvas);
            canvas.to_string()
        })
        .collect();

    blocks.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demonstration_has_four_blocks() {
        let rendered = render();

        assert_eq!(rendered.split("\n\n").count(), 4);
    }

    #[test]
    fn test_demonstration_output() {
        let expected = "\
draw TextView
draw ScrollWrapper[scrollPosistion=1]

draw GraphView
draw BorderWrapper[borderWidth=2]

draw TextView
draw BorderWrapper[borderWidth=2]
draw ScrollWrapper[scrollPosistion=1]

draw TextView
draw ScrollWrapper[scrollPosistion=1]
draw BorderWrapper[borderWidth=2]
";

        assert_eq!(render(), expected);
    }
}
