//! Easel - composable drawable components.
//!
//! A drawable is anything that can record its drawing actions on a
//! [`draw::Canvas`]. Leaf views record a single action; wrapper views own an
//! inner drawable and record one extra action after delegating to it, so
//! decorations stack in construction order.
//!
//! # Examples
//!
//! ```
//! use easel::draw::{BorderWrapper, Canvas, Drawable, ScrollWrapper, TextView};
//!
//! // A text view with a border, wrapped in a scroll bar.
//! let chain = ScrollWrapper::new(BorderWrapper::new(TextView::new(), 2), 1);
//!
//! let mut canvas = Canvas::new();
//! chain.draw(&mut canvas);
//!
//! assert_eq!(
//!     canvas.lines(),
//!     [
//!         "draw TextView",
//!         "draw BorderWrapper[borderWidth=2]",
//!         "draw ScrollWrapper[scrollPosistion=1]",
//!     ]
//! );
//! ```
//!
//! Chains can also be described as data and built at runtime, see the
//! [`chain`] module.

pub mod chain;
pub mod draw;

mod error;

pub use error::EaselError;
