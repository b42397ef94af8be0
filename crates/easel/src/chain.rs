//! Declarative chain definitions.
//!
//! A chain is a leaf view wrapped in zero or more decorations. This module
//! provides deserializable definitions so a chain can be described as data
//! (for example in a TOML scene file) and built into a boxed [`Drawable`]
//! at runtime.
//!
//! # Example
//!
//! ```
//! use easel::chain::{ChainDefinition, LeafKind, WrapperDefinition};
//! use easel::draw::{Canvas, Drawable};
//!
//! let definition = ChainDefinition::new(
//!     LeafKind::Text,
//!     vec![
//!         WrapperDefinition::Border { width: 2 },
//!         WrapperDefinition::Scroll { position: 1 },
//!     ],
//! );
//!
//! let mut canvas = Canvas::new();
//! definition.build().draw(&mut canvas);
//!
//! assert_eq!(canvas.len(), definition.depth() + 1);
//! ```

use log::debug;
use serde::Deserialize;

use crate::draw::{BorderWrapper, Drawable, GraphView, ScrollWrapper, TextView};

/// The leaf view at the innermost end of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeafKind {
    /// A [`TextView`] leaf.
    Text,
    /// A [`GraphView`] leaf.
    Graph,
}

/// A single decoration layer in a chain.
///
/// Unknown kinds and missing attributes are rejected at deserialization
/// time, so a well-typed definition always builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WrapperDefinition {
    /// A [`ScrollWrapper`] layer with its scroll position.
    Scroll { position: i32 },
    /// A [`BorderWrapper`] layer with its border width.
    Border { width: i32 },
}

/// A complete chain definition: a leaf plus its decorations.
///
/// Wrappers apply in list order, so the first listed wrapper is the
/// innermost decoration and the last listed wrapper draws last.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChainDefinition {
    leaf: LeafKind,
    #[serde(default)]
    wrap: Vec<WrapperDefinition>,
}

impl ChainDefinition {
    /// Creates a new chain definition from a leaf and its decorations.
    pub fn new(leaf: LeafKind, wrap: Vec<WrapperDefinition>) -> Self {
        Self { leaf, wrap }
    }

    /// Returns the leaf at the innermost end of the chain.
    pub fn leaf(&self) -> LeafKind {
        self.leaf
    }

    /// Returns the decoration layers, innermost first.
    pub fn wrappers(&self) -> &[WrapperDefinition] {
        &self.wrap
    }

    /// Returns the number of decoration layers.
    pub fn depth(&self) -> usize {
        self.wrap.len()
    }

    /// Builds the drawable chain this definition describes.
    pub fn build(&self) -> Box<dyn Drawable> {
        debug!(depth = self.depth(); "Building drawable chain");

        let mut drawable: Box<dyn Drawable> = match self.leaf {
            LeafKind::Text => Box::new(TextView::new()),
            LeafKind::Graph => Box::new(GraphView::new()),
        };

        for wrapper in &self.wrap {
            drawable = match *wrapper {
                WrapperDefinition::Scroll { position } => {
                    Box::new(ScrollWrapper::new(drawable, position))
                }
                WrapperDefinition::Border { width } => {
                    Box::new(BorderWrapper::new(drawable, width))
                }
            };
        }

        drawable
    }
}
