//! Error types for easel operations.
//!
//! This module provides the main error type [`EaselError`] which wraps
//! the error conditions that can occur while loading and rendering scenes.

use std::{io, ops::Range};

use thiserror::Error;

/// The main error type for easel operations.
///
/// The `Scene` variant carries the scene source and an optional byte span
/// pointing at the offending part of the definition, so callers can render
/// rich reports against the original text.
#[derive(Debug, Error)]
pub enum EaselError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Scene error: {message}")]
    Scene {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },
}

impl EaselError {
    /// Create a new `Scene` error with the associated scene source.
    pub fn new_scene_error(
        message: impl Into<String>,
        span: Option<Range<usize>>,
        src: impl Into<String>,
    ) -> Self {
        Self::Scene {
            message: message.into(),
            span,
            src: src.into(),
        }
    }
}
