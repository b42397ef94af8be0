//! Error adapter for converting EaselError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Scene errors keep
//! the original scene source, so they render with a snippet pointing at the
//! offending part of the definition.

use std::{fmt, ops::Range};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use easel::EaselError;

/// Adapter for scene errors, which carry the scene source and an optional span.
pub struct SceneAdapter<'a> {
    /// The deserialization failure message
    message: &'a str,
    /// Byte range of the offending part of the scene, when known
    span: Option<&'a Range<usize>>,
    /// Scene source for displaying snippets
    src: &'a str,
}

impl<'a> SceneAdapter<'a> {
    /// Create a new scene adapter.
    pub fn new(message: &'a str, span: Option<&'a Range<usize>>, src: &'a str) -> Self {
        Self { message, span, src }
    }
}

impl fmt::Debug for SceneAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneAdapter")
            .field("message", &self.message)
            .field("span", &self.span)
            .finish()
    }
}

impl fmt::Display for SceneAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SceneAdapter<'_> {}

impl MietteDiagnostic for SceneAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("easel::scene"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "a scene names a `leaf` of `text` or `graph`, plus an optional `wrap` list of \
             `scroll`/`border` layers",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span?;
        let span = SourceSpan::new(span.start.into(), span.len());

        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some("invalid scene definition".to_string()), span),
        )))
    }
}

/// Adapter for [`EaselError`] variants without scene source information.
pub struct ErrorAdapter<'a>(pub &'a EaselError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            EaselError::Io(_) => "easel::io",
            EaselError::Scene { .. } => return None,
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        None
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a scene error with source information or a plain
/// error, providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A scene error with source snippet information.
    Scene(SceneAdapter<'a>),
    /// A simple error without source information.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Scene(s) => fmt::Display::fmt(s, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Scene(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Scene(s) => s.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Scene(s) => s.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Scene(s) => s.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Scene(s) => s.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert an [`EaselError`] into a reportable error.
///
/// For [`EaselError::Scene`], this returns a [`Reportable`] with the scene
/// source attached for snippet rendering. Other error variants become plain
/// reportables.
pub fn to_reportable(err: &EaselError) -> Reportable<'_> {
    match err {
        EaselError::Scene { message, span, src } => {
            Reportable::Scene(SceneAdapter::new(message, span.as_ref(), src))
        }
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}
