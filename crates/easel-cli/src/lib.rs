//! CLI logic for the easel drawing tool.
//!
//! This module contains the core CLI logic for the easel drawing tool.

pub mod error_adapter;

mod args;
mod demo;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::{debug, info};

use easel::{
    EaselError,
    chain::ChainDefinition,
    draw::{Canvas, Drawable},
};

/// Run the easel CLI application
///
/// Renders either the scene file named on the command line or, when no scene
/// is given, the built-in demonstration sequence. The rendered text goes to
/// the output file, or to stdout when no output path is given.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `EaselError` for:
/// - File I/O errors
/// - Scene files that fail to deserialize
pub fn run(args: &Args) -> Result<(), EaselError> {
    let rendered = match &args.scene {
        Some(scene_path) => {
            info!(scene_path = scene_path; "Rendering scene");

            let source = fs::read_to_string(scene_path)?;
            let definition = parse_scene(&source)?;
            debug!(depth = definition.depth(); "Scene parsed");

            let mut canvas = Canvas::new();
            definition.build().draw(&mut canvas);
            canvas.to_string()
        }
        None => {
            info!("Rendering built-in demonstration");
            demo::render()
        }
    };

    match &args.output {
        Some(output_path) => {
            fs::write(output_path, &rendered)?;
            info!(output_file = output_path; "Drawing written successfully");
        }
        None => io::stdout().write_all(rendered.as_bytes())?,
    }

    Ok(())
}

/// Parse a TOML scene source into a chain definition.
fn parse_scene(source: &str) -> Result<ChainDefinition, EaselError> {
    toml::from_str(source)
        .map_err(|err| EaselError::new_scene_error(err.message(), err.span(), source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scene_valid() {
        let source = r#"
            leaf = "text"

            [[wrap]]
            kind = "border"
            width = 2
        "#;

        let definition = parse_scene(source).expect("Scene should parse");
        assert_eq!(definition.depth(), 1);
    }

    #[test]
    fn test_parse_scene_error_carries_source() {
        let source = r#"leaf = "window""#;

        let err = parse_scene(source).expect_err("Unknown leaf should fail");
        match err {
            EaselError::Scene { src, .. } => assert_eq!(src, source),
            other => panic!("Expected Scene error, got {other:?}"),
        }
    }
}
