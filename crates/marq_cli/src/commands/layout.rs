//! `marq layout`: lay out a markdown file and print the draw operations.

use std::path::Path;

use marq_ast::DocArena;
use marq_layout::{RecordingSurface, Theme, render};
use marq_parser::parse_markdown;
use miette::{IntoDiagnostic, Result, miette};
use tracing::warn;

use crate::io::load_source;

pub fn run(file: &Path, width: f32, theme_path: Option<&Path>) -> Result<()> {
    let source = load_source(file).into_diagnostic()?;
    let theme = load_theme(theme_path)?;

    let arena = DocArena::new();
    let result = parse_markdown(&arena, &source);
    if !result.diagnostics.is_empty() {
        warn!(
            "{} construct(s) were not understood and were skipped",
            result.diagnostics.len()
        );
    }

    let Some(document) = result.document else {
        return Err(miette!("{} produced no document", file.display()));
    };

    let mut surface = RecordingSurface::new(width);
    render(document, &mut surface, &theme);

    for op in surface.ops() {
        println!("{op}");
    }

    Ok(())
}

fn load_theme(path: Option<&Path>) -> Result<Theme> {
    match path {
        Some(path) => {
            let raw = load_source(path).into_diagnostic()?;
            serde_json::from_str(&raw).into_diagnostic()
        }
        None => Ok(Theme::default()),
    }
}
