//! `marq tree`: parse a markdown file and print its document tree.

use std::path::Path;

use marq_ast::{DocArena, MdNode, NodeKind};
use marq_parser::parse_markdown;
use miette::{IntoDiagnostic, Result, miette};
use tracing::warn;

use crate::io::load_source;

pub fn run(file: &Path, format: &str) -> Result<()> {
    let source = load_source(file).into_diagnostic()?;

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

    match format {
        "text" => print_node(document, 0),
        "json" => {
            let json = serde_json::to_string_pretty(document).into_diagnostic()?;
            println!("{json}");
        }
        other => return Err(miette!("unknown format: {other} (expected text or json)")),
    }

    Ok(())
}

fn print_node(node: &MdNode<'_>, indent: usize) {
    let pad = " ".repeat(indent);
    match node.kind() {
        NodeKind::Text(value) => println!("{pad}Text({value:?})"),
        kind => {
            print!("{pad}{}", kind.name());
            match kind {
                NodeKind::Header { level } => print!("({level})"),
                NodeKind::List { start: Some(start) } => print!("(ordered, start {start})"),
                NodeKind::List { start: None } => print!("(unordered)"),
                _ => {}
            }
            if node.has_children() {
                println!(" {{");
                for child in node.children() {
                    print_node(child, indent + 4);
                }
                println!("{pad}}}");
            } else {
                println!();
            }
        }
    }
}
