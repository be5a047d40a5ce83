//! End-to-end pipeline tests: markdown source through the tree builder and
//! the layout engine, asserting on the recorded draw operations.

use marq_ast::{DocArena, NodeKind};
use marq_layout::{DrawOp, FontWeight, RecordingSurface, Theme, render};
use marq_parser::parse_markdown;
use pretty_assertions::assert_eq;

/// Parses and renders `source` at the given viewport width with the stock
/// theme, returning the recorded operations.
fn render_source(source: &str, viewport_width: f32) -> Vec<DrawOp> {
    let arena = DocArena::new();
    let result = parse_markdown(&arena, source);
    let document = result.document.expect("document root");

    let mut surface = RecordingSurface::new(viewport_width);
    render(document, &mut surface, &Theme::default());
    surface.into_ops()
}

fn text_contents(ops: &[DrawOp]) -> Vec<&str> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
        .collect()
}

mod document_shape {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading_and_paragraph() {
        let arena = DocArena::new();
        let result = parse_markdown(&arena, "# Title\n\nSome text");
        assert!(result.is_clean());

        let doc = result.document.unwrap();
        let kinds: Vec<_> = doc.children().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            vec![NodeKind::Header { level: 1 }, NodeKind::Paragraph]
        );
    }

    #[test]
    fn title_drawn_at_header_size_then_block_advance() {
        let ops = render_source("# Title\n\nSome text", 1280.0);

        let texts: Vec<_> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text {
                    origin,
                    content,
                    size,
                    ..
                } => Some((content.as_str(), origin.x, origin.y, *size)),
                _ => None,
            })
            .collect();

        // "Title" at the initial cursor at the level-1 font size; the
        // paragraph advanced by header size + block gap below it.
        assert_eq!(texts[0], ("Title", 20.0, 20.0, 40.0));
        assert_eq!(texts[1], ("Some ", 20.0, 80.0, 20.0));
        assert_eq!(texts[2], ("text", 78.0, 80.0, 20.0));
    }

    #[test]
    fn blockquote_dropped_but_siblings_render() {
        let ops = render_source("before\n\n> quoted away\n\nafter", 1280.0);
        assert_eq!(text_contents(&ops), vec!["before", "after"]);
    }
}

mod lists {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn implicit_start_markers() {
        let ops = render_source("1. one\n2. two", 1280.0);
        let contents = text_contents(&ops);
        assert_eq!(contents, vec!["1.", "one", "2.", "two"]);
    }

    #[test]
    fn explicit_start_markers_count_up() {
        let ops = render_source("3. a\n4. b\n5. c\n6. d", 1280.0);
        let markers: Vec<_> = text_contents(&ops)
            .into_iter()
            .filter(|c| c.ends_with('.'))
            .collect();
        assert_eq!(markers, vec!["3.", "4.", "5.", "6."]);
    }

    #[test]
    fn explicit_start_survives_nesting() {
        let ops = render_source("- outer\n  3. a\n  4. b", 1280.0);
        let markers: Vec<_> = text_contents(&ops)
            .into_iter()
            .filter(|c| c.ends_with('.'))
            .collect();
        assert_eq!(markers, vec!["3.", "4."]);
    }

    #[test]
    fn unordered_items_get_bullets() {
        let ops = render_source("- a\n- b", 1280.0);
        let bullets = ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count();
        assert_eq!(bullets, 2);
    }
}

mod styling {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bold_does_not_bleed_into_siblings() {
        let ops = render_source("plain **loud** tail", 1280.0);

        let weights: Vec<_> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text {
                    content, weight, ..
                } => Some((content.as_str(), *weight)),
                _ => None,
            })
            .collect();

        assert_eq!(
            weights,
            vec![
                ("plain ", FontWeight::Normal),
                ("loud", FontWeight::Bold),
                (" tail", FontWeight::Normal),
            ]
        );
    }
}

mod wrapping {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn words_never_split_and_wrap_before_overflow() {
        // Usable limit at 200px: 200 - 20 - 20 = 160.
        let ops = render_source("aaaa aaaa aaaa aaaa", 200.0);

        let words: Vec<_> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text {
                    origin, content, ..
                } => Some((content.as_str(), origin.x, origin.y)),
                _ => None,
            })
            .collect();

        // Every drawn run is a whole word from the source.
        for (content, _, _) in &words {
            assert!(matches!(*content, "aaaa " | "aaaa"));
        }

        // Two words fit per line ("aaaa " is 58 wide); the third wraps.
        assert_eq!(words[0].1, 20.0);
        assert_eq!(words[1].1, 78.0);
        assert_eq!((words[2].1, words[2].2), (20.0, 40.0));
        assert_eq!((words[3].1, words[3].2), (78.0, 40.0));
    }

    #[test]
    fn no_word_starts_past_the_usable_width() {
        let source = "word word word word word word word word word word";
        let viewport = 300.0;
        let ops = render_source(source, viewport);

        let limit = viewport - 20.0 - 20.0;
        for op in &ops {
            if let DrawOp::Text { origin, content, .. } = op {
                // The wrap decision uses the measured end of the word.
                let width = content.chars().count() as f32 * 10.0
                    + 2.0 * (content.chars().count() as f32 - 1.0);
                assert!(
                    origin.x + width <= limit,
                    "{content:?} at x={} overruns the usable width",
                    origin.x
                );
            }
        }
    }
}

mod arena_reuse {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn repeated_parse_reset_cycles() {
        let source = "# Title\n\nSome text with several words in it";
        let mut arena = DocArena::new();

        let mut sizes = Vec::new();
        for _ in 0..4 {
            let result = parse_markdown(&arena, source);
            assert!(result.document.is_some());
            sizes.push(arena.allocated_bytes());
            arena.reset();
        }

        // Every cycle allocates at least the text payload.
        for size in sizes {
            assert!(size >= "Some text with several words in it".len());
        }
    }
}
