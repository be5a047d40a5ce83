//! The layout/draw engine.
//!
//! One depth-first walk over the completed tree per render pass. The only
//! cross-call mutable state is the cursor; style travels by value, so an
//! override in one subtree can never leak into a sibling.

use marq_ast::{MdNode, NodeKind};
use tracing::debug;

use crate::style::DrawStyle;
use crate::surface::{FontWeight, Point, Surface};
use crate::theme::Theme;

/// Drawing position shared across the recursion of one render pass.
struct Cursor {
    x: f32,
    y: f32,
    /// Height of the previous block, consumed by the next block's
    /// vertical advance.
    prev_block_height: f32,
}

/// Renders `document` onto `surface` with the given theme.
///
/// The cursor starts at `(screen_padding, screen_padding - block_gap)` with
/// a zero previous-block height, so the first block's advance lands exactly
/// at the top padding. The walk runs to completion; the tree is read-only
/// for its duration.
pub fn render<S: Surface>(document: &MdNode<'_>, surface: &mut S, theme: &Theme) {
    debug!(viewport = surface.viewport_width(), "render pass");

    let mut renderer = Renderer {
        surface,
        theme,
        cursor: Cursor {
            x: theme.screen_padding,
            y: theme.screen_padding - theme.block_gap,
            prev_block_height: 0.0,
        },
    };
    renderer.node(document, DrawStyle::root(theme));
}

struct Renderer<'s, S> {
    surface: &'s mut S,
    theme: &'s Theme,
    cursor: Cursor,
}

impl<S: Surface> Renderer<'_, S> {
    fn node(&mut self, node: &MdNode<'_>, mut style: DrawStyle) {
        match node.kind() {
            NodeKind::Document => self.children(node, style),
            NodeKind::Header { level } => {
                self.start_block(&style);
                style.font_size = self.theme.header_font_size(level);
                self.children(node, style);
                self.cursor.prev_block_height = style.font_size;
            }
            NodeKind::Paragraph => {
                self.start_block(&style);
                self.children(node, style);
                self.cursor.prev_block_height = style.font_size;
            }
            NodeKind::Text(content) => self.text(content, style),
            NodeKind::List { start } => self.list(node, start, style),
            // Handled entirely by the parent list.
            NodeKind::ListItem => {}
            NodeKind::Bold => {
                style.weight = FontWeight::Bold;
                self.children(node, style);
            }
        }
    }

    fn children(&mut self, node: &MdNode<'_>, style: DrawStyle) {
        for child in node.children() {
            self.node(child, style);
        }
    }

    /// Vertical rhythm between blocks: previous block height plus the
    /// inter-block gap, carriage returned to the left content edge.
    fn start_block(&mut self, style: &DrawStyle) {
        self.cursor.x = style.padding_left;
        self.cursor.y += self.cursor.prev_block_height + style.block_gap;
    }

    /// Splits at single ASCII spaces, each word keeping its trailing space
    /// so inter-word spacing survives the split.
    fn text(&mut self, content: &str, style: DrawStyle) {
        let mut start = 0;
        for (i, byte) in content.bytes().enumerate() {
            if byte == b' ' {
                self.word(&content[start..=i], style);
                start = i + 1;
            }
        }
        if start < content.len() {
            self.word(&content[start..], style);
        }
    }

    /// Draws one word, wrapping first if it would overrun the usable
    /// width. Wrapping advances a single line, not a full block gap, and
    /// never splits the word itself.
    fn word(&mut self, word: &str, style: DrawStyle) {
        let metrics = self.surface.measure_text(
            style.weight,
            word,
            style.font_size,
            self.theme.letter_spacing,
        );

        let padding = style.padding_left + style.padding_right;
        if self.cursor.x + metrics.width > self.surface.viewport_width() - padding {
            self.cursor.x = style.padding_left;
            self.cursor.y += style.font_size;
        }

        self.surface.draw_text(
            style.weight,
            word,
            Point::new(self.cursor.x, self.cursor.y),
            style.font_size,
            self.theme.letter_spacing,
            self.theme.text_color,
        );
        self.cursor.x += metrics.width;
    }

    fn list(&mut self, node: &MdNode<'_>, start: Option<u64>, mut style: DrawStyle) {
        style.padding_left += self.theme.list_indent;
        self.start_block(&style);

        for (i, item) in node.children().enumerate() {
            if i > 0 {
                self.cursor.x = style.padding_left;
                self.cursor.y += style.font_size + self.theme.list_item_gap;
            }

            match start {
                Some(start) => {
                    let marker = format!("{}.", start + i as u64);
                    self.word(&marker, style);
                }
                None => {
                    self.surface.fill_circle(
                        Point::new(self.cursor.x, self.cursor.y + style.font_size / 2.0),
                        self.theme.list_dot_radius,
                        self.theme.text_color,
                    );
                }
            }
            self.cursor.x += self.theme.list_mark_gap;

            let mut item_style = style;
            item_style.padding_left += self.theme.list_mark_gap;
            item_style.block_gap = self.theme.list_item_gap;
            self.children(item, item_style);
        }

        self.cursor.prev_block_height = style.font_size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawOp, RecordingSurface};
    use marq_ast::DocArena;
    use pretty_assertions::assert_eq;

    fn text_node<'a>(arena: &'a DocArena, content: &str) -> &'a MdNode<'a> {
        arena.alloc(MdNode::new(NodeKind::Text(arena.alloc_str(content))))
    }

    fn container<'a>(arena: &'a DocArena, kind: NodeKind<'a>) -> &'a MdNode<'a> {
        arena.alloc(MdNode::new(kind))
    }

    /// Convenience view of recorded text ops as (content, x, y, size, bold).
    fn text_ops(surface: &RecordingSurface) -> Vec<(String, f32, f32, f32, bool)> {
        surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text {
                    origin,
                    content,
                    size,
                    weight,
                    ..
                } => Some((
                    content.clone(),
                    origin.x,
                    origin.y,
                    *size,
                    *weight == FontWeight::Bold,
                )),
                DrawOp::Circle { .. } => None,
            })
            .collect()
    }

    // Fixed metrics: glyph advance = size / 2, letter spacing 2. A word of
    // n chars at size 20 measures n*10 + (n-1)*2 wide.

    #[test]
    fn test_first_block_lands_at_top_padding() {
        let arena = DocArena::new();
        let doc = container(&arena, NodeKind::Document);
        let para = container(&arena, NodeKind::Paragraph);
        doc.append_child(para);
        para.append_child(text_node(&arena, "hi"));

        let mut surface = RecordingSurface::new(640.0);
        render(doc, &mut surface, &Theme::default());

        let ops = text_ops(&surface);
        assert_eq!(ops.len(), 1);
        let (content, x, y, size, bold) = ops[0].clone();
        assert_eq!(content, "hi");
        assert_eq!((x, y), (20.0, 20.0));
        assert_eq!(size, 20.0);
        assert!(!bold);
    }

    #[test]
    fn test_header_sizes_then_block_advance() {
        let arena = DocArena::new();
        let doc = container(&arena, NodeKind::Document);
        let header = container(&arena, NodeKind::Header { level: 1 });
        let para = container(&arena, NodeKind::Paragraph);
        doc.append_child(header);
        doc.append_child(para);
        header.append_child(text_node(&arena, "Title"));
        para.append_child(text_node(&arena, "Some text"));

        let mut surface = RecordingSurface::new(640.0);
        render(doc, &mut surface, &Theme::default());

        let ops = text_ops(&surface);
        assert_eq!(ops.len(), 3);

        // "Title" at the initial cursor, at the level-1 size.
        assert_eq!(ops[0].0, "Title");
        assert_eq!((ops[0].1, ops[0].2), (20.0, 20.0));
        assert_eq!(ops[0].3, 40.0);

        // Next block advanced by header size + block gap: y = 20 + 40 + 20.
        assert_eq!(ops[1].0, "Some ");
        assert_eq!((ops[1].1, ops[1].2), (20.0, 80.0));
        assert_eq!(ops[1].3, 20.0);

        // "Some " is 5 glyphs: 5*10 + 4*2 = 58 wide.
        assert_eq!(ops[2].0, "text");
        assert_eq!((ops[2].1, ops[2].2), (78.0, 80.0));
    }

    #[test]
    fn test_wrap_before_overflow_never_splits_words() {
        let arena = DocArena::new();
        let doc = container(&arena, NodeKind::Document);
        let para = container(&arena, NodeKind::Paragraph);
        doc.append_child(para);
        para.append_child(text_node(&arena, "aaaa aaaa aaaa"));

        // Usable limit: 200 - 20 - 20 = 160. "aaaa " measures 58, "aaaa" 46.
        let mut surface = RecordingSurface::new(200.0);
        render(doc, &mut surface, &Theme::default());

        let ops = text_ops(&surface);
        assert_eq!(ops.len(), 3);
        assert_eq!((ops[0].1, ops[0].2), (20.0, 20.0)); // x ends at 78
        assert_eq!((ops[1].1, ops[1].2), (78.0, 20.0)); // x ends at 136
        // 136 + 46 > 160: wrapped to a new line, single-line advance.
        assert_eq!((ops[2].1, ops[2].2), (20.0, 40.0));

        // Words survive intact.
        let contents: Vec<_> = ops.iter().map(|op| op.0.as_str()).collect();
        assert_eq!(contents, vec!["aaaa ", "aaaa ", "aaaa"]);
    }

    #[test]
    fn test_ordered_markers_count_from_start() {
        let arena = DocArena::new();
        let doc = container(&arena, NodeKind::Document);
        let list = container(&arena, NodeKind::List { start: Some(3) });
        doc.append_child(list);
        for content in ["a", "b", "c", "d"] {
            let item = container(&arena, NodeKind::ListItem);
            list.append_child(item);
            item.append_child(text_node(&arena, content));
        }

        let mut surface = RecordingSurface::new(640.0);
        render(doc, &mut surface, &Theme::default());

        let markers: Vec<_> = text_ops(&surface)
            .into_iter()
            .map(|op| op.0)
            .filter(|c| c.ends_with('.'))
            .collect();
        assert_eq!(markers, vec!["3.", "4.", "5.", "6."]);
    }

    #[test]
    fn test_ordered_list_geometry() {
        let arena = DocArena::new();
        let doc = container(&arena, NodeKind::Document);
        let list = container(&arena, NodeKind::List { start: Some(1) });
        doc.append_child(list);
        for content in ["a", "b"] {
            let item = container(&arena, NodeKind::ListItem);
            list.append_child(item);
            item.append_child(text_node(&arena, content));
        }

        let mut surface = RecordingSurface::new(640.0);
        render(doc, &mut surface, &Theme::default());

        let ops = text_ops(&surface);
        // Indented left edge: 20 + 20 = 40; first line at the top padding.
        assert_eq!(ops[0].0, "1.");
        assert_eq!((ops[0].1, ops[0].2), (40.0, 20.0));
        // "1." is 22 wide; item content starts after it plus the mark gap.
        assert_eq!(ops[1].0, "a");
        assert_eq!((ops[1].1, ops[1].2), (72.0, 20.0));
        // Second item: new line at font size + item gap.
        assert_eq!(ops[2].0, "2.");
        assert_eq!((ops[2].1, ops[2].2), (40.0, 50.0));
    }

    #[test]
    fn test_unordered_bullet_on_baseline() {
        let arena = DocArena::new();
        let doc = container(&arena, NodeKind::Document);
        let list = container(&arena, NodeKind::List { start: None });
        doc.append_child(list);
        let item = container(&arena, NodeKind::ListItem);
        list.append_child(item);
        item.append_child(text_node(&arena, "entry"));

        let mut surface = RecordingSurface::new(640.0);
        render(doc, &mut surface, &Theme::default());

        let circle = surface
            .ops()
            .iter()
            .find_map(|op| match op {
                DrawOp::Circle { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .expect("bullet drawn");
        // Centered half a line below the cursor top, at the indented edge.
        assert_eq!((circle.0.x, circle.0.y), (40.0, 30.0));
        assert_eq!(circle.1, 2.0);

        // Item text starts after the mark gap only (no marker width).
        let ops = text_ops(&surface);
        assert_eq!(ops[0].0, "entry");
        assert_eq!((ops[0].1, ops[0].2), (50.0, 20.0));
    }

    #[test]
    fn test_bold_does_not_leak_to_siblings() {
        let arena = DocArena::new();
        let doc = container(&arena, NodeKind::Document);
        let para = container(&arena, NodeKind::Paragraph);
        doc.append_child(para);
        para.append_child(text_node(&arena, "a "));
        let bold = container(&arena, NodeKind::Bold);
        para.append_child(bold);
        bold.append_child(text_node(&arena, "b "));
        para.append_child(text_node(&arena, "c"));

        let mut surface = RecordingSurface::new(640.0);
        render(doc, &mut surface, &Theme::default());

        let flags: Vec<_> = text_ops(&surface)
            .into_iter()
            .map(|op| (op.0, op.4))
            .collect();
        assert_eq!(
            flags,
            vec![
                ("a ".to_owned(), false),
                ("b ".to_owned(), true),
                ("c".to_owned(), false),
            ]
        );
    }

    #[test]
    fn test_list_item_direct_visit_is_noop() {
        let arena = DocArena::new();
        let item = container(&arena, NodeKind::ListItem);
        item.append_child(text_node(&arena, "never drawn"));

        let mut surface = RecordingSurface::new(640.0);
        render(item, &mut surface, &Theme::default());

        assert!(surface.ops().is_empty());
    }

    #[test]
    fn test_trailing_spaces_kept_on_words() {
        let arena = DocArena::new();
        let doc = container(&arena, NodeKind::Document);
        let para = container(&arena, NodeKind::Paragraph);
        doc.append_child(para);
        para.append_child(text_node(&arena, "one two three"));

        let mut surface = RecordingSurface::new(640.0);
        render(doc, &mut surface, &Theme::default());

        let contents: Vec<_> = text_ops(&surface).into_iter().map(|op| op.0).collect();
        assert_eq!(contents, vec!["one ", "two ", "three"]);
    }

    #[test]
    fn test_nested_list_indents_further() {
        let arena = DocArena::new();
        let doc = container(&arena, NodeKind::Document);
        let outer = container(&arena, NodeKind::List { start: None });
        doc.append_child(outer);
        let item = container(&arena, NodeKind::ListItem);
        outer.append_child(item);
        item.append_child(text_node(&arena, "outer"));
        let inner = container(&arena, NodeKind::List { start: None });
        item.append_child(inner);
        let inner_item = container(&arena, NodeKind::ListItem);
        inner.append_child(inner_item);
        inner_item.append_child(text_node(&arena, "inner"));

        let mut surface = RecordingSurface::new(640.0);
        render(doc, &mut surface, &Theme::default());

        let circles: Vec<f32> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle { center, .. } => Some(center.x),
                _ => None,
            })
            .collect();
        // Outer bullet at 20+20; inner at (20+20+10)+20.
        assert_eq!(circles, vec![40.0, 70.0]);
    }
}
