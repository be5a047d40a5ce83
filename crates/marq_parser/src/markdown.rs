//! Markdown adapter over `pulldown-cmark`.
//!
//! Feeds the tree builder from pulldown-cmark's event iterator. Pulldown
//! has no document event, so the adapter brackets the stream with the
//! document enter/leave itself. Tags outside the modeled set are classified
//! and handed over as `Unsupported` carriers; the builder reports and skips
//! them.

use marq_ast::DocArena;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use tracing::debug;

use crate::builder::{BuildResult, TreeBuilder};
use crate::event::{BlockKind, SpanKind, TextClass};

/// Either side of the block/span split of pulldown's tag set.
enum TagClass {
    Block(BlockKind),
    Span(SpanKind),
}

/// Parses markdown source into a document tree allocated in `arena`.
///
/// Always returns a result; rejected constructs surface as diagnostics
/// alongside the tree that was built around them.
pub fn parse_markdown<'a>(arena: &'a DocArena, source: &str) -> BuildResult<'a> {
    let mut builder = TreeBuilder::new(arena);

    builder.enter_block(BlockKind::Document);
    for event in Parser::new_ext(source, parser_options()) {
        feed(&mut builder, event);
    }
    builder.leave_block();

    let result = builder.finish();
    debug!(
        diagnostics = result.diagnostics.len(),
        "markdown build finished"
    );
    result
}

/// Extensions the upstream parser recognizes. Tables, task lists and
/// strikethrough parse as coherent constructs and are then rejected as
/// unsupported rather than leaking through as literal text.
fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS | Options::ENABLE_STRIKETHROUGH
}

fn feed(builder: &mut TreeBuilder<'_>, event: Event<'_>) {
    match event {
        Event::Start(tag) => match classify(&tag) {
            TagClass::Block(kind) => builder.enter_block(kind),
            TagClass::Span(kind) => builder.enter_span(kind),
        },
        Event::End(tag) => {
            if is_span_end(&tag) {
                builder.leave_span();
            } else {
                builder.leave_block();
            }
        }
        Event::Text(text) => builder.text(TextClass::Normal, &text),
        Event::Code(code) => builder.text(TextClass::Unsupported("inline code"), &code),
        Event::Html(html) | Event::InlineHtml(html) => {
            builder.text(TextClass::Unsupported("html"), &html);
        }
        Event::SoftBreak => builder.text(TextClass::Unsupported("soft break"), "\n"),
        Event::HardBreak => builder.text(TextClass::Unsupported("hard break"), "\n"),
        Event::FootnoteReference(name) => {
            builder.text(TextClass::Unsupported("footnote reference"), &name);
        }
        Event::TaskListMarker(_) => {
            builder.text(TextClass::Unsupported("task list marker"), "");
        }
        // A thematic break has no end tag; bracket it so the skip
        // discipline stays balanced.
        Event::Rule => {
            builder.enter_block(BlockKind::Unsupported("thematic break"));
            builder.leave_block();
        }
        _ => builder.text(TextClass::Unsupported("text"), ""),
    }
}

fn classify(tag: &Tag<'_>) -> TagClass {
    match tag {
        Tag::Paragraph => TagClass::Block(BlockKind::Paragraph),
        Tag::Heading { level, .. } => TagClass::Block(BlockKind::Heading {
            level: *level as u8,
        }),
        Tag::List(start) => TagClass::Block(BlockKind::List { start: *start }),
        Tag::Item => TagClass::Block(BlockKind::ListItem),
        Tag::Strong => TagClass::Span(SpanKind::Strong),
        Tag::Emphasis => TagClass::Span(SpanKind::Unsupported("emphasis")),
        Tag::Strikethrough => TagClass::Span(SpanKind::Unsupported("strikethrough")),
        Tag::Link { .. } => TagClass::Span(SpanKind::Unsupported("link")),
        Tag::Image { .. } => TagClass::Span(SpanKind::Unsupported("image")),
        Tag::BlockQuote(_) => TagClass::Block(BlockKind::Unsupported("block quote")),
        Tag::CodeBlock(_) => TagClass::Block(BlockKind::Unsupported("code block")),
        Tag::HtmlBlock => TagClass::Block(BlockKind::Unsupported("html block")),
        Tag::FootnoteDefinition(_) => {
            TagClass::Block(BlockKind::Unsupported("footnote definition"))
        }
        Tag::Table(_) | Tag::TableHead | Tag::TableRow | Tag::TableCell => {
            TagClass::Block(BlockKind::Unsupported("table"))
        }
        _ => TagClass::Block(BlockKind::Unsupported("block")),
    }
}

/// End tags for constructs classified as spans in [`classify`]. Must stay
/// symmetric with it so enter/leave pair up.
fn is_span_end(tag: &TagEnd) -> bool {
    matches!(
        tag,
        TagEnd::Strong | TagEnd::Emphasis | TagEnd::Strikethrough | TagEnd::Link | TagEnd::Image
    )
}
