//! A surface that records draw operations instead of rasterizing.
//!
//! Metrics are fixed (every glyph advances half the font size), which makes
//! layout output deterministic: the CLI dumps recorded operations directly
//! and tests assert on exact positions.

use std::fmt;

use crate::surface::{Color, FontWeight, Point, Size, Surface};

/// Horizontal advance of one glyph as a fraction of the font size.
const GLYPH_ADVANCE_FACTOR: f32 = 0.5;

/// One recorded draw operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A text run drawn at `origin`.
    Text {
        origin: Point,
        content: String,
        size: f32,
        weight: FontWeight,
        color: Color,
    },
    /// A filled circle (unordered-list bullet).
    Circle {
        center: Point,
        radius: f32,
        color: Color,
    },
}

impl fmt::Display for DrawOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawOp::Text {
                origin,
                content,
                size,
                weight,
                ..
            } => write!(
                f,
                "text   x={:<7} y={:<7} size={:<4} {:6} {:?}",
                origin.x, origin.y, size, weight.to_string(), content
            ),
            DrawOp::Circle { center, radius, .. } => write!(
                f,
                "circle x={:<7} y={:<7} r={}",
                center.x, center.y, radius
            ),
        }
    }
}

/// Deterministic [`Surface`] capturing operations in draw order.
pub struct RecordingSurface {
    viewport_width: f32,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// Creates a surface with the given viewport width.
    pub fn new(viewport_width: f32) -> Self {
        Self {
            viewport_width,
            ops: Vec::new(),
        }
    }

    /// The operations recorded so far, in draw order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Consumes the surface, returning the recorded operations.
    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }
}

impl Surface for RecordingSurface {
    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    fn measure_text(&self, _weight: FontWeight, text: &str, size: f32, letter_spacing: f32) -> Size {
        let glyphs = text.chars().count();
        let advances = size * GLYPH_ADVANCE_FACTOR * glyphs as f32;
        let gaps = letter_spacing * glyphs.saturating_sub(1) as f32;
        Size {
            width: advances + gaps,
            height: size,
        }
    }

    fn draw_text(
        &mut self,
        weight: FontWeight,
        text: &str,
        origin: Point,
        size: f32,
        _letter_spacing: f32,
        color: Color,
    ) {
        self.ops.push(DrawOp::Text {
            origin,
            content: text.to_owned(),
            size,
            weight,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }
}
