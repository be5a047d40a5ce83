//! The rendering surface contract and its value types.

use serde::{Deserialize, Serialize};

/// Font face selector.
///
/// A backend loads one face per weight at startup. Font availability is a
/// backend precondition: a backend that cannot load its faces must fail
/// fatally before the first render pass, never per draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// Regular face.
    Normal,
    /// Bold face.
    Bold,
}

impl std::fmt::Display for FontWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontWeight::Normal => f.write_str("normal"),
            FontWeight::Bold => f.write_str("bold"),
        }
    }
}

/// A position on the surface, in pixels from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Measured text dimensions, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Creates an opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// The drawing backend consumed by the layout engine.
///
/// One render pass issues measurement queries and draw operations in
/// document order against a single surface. Implementations need no
/// interior synchronization: the engine is single-threaded and holds the
/// only reference for the duration of the pass.
pub trait Surface {
    /// Current viewport width in pixels, queried for wrap decisions.
    fn viewport_width(&self) -> f32;

    /// Measures `text` as it would render with the given face, size and
    /// fixed per-character spacing.
    fn measure_text(&self, weight: FontWeight, text: &str, size: f32, letter_spacing: f32) -> Size;

    /// Draws `text` with its top-left corner at `origin`.
    fn draw_text(
        &mut self,
        weight: FontWeight,
        text: &str,
        origin: Point,
        size: f32,
        letter_spacing: f32,
        color: Color,
    );

    /// Draws a filled circle centered at `center`.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
}
