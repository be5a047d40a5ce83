//! Layout theme.
//!
//! All spacing and sizing knobs of the engine live here so embedders can
//! load them from configuration; the defaults reproduce the renderer's
//! stock look.

use serde::{Deserialize, Serialize};

use crate::surface::Color;

/// Font-size multipliers for heading levels 1-6.
const HEADER_SCALE: [f32; 6] = [2.0, 1.75, 1.5, 1.25, 1.0, 0.8];

/// Spacing, sizing and color configuration for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Base font size for body text, in pixels.
    pub font_size: f32,
    /// Separation between the content and the viewport edges.
    pub screen_padding: f32,
    /// Vertical padding between consecutive blocks.
    pub block_gap: f32,
    /// Fixed spacing between characters, passed through to the surface.
    pub letter_spacing: f32,
    /// Extra left padding applied by each list level.
    pub list_indent: f32,
    /// Vertical padding between list items.
    pub list_item_gap: f32,
    /// Horizontal gap between a list marker and its item content.
    pub list_mark_gap: f32,
    /// Radius of the unordered-list bullet.
    pub list_dot_radius: f32,
    /// Color for text and list markers.
    pub text_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_size: 20.0,
            screen_padding: 20.0,
            block_gap: 20.0,
            letter_spacing: 2.0,
            list_indent: 20.0,
            list_item_gap: 10.0,
            list_mark_gap: 10.0,
            list_dot_radius: 2.0,
            text_color: Color::WHITE,
        }
    }
}

impl Theme {
    /// Returns the font size for a heading of the given level.
    ///
    /// Level 1 is the largest; levels outside 1-6 are clamped.
    pub fn header_font_size(&self, level: u8) -> f32 {
        let index = usize::from(level.clamp(1, 6)) - 1;
        self.font_size * HEADER_SCALE[index]
    }
}
