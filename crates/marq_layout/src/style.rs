//! Draw style threaded through the layout recursion.

use crate::surface::FontWeight;
use crate::theme::Theme;

/// The style in effect at one point of the tree walk.
///
/// Copied by value into every recursive call: a subtree may override its
/// own copy (header font size, list padding, bold weight) without the
/// change ever reaching siblings or callers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawStyle {
    /// Current font size in pixels.
    pub font_size: f32,
    /// Left content edge; also the wrap target for new lines.
    pub padding_left: f32,
    /// Reserved space at the right viewport edge.
    pub padding_right: f32,
    /// Vertical padding applied before a new block.
    pub block_gap: f32,
    /// Current font face.
    pub weight: FontWeight,
}

impl DrawStyle {
    /// The root style a render pass starts from.
    pub fn root(theme: &Theme) -> Self {
        Self {
            font_size: theme.font_size,
            padding_left: theme.screen_padding,
            padding_right: theme.screen_padding,
            block_gap: theme.block_gap,
            weight: FontWeight::Normal,
        }
    }
}
