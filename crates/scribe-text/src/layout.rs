//! Horizontal alignment of wrapped lines.

/// Horizontal text alignment relative to the draw position.
///
/// Centered and right-aligned text extends to the left of the draw position,
/// so the position acts as the anchor of each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// The x offset a line of `width` starts at.
    pub fn line_start(self, width: f32) -> f32 {
        match self {
            TextAlign::Left => 0.0,
            TextAlign::Center => -width / 2.0,
            TextAlign::Right => -width,
        }
    }
}

/// Widths of every line of `text`, ignoring trailing spaces.
pub(crate) fn line_widths(text: &str, line_width: impl Fn(&str) -> f32) -> Vec<f32> {
    text.split('\n')
        .map(|line| line_width(line.trim_end_matches(' ')))
        .collect()
}
