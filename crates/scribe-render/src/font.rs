//! The glyph/font collaborator.
//!
//! scribe never rasterizes glyphs itself. A host wraps its own font type in
//! [`Font`] and scribe measures and draws through it, one character at a time.

use scribe_core::math::Vec2;

use crate::color::Color;
use crate::surface::DrawSurface;

/// Non-breaking space, measured like a regular space.
pub const NBSP: char = '\u{00A0}';
/// Em space, measured as one line height. Used as the placeholder for inline images.
pub const EMSP: char = '\u{2003}';
/// Zero width space, measured as nothing.
pub const ZWSP: char = '\u{200B}';

/// Placement of a run of glyphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphParams {
    /// Top-left corner of the run.
    pub position: Vec2,
    pub color: Color,
    pub scale: f32,
    pub depth: f32,
}

impl GlyphParams {
    pub fn new(position: Vec2, color: Color, scale: f32, depth: f32) -> Self {
        Self {
            position,
            color,
            scale,
            depth,
        }
    }
}

/// A font that can measure and draw text.
///
/// Implementors provide the metrics and the draw call; the provided methods
/// layer scribe's handling of special characters and multi-line strings on top.
pub trait Font {
    /// Height of one line of text, unscaled.
    fn line_height(&self) -> f32;

    /// Size of a single-line run of ordinary glyphs, unscaled.
    fn measure(&self, text: &str) -> Vec2;

    /// The bold variant of this font, if it has one.
    fn bold(&self) -> Option<&dyn Font> {
        None
    }

    /// The italic variant of this font, if it has one.
    fn italic(&self) -> Option<&dyn Font> {
        None
    }

    /// Draw a run of text onto `surface`.
    fn draw_text(&self, surface: &mut dyn DrawSurface, text: &str, params: GlyphParams);

    /// Advance of a single character, unscaled.
    fn char_width(&self, c: char) -> f32 {
        match c {
            NBSP => self.measure(" ").x,
            EMSP => self.line_height(),
            ZWSP | '\n' => 0.0,
            _ => {
                let mut buf = [0u8; 4];
                self.measure(c.encode_utf8(&mut buf)).x
            }
        }
    }

    /// Width of a single line as the sum of its character advances, unscaled.
    fn line_width(&self, line: &str) -> f32 {
        line.chars().map(|c| self.char_width(c)).sum()
    }

    /// Size of a possibly multi-line string, unscaled.
    ///
    /// The width is the widest line and the height is one line height per line.
    fn measure_string(&self, text: &str) -> Vec2 {
        let mut width = 0.0_f32;
        let mut lines = 0;
        for line in text.split('\n') {
            width = width.max(self.line_width(line));
            lines += 1;
        }
        Vec2::new(width, lines as f32 * self.line_height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every glyph is 5 wide, lines are 10 high.
    struct Fixed;

    impl Font for Fixed {
        fn line_height(&self) -> f32 {
            10.0
        }

        fn measure(&self, text: &str) -> Vec2 {
            Vec2::new(text.chars().count() as f32 * 5.0, 10.0)
        }

        fn draw_text(&self, _surface: &mut dyn DrawSurface, _text: &str, _params: GlyphParams) {}
    }

    #[test]
    fn test_special_character_widths() {
        assert_eq!(Fixed.char_width('a'), 5.0);
        assert_eq!(Fixed.char_width(NBSP), 5.0);
        assert_eq!(Fixed.char_width(EMSP), 10.0);
        assert_eq!(Fixed.char_width(ZWSP), 0.0);
    }

    #[test]
    fn test_measure_string_multi_line() {
        assert_eq!(Fixed.measure_string("abc\nabcdef\n"), Vec2::new(30.0, 30.0));
        assert_eq!(Fixed.measure_string(""), Vec2::new(0.0, 10.0));
    }

    #[test]
    fn test_variants_default_to_none() {
        assert!(Fixed.bold().is_none());
        assert!(Fixed.italic().is_none());
    }
}
