//! Defaults consumed by the built-in formatting codes.

use scribe_render::Color;

/// Numeric and color defaults for the built-in codes and the macro resolver.
///
/// Offsets and thicknesses given as fractions are relative to the font's line
/// height; pixel values are multiplied by the draw scale.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatSettings {
    /// Underline and strikethrough thickness, as a fraction of the line height.
    pub line_thickness: f32,
    /// Vertical position of an underline, as a fraction of the line height.
    pub underline_offset: f32,
    /// Vertical position of a strikethrough, as a fraction of the line height.
    pub strikethrough_offset: f32,
    pub shadow_color: Color,
    /// Shadow offset in pixels, applied on both axes.
    pub shadow_offset: f32,
    pub outline_color: Color,
    /// Outline thickness in pixels.
    pub outline_thickness: f32,
    /// Draw outlines in 8 directions instead of 4.
    pub outline_diagonals: bool,
    pub subscript_offset: f32,
    pub superscript_offset: f32,
    pub wobble_speed: f32,
    pub wobble_height: f32,
    /// Characters revealed per second by `<a typing>`.
    pub typing_speed: f32,
    /// Maximum number of macro passes before resolution is treated as cyclic.
    pub macro_pass_limit: usize,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            line_thickness: 1.0 / 16.0,
            underline_offset: 0.85,
            strikethrough_offset: 0.55,
            shadow_color: Color::BLACK,
            shadow_offset: 2.0,
            outline_color: Color::BLACK,
            outline_thickness: 2.0,
            outline_diagonals: false,
            subscript_offset: 1.0 / 8.0,
            superscript_offset: -1.0 / 4.0,
            wobble_speed: 5.0,
            wobble_height: 1.0 / 8.0,
            typing_speed: 20.0,
            macro_pass_limit: 64,
        }
    }
}
