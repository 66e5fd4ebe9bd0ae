use scribe_core::math::Vec2;
use scribe_render::{Color, DrawSurface, GlyphParams};

use crate::code::{CharContext, CodeKind, CodeMatch, FormattingCode, GlyphState};

/// Draws a tinted copy of each character behind it.
#[derive(Debug, Clone)]
pub struct ShadowCode {
    code_match: CodeMatch,
    color: Color,
    offset: Vec2,
}

impl ShadowCode {
    /// `offset` is in pixels at scale 1.
    pub fn new(code_match: CodeMatch, color: Color, offset: Vec2) -> Self {
        Self {
            code_match,
            color,
            offset,
        }
    }
}

impl FormattingCode for ShadowCode {
    fn code_match(&self) -> &CodeMatch {
        &self.code_match
    }

    fn kind(&self) -> CodeKind {
        CodeKind::Shadow
    }

    fn draw_character(
        &self,
        ctx: &CharContext<'_>,
        surface: &mut dyn DrawSurface,
        glyph: &mut GlyphState<'_>,
    ) -> bool {
        let params = GlyphParams::new(
            glyph.position + self.offset * glyph.scale,
            self.color.copy_alpha(glyph.color),
            glyph.scale,
            ctx.depth,
        );
        glyph.font.draw_text(surface, ctx.text, params);
        false
    }
}

const ADJACENT: [(f32, f32); 4] = [(0.0, -1.0), (1.0, 0.0), (0.0, 1.0), (-1.0, 0.0)];
const DIAGONAL: [(f32, f32); 4] = [(1.0, -1.0), (1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0)];

/// Draws each character shifted in every direction, in the outline color.
///
/// The character itself is not drawn; nest a second code inside the outline
/// if a fill is needed on top.
#[derive(Debug, Clone)]
pub struct OutlineCode {
    code_match: CodeMatch,
    color: Color,
    thickness: f32,
    diagonals: bool,
}

impl OutlineCode {
    /// `thickness` is in pixels at scale 1. With `diagonals` the outline is
    /// drawn in 8 directions instead of 4.
    pub fn new(code_match: CodeMatch, color: Color, thickness: f32, diagonals: bool) -> Self {
        Self {
            code_match,
            color,
            thickness,
            diagonals,
        }
    }

    fn directions(&self) -> impl Iterator<Item = Vec2> {
        let diagonal: &[(f32, f32)] = if self.diagonals { &DIAGONAL } else { &[] };
        ADJACENT
            .iter()
            .chain(diagonal)
            .map(|&(x, y)| Vec2::new(x, y).normalize())
    }
}

impl FormattingCode for OutlineCode {
    fn code_match(&self) -> &CodeMatch {
        &self.code_match
    }

    fn kind(&self) -> CodeKind {
        CodeKind::Outline
    }

    fn draw_character(
        &self,
        ctx: &CharContext<'_>,
        surface: &mut dyn DrawSurface,
        glyph: &mut GlyphState<'_>,
    ) -> bool {
        let color = self.color.copy_alpha(glyph.color);
        for dir in self.directions() {
            let params = GlyphParams::new(
                glyph.position + dir * self.thickness * glyph.scale,
                color,
                glyph.scale,
                ctx.depth,
            );
            glyph.font.draw_text(surface, ctx.text, params);
        }
        true
    }
}
