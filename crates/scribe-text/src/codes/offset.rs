use scribe_render::DrawSurface;

use crate::code::{CharContext, CodeKind, CodeMatch, FormattingCode, GlyphState};

/// Moves characters up or down: subscript and superscript.
#[derive(Debug, Clone)]
pub struct OffsetCode {
    code_match: CodeMatch,
    offset: f32,
}

impl OffsetCode {
    /// `offset` is a fraction of the line height; negative moves up.
    pub fn new(code_match: CodeMatch, offset: f32) -> Self {
        Self { code_match, offset }
    }
}

impl FormattingCode for OffsetCode {
    fn code_match(&self) -> &CodeMatch {
        &self.code_match
    }

    fn kind(&self) -> CodeKind {
        CodeKind::Offset
    }

    fn draw_character(
        &self,
        _ctx: &CharContext<'_>,
        _surface: &mut dyn DrawSurface,
        glyph: &mut GlyphState<'_>,
    ) -> bool {
        glyph.position.y += self.offset * glyph.font.line_height() * glyph.scale;
        false
    }
}
