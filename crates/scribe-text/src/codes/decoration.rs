use std::fmt;
use std::rc::Rc;

use scribe_core::geometry::Rect;
use scribe_render::DrawSurface;

use crate::code::{CharContext, CodeKind, CodeMatch, FormattingCode, GlyphState};
use crate::token::Token;

/// Decides whether a link's token is currently selected, e.g. hovered.
pub type SelectionPredicate = Rc<dyn Fn(&Token) -> bool>;

/// Draws a horizontal rule through every character: underline or strikethrough.
#[derive(Debug, Clone)]
pub struct LineCode {
    code_match: CodeMatch,
    kind: CodeKind,
    thickness: f32,
    offset: f32,
}

impl LineCode {
    /// `thickness` and `offset` are fractions of the line height, the offset
    /// locating the bottom of the rule.
    pub fn new(code_match: CodeMatch, kind: CodeKind, thickness: f32, offset: f32) -> Self {
        Self {
            code_match,
            kind,
            thickness,
            offset,
        }
    }
}

impl FormattingCode for LineCode {
    fn code_match(&self) -> &CodeMatch {
        &self.code_match
    }

    fn kind(&self) -> CodeKind {
        self.kind
    }

    fn draw_character(
        &self,
        ctx: &CharContext<'_>,
        surface: &mut dyn DrawSurface,
        glyph: &mut GlyphState<'_>,
    ) -> bool {
        draw_rule(ctx, surface, glyph, self.thickness, self.offset);
        false
    }
}

/// An underline that only shows while its token is selected.
#[derive(Clone)]
pub struct LinkCode {
    code_match: CodeMatch,
    thickness: f32,
    offset: f32,
    is_selected: SelectionPredicate,
}

impl LinkCode {
    pub fn new(
        code_match: CodeMatch,
        thickness: f32,
        offset: f32,
        is_selected: SelectionPredicate,
    ) -> Self {
        Self {
            code_match,
            thickness,
            offset,
            is_selected,
        }
    }

    /// The link target, if the markup named one.
    pub fn url(&self) -> Option<&str> {
        self.code_match.group(1)
    }

    pub fn is_selected(&self, token: &Token) -> bool {
        (self.is_selected)(token)
    }
}

impl fmt::Debug for LinkCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkCode")
            .field("code_match", &self.code_match)
            .field("thickness", &self.thickness)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

impl FormattingCode for LinkCode {
    fn code_match(&self) -> &CodeMatch {
        &self.code_match
    }

    fn kind(&self) -> CodeKind {
        CodeKind::Link
    }

    fn draw_character(
        &self,
        ctx: &CharContext<'_>,
        surface: &mut dyn DrawSurface,
        glyph: &mut GlyphState<'_>,
    ) -> bool {
        if self.is_selected(ctx.token) {
            draw_rule(ctx, surface, glyph, self.thickness, self.offset);
        }
        false
    }
}

fn draw_rule(
    ctx: &CharContext<'_>,
    surface: &mut dyn DrawSurface,
    glyph: &GlyphState<'_>,
    thickness: f32,
    offset: f32,
) {
    // no rule under the space a line was broken after
    if ctx.character == ' ' && ctx.next == Some('\n') {
        return;
    }
    let height = glyph.font.line_height() * glyph.scale;
    let width = glyph.font.char_width(ctx.character) * glyph.scale;
    let t = height * thickness;
    let rect = Rect::new(
        glyph.position.x,
        glyph.position.y + offset * height - t,
        width,
        t,
    );
    surface.draw_rect(rect, glyph.color, ctx.depth);
}
