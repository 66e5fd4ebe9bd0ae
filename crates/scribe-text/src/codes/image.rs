use std::time::Duration;

use scribe_core::geometry::Rect;
use scribe_core::math::Vec2;
use scribe_render::{Color, DrawSurface, EMSP, Font, GlyphParams, SpriteAnimation};

use crate::code::{CharContext, CodeKind, CodeMatch, FormattingCode, GlyphState};

const PLACEHOLDER: &str = "\u{2003}";

/// An inline image.
///
/// The markup is replaced by one em space which the image is drawn over, so
/// the image takes up a square of one line height. Each code plays its own
/// copy of the animation.
#[derive(Debug, Clone)]
pub struct ImageCode {
    code_match: CodeMatch,
    animation: SpriteAnimation,
}

impl ImageCode {
    pub fn new(code_match: CodeMatch, animation: SpriteAnimation) -> Self {
        Self {
            code_match,
            animation,
        }
    }

    pub fn animation(&self) -> &SpriteAnimation {
        &self.animation
    }
}

impl FormattingCode for ImageCode {
    fn code_match(&self) -> &CodeMatch {
        &self.code_match
    }

    fn kind(&self) -> CodeKind {
        CodeKind::Image
    }

    fn ends_here(&self, _other: &dyn FormattingCode) -> bool {
        true
    }

    fn ends_other(&self, _other: &dyn FormattingCode) -> bool {
        true
    }

    fn replacement(&self) -> &str {
        PLACEHOLDER
    }

    fn self_width(&self, font: &dyn Font) -> f32 {
        font.line_height()
    }

    fn update(&mut self, elapsed: Duration) {
        self.animation.update(elapsed);
    }

    fn draw_character(
        &self,
        ctx: &CharContext<'_>,
        _surface: &mut dyn DrawSurface,
        _glyph: &mut GlyphState<'_>,
    ) -> bool {
        ctx.index_in_token == 0 && ctx.character == EMSP
    }

    fn draw_self(
        &self,
        _time: Duration,
        surface: &mut dyn DrawSurface,
        font: &dyn Font,
        params: GlyphParams,
    ) {
        let size = self.self_width(font) * params.scale;
        let dest = Rect::from_pos_size(params.position, Vec2::splat(size));
        let tint = Color::WHITE.copy_alpha(params.color);
        for region in self.animation.current_frame().regions() {
            surface.draw_region(region, dest, tint, params.depth);
        }
    }
}
