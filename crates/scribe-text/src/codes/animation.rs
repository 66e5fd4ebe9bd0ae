use std::time::Duration;

use scribe_render::DrawSurface;

use crate::code::{CharContext, CodeKind, CodeMatch, FormattingCode, GlyphState};

/// Bobs characters up and down on a sine wave.
#[derive(Debug, Clone)]
pub struct WobblyCode {
    code_match: CodeMatch,
    speed: f32,
    height: f32,
    elapsed: Duration,
}

impl WobblyCode {
    /// `height` is a fraction of the line height.
    pub fn new(code_match: CodeMatch, speed: f32, height: f32) -> Self {
        Self {
            code_match,
            speed,
            height,
            elapsed: Duration::ZERO,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl FormattingCode for WobblyCode {
    fn code_match(&self) -> &CodeMatch {
        &self.code_match
    }

    fn kind(&self) -> CodeKind {
        CodeKind::Animation
    }

    fn update(&mut self, elapsed: Duration) {
        self.elapsed += elapsed;
    }

    fn draw_character(
        &self,
        ctx: &CharContext<'_>,
        _surface: &mut dyn DrawSurface,
        glyph: &mut GlyphState<'_>,
    ) -> bool {
        let phase = ctx.index_in_string as f32 + self.elapsed.as_secs_f32() * self.speed;
        glyph.position.y += phase.sin() * glyph.font.line_height() * self.height * glyph.scale;
        false
    }
}

/// Reveals its text one character at a time.
#[derive(Debug, Clone)]
pub struct TypingCode {
    code_match: CodeMatch,
    speed: f32,
    elapsed: Duration,
}

impl TypingCode {
    /// `speed` is in characters per second.
    pub fn new(code_match: CodeMatch, speed: f32) -> Self {
        Self {
            code_match,
            speed,
            elapsed: Duration::ZERO,
        }
    }

    /// Whether the character at `index_in_string` has been revealed.
    pub fn is_revealed(&self, index_in_string: usize) -> bool {
        let position = index_in_string.saturating_sub(self.code_match.display_index) + 1;
        self.elapsed.as_secs_f32() * self.speed > position as f32
    }

    /// Start revealing from the beginning again.
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

impl FormattingCode for TypingCode {
    fn code_match(&self) -> &CodeMatch {
        &self.code_match
    }

    fn kind(&self) -> CodeKind {
        CodeKind::Animation
    }

    fn update(&mut self, elapsed: Duration) {
        self.elapsed += elapsed;
    }

    fn draw_character(
        &self,
        ctx: &CharContext<'_>,
        _surface: &mut dyn DrawSurface,
        _glyph: &mut GlyphState<'_>,
    ) -> bool {
        !self.is_revealed(ctx.index_in_string)
    }
}
