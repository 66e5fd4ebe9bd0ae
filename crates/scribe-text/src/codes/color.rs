use scribe_render::Color;

use crate::code::{CodeKind, CodeMatch, FormattingCode};

/// Overrides the color of its text.
#[derive(Debug, Clone)]
pub struct ColorCode {
    code_match: CodeMatch,
    color: Option<Color>,
}

impl ColorCode {
    /// A `None` color defers to whatever color would otherwise apply.
    pub fn new(code_match: CodeMatch, color: Option<Color>) -> Self {
        Self { code_match, color }
    }
}

impl FormattingCode for ColorCode {
    fn code_match(&self) -> &CodeMatch {
        &self.code_match
    }

    fn kind(&self) -> CodeKind {
        CodeKind::Color
    }

    fn color(&self, _default: Color) -> Option<Color> {
        self.color
    }
}
