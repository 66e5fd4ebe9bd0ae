use scribe_render::Font;

use crate::code::{CodeKind, CodeMatch, FormattingCode};

/// Which variant of the draw font a [`FontCode`] selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Bold,
    Italic,
}

/// Switches its text to the bold or italic variant of the font.
///
/// Fonts without the variant draw the text unchanged.
#[derive(Debug, Clone)]
pub struct FontCode {
    code_match: CodeMatch,
    style: FontStyle,
}

impl FontCode {
    pub fn new(code_match: CodeMatch, style: FontStyle) -> Self {
        Self { code_match, style }
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }
}

impl FormattingCode for FontCode {
    fn code_match(&self) -> &CodeMatch {
        &self.code_match
    }

    fn kind(&self) -> CodeKind {
        match self.style {
            FontStyle::Bold => CodeKind::Bold,
            FontStyle::Italic => CodeKind::Italic,
        }
    }

    fn font<'f>(&self, default: &'f dyn Font) -> Option<&'f dyn Font> {
        match self.style {
            FontStyle::Bold => default.bold(),
            FontStyle::Italic => default.italic(),
        }
    }
}
