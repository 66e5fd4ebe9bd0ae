//! The formatting code model.
//!
//! A formatting code is one piece of parsed markup, such as `<b>` or
//! `<c Red>`. Codes are created by the [`Formatter`](crate::Formatter) while
//! tokenizing and are owned by the resulting
//! [`TokenizedString`](crate::TokenizedString); tokens refer to them by
//! [`CodeId`].
//!
//! Every hook on [`FormattingCode`] has a default, so a code only implements
//! what it changes.

use std::fmt;
use std::time::Duration;

use scribe_core::math::Vec2;
use scribe_render::{Color, DrawSurface, Font, GlyphParams};

use crate::token::Token;

/// Index of a code within its [`TokenizedString`](crate::TokenizedString).
pub type CodeId = usize;

/// Where and how a code's pattern matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeMatch {
    /// Name the code was registered under, e.g. `"c"` for colors.
    pub name: String,
    /// Byte offset of the match in the macro-resolved string.
    pub start: usize,
    /// The matched markup.
    pub text: String,
    /// Capture groups after the whole match, `None` for groups that did not participate.
    pub groups: Vec<Option<String>>,
    /// Character index in the display string at which the code takes effect.
    pub display_index: usize,
}

impl CodeMatch {
    /// Length of the markup in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset just past the markup.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// The capture group `index` (1-based, like regex groups), if it matched.
    pub fn group(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.groups.get(i))
            .and_then(|g| g.as_deref())
    }
}

/// The family a code belongs to.
///
/// By default a code ends when another code of the same kind begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeKind {
    Color,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Link,
    Shadow,
    Outline,
    /// Subscript and superscript.
    Offset,
    Image,
    /// Wobbly and typing animations.
    Animation,
    Close,
    Reset,
    /// Codes registered by the host.
    Custom(&'static str),
}

/// Everything a code may want to know about the character being drawn.
#[derive(Debug, Clone, Copy)]
pub struct CharContext<'a> {
    /// Time passed to [`TokenizedString::draw`](crate::TokenizedString::draw).
    pub time: Duration,
    pub depth: f32,
    pub character: char,
    /// The character as a string slice.
    pub text: &'a str,
    /// The character that follows in the same token.
    pub next: Option<char>,
    pub token: &'a Token,
    /// Index of the character in the token's displayed text.
    ///
    /// Line breaks inserted by splitting are counted, so after a split this
    /// is not an index into [`Token::substring`].
    pub index_in_token: usize,
    /// Index of the character in the display string, not counting inserted line breaks.
    pub index_in_string: usize,
}

/// The mutable part of a character draw.
///
/// Codes earlier in a token's chain may change any of these before later codes
/// and the default draw see them.
#[derive(Clone, Copy)]
pub struct GlyphState<'f> {
    pub position: Vec2,
    pub font: &'f dyn Font,
    pub color: Color,
    pub scale: f32,
}

impl GlyphState<'_> {
    pub fn params(&self, depth: f32) -> GlyphParams {
        GlyphParams::new(self.position, self.color, self.scale, depth)
    }

    /// Draw `text` with the current state.
    pub fn draw(&self, surface: &mut dyn DrawSurface, text: &str, depth: f32) {
        self.font.draw_text(surface, text, self.params(depth));
    }
}

impl fmt::Debug for GlyphState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlyphState")
            .field("position", &self.position)
            .field("color", &self.color)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

/// One parsed formatting instruction and the behavior it adds to its text.
pub trait FormattingCode: fmt::Debug {
    /// The match this code was created from.
    fn code_match(&self) -> &CodeMatch;

    fn kind(&self) -> CodeKind;

    /// Whether this code stops applying because `other` begins.
    fn ends_here(&self, other: &dyn FormattingCode) -> bool {
        other.kind() == self.kind()
    }

    /// Whether an already active `other` stops applying because this code begins.
    fn ends_other(&self, _other: &dyn FormattingCode) -> bool {
        false
    }

    /// Whether this code joins the active set, or only acts where it appears.
    fn is_persistent(&self) -> bool {
        true
    }

    /// The display text that replaces this code's markup.
    fn replacement(&self) -> &str {
        ""
    }

    fn color(&self, _default: Color) -> Option<Color> {
        None
    }

    fn font<'f>(&self, _default: &'f dyn Font) -> Option<&'f dyn Font> {
        None
    }

    /// Horizontal space taken by the code's own glyph, unscaled.
    fn self_width(&self, _font: &dyn Font) -> f32 {
        0.0
    }

    /// Advance animation clocks by `elapsed`.
    fn update(&mut self, _elapsed: Duration) {}

    /// Per-character hook.
    ///
    /// Return `true` if the character has been fully drawn, which skips the
    /// remaining codes and the default draw. Returning `false` keeps the chain
    /// going with whatever changes were made to `glyph`.
    fn draw_character(
        &self,
        _ctx: &CharContext<'_>,
        _surface: &mut dyn DrawSurface,
        _glyph: &mut GlyphState<'_>,
    ) -> bool {
        false
    }

    /// Called once per token, before its first character.
    fn draw_self(
        &self,
        _time: Duration,
        _surface: &mut dyn DrawSurface,
        _font: &dyn Font,
        _params: GlyphParams,
    ) {
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_match_groups() {
        let m = CodeMatch {
            name: "s".into(),
            start: 4,
            text: "<s #ff0000>".into(),
            groups: vec![Some("ff0000".into()), None],
            display_index: 2,
        };
        assert_eq!(m.len(), 11);
        assert_eq!(m.end(), 15);
        assert_eq!(m.group(1), Some("ff0000"));
        assert_eq!(m.group(2), None);
        assert_eq!(m.group(0), None);
        assert_eq!(m.group(9), None);
    }
}
