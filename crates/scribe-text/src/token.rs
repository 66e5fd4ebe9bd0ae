//! A run of uniformly formatted text.

use std::time::Duration;

use scribe_core::geometry::Rect;
use scribe_core::math::Vec2;
use scribe_render::{Color, DrawSurface, Font, GlyphParams};

use crate::code::{CharContext, CodeId, FormattingCode, GlyphState};

/// One run of display text and the codes applied to all of it.
///
/// Codes are referred to by [`CodeId`] into the code list of the owning
/// [`TokenizedString`](crate::TokenizedString); methods that need the codes
/// take that list as `codes`. Applied codes are in application order, so the
/// outermost code comes first.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    applied: Vec<CodeId>,
    index: usize,
    raw_index: usize,
    substring: String,
    raw_substring: String,
    pub(crate) split_substring: Option<String>,
    pub(crate) area: Vec<Rect<f32>>,
    pub(crate) line_offsets: Vec<f32>,
}

impl Token {
    pub(crate) fn new(
        applied: Vec<CodeId>,
        index: usize,
        raw_index: usize,
        substring: String,
        raw_substring: String,
    ) -> Self {
        Self {
            applied,
            index,
            raw_index,
            substring,
            raw_substring,
            split_substring: None,
            area: Vec::new(),
            line_offsets: Vec::new(),
        }
    }

    pub fn applied(&self) -> &[CodeId] {
        &self.applied
    }

    /// Character index of the token in the unsplit display string.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Byte index of the token in the macro-resolved raw string.
    pub fn raw_index(&self) -> usize {
        self.raw_index
    }

    /// The token's display text, without inserted line breaks.
    pub fn substring(&self) -> &str {
        &self.substring
    }

    /// The token's raw text, including the markup of the code it starts with.
    pub fn raw_substring(&self) -> &str {
        &self.raw_substring
    }

    /// The token's text after the last split or truncation.
    pub fn split_substring(&self) -> Option<&str> {
        self.split_substring.as_deref()
    }

    /// The text that is drawn: the split substring if there is one.
    pub fn display(&self) -> &str {
        self.split_substring.as_deref().unwrap_or(&self.substring)
    }

    /// Length of [`substring`](Self::substring) in characters.
    pub fn len(&self) -> usize {
        self.substring.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.substring.is_empty()
    }

    /// Start x of every line after the first, unscaled and relative to the string origin.
    pub fn line_offsets(&self) -> &[f32] {
        &self.line_offsets
    }

    /// The rectangles the token covers, one per non-empty line, for a string
    /// drawn at `string_pos` with `scale`.
    pub fn area(&self, string_pos: Vec2, scale: f32) -> impl Iterator<Item = Rect<f32>> + '_ {
        self.area
            .iter()
            .map(move |rect| rect.scaled_at(string_pos, scale))
    }

    /// The codes applied to this token, outermost first.
    pub fn codes<'c>(
        &self,
        codes: &'c [Box<dyn FormattingCode>],
    ) -> impl Iterator<Item = &'c dyn FormattingCode> {
        self.applied
            .iter()
            .filter_map(move |&id| codes.get(id))
            .map(|code| code.as_ref())
    }

    /// The first color override among the applied codes, or `default`.
    pub fn color(&self, codes: &[Box<dyn FormattingCode>], default: Color) -> Color {
        self.codes(codes)
            .find_map(|code| code.color(default))
            .unwrap_or(default)
    }

    /// The first font override among the applied codes, or `default`.
    pub fn font<'f>(
        &self,
        codes: &[Box<dyn FormattingCode>],
        default: &'f dyn Font,
    ) -> &'f dyn Font {
        self.codes(codes)
            .find_map(|code| code.font(default))
            .unwrap_or(default)
    }

    pub fn draw_self(
        &self,
        codes: &[Box<dyn FormattingCode>],
        time: Duration,
        surface: &mut dyn DrawSurface,
        font: &dyn Font,
        params: GlyphParams,
    ) {
        for code in self.codes(codes) {
            code.draw_self(time, surface, font, params);
        }
    }

    /// Run the applied codes' character hooks in order, then draw the
    /// character unless one of them handled it.
    pub fn draw_character(
        &self,
        codes: &[Box<dyn FormattingCode>],
        ctx: &CharContext<'_>,
        surface: &mut dyn DrawSurface,
        mut glyph: GlyphState<'_>,
    ) {
        for code in self.codes(codes) {
            if code.draw_character(ctx, surface, &mut glyph) {
                return;
            }
        }
        glyph.draw(surface, ctx.text, ctx.depth);
    }
}
