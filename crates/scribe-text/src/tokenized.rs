//! The result of tokenizing: tokens, the codes they share, and the drawing loop.

use std::time::Duration;

use scribe_core::geometry::Rect;
use scribe_core::math::Vec2;
use scribe_core::profiling::profile_function;
use scribe_render::{DrawSurface, Font, GlyphParams};
use tracing::trace;

use crate::code::{CharContext, FormattingCode, GlyphState};
use crate::layout::{self, TextAlign};
use crate::token::Token;
use crate::wrap::{self, Edit};

/// A formatted string, ready to be split, updated and drawn.
///
/// Owns every code created while tokenizing. Tokens refer to codes by index,
/// so a code applied to several tokens exists once and is updated once.
#[derive(Debug)]
pub struct TokenizedString {
    raw: String,
    resolved: String,
    string: String,
    modified: Option<String>,
    tokens: Vec<Token>,
    codes: Vec<Box<dyn FormattingCode>>,
    initial_offset: f32,
}

impl TokenizedString {
    pub(crate) fn new(
        font: &dyn Font,
        align: TextAlign,
        raw: String,
        resolved: String,
        string: String,
        tokens: Vec<Token>,
        codes: Vec<Box<dyn FormattingCode>>,
    ) -> Self {
        let mut tokenized = Self {
            raw,
            resolved,
            string,
            modified: None,
            tokens,
            codes,
            initial_offset: 0.0,
        };
        tokenized.recalculate(font, align);
        tokenized
    }

    /// The text as passed to the tokenizer.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The text after macro resolution, still containing code markup.
    pub fn resolved(&self) -> &str {
        &self.resolved
    }

    /// The display text without markup, before any split or truncation.
    pub fn string(&self) -> &str {
        &self.string
    }

    /// The text that is drawn: the split or truncated string if there is one.
    pub fn display_string(&self) -> &str {
        self.modified.as_deref().unwrap_or(&self.string)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Every code applied to any token.
    pub fn codes(&self) -> &[Box<dyn FormattingCode>] {
        &self.codes
    }

    /// The codes applied to `token`, outermost first.
    pub fn codes_of<'s>(&'s self, token: &'s Token) -> impl Iterator<Item = &'s dyn FormattingCode> {
        token.codes(&self.codes)
    }

    /// Word-wrap the display string to `width`, measured with `font` at `scale`.
    ///
    /// Splitting always starts from the unsplit string, so it can be repeated
    /// whenever the available width changes. Only line breaks are inserted;
    /// every character keeps its codes.
    pub fn split(&mut self, font: &dyn Font, width: f32, scale: f32, align: TextAlign) {
        profile_function!();
        let split = wrap::split_string(&self.string, width, |s| font.line_width(s) * scale);
        if self.tokens.len() == 1 {
            self.tokens[0].split_substring = Some(split.clone());
        } else {
            let edits = wrap::split_edits(&self.string, &split);
            self.store_edits(&edits);
        }

        let breaks = line_count(&split) - line_count(&self.string);
        trace!(width, scale, breaks, "Split formatted string");
        self.modified = Some(split);
        self.recalculate(font, align);
    }

    /// Cut every line wider than `width` and end it with `ellipsis`.
    ///
    /// Tokens whose text was cut off entirely become empty.
    pub fn truncate(
        &mut self,
        font: &dyn Font,
        width: f32,
        scale: f32,
        ellipsis: &str,
        align: TextAlign,
    ) {
        profile_function!();
        let edits =
            wrap::truncate_edits(&self.string, width, ellipsis, |s| font.line_width(s) * scale);
        let truncated = wrap::apply_edits(&self.string, &edits);
        if self.tokens.len() == 1 {
            self.tokens[0].split_substring = Some(truncated.clone());
        } else {
            self.store_edits(&edits);
        }

        trace!(width, scale, "Truncated formatted string");
        self.modified = Some(truncated);
        self.recalculate(font, align);
    }

    /// Size of the display string, unscaled.
    pub fn measure(&self, font: &dyn Font) -> Vec2 {
        font.measure_string(self.display_string())
    }

    /// Advance every code's animation by `elapsed`.
    pub fn update(&mut self, elapsed: Duration) {
        for code in &mut self.codes {
            code.update(elapsed);
        }
    }

    /// The token drawn under `target` for a string drawn at `string_pos` with `scale`.
    pub fn token_under_pos(&self, string_pos: Vec2, target: Vec2, scale: f32) -> Option<&Token> {
        self.tokens
            .iter()
            .find(|token| token.area(string_pos, scale).any(|rect| rect.contains(target)))
    }

    /// Draw the string with its top-left corner at `params.position`.
    ///
    /// Characters advance by their width in the undecorated `font`, so
    /// bold or italic codes never shift the layout computed by
    /// [`split`](Self::split).
    pub fn draw(
        &self,
        time: Duration,
        surface: &mut dyn DrawSurface,
        font: &dyn Font,
        params: GlyphParams,
    ) {
        profile_function!();
        let GlyphParams {
            position,
            color,
            scale,
            depth,
        } = params;
        let line_height = font.line_height() * scale;
        let mut offset = Vec2::new(self.initial_offset * scale, 0.0);
        let mut buf = [0u8; 4];

        for token in &self.tokens {
            let text = token.display();
            if text.is_empty() {
                continue;
            }
            let draw_font = token.font(&self.codes, font);
            let draw_color = token.color(&self.codes, color);
            let self_params = GlyphParams::new(position + offset, color, scale, depth);
            token.draw_self(&self.codes, time, surface, draw_font, self_params);

            // walks the unsplit text alongside to tell inserted line breaks apart
            let mut original = token.substring().chars().peekable();
            let mut index_in_string = token.index();
            let mut line = 0;
            let mut chars = text.chars().enumerate().peekable();
            while let Some((index_in_token, c)) = chars.next() {
                if c == '\n' {
                    if original.peek() == Some(&'\n') {
                        original.next();
                        index_in_string += 1;
                    }
                    offset.x = token.line_offsets.get(line).copied().unwrap_or(0.0) * scale;
                    offset.y += line_height;
                    line += 1;
                    continue;
                }

                original.next();
                let ctx = CharContext {
                    time,
                    depth,
                    character: c,
                    text: c.encode_utf8(&mut buf),
                    next: chars.peek().map(|&(_, next)| next),
                    token,
                    index_in_token,
                    index_in_string,
                };
                let glyph = GlyphState {
                    position: position + offset,
                    font: draw_font,
                    color: draw_color,
                    scale,
                };
                token.draw_character(&self.codes, &ctx, surface, glyph);
                offset.x += font.char_width(c) * scale;
                index_in_string += 1;
            }
        }
    }

    /// Distribute an edited display string over the tokens.
    ///
    /// Kept characters go to the token that owned them; inserted characters
    /// go to the token of the last kept character.
    fn store_edits(&mut self, edits: &[Edit]) {
        let ends: Vec<usize> = self.tokens.iter().map(|t| t.index() + t.len()).collect();
        let last = self.tokens.len().saturating_sub(1);
        let mut buffers = vec![String::new(); self.tokens.len()];
        let mut original = self.string.chars();
        let (mut current, mut owner, mut index) = (0, 0, 0);

        for edit in edits {
            match *edit {
                Edit::Keep => {
                    while current < last && index >= ends[current] {
                        current += 1;
                    }
                    if let Some(buffer) = buffers.get_mut(current) {
                        buffer.extend(original.next());
                    }
                    owner = current;
                    index += 1;
                }
                Edit::Drop => {
                    original.next();
                    index += 1;
                }
                Edit::Insert(c) => {
                    if let Some(buffer) = buffers.get_mut(owner) {
                        buffer.push(c);
                    }
                }
            }
        }

        for (token, buffer) in self.tokens.iter_mut().zip(buffers) {
            token.split_substring = Some(buffer);
        }
    }

    /// Recompute each token's line rectangles and line start offsets.
    fn recalculate(&mut self, font: &dyn Font, align: TextAlign) {
        let line_height = font.line_height();
        let widths = layout::line_widths(self.display_string(), |line| font.line_width(line));
        let line_start = |line: usize| align.line_start(widths.get(line).copied().unwrap_or(0.0));

        self.initial_offset = line_start(0);
        let mut pos = Vec2::new(self.initial_offset, 0.0);
        let mut line = 0;
        for token in &mut self.tokens {
            let mut area = Vec::new();
            let mut offsets = Vec::new();
            for (n, part) in token.display().split('\n').enumerate() {
                if n > 0 {
                    line += 1;
                    pos = Vec2::new(line_start(line), pos.y + line_height);
                    offsets.push(pos.x);
                }
                let width = font.line_width(part);
                let rect = Rect::new(pos.x, pos.y, width, line_height);
                if !rect.is_empty() {
                    area.push(rect);
                }
                pos.x += width;
            }
            token.area = area;
            token.line_offsets = offsets;
        }
    }
}

fn line_count(text: &str) -> usize {
    text.matches('\n').count()
}
