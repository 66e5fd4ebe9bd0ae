//! A fixed-advance font that records what it draws.

use std::sync::Arc;

use parking_lot::Mutex;
use scribe_core::math::Vec2;
use scribe_render::{DrawSurface, Font, GlyphParams};

/// Which face of a [`MockFont`] produced a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Regular,
    Bold,
    Italic,
}

/// Records one `draw_text` call.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphCall {
    pub text: String,
    pub face: FontFace,
    pub params: GlyphParams,
}

/// A monospace font where every glyph advances by the same amount.
///
/// Bold glyphs are 25% wider than regular ones so that tests can tell whether
/// layout used the decorated or the undecorated face.
pub struct MockFont {
    face: FontFace,
    advance: f32,
    line_height: f32,
    bold: Option<Box<MockFont>>,
    italic: Option<Box<MockFont>>,
    log: Arc<Mutex<Vec<GlyphCall>>>,
}

impl MockFont {
    /// A font with bold and italic variants.
    pub fn new(advance: f32, line_height: f32) -> Self {
        let log = Arc::new(Mutex::new(Vec::new()));
        let face = |face, advance| MockFont {
            face,
            advance,
            line_height,
            bold: None,
            italic: None,
            log: Arc::clone(&log),
        };
        Self {
            bold: Some(Box::new(face(FontFace::Bold, advance * 1.25))),
            italic: Some(Box::new(face(FontFace::Italic, advance))),
            ..face(FontFace::Regular, advance)
        }
    }

    /// A font without bold or italic variants.
    pub fn plain(advance: f32, line_height: f32) -> Self {
        Self {
            face: FontFace::Regular,
            advance,
            line_height,
            bold: None,
            italic: None,
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn advance(&self) -> f32 {
        self.advance
    }

    /// All glyph draws made by this font and its variants, in order.
    pub fn glyphs(&self) -> Vec<GlyphCall> {
        self.log.lock().clone()
    }

    /// The drawn text, concatenated in draw order.
    pub fn drawn_text(&self) -> String {
        self.log.lock().iter().map(|call| call.text.as_str()).collect()
    }

    pub fn clear(&self) {
        self.log.lock().clear();
    }
}

impl Font for MockFont {
    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn measure(&self, text: &str) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * self.advance, self.line_height)
    }

    fn bold(&self) -> Option<&dyn Font> {
        self.bold.as_deref().map(|font| font as &dyn Font)
    }

    fn italic(&self) -> Option<&dyn Font> {
        self.italic.as_deref().map(|font| font as &dyn Font)
    }

    fn draw_text(&self, _surface: &mut dyn DrawSurface, text: &str, params: GlyphParams) {
        self.log.lock().push(GlyphCall {
            text: text.to_owned(),
            face: self.face,
            params,
        });
    }
}
