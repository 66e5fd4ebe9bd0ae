//! Drawing tests against a recording surface and a mock font.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use scribe_core::math::Vec2;
use scribe_render::{Color, DrawSurface, GlyphParams, SpriteAnimation, TextureId, TextureRegion};
use scribe_test_utils::{FontFace, GlyphCall, MockFont, RecordingSurface};
use scribe_text::{
    CharContext, CodeKind, CodeMatch, FormatSettings, Formatter, FormattingCode, GlyphState,
    TextAlign, TokenizedString,
};

struct Harness {
    font: MockFont,
    surface: RecordingSurface,
}

impl Harness {
    fn new() -> Self {
        Self {
            font: MockFont::new(8.0, 16.0),
            surface: RecordingSurface::new(),
        }
    }

    fn tokenize(&self, formatter: &Formatter, text: &str) -> TokenizedString {
        formatter.tokenize(&self.font, text, TextAlign::Left).unwrap()
    }

    fn draw(&mut self, text: &TokenizedString, position: Vec2, scale: f32) -> Vec<GlyphCall> {
        self.font.clear();
        self.surface.clear();
        let params = GlyphParams::new(position, Color::WHITE, scale, 0.5);
        text.draw(Duration::ZERO, &mut self.surface, &self.font, params);
        self.font.glyphs()
    }
}

fn positions(glyphs: &[GlyphCall]) -> Vec<(f32, f32)> {
    glyphs
        .iter()
        .map(|g| (g.params.position.x, g.params.position.y))
        .collect()
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn test_plain_draw_walks_lines() {
    let formatter = Formatter::new().unwrap();
    let mut h = Harness::new();
    let text = h.tokenize(&formatter, "ab\ncd");
    let glyphs = h.draw(&text, Vec2::new(10.0, 20.0), 1.0);

    assert_eq!(
        positions(&glyphs),
        vec![(10.0, 20.0), (18.0, 20.0), (10.0, 36.0), (18.0, 36.0)]
    );
    assert!(glyphs.iter().all(|g| g.params.depth == 0.5));
    assert_eq!(h.font.drawn_text(), "abcd");
}

#[test]
fn test_scale_applies_to_advance_and_lines() {
    let formatter = Formatter::new().unwrap();
    let mut h = Harness::new();
    let mut text = h.tokenize(&formatter, "ab cd");
    text.split(&h.font, 48.0, 2.0, TextAlign::Left);
    let glyphs = h.draw(&text, Vec2::ZERO, 2.0);

    assert_eq!(text.display_string(), "ab \ncd");
    assert_eq!(
        positions(&glyphs),
        vec![(0.0, 0.0), (16.0, 0.0), (32.0, 0.0), (0.0, 32.0), (16.0, 32.0)]
    );
}

#[test]
fn test_font_and_color_overrides() {
    let formatter = Formatter::new().unwrap();
    let mut h = Harness::new();
    let text = h.tokenize(&formatter, "<b>b</b><i>i</i><c Red>r</c>n");
    let glyphs = h.draw(&text, Vec2::ZERO, 1.0);

    let faces: Vec<_> = glyphs.iter().map(|g| g.face).collect();
    assert_eq!(
        faces,
        vec![FontFace::Bold, FontFace::Italic, FontFace::Regular, FontFace::Regular]
    );
    assert_eq!(glyphs[2].params.color, Color::RED);
    assert_eq!(glyphs[3].params.color, Color::WHITE);
    // advances use the regular font even after a bold glyph
    assert_eq!(positions(&glyphs)[1], (8.0, 0.0));
}

#[test]
fn test_fonts_without_variants_fall_back() {
    let formatter = Formatter::new().unwrap();
    let font = MockFont::plain(8.0, 16.0);
    let mut surface = RecordingSurface::new();
    let text = formatter
        .tokenize(&font, "<b>bold</b>", TextAlign::Left)
        .unwrap();
    text.draw(
        Duration::ZERO,
        &mut surface,
        &font,
        GlyphParams::new(Vec2::ZERO, Color::WHITE, 1.0, 0.0),
    );
    assert!(font.glyphs().iter().all(|g| g.face == FontFace::Regular));
    assert_eq!(font.drawn_text(), "bold");
}

#[test]
fn test_underline_and_strikethrough() {
    let formatter = Formatter::new().unwrap();
    let mut h = Harness::new();
    let text = h.tokenize(&formatter, "<u>ab</u><st>c</st>");
    h.draw(&text, Vec2::ZERO, 1.0);

    let rects = h.surface.rects();
    assert_eq!(rects.len(), 3);
    let (under, _) = rects[0];
    assert_eq!((under.x, under.width, under.height), (0.0, 8.0, 1.0));
    assert!(approx(under.y, 0.85 * 16.0 - 1.0));
    let (strike, _) = rects[2];
    assert_eq!(strike.x, 16.0);
    assert!(approx(strike.y, 0.55 * 16.0 - 1.0));
}

#[test]
fn test_underline_skips_space_before_line_break() {
    let formatter = Formatter::new().unwrap();
    let mut h = Harness::new();
    let mut text = h.tokenize(&formatter, "<u>aa bb</u>");
    text.split(&h.font, 16.0, 1.0, TextAlign::Left);
    h.draw(&text, Vec2::ZERO, 1.0);

    assert_eq!(text.display_string(), "aa \nbb");
    assert_eq!(h.surface.rects().len(), 4);
}

#[test]
fn test_shadow_draws_behind() {
    let formatter = Formatter::new().unwrap();
    let mut h = Harness::new();
    let text = h.tokenize(&formatter, "<s>x</s><s #ff0000 4>y");
    let glyphs = h.draw(&text, Vec2::ZERO, 1.0);

    assert_eq!(
        positions(&glyphs),
        vec![(2.0, 2.0), (0.0, 0.0), (12.0, 4.0), (8.0, 0.0)]
    );
    assert_eq!(glyphs[0].params.color, Color::BLACK);
    assert_eq!(glyphs[1].params.color, Color::WHITE);
    assert_eq!(glyphs[2].params.color, Color::RED);
}

#[test]
fn test_outline_replaces_glyph() {
    let formatter = Formatter::new().unwrap();
    let mut h = Harness::new();
    let text = h.tokenize(&formatter, "<o>x");
    let glyphs = h.draw(&text, Vec2::ZERO, 1.0);

    assert_eq!(
        positions(&glyphs),
        vec![(0.0, -2.0), (2.0, 0.0), (0.0, 2.0), (-2.0, 0.0)]
    );
    assert!(glyphs.iter().all(|g| g.params.color == Color::BLACK));
}

#[test]
fn test_outline_diagonals_setting() {
    let settings = FormatSettings {
        outline_diagonals: true,
        ..Default::default()
    };
    let formatter = Formatter::with_settings(settings).unwrap();
    let mut h = Harness::new();
    let text = h.tokenize(&formatter, "<o #00ff00 3>x");
    let glyphs = h.draw(&text, Vec2::ZERO, 1.0);

    assert_eq!(glyphs.len(), 8);
    for glyph in &glyphs {
        assert!(approx(glyph.params.position.length(), 3.0));
        assert_eq!(glyph.params.color, Color::GREEN);
    }
}

#[test]
fn test_sub_and_superscript() {
    let formatter = Formatter::new().unwrap();
    let mut h = Harness::new();
    let text = h.tokenize(&formatter, "<sub>a</sub><sup>b<sub 0.5>c</sub>d");
    let glyphs = h.draw(&text, Vec2::ZERO, 1.0);

    let ys: Vec<f32> = glyphs.iter().map(|g| g.params.position.y).collect();
    // <sub 0.5> replaces <sup>, and closing it leaves neither
    assert_eq!(ys, vec![2.0, -4.0, 8.0, 0.0]);
}

#[test]
fn test_wobbly_follows_sine() {
    let formatter = Formatter::new().unwrap();
    let mut h = Harness::new();
    let mut text = h.tokenize(&formatter, "x<a wobbly>ab");
    let glyphs = h.draw(&text, Vec2::ZERO, 1.0);

    // characters are at indices 1 and 2 of the string
    let height = 16.0 / 8.0;
    assert!(approx(glyphs[1].params.position.y, 1f32.sin() * height));
    assert!(approx(glyphs[2].params.position.y, 2f32.sin() * height));

    text.update(Duration::from_millis(100));
    let glyphs = h.draw(&text, Vec2::ZERO, 1.0);
    assert!(approx(glyphs[1].params.position.y, 1.5f32.sin() * height));
}

#[test]
fn test_typing_reveals_over_time() {
    let formatter = Formatter::new().unwrap();
    let mut h = Harness::new();
    let mut text = h.tokenize(&formatter, "> <a typing 10>abc");

    h.draw(&text, Vec2::ZERO, 1.0);
    assert_eq!(h.font.drawn_text(), "> ");

    text.update(Duration::from_millis(150));
    h.draw(&text, Vec2::ZERO, 1.0);
    assert_eq!(h.font.drawn_text(), "> a");

    text.update(Duration::from_secs(1));
    h.draw(&text, Vec2::ZERO, 1.0);
    assert_eq!(h.font.drawn_text(), "> abc");
}

#[test]
fn test_inline_image() {
    let mut formatter = Formatter::new().unwrap();
    let region = TextureRegion::new(TextureId(3), 0, 8, 24, 24);
    formatter
        .add_image("star", SpriteAnimation::still(region))
        .unwrap();

    let mut h = Harness::new();
    let text = h.tokenize(&formatter, "a<i star>b");
    let glyphs = h.draw(&text, Vec2::new(0.0, 10.0), 2.0);

    assert_eq!(h.font.drawn_text(), "ab");
    // the placeholder is one line height wide
    assert_eq!(positions(&glyphs)[1], (16.0 + 32.0, 10.0));

    let regions = h.surface.regions();
    assert_eq!(regions.len(), 1);
    let (drawn, dest) = regions[0];
    assert_eq!(drawn.texture, TextureId(3));
    assert_eq!((dest.x, dest.y, dest.width, dest.height), (16.0, 10.0, 32.0, 32.0));
}

#[test]
fn test_image_animation_advances_with_update() {
    let mut formatter = Formatter::new().unwrap();
    let first = TextureRegion::new(TextureId(1), 0, 0, 8, 8);
    let second = TextureRegion::new(TextureId(2), 0, 0, 8, 8);
    let animation = SpriteAnimation::from_regions(Duration::from_millis(100), [first, second]).unwrap();
    formatter.add_image("spin", animation).unwrap();

    let mut h = Harness::new();
    let mut text = h.tokenize(&formatter, "<i spin><i spin>");
    h.draw(&text, Vec2::ZERO, 1.0);
    assert!(h.surface.regions().iter().all(|(r, _)| r.texture == TextureId(1)));

    text.update(Duration::from_millis(150));
    h.draw(&text, Vec2::ZERO, 1.0);
    let regions = h.surface.regions();
    assert_eq!(regions.len(), 2);
    assert!(regions.iter().all(|(r, _)| r.texture == TextureId(2)));
}

#[test]
fn test_link_underlines_only_when_selected() {
    let selected = Rc::new(Cell::new(false));
    let mut formatter = Formatter::new().unwrap();
    let flag = Rc::clone(&selected);
    formatter.add_link(move |_| flag.get()).unwrap();

    let mut h = Harness::new();
    let text = h.tokenize(&formatter, "go <l https://example.com>here</l> now");
    let link = text
        .tokens()
        .iter()
        .find(|t| t.substring() == "here")
        .unwrap();
    let code = text.codes_of(link).next().unwrap();
    assert_eq!(code.kind(), CodeKind::Link);
    assert_eq!(code.code_match().group(1), Some("https://example.com"));

    h.draw(&text, Vec2::ZERO, 1.0);
    assert!(h.surface.rects().is_empty());

    selected.set(true);
    h.draw(&text, Vec2::ZERO, 1.0);
    assert_eq!(h.surface.rects().len(), 4);

    let hovered = text.token_under_pos(Vec2::ZERO, Vec2::new(30.0, 8.0), 1.0);
    assert_eq!(hovered.map(|t| t.substring()), Some("here"));
}

/// Counts how often it is updated.
#[derive(Debug)]
struct Counter {
    code_match: CodeMatch,
    updates: Rc<Cell<u32>>,
}

impl FormattingCode for Counter {
    fn code_match(&self) -> &CodeMatch {
        &self.code_match
    }

    fn kind(&self) -> CodeKind {
        CodeKind::Custom("counter")
    }

    fn update(&mut self, _elapsed: Duration) {
        self.updates.set(self.updates.get() + 1);
    }
}

#[test]
fn test_update_reaches_each_code_once() {
    let updates = Rc::new(Cell::new(0));
    let mut formatter = Formatter::new().unwrap();
    let counter = Rc::clone(&updates);
    formatter
        .add_code("count", "<count>", move |_, m| {
            Box::new(Counter {
                code_match: m,
                updates: Rc::clone(&counter),
            })
        })
        .unwrap();

    let h = Harness::new();
    let mut text = h.tokenize(&formatter, "<count>a<b>b</b>c<u>d");
    assert!(text.tokens().iter().filter(|t| !t.applied().is_empty()).count() >= 3);

    text.update(Duration::from_millis(16));
    assert_eq!(updates.get(), 1);
}

/// Records the indices each character is drawn with.
#[derive(Debug)]
struct IndexLog {
    code_match: CodeMatch,
    seen: Rc<RefCell<Vec<(char, usize, usize)>>>,
}

impl FormattingCode for IndexLog {
    fn code_match(&self) -> &CodeMatch {
        &self.code_match
    }

    fn kind(&self) -> CodeKind {
        CodeKind::Custom("index_log")
    }

    fn draw_character(
        &self,
        ctx: &CharContext<'_>,
        _surface: &mut dyn DrawSurface,
        _glyph: &mut GlyphState<'_>,
    ) -> bool {
        self.seen
            .borrow_mut()
            .push((ctx.character, ctx.index_in_token, ctx.index_in_string));
        false
    }
}

#[test]
fn test_inserted_line_breaks_count_in_token_but_not_in_string() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut formatter = Formatter::new().unwrap();
    let log = Rc::clone(&seen);
    formatter
        .add_code("log", "<log>", move |_, m| {
            Box::new(IndexLog {
                code_match: m,
                seen: Rc::clone(&log),
            })
        })
        .unwrap();

    let mut h = Harness::new();
    let mut text = h.tokenize(&formatter, "<log>aa bb");
    text.split(&h.font, 24.0, 1.0, TextAlign::Left);
    assert_eq!(text.display_string(), "aa \nbb");
    h.draw(&text, Vec2::ZERO, 1.0);

    assert_eq!(
        *seen.borrow(),
        vec![
            ('a', 0, 0),
            ('a', 1, 1),
            (' ', 2, 2),
            ('b', 4, 3),
            ('b', 5, 4),
        ]
    );
}

#[test]
fn test_right_alignment() {
    let formatter = Formatter::new().unwrap();
    let mut h = Harness::new();
    let mut text = formatter
        .tokenize(&h.font, "ab <c Red>cdef</c>", TextAlign::Right)
        .unwrap();
    text.split(&h.font, 32.0, 1.0, TextAlign::Right);
    let glyphs = h.draw(&text, Vec2::new(100.0, 0.0), 1.0);

    assert_eq!(text.display_string(), "ab \ncdef");
    let xs: Vec<f32> = glyphs.iter().map(|g| g.params.position.x).collect();
    assert_eq!(xs, vec![84.0, 92.0, 100.0, 68.0, 76.0, 84.0, 92.0]);
}
