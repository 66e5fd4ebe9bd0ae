//! Test utilities for scribe.
//!
//! Formatted text needs a [`Font`](scribe_render::Font) and a
//! [`DrawSurface`](scribe_render::DrawSurface) to do anything useful. This
//! crate provides deterministic stand-ins for both so that tokenizing,
//! wrapping and drawing can be verified without a GPU or a real font file.
//!
//! # Example
//!
//! ```rust
//! use scribe_render::{Color, Font, GlyphParams, Vec2};
//! use scribe_test_utils::{MockFont, RecordingSurface};
//!
//! let font = MockFont::new(8.0, 16.0);
//! let mut surface = RecordingSurface::new();
//!
//! assert_eq!(font.measure("abc"), Vec2::new(24.0, 16.0));
//! font.draw_text(&mut surface, "a", GlyphParams::new(Vec2::ZERO, Color::WHITE, 1.0, 0.0));
//! assert_eq!(font.glyphs().len(), 1);
//! ```
//!
//! # Design
//!
//! [`MockFont`] records glyph draws through `&self`, so its log lives behind a
//! `parking_lot::Mutex` that is shared with its bold and italic variants.
//! [`RecordingSurface`] is only ever used through `&mut self` and records directly.

pub mod mock_font;
pub mod recording_surface;

pub use mock_font::*;
pub use recording_surface::*;
