//! Scribe Render - the drawing side of the text formatting engine.
//!
//! This crate holds the collaborators that formatted text draws *onto* and *with*:
//! - [`Font`], the measuring and glyph-drawing abstraction a host implements
//! - [`DrawSurface`], the rectangle/texture-region sink a host implements
//! - [`Color`] with hex parsing and an explicit table of named colors
//! - [`TextureRegion`] and [`SpriteAnimation`], the image resources used by inline images

pub mod color;
pub mod error;
pub mod font;
pub mod palette;
pub mod sprite;
pub mod surface;

pub use color::Color;
pub use error::{AnimationError, AnimationResult};
pub use font::{EMSP, Font, GlyphParams, NBSP, ZWSP};
pub use sprite::{AnimationFrame, SpriteAnimation};
pub use surface::{DrawSurface, TextureId, TextureRegion};

pub use scribe_core::geometry::Rect;
pub use scribe_core::math::Vec2;
