//! The drawing surface that formatted text renders onto.

use scribe_core::geometry::Rect;

use crate::color::Color;

/// Opaque handle to a texture owned by the host renderer.
///
/// Resolving a handle to actual pixel data is the surface's job; scribe never
/// checks that a handle refers to a loaded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// A rectangular area of a texture, in texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureRegion {
    pub texture: TextureId,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl TextureRegion {
    pub fn new(texture: TextureId, x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            texture,
            x,
            y,
            width,
            height,
        }
    }
}

/// Sink for the primitive draws issued while rendering formatted text.
///
/// Glyphs are drawn by the font collaborator; decorations (underlines,
/// strikethroughs) come through [`draw_rect`](DrawSurface::draw_rect) and
/// inline images through [`draw_region`](DrawSurface::draw_region).
pub trait DrawSurface {
    /// Fill `rect` with a solid color.
    fn draw_rect(&mut self, rect: Rect<f32>, color: Color, depth: f32);

    /// Draw `region` stretched into `dest`, multiplied by `color`.
    fn draw_region(&mut self, region: &TextureRegion, dest: Rect<f32>, color: Color, depth: f32);
}

