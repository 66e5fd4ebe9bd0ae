//! A draw surface that records every call for later inspection.

use scribe_core::geometry::Rect;
use scribe_render::{Color, DrawSurface, TextureRegion};

/// Records a surface draw call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Rect {
        rect: Rect<f32>,
        color: Color,
        depth: f32,
    },
    Region {
        region: TextureRegion,
        dest: Rect<f32>,
        color: Color,
        depth: f32,
    },
}

/// Mock implementation of [`DrawSurface`] for testing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Filled rectangles, in draw order.
    pub fn rects(&self) -> Vec<(Rect<f32>, Color)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Rect { rect, color, .. } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    /// Texture region draws, in draw order.
    pub fn regions(&self) -> Vec<(TextureRegion, Rect<f32>)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Region { region, dest, .. } => Some((*region, *dest)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_rect(&mut self, rect: Rect<f32>, color: Color, depth: f32) {
        self.calls.push(SurfaceCall::Rect { rect, color, depth });
    }

    fn draw_region(&mut self, region: &TextureRegion, dest: Rect<f32>, color: Color, depth: f32) {
        self.calls.push(SurfaceCall::Region {
            region: *region,
            dest,
            color,
            depth,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_render::TextureId;

    #[test]
    fn test_records_in_order() {
        let mut surface = RecordingSurface::new();
        let region = TextureRegion::new(TextureId(7), 0, 0, 4, 4);
        surface.draw_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED, 0.0);
        surface.draw_region(&region, Rect::new(1.0, 1.0, 2.0, 2.0), Color::WHITE, 0.5);

        assert_eq!(surface.calls().len(), 2);
        assert_eq!(surface.rects(), vec![(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED)]);
        assert_eq!(surface.regions()[0].0.texture, TextureId(7));

        surface.clear();
        assert!(surface.calls().is_empty());
    }
}
