//! Formatting Demo - codes, macros, wrapping and animation without a window
//!
//! Tokenizes a string that uses most of the built-in codes, wraps it to a few
//! widths and runs a handful of frames against a recording surface, logging
//! what would have been drawn.
//!
//! ```bash
//! RUST_LOG=debug cargo run --package scribe-text --example formatting_demo
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use scribe_core::logging;
use scribe_core::math::Vec2;
use scribe_core::profiling;
use scribe_render::{Color, GlyphParams, SpriteAnimation, TextureId, TextureRegion};
use scribe_test_utils::{MockFont, RecordingSurface};
use scribe_text::{FormatResult, Formatter, TextAlign};

const TEXT: &str = "Press <i coin> to <b>continue</b>, or read the <l https://example.com>manual</l>.~\
                    <n><c Gold><s>Treasure</s></c> awaits <a wobbly>brave</a> <o #4080ffff>heroes</o>! \
                    H<sub>2</sub>O and E=mc<sup>2</sup>. <a typing 12>This line types itself out.</a>";

fn main() -> FormatResult<()> {
    logging::init();

    #[cfg(feature = "profiling")]
    profiling::init_profiling(profiling::ProfilingBackend::PuffinHttp);

    let hovered = Rc::new(Cell::new(false));
    let mut formatter = Formatter::new()?;
    let coin = SpriteAnimation::from_regions(
        Duration::from_millis(120),
        (0..4).map(|frame| TextureRegion::new(TextureId(7), frame * 16, 0, 16, 16)),
    );
    match coin {
        Ok(coin) => {
            formatter.add_image("coin", coin)?;
        }
        Err(e) => tracing::error!("Failed to build coin animation: {}", e),
    }
    let link_hovered = Rc::clone(&hovered);
    formatter.add_link(move |_| link_hovered.get())?;

    let font = MockFont::new(8.0, 16.0);
    let mut text = formatter.tokenize(&font, TEXT, TextAlign::Left)?;
    tracing::info!(
        "Tokenized into {} tokens using {} codes: {:?}",
        text.tokens().len(),
        text.codes().len(),
        formatter.strip_all_formatting(TEXT)
    );

    for width in [160.0, 320.0, 640.0] {
        text.split(&font, width, 1.0, TextAlign::Left);
        let size = text.measure(&font);
        tracing::info!("Width {:>4}: {} x {}", width, size.x, size.y);
        for line in text.display_string().lines() {
            tracing::info!("  | {}", line);
        }
    }

    let mut surface = RecordingSurface::new();
    let params = GlyphParams::new(Vec2::new(20.0, 20.0), Color::WHITE, 1.0, 0.0);
    let frame = Duration::from_millis(250);
    for n in 0..8 {
        profiling::new_frame();
        font.clear();
        surface.clear();

        let mouse = Vec2::new(20.0 + n as f32 * 40.0, 28.0);
        hovered.set(
            text.token_under_pos(params.position, mouse, params.scale)
                .is_some_and(|token| token.substring() == "manual"),
        );

        text.update(frame);
        text.draw(frame * n, &mut surface, &font, params);
        tracing::info!(
            "Frame {}: {} glyphs, {} rects, {} images, visible: {:?}",
            n,
            font.glyphs().len(),
            surface.rects().len(),
            surface.regions().len(),
            font.drawn_text()
        );
    }

    Ok(())
}
