//! Frame-based sprite animations used for inline images.
//!
//! A [`SpriteAnimation`] is a sequence of [`AnimationFrame`]s that each last a
//! fixed amount of time. A frame usually shows one [`TextureRegion`] but may
//! layer several on top of each other.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use scribe_render::{SpriteAnimation, TextureId, TextureRegion};
//!
//! let coin = TextureId(3);
//! let mut spin = SpriteAnimation::from_regions(
//!     Duration::from_millis(100),
//!     (0..4).map(|i| TextureRegion::new(coin, i * 16, 0, 16, 16)),
//! )
//! .unwrap();
//!
//! spin.update(Duration::from_millis(150));
//! assert_eq!(spin.current_region().unwrap().x, 16);
//! ```

use std::time::Duration;

use crate::error::{AnimationError, AnimationResult};
use crate::surface::TextureRegion;

/// One frame of an animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrame {
    regions: Vec<TextureRegion>,
    duration: Duration,
}

impl AnimationFrame {
    /// A frame showing a single region.
    pub fn new(region: TextureRegion, duration: Duration) -> Self {
        Self {
            regions: vec![region],
            duration,
        }
    }

    /// A frame that draws several regions on top of each other, first to last.
    pub fn layered(
        regions: impl IntoIterator<Item = TextureRegion>,
        duration: Duration,
    ) -> AnimationResult<Self> {
        let regions: Vec<_> = regions.into_iter().collect();
        if regions.is_empty() {
            return Err(AnimationError::EmptyAnimation);
        }
        Ok(Self { regions, duration })
    }

    /// All regions of this frame, bottom layer first.
    pub fn regions(&self) -> &[TextureRegion] {
        &self.regions
    }

    /// The only region of this frame.
    ///
    /// Fails with [`AnimationError::MultipleRegions`] for layered frames.
    pub fn region(&self) -> AnimationResult<&TextureRegion> {
        match self.regions.as_slice() {
            [region] => Ok(region),
            regions => Err(AnimationError::MultipleRegions {
                count: regions.len(),
            }),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// A looping (by default) sequence of frames driven by [`update`](Self::update).
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteAnimation {
    frames: Vec<AnimationFrame>,
    total: Duration,
    elapsed: Duration,
    speed: f32,
    looping: bool,
    paused: bool,
    finished: bool,
}

impl SpriteAnimation {
    /// Create an animation from frames. At least one frame is required.
    pub fn new(frames: impl IntoIterator<Item = AnimationFrame>) -> AnimationResult<Self> {
        let frames: Vec<_> = frames.into_iter().collect();
        if frames.is_empty() {
            return Err(AnimationError::EmptyAnimation);
        }
        let total = frames.iter().map(AnimationFrame::duration).sum();
        Ok(Self {
            frames,
            total,
            elapsed: Duration::ZERO,
            speed: 1.0,
            looping: true,
            paused: false,
            finished: false,
        })
    }

    /// Create an animation where every region is one frame of `time_per_frame`.
    pub fn from_regions(
        time_per_frame: Duration,
        regions: impl IntoIterator<Item = TextureRegion>,
    ) -> AnimationResult<Self> {
        Self::new(
            regions
                .into_iter()
                .map(|region| AnimationFrame::new(region, time_per_frame)),
        )
    }

    /// A still image: one frame that never changes.
    pub fn still(region: TextureRegion) -> Self {
        Self {
            frames: vec![AnimationFrame::new(region, Duration::ZERO)],
            total: Duration::ZERO,
            elapsed: Duration::ZERO,
            speed: 1.0,
            looping: true,
            paused: false,
            finished: false,
        }
    }

    /// Set the playback speed multiplier (2.0 plays twice as fast).
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Set whether the animation restarts after its last frame.
    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Advance the animation clock.
    pub fn update(&mut self, elapsed: Duration) {
        if self.finished || self.paused || self.total.is_zero() {
            return;
        }
        self.elapsed += elapsed.mul_f32(self.speed);
        if self.elapsed >= self.total {
            if self.looping {
                let total = self.total.as_secs_f64();
                self.elapsed = Duration::from_secs_f64(self.elapsed.as_secs_f64() % total);
                tracing::trace!("sprite animation looped");
            } else {
                self.elapsed = self.total;
                self.finished = true;
            }
        }
    }

    /// The frame for the current point in time.
    pub fn current_frame(&self) -> &AnimationFrame {
        let mut accum = Duration::ZERO;
        for frame in &self.frames {
            accum += frame.duration;
            if self.elapsed < accum {
                return frame;
            }
        }
        // at or past the end
        &self.frames[self.frames.len() - 1]
    }

    /// The single region of the current frame. See [`AnimationFrame::region`].
    pub fn current_region(&self) -> AnimationResult<&TextureRegion> {
        self.current_frame().region()
    }

    /// Jump back to the first frame and resume playback.
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
        self.finished = false;
        self.paused = false;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Only ever true for non-looping animations that reached their end.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn total_duration(&self) -> Duration {
        self.total
    }

    pub fn frames(&self) -> &[AnimationFrame] {
        &self.frames
    }
}
