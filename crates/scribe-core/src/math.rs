/// Fast mathematical operations using SIMD-accelerated `glam` types.
///
/// Positions, offsets and sizes throughout scribe are [`Vec2`] values in
/// logical pixels with Y increasing downward.
///
/// # Examples
///
/// ```
/// use scribe_core::math::Vec2;
///
/// let pen = Vec2::new(10.0, 20.0);
/// let advanced = pen + Vec2::X * 8.0;
/// assert_eq!(advanced, Vec2::new(18.0, 20.0));
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::*;
