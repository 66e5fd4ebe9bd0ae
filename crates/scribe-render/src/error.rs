/// Errors raised by sprite animation resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    /// An animation must have at least one frame, and a frame at least one region.
    EmptyAnimation,

    /// A single-region accessor was used on a frame that layers several regions.
    MultipleRegions { count: usize },
}

impl std::fmt::Display for AnimationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnimationError::EmptyAnimation => {
                write!(f, "Animation has no frames or a frame has no regions")
            }
            AnimationError::MultipleRegions { count } => write!(
                f,
                "Frame has {} regions; use regions() instead of region()",
                count
            ),
        }
    }
}

impl std::error::Error for AnimationError {}

/// Result type for animation operations.
pub type AnimationResult<T> = Result<T, AnimationError>;
