//! Built-in formatting codes.
//!
//! The [`Formatter`](crate::Formatter) registers these under their default
//! patterns; hosts can also construct them for their own patterns through
//! [`Formatter::add_code`](crate::Formatter::add_code).

mod animation;
mod color;
mod control;
mod decoration;
mod effects;
mod font;
mod image;
mod offset;

pub use animation::{TypingCode, WobblyCode};
pub use color::ColorCode;
pub use control::{CloseCode, ResetCode};
pub use decoration::{LineCode, LinkCode, SelectionPredicate};
pub use effects::{OutlineCode, ShadowCode};
pub use font::{FontCode, FontStyle};
pub use image::ImageCode;
pub use offset::OffsetCode;
