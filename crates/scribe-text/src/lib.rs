//! Scribe Text - inline formatting codes for game text
//!
//! This crate turns strings with embedded markup into styled, word-wrapped,
//! animated runs of text:
//! - [`Formatter`] holds the registered formatting codes and macros
//! - [`TokenizedString`] is the result of [`Formatter::tokenize`] and can be
//!   split, truncated, updated and drawn any number of times
//! - [`FormattingCode`] is the hook set every code implements
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use scribe_render::{Color, GlyphParams, Vec2};
//! use scribe_test_utils::{MockFont, RecordingSurface};
//! use scribe_text::{Formatter, TextAlign};
//!
//! let formatter = Formatter::new()?;
//! let font = MockFont::new(8.0, 16.0);
//! let mut surface = RecordingSurface::new();
//!
//! let mut text = formatter.tokenize(&font, "A <c Red>red</c> word and <u>underlined</u> text", TextAlign::Left)?;
//! text.split(&font, 120.0, 1.0, TextAlign::Left);
//!
//! // once per frame
//! text.update(Duration::from_millis(16));
//! text.draw(Duration::ZERO, &mut surface, &font, GlyphParams::new(Vec2::ZERO, Color::WHITE, 1.0, 0.0));
//! # Ok::<(), scribe_text::FormatError>(())
//! ```
//!
//! ## Syntax
//!
//! | Markup | Effect |
//! |---|---|
//! | `<b>`, `<i>` | bold, italic font variant |
//! | `<c Name>`, `<c #RRGGBB[AA]>` | color |
//! | `<u>`, `<st>` | underline, strikethrough |
//! | `<s [#hex] [offset]>` | drop shadow |
//! | `<o [#hex] [thickness]>` | outline |
//! | `<sub [offset]>`, `<sup [offset]>` | subscript, superscript |
//! | `<a wobbly [speed] [height]>`, `<a typing [speed]>` | animations |
//! | `<i name>` | image registered with [`Formatter::add_image`] |
//! | `<l [url]>` | link registered with [`Formatter::add_link`] |
//! | `</name>`, `</>` | close codes named `name`, close everything |
//! | `~`, `<n>` | macros for a non-breaking space and a line break |

pub mod code;
pub mod codes;
pub mod config;
pub mod error;
pub mod formatter;
pub mod layout;
pub mod token;
pub mod tokenized;
pub mod wrap;

pub use code::{CharContext, CodeId, CodeKind, CodeMatch, FormattingCode, GlyphState};
pub use config::FormatSettings;
pub use error::{FormatError, FormatResult};
pub use formatter::{CodeConstructor, Formatter, MacroReplacement};
pub use layout::TextAlign;
pub use token::Token;
pub use tokenized::TokenizedString;
