//! The code and macro registry, and the tokenizer built on it.

use std::fmt;
use std::rc::Rc;

use regex::{Captures, Regex};
use scribe_core::math::Vec2;
use scribe_core::profiling::profile_function;
use scribe_render::palette::NAMED_COLORS;
use scribe_render::{Color, Font, NBSP, SpriteAnimation};
use tracing::{debug, trace, warn};

use crate::code::{CodeId, CodeKind, CodeMatch, FormattingCode};
use crate::codes::{
    CloseCode, ColorCode, FontCode, FontStyle, ImageCode, LineCode, LinkCode, OffsetCode,
    OutlineCode, ResetCode, ShadowCode, TypingCode, WobblyCode,
};
use crate::config::FormatSettings;
use crate::error::{FormatError, FormatResult, compile};
use crate::layout::TextAlign;
use crate::token::Token;
use crate::tokenized::TokenizedString;

/// Builds a code from a match of its pattern.
pub type CodeConstructor = Box<dyn Fn(&Formatter, CodeMatch) -> Box<dyn FormattingCode>>;

/// Produces the replacement text for a match of a macro pattern.
pub type MacroReplacement = Box<dyn Fn(&Formatter, &Captures<'_>) -> String>;

const NUMBER: &str = r"([+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+))";
const HEX: &str = r"#([0-9a-fA-F]{6}(?:[0-9a-fA-F]{2})?)";

struct CodeEntry {
    name: String,
    regex: Regex,
    constructor: CodeConstructor,
}

struct MacroEntry {
    regex: Regex,
    replacement: MacroReplacement,
}

/// Registry of formatting codes and macros.
///
/// Codes and macros are kept in registration order. When two code patterns
/// match at the same position, the one registered first wins.
pub struct Formatter {
    settings: FormatSettings,
    codes: Vec<CodeEntry>,
    macros: Vec<MacroEntry>,
}

impl Formatter {
    /// A formatter with the default settings, codes and macros.
    pub fn new() -> FormatResult<Self> {
        Self::with_settings(FormatSettings::default())
    }

    /// A formatter with the default codes and macros, built from `settings`.
    pub fn with_settings(settings: FormatSettings) -> FormatResult<Self> {
        let mut formatter = Self::empty(settings);
        formatter.add_default_codes()?;
        formatter.add_default_macros()?;
        Ok(formatter)
    }

    /// A formatter without any codes or macros.
    pub fn empty(settings: FormatSettings) -> Self {
        Self {
            settings,
            codes: Vec::new(),
            macros: Vec::new(),
        }
    }

    pub fn settings(&self) -> &FormatSettings {
        &self.settings
    }

    /// Registered code names, in registration order.
    pub fn code_names(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(|entry| entry.name.as_str())
    }

    /// Register a formatting code.
    ///
    /// `name` identifies the code to `</name>` close codes. Several patterns may
    /// share a name. Patterns that match empty text are rejected.
    pub fn add_code(
        &mut self,
        name: impl Into<String>,
        pattern: &str,
        constructor: impl Fn(&Formatter, CodeMatch) -> Box<dyn FormattingCode> + 'static,
    ) -> FormatResult<&mut Self> {
        let name = name.into();
        let regex = compile(pattern)?;
        if regex.is_match("") {
            return Err(FormatError::InvalidPattern {
                pattern: pattern.to_owned(),
                reason: "pattern matches empty text".to_owned(),
            });
        }
        trace!(name = %name, pattern, "Registered formatting code");
        self.codes.push(CodeEntry {
            name,
            regex,
            constructor: Box::new(constructor),
        });
        Ok(self)
    }

    /// Register a macro that rewrites matches of `pattern` before tokenizing.
    pub fn add_macro(
        &mut self,
        pattern: &str,
        replacement: impl Fn(&Formatter, &Captures<'_>) -> String + 'static,
    ) -> FormatResult<&mut Self> {
        let regex = compile(pattern)?;
        trace!(pattern, "Registered macro");
        self.macros.push(MacroEntry {
            regex,
            replacement: Box::new(replacement),
        });
        Ok(self)
    }

    /// Register `<i name>` to draw `animation` inline.
    pub fn add_image(
        &mut self,
        name: &str,
        animation: SpriteAnimation,
    ) -> FormatResult<&mut Self> {
        let pattern = format!("<i {}>", regex::escape(name));
        self.add_code("i", &pattern, move |_, m| {
            Box::new(ImageCode::new(m, animation.clone()))
        })
    }

    /// Register `<l>` and `<l url>` link codes, underlined while `is_selected` holds.
    pub fn add_link(
        &mut self,
        is_selected: impl Fn(&Token) -> bool + 'static,
    ) -> FormatResult<&mut Self> {
        let is_selected: Rc<dyn Fn(&Token) -> bool> = Rc::new(is_selected);
        self.add_code("l", r"<l(?: ([^>]+))?>", move |f, m| {
            let s = f.settings();
            Box::new(LinkCode::new(
                m,
                s.line_thickness,
                s.underline_offset,
                Rc::clone(&is_selected),
            ))
        })
    }

    fn add_default_codes(&mut self) -> FormatResult<()> {
        self.add_code("b", "<b>", |_, m| Box::new(FontCode::new(m, FontStyle::Bold)))?;
        self.add_code("i", "<i>", |_, m| {
            Box::new(FontCode::new(m, FontStyle::Italic))
        })?;
        self.add_code("s", &format!("<s(?: {HEX})?(?: {NUMBER})?>"), |f, m| {
            let s = f.settings();
            let color = hex_group(&m, 1).unwrap_or(s.shadow_color);
            let offset = number_group(&m, 2).unwrap_or(s.shadow_offset);
            Box::new(ShadowCode::new(m, color, Vec2::splat(offset)))
        })?;
        self.add_code("o", &format!("<o(?: {HEX})?(?: {NUMBER})?>"), |f, m| {
            let s = f.settings();
            let color = hex_group(&m, 1).unwrap_or(s.outline_color);
            let thickness = number_group(&m, 2).unwrap_or(s.outline_thickness);
            Box::new(OutlineCode::new(m, color, thickness, s.outline_diagonals))
        })?;
        self.add_code("u", "<u>", |f, m| {
            let s = f.settings();
            Box::new(LineCode::new(
                m,
                CodeKind::Underline,
                s.line_thickness,
                s.underline_offset,
            ))
        })?;
        self.add_code("st", "<st>", |f, m| {
            let s = f.settings();
            Box::new(LineCode::new(
                m,
                CodeKind::Strikethrough,
                s.line_thickness,
                s.strikethrough_offset,
            ))
        })?;
        self.add_code("sub", &format!("<sub(?: {NUMBER})?>"), |f, m| {
            let offset = number_group(&m, 1).unwrap_or(f.settings().subscript_offset);
            Box::new(OffsetCode::new(m, offset))
        })?;
        self.add_code("sup", &format!("<sup(?: {NUMBER})?>"), |f, m| {
            let offset = number_group(&m, 1).unwrap_or(f.settings().superscript_offset);
            Box::new(OffsetCode::new(m, offset))
        })?;

        let names: Vec<&str> = NAMED_COLORS.iter().map(|(name, _)| *name).collect();
        self.add_code("c", &format!("<c ({})>", names.join("|")), |_, m| {
            let color = m.group(1).and_then(Color::named);
            Box::new(ColorCode::new(m, color))
        })?;
        self.add_code("c", &format!("<c {HEX}>"), |_, m| {
            let color = hex_group(&m, 1);
            Box::new(ColorCode::new(m, color))
        })?;

        self.add_code("a", &format!("<a wobbly(?: {NUMBER})?(?: {NUMBER})?>"), |f, m| {
            let s = f.settings();
            let speed = number_group(&m, 1).unwrap_or(s.wobble_speed);
            let height = number_group(&m, 2).unwrap_or(s.wobble_height);
            Box::new(WobblyCode::new(m, speed, height))
        })?;
        self.add_code("a", &format!("<a typing(?: {NUMBER})?>"), |f, m| {
            let speed = number_group(&m, 1).unwrap_or(f.settings().typing_speed);
            Box::new(TypingCode::new(m, speed))
        })?;

        self.add_code("close", r"</(\w+)>", |_, m| {
            let target = m.group(1).unwrap_or_default().to_owned();
            Box::new(CloseCode::new(m, target))
        })?;
        self.add_code("reset", "</>", |_, m| Box::new(ResetCode::new(m)))?;
        Ok(())
    }

    fn add_default_macros(&mut self) -> FormatResult<()> {
        self.add_macro("~", |_, _| NBSP.to_string())?;
        self.add_macro("<n>", |_, _| "\n".to_owned())?;
        Ok(())
    }

    /// Apply every macro to `text` until none of them matches anymore.
    ///
    /// Fails with [`FormatError::MacroCycle`] if a macro still matches after
    /// [`FormatSettings::macro_pass_limit`] passes.
    pub fn resolve_macros(&self, text: &str) -> FormatResult<String> {
        let mut resolved = text.to_owned();
        let mut passes = 0;
        while self.macros.iter().any(|entry| entry.regex.is_match(&resolved)) {
            if passes >= self.settings.macro_pass_limit {
                warn!(passes, text, "Macro resolution did not settle");
                return Err(FormatError::MacroCycle {
                    original: text.to_owned(),
                    resolved,
                    passes,
                });
            }

            for entry in &self.macros {
                let replaced = entry
                    .regex
                    .replace_all(&resolved, |caps: &Captures<'_>| (entry.replacement)(self, caps));
                resolved = replaced.into_owned();
            }
            passes += 1;
        }
        Ok(resolved)
    }

    /// Remove all markup matched by any registered code.
    ///
    /// Macros are not resolved. Removal repeats until nothing matches, so the
    /// result contains no markup even where removing one code forms another.
    pub fn strip_all_formatting(&self, text: &str) -> String {
        let mut stripped = text.to_owned();
        loop {
            let mut changed = false;
            for entry in &self.codes {
                let replaced = entry.regex.replace_all(&stripped, "");
                if replaced != stripped {
                    changed = true;
                    stripped = replaced.into_owned();
                }
            }
            if !changed {
                return stripped;
            }
        }
    }

    /// Resolve macros in `text`, then split it into tokens of uniformly formatted text.
    pub fn tokenize(
        &self,
        font: &dyn Font,
        text: &str,
        align: TextAlign,
    ) -> FormatResult<TokenizedString> {
        profile_function!();
        let resolved = self.resolve_macros(text)?;

        let mut codes: Vec<Box<dyn FormattingCode>> = Vec::new();
        let mut active: Vec<CodeId> = Vec::new();
        let mut tokens = Vec::new();
        let mut display = String::with_capacity(resolved.len());
        let mut display_index = 0;
        let mut cursor = 0;

        // markup length and replacement of the code the current token starts with
        let mut opener = self
            .next_match(&resolved, 0)
            .filter(|first| first.code_match.start == 0)
            .map(|first| self.apply(first, &mut codes, &mut active));

        loop {
            let (skip, replacement) = opener.take().unwrap_or((0, String::new()));
            let from = if skip > 0 {
                cursor + skip
            } else {
                cursor + resolved[cursor..].chars().next().map_or(0, char::len_utf8)
            };
            let next = self.next_match(&resolved, from);
            let end = next
                .as_ref()
                .map_or(resolved.len(), |next| next.code_match.start);

            let raw = &resolved[cursor..end];
            let mut substring = replacement;
            substring.push_str(&raw[skip.min(raw.len())..]);
            display.push_str(&substring);
            let len = substring.chars().count();
            tokens.push(Token::new(
                active.clone(),
                display_index,
                cursor,
                substring,
                raw.to_owned(),
            ));
            display_index += len;

            let Some(mut next) = next else {
                break;
            };
            next.code_match.display_index = display_index;
            cursor = next.code_match.start;
            opener = Some(self.apply(next, &mut codes, &mut active));
        }

        debug!(
            tokens = tokens.len(),
            codes = codes.len(),
            "Tokenized formatted string"
        );
        Ok(TokenizedString::new(
            font,
            align,
            text.to_owned(),
            resolved,
            display,
            tokens,
            codes,
        ))
    }

    /// The earliest code match at or after `from`, ties going to the first registered.
    fn next_match(&self, text: &str, from: usize) -> Option<PendingMatch> {
        if from > text.len() {
            return None;
        }
        let mut best: Option<(usize, Captures<'_>)> = None;
        for (entry, code) in self.codes.iter().enumerate() {
            let Some(caps) = first_nonempty_match(&code.regex, text, from) else {
                continue;
            };
            let Some(start) = caps.get(0).map(|m| m.start()) else {
                continue;
            };
            let earlier = best
                .as_ref()
                .and_then(|(_, b)| b.get(0))
                .is_none_or(|b| start < b.start());
            if earlier {
                best = Some((entry, caps));
            }
        }

        let (entry, caps) = best?;
        let whole = caps.get(0)?;
        Some(PendingMatch {
            entry,
            code_match: CodeMatch {
                name: self.codes[entry].name.clone(),
                start: whole.start(),
                text: whole.as_str().to_owned(),
                groups: caps
                    .iter()
                    .skip(1)
                    .map(|g| g.map(|m| m.as_str().to_owned()))
                    .collect(),
                display_index: 0,
            },
        })
    }

    /// Construct the code for `pending` and update the active set.
    ///
    /// Returns the markup length and replacement text of the new code.
    fn apply(
        &self,
        pending: PendingMatch,
        codes: &mut Vec<Box<dyn FormattingCode>>,
        active: &mut Vec<CodeId>,
    ) -> (usize, String) {
        let code = (self.codes[pending.entry].constructor)(self, pending.code_match);

        active.retain(|&id| {
            let other = codes[id].as_ref();
            !(other.ends_here(code.as_ref()) || code.ends_other(other))
        });

        let opener = (code.code_match().len(), code.replacement().to_owned());
        if code.is_persistent() {
            active.push(codes.len());
            codes.push(code);
        }
        opener
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter")
            .field("settings", &self.settings)
            .field("codes", &self.codes.len())
            .field("macros", &self.macros.len())
            .finish()
    }
}

/// A code match whose code has not been constructed yet.
struct PendingMatch {
    entry: usize,
    code_match: CodeMatch,
}

/// Like [`Regex::captures_at`], but never an empty match.
fn first_nonempty_match<'t>(regex: &Regex, text: &'t str, from: usize) -> Option<Captures<'t>> {
    let mut at = from;
    loop {
        let caps = regex.captures_at(text, at)?;
        let whole = caps.get(0)?;
        if whole.start() < whole.end() {
            return Some(caps);
        }
        at = whole.end() + text[whole.end()..].chars().next()?.len_utf8();
    }
}

fn number_group(m: &CodeMatch, index: usize) -> Option<f32> {
    m.group(index).and_then(|g| g.parse().ok())
}

fn hex_group(m: &CodeMatch, index: usize) -> Option<Color> {
    m.group(index).and_then(Color::from_hex_str)
}
