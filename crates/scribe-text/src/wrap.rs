//! Word wrapping and truncation.
//!
//! Both operations are expressed as edits against the input so that the
//! result can be mapped back onto tokens: wrapping only inserts line breaks,
//! truncation drops the tail of overflowing lines and inserts an ellipsis.
//! Neither ever reorders characters.

/// What happened to one position of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// The next input character is kept.
    Keep,
    /// The next input character is removed.
    Drop,
    /// A character that is not part of the input is inserted.
    Insert(char),
}

/// Word-wrap `text` so that no line is wider than `width`.
///
/// Lines are broken after the space that separates two words. Words that are
/// wider than `width` on their own are broken between characters. Existing
/// line breaks are kept; the only change is inserted `'\n'` characters.
pub fn split_string(text: &str, width: f32, measure: impl Fn(&str) -> f32) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    for (n, line) in text.split('\n').enumerate() {
        if n > 0 {
            out.push('\n');
        }
        split_line(line, width, &measure, &mut out);
    }
    out
}

fn split_line(line: &str, width: f32, measure: &impl Fn(&str) -> f32, out: &mut String) {
    let mut current = String::new();
    let mut words = line.split(' ').peekable();
    while let Some(word) = words.next() {
        let separator = if words.peek().is_some() { " " } else { "" };
        if !word.is_empty() && measure(word) > width {
            if !current.is_empty() {
                out.push_str(&current);
                out.push('\n');
                current.clear();
            }
            for c in word.chars() {
                current.push(c);
                // a single character wider than the line stays on its own line
                if current.chars().nth(1).is_some() && measure(&current) > width {
                    current.pop();
                    out.push_str(&current);
                    out.push('\n');
                    current.clear();
                    current.push(c);
                }
            }
        } else {
            let len = current.len();
            current.push_str(word);
            if len > 0 && measure(&current) > width {
                out.push_str(&current[..len]);
                out.push('\n');
                current.drain(..len);
            }
        }
        current.push_str(separator);
    }
    out.push_str(&current);
}

/// The edits that turn `original` into `split`, a wrapped version of it.
///
/// A line break in `split` is an insertion unless `original` has a line break
/// at the same position.
pub fn split_edits(original: &str, split: &str) -> Vec<Edit> {
    let mut original = original.chars().peekable();
    split
        .chars()
        .map(|c| {
            if c == '\n' && original.peek() != Some(&'\n') {
                Edit::Insert('\n')
            } else {
                original.next();
                Edit::Keep
            }
        })
        .collect()
}

/// Cut every line of `text` that is wider than `width`, ending it with `ellipsis`.
///
/// The kept part of a cut line plus the ellipsis fits in `width`.
pub fn truncate_edits(
    text: &str,
    width: f32,
    ellipsis: &str,
    measure: impl Fn(&str) -> f32,
) -> Vec<Edit> {
    let ellipsis_width = measure(ellipsis);
    let mut edits = Vec::with_capacity(text.len() + ellipsis.len());
    for (n, line) in text.split('\n').enumerate() {
        if n > 0 {
            edits.push(Edit::Keep);
        }
        if measure(line) <= width {
            edits.extend(line.chars().map(|_| Edit::Keep));
            continue;
        }

        let mut kept = String::new();
        let mut cut = false;
        for c in line.chars() {
            if !cut {
                kept.push(c);
                cut = measure(&kept) + ellipsis_width > width;
            }
            edits.push(if cut { Edit::Drop } else { Edit::Keep });
        }
        edits.extend(ellipsis.chars().map(Edit::Insert));
    }
    edits
}

/// Apply `edits` to `text`.
pub fn apply_edits(text: &str, edits: &[Edit]) -> String {
    let mut chars = text.chars();
    let mut out = String::with_capacity(text.len());
    for edit in edits {
        match edit {
            Edit::Keep => out.extend(chars.next()),
            Edit::Drop => {
                chars.next();
            }
            Edit::Insert(c) => out.push(*c),
        }
    }
    out
}

/// Truncate every overflowing line of `text`, see [`truncate_edits`].
pub fn truncate_string(
    text: &str,
    width: f32,
    ellipsis: &str,
    measure: impl Fn(&str) -> f32,
) -> String {
    apply_edits(text, &truncate_edits(text, width, ellipsis, measure))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(s: &str) -> f32 {
        s.chars().count() as f32
    }

    #[test]
    fn test_split_breaks_after_space() {
        assert_eq!(split_string("hello world foo", 11.0, count), "hello world \nfoo");
        assert_eq!(split_string("aa bb cc", 5.0, count), "aa bb \ncc");
    }

    #[test]
    fn test_split_keeps_short_text() {
        assert_eq!(split_string("ab\ncd", 10.0, count), "ab\ncd");
        assert_eq!(split_string("", 10.0, count), "");
    }

    #[test]
    fn test_split_breaks_long_words() {
        assert_eq!(split_string("abcdefgh", 3.0, count), "abc\ndef\ngh");
        assert_eq!(split_string("x abcdefgh", 3.0, count), "x \nabc\ndef\ngh");
    }

    #[test]
    fn test_split_never_produces_empty_lines_for_wide_glyphs() {
        assert_eq!(split_string("abc", 0.5, count), "a\nb\nc");
    }

    #[test]
    fn test_split_only_inserts_line_breaks() {
        let text = "The quick brown fox jumps over the lazy dog\nand then  some more";
        for width in [1.0, 4.0, 7.0, 13.0, 100.0] {
            let split = split_string(text, width, count);
            let without_inserted: String = split
                .chars()
                .zip(split_edits(text, &split))
                .filter(|(_, edit)| *edit == Edit::Keep)
                .map(|(c, _)| c)
                .collect();
            assert_eq!(without_inserted, text, "width {width}");
            for line in split.split('\n') {
                let trimmed = line.trim_end_matches(' ');
                assert!(count(trimmed) <= width || trimmed.chars().count() == 1);
            }
        }
    }

    #[test]
    fn test_split_edits_keep_original_breaks() {
        let edits = split_edits("a\nb c", "a\nb \nc");
        assert_eq!(
            edits,
            vec![
                Edit::Keep,
                Edit::Keep,
                Edit::Keep,
                Edit::Keep,
                Edit::Insert('\n'),
                Edit::Keep
            ]
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_string("hello world", 8.0, "...", count), "hello...");
        assert_eq!(truncate_string("short", 8.0, "...", count), "short");
        assert_eq!(truncate_string("abcdefghij\nxy", 4.0, "", count), "abcd\nxy");
    }

    #[test]
    fn test_apply_edits() {
        let edits = [Edit::Keep, Edit::Drop, Edit::Insert('!'), Edit::Keep];
        assert_eq!(apply_edits("abc", &edits), "a!c");
    }
}
