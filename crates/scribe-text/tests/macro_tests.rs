//! Macro resolution tests.

use scribe_test_utils::MockFont;
use scribe_text::{FormatError, FormatSettings, Formatter, TextAlign};

#[test]
fn test_macros_resolve_recursively() {
    let mut formatter = Formatter::new().unwrap();
    formatter
        .add_macro("<testmacro>", |_, _| "<test1>".to_owned())
        .unwrap()
        .add_macro("<test1>", |_, _| "<test2>blue".to_owned())
        .unwrap()
        .add_macro("<test2>", |_, _| "<c Blue>".to_owned())
        .unwrap();

    let raw = "This text uses a bunch of non-breaking~spaces to see if macros work. Additionally, it uses a macro that resolves into a bunch of other macros and then, at the end, into <testmacro> text</c>.";
    let goal = "This text uses a bunch of non-breaking\u{A0}spaces to see if macros work. Additionally, it uses a macro that resolves into a bunch of other macros and then, at the end, into <c Blue>blue text</c>.";
    assert_eq!(formatter.resolve_macros(raw).unwrap(), goal);
}

#[test]
fn test_non_breaking_space_macro() {
    let formatter = Formatter::new().unwrap();
    let font = MockFont::new(8.0, 16.0);
    let text = formatter.tokenize(&font, "a~b", TextAlign::Left).unwrap();

    let chars: Vec<char> = text.string().chars().collect();
    assert_eq!(chars, vec!['a', '\u{A0}', 'b']);
    assert_eq!(text.raw(), "a~b");
    assert_eq!(text.resolved(), "a\u{A0}b");
}

#[test]
fn test_newline_macro() {
    let formatter = Formatter::new().unwrap();
    assert_eq!(formatter.resolve_macros("one<n>two").unwrap(), "one\ntwo");
}

#[test]
fn test_macro_cycle_is_an_error() {
    let mut formatter = Formatter::new().unwrap();
    formatter
        .add_macro("<x>", |_, _| "<y>".to_owned())
        .unwrap()
        .add_macro("<y>", |_, _| "<x>".to_owned())
        .unwrap();

    match formatter.resolve_macros("<x>") {
        Err(FormatError::MacroCycle {
            original, passes, ..
        }) => {
            assert_eq!(original, "<x>");
            assert_eq!(passes, 64);
        }
        other => panic!("expected a macro cycle, got {other:?}"),
    }

    let font = MockFont::new(8.0, 16.0);
    assert!(formatter.tokenize(&font, "a <x> b", TextAlign::Left).is_err());
}

/// Registers `<m0>` -> `<m1>` -> ... -> `end`, one step resolved per pass.
fn chained_macros(steps: usize) -> Formatter {
    let mut formatter = Formatter::empty(FormatSettings::default());
    for i in (0..steps).rev() {
        let next = if i + 1 == steps {
            "end".to_owned()
        } else {
            format!("<m{}>", i + 1)
        };
        formatter
            .add_macro(&format!("<m{i}>"), move |_, _| next.clone())
            .unwrap();
    }
    formatter
}

#[test]
fn test_chain_of_limit_length_resolves() {
    let formatter = chained_macros(64);
    assert_eq!(formatter.resolve_macros("<m0>").unwrap(), "end");
}

#[test]
fn test_chain_past_limit_is_an_error() {
    let formatter = chained_macros(65);
    match formatter.resolve_macros("<m0>") {
        Err(FormatError::MacroCycle {
            resolved, passes, ..
        }) => {
            assert_eq!(passes, 64);
            assert_eq!(resolved, "<m64>");
        }
        other => panic!("expected a macro cycle, got {other:?}"),
    }
}

#[test]
fn test_pass_limit_is_configurable() {
    let settings = FormatSettings {
        macro_pass_limit: 3,
        ..Default::default()
    };
    let mut formatter = Formatter::empty(settings);
    formatter
        .add_macro("a", |_, _| "b".to_owned())
        .unwrap()
        .add_macro("b", |_, _| "c".to_owned())
        .unwrap()
        .add_macro("c", |_, _| "a".to_owned())
        .unwrap();

    let err = formatter.resolve_macros("a").unwrap_err();
    assert!(matches!(err, FormatError::MacroCycle { passes: 3, .. }));
}

#[test]
fn test_macros_see_captures() {
    let mut formatter = Formatter::empty(FormatSettings::default());
    formatter
        .add_macro(r"<rep (\w+) (\d)>", |_, caps| caps[1].repeat(caps[2].parse().unwrap_or(0)))
        .unwrap();
    assert_eq!(formatter.resolve_macros("<rep ab 3>!").unwrap(), "ababab!");
}
