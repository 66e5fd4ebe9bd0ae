/// Errors that can occur while registering codes or resolving macros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Macro resolution kept matching after the configured number of passes.
    ///
    /// This almost always means two macros expand into each other.
    MacroCycle {
        original: String,
        resolved: String,
        passes: usize,
    },

    /// A code or macro pattern failed to compile.
    InvalidPattern { pattern: String, reason: String },
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatError::MacroCycle {
                original,
                resolved,
                passes,
            } => write!(
                f,
                "Macro resolution did not settle after {} passes (likely a cyclic macro): {:?} resolved to {:?}",
                passes, original, resolved
            ),
            FormatError::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid formatting pattern {:?}: {}", pattern, reason)
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Result type for formatting operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Compile a code or macro pattern, keeping the pattern in the error.
pub(crate) fn compile(pattern: &str) -> FormatResult<regex::Regex> {
    regex::Regex::new(pattern).map_err(|e| FormatError::InvalidPattern {
        pattern: pattern.to_owned(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_keeps_pattern() {
        let err = compile("<b(").unwrap_err();
        match &err {
            FormatError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "<b("),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(err.to_string().contains("<b("));
    }

    #[test]
    fn test_cycle_display_names_both_strings() {
        let err = FormatError::MacroCycle {
            original: "<x>".into(),
            resolved: "<y>".into(),
            passes: 64,
        };
        let msg = err.to_string();
        assert!(msg.contains("64"));
        assert!(msg.contains("<x>") && msg.contains("<y>"));
    }
}
