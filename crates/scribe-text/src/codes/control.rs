use crate::code::{CodeKind, CodeMatch, FormattingCode};

/// `</name>`: ends every active code registered as `name`.
///
/// Acts only at its own position and never joins the active set.
#[derive(Debug, Clone)]
pub struct CloseCode {
    code_match: CodeMatch,
    target: String,
}

impl CloseCode {
    pub fn new(code_match: CodeMatch, target: impl Into<String>) -> Self {
        Self {
            code_match,
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl FormattingCode for CloseCode {
    fn code_match(&self) -> &CodeMatch {
        &self.code_match
    }

    fn kind(&self) -> CodeKind {
        CodeKind::Close
    }

    fn ends_other(&self, other: &dyn FormattingCode) -> bool {
        other.code_match().name == self.target
    }

    fn is_persistent(&self) -> bool {
        false
    }
}

/// `</>`: ends every active code.
#[derive(Debug, Clone)]
pub struct ResetCode {
    code_match: CodeMatch,
}

impl ResetCode {
    pub fn new(code_match: CodeMatch) -> Self {
        Self { code_match }
    }
}

impl FormattingCode for ResetCode {
    fn code_match(&self) -> &CodeMatch {
        &self.code_match
    }

    fn kind(&self) -> CodeKind {
        CodeKind::Reset
    }

    fn ends_other(&self, _other: &dyn FormattingCode) -> bool {
        true
    }

    fn is_persistent(&self) -> bool {
        false
    }
}
